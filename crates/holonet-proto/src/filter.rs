//! Client-side search over a loaded collection.
//!
//! The whole query must appear, ignoring case, inside the record's display
//! field. There is no word splitting and no multi-field search.

use crate::record::{Record, ResourceKind};

pub fn normalize_search_text(input: &str) -> String {
    input.to_lowercase()
}

/// Whether `record` matches `query` for the given kind. Empty query matches everything.
pub fn matches(kind: ResourceKind, record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    normalize_search_text(&record.display(kind)).contains(&normalize_search_text(query))
}

/// Stable subsequence of `records` whose display field contains `query`.
pub fn filter_records(kind: ResourceKind, records: &[Record], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches(kind, r, query))
        .cloned()
        .collect()
}

/// Indices into `records` of the matching entries, in input order.
pub fn matching_indices(kind: ResourceKind, records: &[Record], query: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(kind, r, query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn planets(names: &[&str]) -> Vec<Record> {
        names
            .iter()
            .map(|n| Record::from(json!({ "name": n, "climate": "arid" })))
            .collect()
    }

    fn names(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.display(ResourceKind::Planets)).collect()
    }

    #[test]
    fn test_tatooine_scenario() {
        let list = vec![
            Record::from(json!({"name": "Tatooine", "climate": "arid"})),
            Record::from(json!({"name": "Alderaan", "climate": "temperate"})),
        ];
        let out = filter_records(ResourceKind::Planets, &list, "ta");
        assert_eq!(out, vec![list[0].clone()]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let list = planets(&["Hoth", "Dagobah", "Bespin"]);
        assert_eq!(filter_records(ResourceKind::Planets, &list, ""), list);
    }

    #[test]
    fn test_case_insensitive_and_order_preserving() {
        let list = planets(&["Naboo", "Kamino", "Utapau", "Mustafar", "Kashyyyk"]);
        let out = filter_records(ResourceKind::Planets, &list, "A");
        assert_eq!(names(&out), vec!["Naboo", "Kamino", "Utapau", "Mustafar", "Kashyyyk"]);
        let out = filter_records(ResourceKind::Planets, &list, "KA");
        assert_eq!(names(&out), vec!["Kamino", "Kashyyyk"]);
    }

    #[test]
    fn test_only_matching_records_returned() {
        let list = planets(&["Coruscant", "Endor", "Yavin IV", "Geonosis", "Corellia"]);
        for q in ["co", "o", "IV", "zz", "endor", " "] {
            let out = filter_records(ResourceKind::Planets, &list, q);
            for r in &out {
                assert!(r
                    .display(ResourceKind::Planets)
                    .to_lowercase()
                    .contains(&q.to_lowercase()));
            }
            let expected: Vec<Record> = matching_indices(ResourceKind::Planets, &list, q)
                .into_iter()
                .map(|i| list[i].clone())
                .collect();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn test_idempotent() {
        let list = planets(&["Tatooine", "Alderaan", "Stewjon", "Tund"]);
        for q in ["", "t", "an", "TUN", "nothing"] {
            let once = filter_records(ResourceKind::Planets, &list, q);
            let twice = filter_records(ResourceKind::Planets, &once, q);
            assert_eq!(once, twice, "query {q:?}");
        }
    }

    #[test]
    fn test_multi_word_query_is_one_substring() {
        let list = planets(&["Yavin IV", "Polis Massa"]);
        assert_eq!(names(&filter_records(ResourceKind::Planets, &list, "yavin iv")), vec!["Yavin IV"]);
        assert!(filter_records(ResourceKind::Planets, &list, "iv yavin").is_empty());
    }

    #[test]
    fn test_films_match_on_title() {
        let films = vec![
            Record::from(json!({"title": "A New Hope", "director": "George Lucas"})),
            Record::from(json!({"title": "The Empire Strikes Back", "director": "Irvin Kershner"})),
        ];
        let out = filter_records(ResourceKind::Films, &films, "empire");
        assert_eq!(out.len(), 1);
        // director is not searched
        assert!(filter_records(ResourceKind::Films, &films, "lucas").is_empty());
    }

    #[test]
    fn test_missing_display_field_only_matches_empty_query() {
        let list = vec![Record::from(json!({"climate": "murky"}))];
        assert_eq!(filter_records(ResourceKind::Planets, &list, "").len(), 1);
        assert!(filter_records(ResourceKind::Planets, &list, "m").is_empty());
    }
}
