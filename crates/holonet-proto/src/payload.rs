//! Detail navigation payload.
//!
//! The list screen hands the selected record to the detail screen either by
//! value or through a route string (`holonet://detail/<kind>?record=<json>`).
//! The record travels as JSON inside the query, so numbers and nested values
//! survive the round trip unchanged.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{Record, ResourceKind};

const ROUTE_SCHEME: &str = "holonet";
const ROUTE_HOST: &str = "detail";
const RECORD_PARAM: &str = "record";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed route '{0}'")]
    Parse(String),
    #[error("route is not a detail route: {0}")]
    NotDetail(String),
    #[error("unknown resource kind '{0}'")]
    UnknownKind(String),
    #[error("route has no record parameter")]
    MissingRecord,
    #[error("record parameter is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the selected record reaches the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTransport {
    /// In-memory handoff.
    #[default]
    Direct,
    /// Encode into a route string and decode it again.
    Serialized,
}

/// What the detail screen is pushed with.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPayload {
    pub kind: ResourceKind,
    pub record: Record,
}

impl DetailPayload {
    pub fn new(kind: ResourceKind, record: Record) -> Self {
        Self { kind, record }
    }

    /// Title shown at the top of the detail screen.
    pub fn title(&self) -> String {
        self.record.display(self.kind)
    }

    /// Deliver the payload over `transport`.
    pub fn transport(self, transport: DetailTransport) -> Result<Self, PayloadError> {
        match transport {
            DetailTransport::Direct => Ok(self),
            DetailTransport::Serialized => decode_route(&encode_route(&self)?),
        }
    }
}

pub fn encode_route(payload: &DetailPayload) -> Result<String, PayloadError> {
    let json = serde_json::to_string(&payload.record)?;
    let base = format!("{ROUTE_SCHEME}://{ROUTE_HOST}/{}", payload.kind.slug());
    let url = Url::parse_with_params(&base, &[(RECORD_PARAM, json.as_str())])
        .map_err(|e| PayloadError::Parse(format!("{base}: {e}")))?;
    Ok(url.to_string())
}

pub fn decode_route(route: &str) -> Result<DetailPayload, PayloadError> {
    let url = Url::parse(route).map_err(|e| PayloadError::Parse(format!("{route}: {e}")))?;
    if url.scheme() != ROUTE_SCHEME || url.host_str() != Some(ROUTE_HOST) {
        return Err(PayloadError::NotDetail(route.to_string()));
    }

    let slug = url.path().trim_matches('/');
    let kind =
        ResourceKind::from_name(slug).ok_or_else(|| PayloadError::UnknownKind(slug.to_string()))?;

    let json = url
        .query_pairs()
        .find(|(k, _)| k == RECORD_PARAM)
        .map(|(_, v)| v.into_owned())
        .ok_or(PayloadError::MissingRecord)?;
    let record: Record = serde_json::from_str(&json)?;

    Ok(DetailPayload { kind, record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn millennium_falcon() -> DetailPayload {
        DetailPayload::new(
            ResourceKind::Starships,
            Record::from(json!({
                "name": "Millennium Falcon",
                "model": "YT-1300 light freighter",
                "hyperdrive_rating": "0.5",
                "crew": "4",
                "MGLT": 75,
                "pilots": ["https://swapi.dev/api/people/13/"],
                "notes": "fast & 100% \"reliable\"?#=",
                "retired": null
            })),
        )
    }

    #[test]
    fn test_route_shape() {
        let route = encode_route(&millennium_falcon()).unwrap();
        assert!(route.starts_with("holonet://detail/starships?record="));
        assert!(!route.contains(' '));
    }

    #[test]
    fn test_serialized_matches_direct() {
        let direct = millennium_falcon().transport(DetailTransport::Direct).unwrap();
        let serialized = millennium_falcon()
            .transport(DetailTransport::Serialized)
            .unwrap();
        assert_eq!(direct, serialized);
        assert_eq!(direct.record.fields().len(), serialized.record.fields().len());
        for key in ["name", "MGLT", "pilots", "notes", "retired", "missing"] {
            assert_eq!(direct.record.get(key), serialized.record.get(key));
            assert_eq!(direct.record.text(key), serialized.record.text(key));
        }
    }

    #[test]
    fn test_decode_rejects_other_routes() {
        assert!(matches!(
            decode_route("https://swapi.dev/api/planets/1/"),
            Err(PayloadError::NotDetail(_))
        ));
        assert!(matches!(
            decode_route("holonet://detail/vehicles?record=%7B%7D"),
            Err(PayloadError::UnknownKind(_))
        ));
        assert!(matches!(
            decode_route("holonet://detail/planets"),
            Err(PayloadError::MissingRecord)
        ));
        assert!(matches!(
            decode_route("holonet://detail/planets?record=not-json"),
            Err(PayloadError::Json(_))
        ));
        assert!(matches!(decode_route("::"), Err(PayloadError::Parse(_))));
    }
}
