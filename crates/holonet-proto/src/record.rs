//! Resource records as returned by SWAPI.
//!
//! Records are kept as opaque JSON objects: nothing is validated, coerced or
//! normalized. Each `ResourceKind` knows which fields to show and where its
//! collection lives.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One of the three resource collections the client browses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Planets,
    Films,
    Starships,
}

/// A curated detail line: JSON key and the label shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailField {
    pub key: &'static str,
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> DetailField {
    DetailField { key, label }
}

const PLANET_FIELDS: &[DetailField] = &[
    field("climate", "Climate"),
    field("terrain", "Terrain"),
    field("population", "Population"),
    field("diameter", "Diameter"),
    field("gravity", "Gravity"),
    field("orbital_period", "Orbital Period"),
    field("rotation_period", "Rotation Period"),
];

const FILM_FIELDS: &[DetailField] = &[
    field("episode_id", "Episode"),
    field("director", "Director"),
    field("producer", "Producer"),
    field("release_date", "Release Date"),
    field("opening_crawl", "Opening Crawl"),
];

const STARSHIP_FIELDS: &[DetailField] = &[
    field("model", "Model"),
    field("manufacturer", "Manufacturer"),
    field("starship_class", "Starship Class"),
    field("cost_in_credits", "Cost in Credits"),
    field("length", "Length"),
    field("crew", "Crew"),
    field("passengers", "Passengers"),
    field("cargo_capacity", "Cargo Capacity"),
    field("hyperdrive_rating", "Hyperdrive Rating"),
    field("MGLT", "MGLT"),
];

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Planets, Self::Films, Self::Starships];

    /// Collection path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Planets => "planets/",
            Self::Films => "films/",
            Self::Starships => "starships/",
        }
    }

    /// Name the screen is registered under.
    pub fn screen_name(self) -> &'static str {
        match self {
            Self::Planets => "Planets",
            Self::Films => "Films",
            Self::Starships => "Spaceships",
        }
    }

    /// Lowercase slug, used in detail routes.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Planets => "planets",
            Self::Films => "films",
            Self::Starships => "starships",
        }
    }

    /// The attribute used for search and titles.
    pub fn display_field(self) -> &'static str {
        match self {
            Self::Films => "title",
            Self::Planets | Self::Starships => "name",
        }
    }

    pub fn detail_fields(self) -> &'static [DetailField] {
        match self {
            Self::Planets => PLANET_FIELDS,
            Self::Films => FILM_FIELDS,
            Self::Starships => STARSHIP_FIELDS,
        }
    }

    /// Fields joined into the second line of a list card.
    pub fn subtitle_fields(self) -> &'static [&'static str] {
        match self {
            Self::Planets => &["climate", "terrain"],
            Self::Films => &["release_date", "director"],
            Self::Starships => &["model", "starship_class"],
        }
    }

    /// Resolve a screen by registered name or slug, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|k| {
            k.screen_name().eq_ignore_ascii_case(name) || k.slug().eq_ignore_ascii_case(name)
        })
    }

    /// Position in the tab/drawer order.
    pub fn index(self) -> usize {
        match self {
            Self::Planets => 0,
            Self::Films => 1,
            Self::Starships => 2,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.screen_name())
    }
}

/// One planet, film or starship, exactly as the API sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Render a field for display. Missing and null fields are blank.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => format!("{} items", items.len()),
            Some(Value::Object(_)) => "{…}".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// The display field for `kind` (`name` or `title`).
    pub fn display(&self, kind: ResourceKind) -> String {
        self.text(kind.display_field())
    }

    /// Every field not covered by the title or the curated list, in key order.
    /// Collections render through `text` (`N items`).
    pub fn extra_fields(&self, kind: ResourceKind) -> Vec<(&str, String)> {
        let curated = kind.detail_fields();
        let mut extras: Vec<(&str, String)> = self
            .0
            .keys()
            .filter(|key| {
                key.as_str() != kind.display_field()
                    && !curated.iter().any(|f| f.key == key.as_str())
            })
            .map(|key| (key.as_str(), self.text(key)))
            .collect();
        extras.sort_by(|a, b| a.0.cmp(b.0));
        extras
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// One API response: a page of records plus pagination metadata.
///
/// `count`, `next` and `previous` are parsed but never followed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Record>,
}

/// Turn a human label out of a snake_case key (`orbital_period` → `Orbital Period`).
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
