//! Nominatim search response types.

use serde::{Deserialize, Deserializer};

/// One entry of a `/search?format=json` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(super) struct SearchResult {
    #[serde(deserialize_with = "decimal_degrees")]
    pub(super) lat: f64,
    #[serde(deserialize_with = "decimal_degrees")]
    pub(super) lon: f64,
    #[serde(default)]
    pub(super) display_name: Option<String>,
}

/// Nominatim writes coordinates as strings; other services use numbers.
fn decimal_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Number(f64),
        Text(String),
    }

    match Degrees::deserialize(deserializer)? {
        Degrees::Number(value) => Ok(value),
        Degrees::Text(raw) => raw.trim().parse().map_err(serde::de::Error::custom),
    }
}
