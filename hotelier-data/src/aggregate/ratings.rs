//! Platform-rating payload parsing.
//!
//! Rating summaries arrive as JSON objects keyed by platform. Some exports
//! write them Python-style, with single quotes and `None`/`True`/`False`
//! literals, in a secondary column. Parsing walks an ordered list of
//! [`RatingStrategy`] values; the first that succeeds wins and an exhausted
//! chain yields an empty mapping.

use hotelier_core::{PlatformRating, PlatformRatings, RawHotelRecord};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors from a single [`RatingStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingParseError {
    /// The column the strategy reads was empty.
    #[error("rating column {column} is empty")]
    Missing {
        /// Column consulted.
        column: &'static str,
    },
    /// The column held text that is not valid JSON.
    #[error("rating column {column} is not valid JSON: {message}")]
    InvalidJson {
        /// Column consulted.
        column: &'static str,
        /// Parser diagnostic.
        message: String,
    },
    /// The column held JSON that is not an object keyed by platform.
    #[error("rating column {column} is not an object")]
    NotAnObject {
        /// Column consulted.
        column: &'static str,
    },
}

/// One way of reading a row's platform ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStrategy {
    /// Strict JSON from `platform_ratings_json`.
    PrimaryJson,
    /// Single-quoted pseudo-JSON from `platform_ratings`, repaired first.
    RepairedSingleQuoted,
}

impl RatingStrategy {
    /// The chain used during aggregation.
    pub const DEFAULT_CHAIN: [Self; 2] = [Self::PrimaryJson, Self::RepairedSingleQuoted];

    /// Name of the column this strategy reads.
    pub const fn column(self) -> &'static str {
        match self {
            Self::PrimaryJson => "platform_ratings_json",
            Self::RepairedSingleQuoted => "platform_ratings",
        }
    }

    /// Parse the ratings of `record` with this strategy alone.
    ///
    /// # Errors
    /// Returns [`RatingParseError`] when the column is empty, is not JSON
    /// after any repair, or is not an object.
    pub fn parse(self, record: &RawHotelRecord) -> Result<PlatformRatings, RatingParseError> {
        let column = self.column();
        let raw = match self {
            Self::PrimaryJson => record.platform_ratings_json.as_deref(),
            Self::RepairedSingleQuoted => record.platform_ratings.as_deref(),
        }
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(RatingParseError::Missing { column })?;

        let text = match self {
            Self::PrimaryJson => raw.to_owned(),
            Self::RepairedSingleQuoted => repair_single_quoted(raw),
        };
        let value: Value =
            serde_json::from_str(&text).map_err(|err| RatingParseError::InvalidJson {
                column,
                message: err.to_string(),
            })?;
        match value {
            Value::Object(entries) => Ok(ratings_from_object(&entries)),
            _ => Err(RatingParseError::NotAnObject { column }),
        }
    }
}

/// Parse `record`'s platform ratings by trying `strategies` in order.
///
/// Returns an empty mapping when every strategy fails.
///
/// # Examples
/// ```
/// use hotelier_core::RawHotelRecord;
/// use hotelier_data::{RatingStrategy, parse_platform_ratings};
///
/// let record = RawHotelRecord {
///     platform_ratings_json: Some("not json".into()),
///     platform_ratings: Some("{'booking': {'rating': 8.2, 'reviews_count': 40}}".into()),
///     ..RawHotelRecord::default()
/// };
/// let ratings = parse_platform_ratings(&record, &RatingStrategy::DEFAULT_CHAIN);
/// assert_eq!(ratings["booking"].reviews_count, Some(40));
/// ```
pub fn parse_platform_ratings(
    record: &RawHotelRecord,
    strategies: &[RatingStrategy],
) -> PlatformRatings {
    let mut saw_payload = false;
    for strategy in strategies {
        match strategy.parse(record) {
            Ok(ratings) => return ratings,
            Err(RatingParseError::Missing { .. }) => {}
            Err(err) => {
                saw_payload = true;
                log::debug!("{}: {err}", record.name);
            }
        }
    }
    if saw_payload {
        log::warn!(
            "platform ratings for '{}' could not be parsed; using none",
            record.name
        );
    }
    PlatformRatings::new()
}

/// Rewrite Python-literal notation as JSON.
///
/// Single quotes become double quotes, and the bare words `None`, `True` and
/// `False` outside strings become `null`, `true` and `false`.
fn repair_single_quoted(raw: &str) -> String {
    let quoted = raw.replace('\'', "\"");
    let mut repaired = String::with_capacity(quoted.len());
    let mut word = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for ch in quoted.chars() {
        if in_string {
            repaired.push(ch);
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        if ch.is_ascii_alphabetic() {
            word.push(ch);
            continue;
        }
        flush_word(&mut word, &mut repaired);
        if ch == '"' {
            in_string = true;
        }
        repaired.push(ch);
    }
    flush_word(&mut word, &mut repaired);
    repaired
}

fn flush_word(word: &mut String, out: &mut String) {
    let literal = match word.as_str() {
        "None" => "null",
        "True" => "true",
        "False" => "false",
        other => other,
    };
    out.push_str(literal);
    word.clear();
}

fn ratings_from_object(entries: &Map<String, Value>) -> PlatformRatings {
    entries
        .iter()
        .filter_map(|(platform, value)| {
            rating_from_value(value).map(|rating| (platform.clone(), rating))
        })
        .collect()
}

fn rating_from_value(value: &Value) -> Option<PlatformRating> {
    let (rating, reviews_count) = match value {
        Value::Object(fields) => (
            first_field(fields, &["rating", "score", "average"]).and_then(number),
            first_field(fields, &["reviews_count", "review_count", "reviews", "count"])
                .and_then(count),
        ),
        scalar => (number(scalar), None),
    };
    rating
        .filter(|rating| *rating >= 0.0)
        .map(|rating| PlatformRating {
            rating,
            reviews_count,
        })
}

fn first_field<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| fields.get(*name))
}

fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(raw) => raw.trim().replace(',', "").parse::<u64>().ok(),
        _ => None,
    }
}
