//! The engine's canonical, scoring-ready hotel representation.
//!
//! An [`AggregatedHotel`] is derived from exactly one raw dataset row and is
//! never mutated after aggregation. Request-scoped values such as the final
//! ranking score live on [`RankedHotel`](crate::RankedHotel) instead.

use std::collections::BTreeMap;

use geo::Coord;

/// Positive review signals counted per hotel.
///
/// Sentiment is a presence proxy rather than text analysis: every hotel
/// contributes one positive and zero negative signals.
pub const POSITIVE_SIGNALS: u32 = 1;

/// Negative review signals counted per hotel. See [`POSITIVE_SIGNALS`].
pub const NEGATIVE_SIGNALS: u32 = 0;

/// Ratio of positive signals to all signals, smoothed by one.
///
/// # Examples
/// ```
/// use hotelier_core::{NEGATIVE_SIGNALS, POSITIVE_SIGNALS, sentiment_ratio};
///
/// assert_eq!(sentiment_ratio(POSITIVE_SIGNALS, NEGATIVE_SIGNALS), 0.5);
/// ```
pub fn sentiment_ratio(positive: u32, negative: u32) -> f64 {
    let positive = f64::from(positive);
    let total = positive + f64::from(negative) + 1.0;
    positive / total
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinates {
    /// Construct a coordinate pair.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(value: Coord<f64>) -> Self {
        Self {
            lat: value.y,
            lng: value.x,
        }
    }
}

/// A rating published by one booking platform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformRating {
    /// Rating on the platform's own scale.
    pub rating: f64,
    /// Number of reviews behind the rating, when the platform reports it.
    pub reviews_count: Option<u64>,
}

/// Platform ratings keyed by platform name.
pub type PlatformRatings = BTreeMap<String, PlatformRating>;

/// A normalised hotel record ready for filtering and ranking.
///
/// Identity is the `(name, address)` pair; see [`AggregatedHotel::identity`].
///
/// # Invariants
/// - `average_score` lies in `0.0..=10.0`.
/// - `confidence_score` lies in `0..=100`.
/// - `price_range` is strictly positive.
/// - `tags` are lowercase, unique, and at most ten entries long.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AggregatedHotel {
    /// Property name.
    pub name: String,
    /// Street address as supplied by the dataset.
    pub address: String,
    /// City name as supplied by the dataset.
    pub city: String,
    /// Country, when known.
    pub country: Option<String>,
    /// Average guest score on a 0-10 scale.
    pub average_score: f64,
    /// Total number of reviews across all platforms.
    pub total_reviews: u64,
    /// Lowercase facility keywords in encounter order.
    pub tags: Vec<String>,
    /// Review excerpts: positive first, then negative.
    pub reviews: Vec<String>,
    /// Blended quality, volume and sentiment proxy.
    pub confidence_score: u8,
    /// Nightly price, either from the source or estimated.
    pub price_range: f64,
    /// Location of the property.
    pub coordinates: Coordinates,
    /// Per-platform ratings.
    pub platform_ratings: PlatformRatings,
    /// Star rating, when the source provides a usable value.
    pub star_rating: Option<u8>,
    /// Short display list of the first few facilities.
    pub facilities_brief: String,
    /// Human-readable synthesis of the review excerpts.
    pub review_summary: Option<String>,
}

impl AggregatedHotel {
    /// The `(name, address)` pair that identifies a hotel.
    ///
    /// Two rows sharing this pair are the same hotel when candidate sets are
    /// merged.
    pub fn identity(&self) -> (&str, &str) {
        (self.name.as_str(), self.address.as_str())
    }

    /// Whether `city` names this hotel's city, ignoring case.
    pub fn in_city(&self, city: &str) -> bool {
        self.city.trim().eq_ignore_ascii_case(city.trim())
    }
}
