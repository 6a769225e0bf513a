//! Raw dataset rows as handed to the aggregator.
//!
//! The schema is owned by the dataset, not the engine: most fields arrive as
//! strings, numeric columns may be blank or zero, and the platform rating
//! summary is JSON that is sometimes written with single quotes. Every field
//! is optional in practice; aggregation degrades missing values to documented
//! defaults rather than failing.

#[cfg(feature = "serde")]
use crate::lenient;

/// One property row from the source table.
///
/// With the `serde` feature enabled, rows deserialise leniently: numbers may
/// be numeric strings, and blanks or nulls become `None`. Common column
/// aliases from public hotel datasets are accepted.
///
/// # Examples
/// ```
/// use hotelier_core::RawHotelRecord;
///
/// let raw = RawHotelRecord {
///     name: "Lotus Inn".into(),
///     city: "Delhi".into(),
///     price: Some(2400.0),
///     ..RawHotelRecord::default()
/// };
/// assert!(raw.latitude.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RawHotelRecord {
    /// Property name.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "hotel_name", deserialize_with = "lenient::text")
    )]
    pub name: String,
    /// Street address.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "hotel_address", deserialize_with = "lenient::text")
    )]
    pub address: String,
    /// City name.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::text"))]
    pub city: String,
    /// Country name.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional_text"))]
    pub country: Option<String>,
    /// Star rating text such as `"4"` or `"5 star"`.
    #[cfg_attr(
        feature = "serde",
        serde(
            alias = "hotel_star_rating",
            deserialize_with = "lenient::optional_text"
        )
    )]
    pub star_rating: Option<String>,
    /// Facilities separated by `•` or `|`.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "hotel_facilities", deserialize_with = "lenient::optional_text")
    )]
    pub facilities: Option<String>,
    /// Nightly price; zero or absent means unknown.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional_number"))]
    pub price: Option<f64>,
    /// Latitude; zero or absent means unknown.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "lat", deserialize_with = "lenient::optional_number")
    )]
    pub latitude: Option<f64>,
    /// Longitude; zero or absent means unknown.
    #[cfg_attr(
        feature = "serde",
        serde(
            alias = "lng",
            alias = "lon",
            deserialize_with = "lenient::optional_number"
        )
    )]
    pub longitude: Option<f64>,
    /// Positive review excerpt.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional_text"))]
    pub positive_review: Option<String>,
    /// Negative review excerpt.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional_text"))]
    pub negative_review: Option<String>,
    /// Direct average score on a 0-10 scale, when the source provides one.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "avg_score", deserialize_with = "lenient::optional_number")
    )]
    pub average_score: Option<f64>,
    /// Per-platform rating summary encoded as strict JSON.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "ratings_json", deserialize_with = "lenient::optional_text")
    )]
    pub platform_ratings_json: Option<String>,
    /// The same summary as written by tools that emit single-quoted keys.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional_text"))]
    pub platform_ratings: Option<String>,
}
