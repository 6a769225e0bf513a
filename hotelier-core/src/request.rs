//! Request and response shapes for recommendation queries.

use crate::{AggregatedHotel, Persona};

/// City sentinel that disables city filtering.
pub const ALL_CITIES: &str = "all";

/// Whether `city` asks for no city filtering (blank or `"all"`).
///
/// # Examples
/// ```
/// use hotelier_core::is_all_cities;
///
/// assert!(is_all_cities("All"));
/// assert!(is_all_cities("  "));
/// assert!(!is_all_cities("Delhi"));
/// ```
pub fn is_all_cities(city: &str) -> bool {
    let trimmed = city.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CITIES)
}

/// Optional structured filters narrowing the candidate set.
///
/// Absent values impose no constraint. The price band applies only when both
/// bounds are present; rating bounds apply when at least one is present.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct FilterSet {
    /// Inclusive lower price bound.
    pub price_min: Option<f64>,
    /// Inclusive upper price bound.
    pub price_max: Option<f64>,
    /// Accepted star ratings; empty accepts all hotels.
    pub star_ratings: Vec<u8>,
    /// Inclusive lower bound on the average score.
    pub avg_rating_min: Option<f64>,
    /// Inclusive upper bound on the average score.
    pub avg_rating_max: Option<f64>,
    /// Free-text neighbourhood or landmark.
    pub area: Option<String>,
    /// Extra free-text requirements appended to the search query.
    pub extra_requirements: Option<String>,
}

impl FilterSet {
    /// The area string, when present and not blank.
    pub fn area(&self) -> Option<&str> {
        non_blank(self.area.as_deref())
    }

    /// The extra requirements, when present and not blank.
    pub fn extra_requirements(&self) -> Option<&str> {
        non_blank(self.extra_requirements.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A recommendation query.
///
/// # Examples
/// ```
/// use hotelier_core::{Persona, RecommendationRequest};
///
/// let request = RecommendationRequest::new(Some(Persona::Family), "Delhi")
///     .with_preference("pool");
/// assert_eq!(request.preferences, vec!["pool".to_string()]);
/// assert!(request.filters.area.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RecommendationRequest {
    /// Traveller persona; `None` disables the persona template and bonus.
    pub persona: Option<Persona>,
    /// Target city, or [`ALL_CITIES`].
    pub city: String,
    /// Free-text preferences such as `"pool"` or `"near the beach"`.
    pub preferences: Vec<String>,
    /// Structured filters.
    pub filters: FilterSet,
}

impl RecommendationRequest {
    /// Construct a request without preferences or filters.
    pub fn new(persona: Option<Persona>, city: impl Into<String>) -> Self {
        Self {
            persona,
            city: city.into(),
            ..Self::default()
        }
    }

    /// Add a free-text preference while returning `self` for chaining.
    #[must_use]
    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preferences.push(preference.into());
        self
    }

    /// Replace the filter set while returning `self` for chaining.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }
}

/// A hotel tagged with its request-scoped ranking score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RankedHotel {
    /// The ranked hotel.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hotel: AggregatedHotel,
    /// Score in `0..=100`; higher ranks first.
    pub final_score: u8,
}

/// Aggregate statistics for the queried city.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CitySummary {
    /// The city as requested.
    pub city: String,
    /// Candidates located in that city.
    pub count: usize,
    /// Mean average score of those candidates, to one decimal place.
    pub average_rating: f64,
}

/// Summary statistics over a filtered candidate set.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Insights {
    /// Number of candidates.
    pub total_hotels: usize,
    /// Mean average score, to one decimal place.
    pub average_rating: f64,
    /// The five most frequent tags, ties broken by first appearance.
    pub top_tags: Vec<String>,
    /// Statistics for the queried city.
    pub city_summary: CitySummary,
    /// Mean nightly price, rounded to a whole unit.
    pub average_price: f64,
    /// Cheapest and most expensive nightly price.
    pub price_range: Option<(f64, f64)>,
}

/// The response to a recommendation query.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Recommendations {
    /// At most five hotels, best first.
    pub recommendations: Vec<RankedHotel>,
    /// Statistics over the filtered candidates.
    pub insights: Insights,
}
