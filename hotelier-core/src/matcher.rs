//! Weighted fuzzy text matching over hotel fields.
//!
//! The `TextMatcher` trait separates the matching algorithm from the ranking
//! and area-search stages that consume its hits, so either side can be swapped
//! or tested alone.

use crate::AggregatedHotel;

/// A searchable hotel field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelField {
    /// Property name.
    Name,
    /// Street address.
    Address,
    /// City.
    City,
    /// Country.
    Country,
    /// Facility tags.
    Tags,
    /// Review excerpts.
    Reviews,
}

impl HotelField {
    /// Borrow the text values this field holds for `hotel`.
    ///
    /// Multi-valued fields yield one entry per value; absent values yield
    /// nothing.
    pub fn texts(self, hotel: &AggregatedHotel) -> Vec<&str> {
        match self {
            Self::Name => vec![hotel.name.as_str()],
            Self::Address => vec![hotel.address.as_str()],
            Self::City => vec![hotel.city.as_str()],
            Self::Country => hotel.country.as_deref().into_iter().collect(),
            Self::Tags => hotel.tags.iter().map(String::as_str).collect(),
            Self::Reviews => hotel.reviews.iter().map(String::as_str).collect(),
        }
    }
}

/// A candidate that matched a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchHit {
    /// Position of the hotel in the searched slice.
    pub index: usize,
    /// Similarity in `0.0..=1.0`; `1.0` is a perfect match.
    pub similarity: f64,
}

/// Match a free-text query against hotels.
///
/// Implementations must:
/// - Return only hotels that clear the matcher's threshold.
/// - Order hits most similar first, keeping slice order between equals.
/// - Report similarities in `0.0..=1.0`.
///
/// An empty result means nothing matched; callers decide the fallback.
///
/// # Examples
///
/// ```rust
/// use hotelier_core::{AggregatedHotel, MatchHit, TextMatcher};
///
/// struct NameEquals;
///
/// impl TextMatcher for NameEquals {
///     fn search(&self, query: &str, hotels: &[&AggregatedHotel]) -> Vec<MatchHit> {
///         hotels
///             .iter()
///             .enumerate()
///             .filter(|(_, hotel)| hotel.name.eq_ignore_ascii_case(query))
///             .map(|(index, _)| MatchHit { index, similarity: 1.0 })
///             .collect()
///     }
/// }
///
/// assert!(NameEquals.search("anything", &[]).is_empty());
/// ```
pub trait TextMatcher: Send + Sync {
    /// Return the hotels in `hotels` that match `query`.
    fn search(&self, query: &str, hotels: &[&AggregatedHotel]) -> Vec<MatchHit>;
}
