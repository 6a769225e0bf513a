//! Core domain types for the Hotelier recommendation engine.
//!
//! The crate owns the canonical hotel model and the seams the engine is
//! assembled from:
//! - [`RecordSource`] supplies raw dataset rows.
//! - [`GeocodeProvider`] resolves free-text places to coordinates.
//! - [`TextMatcher`] performs weighted fuzzy matching over hotel fields.
//!
//! Concrete implementations live in `hotelier-data` and `hotelier-scorer`;
//! this crate stays free of I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod geocode;
pub mod hotel;
pub mod matcher;
pub mod persona;
pub mod record;
pub mod request;
pub mod source;

#[cfg(feature = "serde")]
mod lenient;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use geocode::{GeocodeError, GeocodeProvider};
pub use hotel::{
    AggregatedHotel, Coordinates, NEGATIVE_SIGNALS, POSITIVE_SIGNALS, PlatformRating,
    PlatformRatings, sentiment_ratio,
};
pub use matcher::{HotelField, MatchHit, TextMatcher};
pub use persona::Persona;
pub use record::RawHotelRecord;
pub use request::{
    ALL_CITIES, CitySummary, FilterSet, Insights, RankedHotel, RecommendationRequest,
    Recommendations, is_all_cities,
};
pub use source::{RecordSource, SourceError};
