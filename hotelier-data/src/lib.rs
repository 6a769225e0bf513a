//! Data access and aggregation for the Hotelier engine.
//!
//! Responsibilities:
//! - Turn raw dataset rows into scoring-ready [`AggregatedHotel`] values.
//! - Load the raw dataset from JSON files.
//! - Resolve free-text places through an HTTP geocoding service.
//!
//! Boundaries:
//! - Ranking and filtering rules live in `hotelier-scorer` and
//!   `hotelier-engine`.
//! - Raw-field defects never fail aggregation; they degrade to defaults.
//!
//! Invariants:
//! - Aggregation is a pure function of its input apart from the documented
//!   random price estimate, which [`PriceMode::Midpoint`] or a seeded RNG
//!   makes reproducible.
//! - No global mutable state.
//!
//! [`AggregatedHotel`]: hotelier_core::AggregatedHotel

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod cities;
pub mod geocode;
mod source;

pub use aggregate::{
    Aggregator, AggregatorConfig, PriceBracket, PriceMode, RatingParseError, RatingStrategy,
    parse_platform_ratings,
};
pub use cities::{CITY_COORDINATES, city_coordinates};
pub use geocode::{
    DEFAULT_GEOCODER_URL, DEFAULT_USER_AGENT, HttpGeocoder, HttpGeocoderConfig, ProviderBuildError,
};
pub use source::JsonFileSource;
