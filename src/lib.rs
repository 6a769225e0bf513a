//! Facade crate for the Hotelier recommendation engine.
//!
//! This crate re-exports the domain types, the scoring pieces and the
//! engine itself. The dataset loader and HTTP geocoder are re-exported when
//! the `data` feature is on.
//!
//! # Features
//!
//! `data` only controls those re-exports. `hotelier-engine` aggregates rows
//! through `hotelier-data`, so the data crate, along with `reqwest` and
//! `tokio`, is compiled with or without the feature.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use hotelier::{GeocodeError, GeocodeProvider, Coordinates, RecommendationEngine};
//! use hotelier::{Persona, RecommendationRequest};
//!
//! struct Offline;
//!
//! impl GeocodeProvider for Offline {
//!     fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError> {
//!         Err(GeocodeError::NoResults { place: place.to_owned() })
//!     }
//! }
//!
//! let engine = RecommendationEngine::preloaded(Arc::from(Vec::new()), Offline);
//! let response = engine.recommend(&RecommendationRequest::new(Some(Persona::Solo), "Goa"));
//! assert!(response.recommendations.is_empty());
//! ```

#![forbid(unsafe_code)]

pub use hotelier_core::{
    AggregatedHotel, CitySummary, Coordinates, FilterSet, GeocodeError, GeocodeProvider,
    HotelField, Insights, MatchHit, Persona, RankedHotel, RawHotelRecord, RecommendationRequest,
    Recommendations, RecordSource, SourceError, TextMatcher,
};
pub use hotelier_engine::{EngineConfig, PreloadedSource, RecommendationEngine};
pub use hotelier_scorer::{MatcherConfig, Ranker, RankerConfig, WeightedFuzzyMatcher};

#[cfg(feature = "data")]
pub use hotelier_data::{
    Aggregator, AggregatorConfig, HttpGeocoder, HttpGeocoderConfig, JsonFileSource, PriceMode,
};
