//! Request-time recommendation service for Hotelier.
//!
//! [`RecommendationEngine`] owns a record source, a geocoder and a ranking
//! matcher. It aggregates the dataset once, on first use, then answers each
//! request by filtering the shared collection, ranking the survivors and
//! summarising the candidate set:
//!
//! 1. [`filter_by_city`] keeps hotels in the requested city, falling back to
//!    the whole collection when nothing matches.
//! 2. [`retain_price_band`], [`retain_rating_bounds`] and
//!    [`retain_star_ratings`] apply the structured filters.
//! 3. [`AreaSearch`] narrows by fuzzy address match, or sorts by distance
//!    from the geocoded area.
//! 4. [`Ranker`](hotelier_scorer::Ranker) scores the candidates and
//!    [`summarise`] builds the insights.
//!
//! Dataset and geocoder failures are logged and degrade to smaller results;
//! no request returns an error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod filter;
mod insights;

pub use engine::{EngineConfig, PreloadedSource, RecommendationEngine};
pub use filter::{
    AreaSearch, filter_by_city, retain_price_band, retain_rating_bounds, retain_star_ratings,
};
pub use insights::{TOP_TAG_COUNT, summarise};
