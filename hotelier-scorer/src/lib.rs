//! Fuzzy matching and ranking for Hotelier recommendations.
//!
//! The crate provides the request-time half of the engine:
//! - **Matching**: [`WeightedFuzzyMatcher`] implements
//!   [`TextMatcher`](hotelier_core::TextMatcher) with per-field weights, a
//!   similarity threshold and a pluggable string similarity function. The
//!   [`MatcherConfig::ranking`] and [`MatcherConfig::area`] presets cover the
//!   two searches the engine runs.
//! - **Personas**: [`PersonaProfile`] tables hold each persona's query
//!   template and bonus keywords as data.
//! - **Scoring**: [`final_score`] and [`popularity_score`] turn a hotel and
//!   its search similarity into a `0..=100` ranking score.
//! - **Ranking**: [`Ranker`] ties the pieces together and falls back to
//!   popularity when nothing matches.
//!
//! # Examples
//!
//! ```
//! use hotelier_core::{AggregatedHotel, Persona, RecommendationRequest};
//! use hotelier_scorer::Ranker;
//!
//! let ranker = Ranker::default();
//! let request = RecommendationRequest::new(Some(Persona::Business), "Pune");
//! let candidates: Vec<&AggregatedHotel> = Vec::new();
//! assert!(ranker.rank(&request, &candidates).is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod matcher;
mod persona;
mod query;
mod ranker;
mod score;

pub use error::MatcherConfigError;
pub use matcher::{FieldWeight, MatcherConfig, Similarity, TokenCoverage, WeightedFuzzyMatcher};
pub use persona::{PERSONA_PROFILES, PersonaProfile, persona_bonus};
pub use query::build_query;
pub use ranker::{DEFAULT_LIMIT, Ranker, RankerConfig};
pub use score::{final_score, popularity_score, review_volume_confidence};
