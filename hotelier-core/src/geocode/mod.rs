//! Resolve free-text places to coordinates.
//!
//! The `GeocodeProvider` trait abstracts a single-result text-search
//! geocoder. The engine treats every error as "no geocoding available" and
//! carries on without distance sorting.

mod error;
mod provider;

pub use error::GeocodeError;
pub use provider::GeocodeProvider;
