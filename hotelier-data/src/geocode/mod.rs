//! HTTP geocoding for area searches.
//!
//! [`HttpGeocoder`] implements [`hotelier_core::GeocodeProvider`] against a
//! Nominatim-compatible search endpoint, returning the first result only.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use hotelier_core::GeocodeProvider;
//! use hotelier_data::geocode::{HttpGeocoder, HttpGeocoderConfig};
//!
//! let config = HttpGeocoderConfig::new("https://nominatim.openstreetmap.org")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let geocoder = HttpGeocoder::with_config(config)?;
//!
//! let point = geocoder.geocode("Baga Beach, Goa")?;
//! println!("{}, {}", point.lat, point.lng);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod nominatim;
mod provider;

pub use provider::{
    DEFAULT_GEOCODER_URL, DEFAULT_USER_AGENT, HttpGeocoder, HttpGeocoderConfig,
    ProviderBuildError,
};
