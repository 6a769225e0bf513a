//! Blocking geocoder over a Nominatim-style `/search` endpoint.
//!
//! [`GeocodeProvider`] is synchronous so the engine can be driven from plain
//! threads. The HTTP call itself is async; [`HttpGeocoder`] owns a small
//! current-thread Tokio runtime to drive it.

use std::thread;
use std::time::Duration;

use hotelier_core::{Coordinates, GeocodeError, GeocodeProvider};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::nominatim::SearchResult;

/// Public Nominatim instance used when no base URL is configured.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Agent sent with every request; Nominatim refuses anonymous clients.
pub const DEFAULT_USER_AGENT: &str = "hotelier-geocoder/0.1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure to set up an [`HttpGeocoder`].
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// reqwest rejected the client settings.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The private runtime could not start.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Where and how an [`HttpGeocoder`] sends its lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGeocoderConfig {
    /// Service root; `/search` is appended.
    pub base_url: String,
    /// Applies to connecting and to the whole request.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for HttpGeocoderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GEOCODER_URL)
    }
}

impl HttpGeocoderConfig {
    /// Settings for `base_url` with the default timeout and agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Replace the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// `{base_url}/search?q=<place>&format=json&limit=1`.
    fn search_url(&self, place: &str) -> Result<Url, GeocodeError> {
        let endpoint = format!("{}/search", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &endpoint,
            &[("q", place), ("format", "json"), ("limit", "1")],
        )
        .map_err(|err| GeocodeError::InvalidUrl {
            url: endpoint,
            message: err.to_string(),
        })
    }
}

/// Geocoder that trusts the first hit of a text search.
///
/// Calls made outside Tokio run on the geocoder's own runtime. Calls made
/// from a multi-threaded runtime borrow its handle through
/// [`tokio::task::block_in_place`]. A `current_thread` runtime cannot block
/// in place, so those calls hand the lookup to a scoped thread that drives
/// the private runtime; the calling task waits for it. The private runtime
/// must not be dropped from async code, so drop the geocoder outside Tokio.
pub struct HttpGeocoder {
    client: Client,
    config: HttpGeocoderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeocoder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpGeocoder {
    /// Geocoder for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// See [`HttpGeocoder::with_config`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpGeocoderConfig::new(base_url))
    }

    /// Geocoder with explicit settings.
    ///
    /// # Errors
    ///
    /// [`ProviderBuildError`] when the client or runtime cannot be built.
    pub fn with_config(config: HttpGeocoderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// The active settings.
    pub const fn config(&self) -> &HttpGeocoderConfig {
        &self.config
    }

    async fn lookup(&self, place: &str) -> Result<Coordinates, GeocodeError> {
        let url = self.config.search_url(place)?;
        let request_failed = |err: reqwest::Error| request_error(&err, &url, self.config.timeout);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(request_failed)?;
        let results: Vec<SearchResult> =
            response.json().await.map_err(|err| GeocodeError::ParseError {
                message: err.to_string(),
            })?;
        first_hit(place, results)
    }
}

/// Sort a transport failure into timeout, HTTP status or network error.
fn request_error(error: &reqwest::Error, url: &Url, timeout: Duration) -> GeocodeError {
    let url = url.to_string();
    match error.status() {
        _ if error.is_timeout() => GeocodeError::Timeout {
            url,
            timeout_secs: timeout.as_secs(),
        },
        Some(status) => GeocodeError::HttpError {
            url,
            status: status.as_u16(),
            message: error.to_string(),
        },
        None => GeocodeError::NetworkError {
            url,
            message: error.to_string(),
        },
    }
}

fn first_hit(place: &str, results: Vec<SearchResult>) -> Result<Coordinates, GeocodeError> {
    let Some(hit) = results.into_iter().next() else {
        return Err(GeocodeError::NoResults {
            place: place.to_owned(),
        });
    };
    if !(hit.lat.is_finite() && hit.lon.is_finite()) {
        return Err(GeocodeError::ParseError {
            message: format!("non-finite coordinates for '{place}'"),
        });
    }
    log::debug!(
        "resolved '{place}' to {}",
        hit.display_name.as_deref().unwrap_or("an unnamed place")
    );
    Ok(Coordinates::new(hit.lat, hit.lon))
}

impl GeocodeProvider for HttpGeocoder {
    fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.lookup(place)))
            }
            Ok(_) => thread::scope(|scope| {
                scope
                    .spawn(|| self.runtime.block_on(self.lookup(place)))
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            }),
            Err(_) => self.runtime.block_on(self.lookup(place)),
        }
    }
}
