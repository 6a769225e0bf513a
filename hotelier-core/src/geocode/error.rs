use thiserror::Error;

/// Errors from [`crate::geocode::GeocodeProvider::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The place description was blank.
    #[error("a place description is required")]
    EmptyQuery,
    /// The configured base URL could not be turned into a request URL.
    #[error("invalid geocoder URL {url}: {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The request did not complete in time.
    #[error("geocoding request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("geocoding request to {url} failed with status {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("geocoding request to {url} failed: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse geocoding response: {message}")]
    ParseError {
        /// Error detail.
        message: String,
    },
    /// The service found nothing for the place.
    #[error("no geocoding result for '{place}'")]
    NoResults {
        /// The place that was looked up.
        place: String,
    },
}
