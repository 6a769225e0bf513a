//! Geocoding trait for single-result place lookups.

use crate::Coordinates;

use super::error::GeocodeError;

/// Resolve a free-text place description to one coordinate pair.
///
/// Implementations must return `Err(GeocodeError::EmptyQuery)` for blank input
/// and must not panic on network or parse failures.
///
/// # Examples
///
/// ```rust
/// use hotelier_core::{Coordinates, GeocodeError, GeocodeProvider};
///
/// struct Fixed;
///
/// impl GeocodeProvider for Fixed {
///     fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError> {
///         if place.trim().is_empty() {
///             return Err(GeocodeError::EmptyQuery);
///         }
///         Ok(Coordinates::new(15.2993, 74.1240))
///     }
/// }
///
/// let point = Fixed.geocode("Calangute, Goa")?;
/// assert_eq!(point.lat, 15.2993);
/// # Ok::<(), GeocodeError>(())
/// ```
pub trait GeocodeProvider {
    /// Return coordinates for `place`.
    fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError>;
}

impl<T: GeocodeProvider + ?Sized> GeocodeProvider for Box<T> {
    fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError> {
        (**self).geocode(place)
    }
}
