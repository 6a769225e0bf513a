//! Fallback coordinates for rows without a usable location.

use hotelier_core::Coordinates;

/// Known cities and their centre points.
///
/// The first entry doubles as the default for unknown cities.
pub const CITY_COORDINATES: [(&str, Coordinates); 10] = [
    ("Delhi", Coordinates::new(28.6139, 77.2090)),
    ("Mumbai", Coordinates::new(19.0760, 72.8777)),
    ("Goa", Coordinates::new(15.2993, 74.1240)),
    ("Bangalore", Coordinates::new(12.9716, 77.5946)),
    ("Chennai", Coordinates::new(13.0827, 80.2707)),
    ("Kolkata", Coordinates::new(22.5726, 88.3639)),
    ("Hyderabad", Coordinates::new(17.3850, 78.4867)),
    ("Jaipur", Coordinates::new(26.9124, 75.7873)),
    ("Pune", Coordinates::new(18.5204, 73.8567)),
    ("Agra", Coordinates::new(27.1767, 78.0081)),
];

/// Look up the centre of `city`, ignoring case and surrounding whitespace.
///
/// Unknown cities resolve to the first table entry.
///
/// # Examples
/// ```
/// use hotelier_data::city_coordinates;
///
/// assert_eq!(city_coordinates("mumbai").lat, 19.0760);
/// assert_eq!(city_coordinates("Atlantis"), city_coordinates("Delhi"));
/// ```
pub fn city_coordinates(city: &str) -> Coordinates {
    let wanted = city.trim();
    let (_, default) = CITY_COORDINATES[0];
    CITY_COORDINATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map_or(default, |(_, point)| *point)
}
