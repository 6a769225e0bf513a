//! Candidate filters.
//!
//! Each filter takes or narrows a list of borrowed hotels so the shared
//! collection is never copied or mutated while a request is in flight.

use std::collections::HashSet;

use geo::Coord;
use hotelier_core::{
    AggregatedHotel, FilterSet, GeocodeProvider, TextMatcher, haversine_km, is_all_cities,
};
use hotelier_scorer::WeightedFuzzyMatcher;
use log::{debug, warn};

/// Lowest average score accepted when only an upper rating bound is given.
const RATING_FLOOR: f64 = 0.0;

/// Highest average score accepted when only a lower rating bound is given.
const RATING_CEILING: f64 = 10.0;

/// Hotels in `city`, matched on the city field or inside the address.
///
/// City-field matches come first, then address matches, with hotels sharing
/// a `(name, address)` identity kept once. A blank or `"all"` city keeps
/// everything, as does a city nothing matches.
///
/// # Examples
/// ```
/// use hotelier_core::test_support::HotelBuilder;
/// use hotelier_engine::filter_by_city;
///
/// let hotels = vec![
///     HotelBuilder::new("Lotus Inn", "Delhi").build(),
///     HotelBuilder::new("Harbour View", "Mumbai").build(),
/// ];
/// assert_eq!(filter_by_city(&hotels, "delhi").len(), 1);
/// assert_eq!(filter_by_city(&hotels, "Goa").len(), 2);
/// ```
#[must_use]
pub fn filter_by_city<'a>(hotels: &'a [AggregatedHotel], city: &str) -> Vec<&'a AggregatedHotel> {
    if is_all_cities(city) {
        return hotels.iter().collect();
    }
    let needle = city.trim().to_lowercase();
    let mut seen = HashSet::new();
    let matched: Vec<&AggregatedHotel> = hotels
        .iter()
        .filter(|hotel| hotel.in_city(city))
        .chain(
            hotels
                .iter()
                .filter(|hotel| hotel.address.to_lowercase().contains(&needle)),
        )
        .filter(|hotel| seen.insert(hotel.identity()))
        .collect();
    if matched.is_empty() {
        debug!("no hotels in {city:?}; keeping all {} hotels", hotels.len());
        return hotels.iter().collect();
    }
    matched
}

/// Keep hotels priced within the inclusive band when both bounds are set.
pub fn retain_price_band(candidates: &mut Vec<&AggregatedHotel>, filters: &FilterSet) {
    if let (Some(min), Some(max)) = (filters.price_min, filters.price_max) {
        candidates.retain(|hotel| (min..=max).contains(&hotel.price_range));
    }
}

/// Keep hotels whose average score lies within the inclusive bounds.
///
/// A missing bound defaults to the end of the `0..=10` scale; with neither
/// bound set nothing is removed.
pub fn retain_rating_bounds(candidates: &mut Vec<&AggregatedHotel>, filters: &FilterSet) {
    if filters.avg_rating_min.is_none() && filters.avg_rating_max.is_none() {
        return;
    }
    let min = filters.avg_rating_min.unwrap_or(RATING_FLOOR);
    let max = filters.avg_rating_max.unwrap_or(RATING_CEILING);
    candidates.retain(|hotel| (min..=max).contains(&hotel.average_score));
}

/// Keep hotels whose star rating is one of the requested values.
///
/// Hotels without a star rating are dropped whenever the set is non-empty.
pub fn retain_star_ratings(candidates: &mut Vec<&AggregatedHotel>, filters: &FilterSet) {
    if filters.star_ratings.is_empty() {
        return;
    }
    candidates.retain(|hotel| {
        hotel
            .star_rating
            .is_some_and(|stars| filters.star_ratings.contains(&stars))
    });
}

/// Narrows candidates to a free-text area.
///
/// A fuzzy match over address, city and country runs first and keeps only the
/// matching hotels, most similar first. When nothing matches, the area is
/// geocoded and every candidate is sorted by distance from the resolved
/// point. A failed lookup leaves the candidates untouched.
#[derive(Debug)]
pub struct AreaSearch<'a, G: ?Sized, M = WeightedFuzzyMatcher> {
    matcher: &'a M,
    geocoder: &'a G,
}

impl<'a, G, M> AreaSearch<'a, G, M>
where
    G: GeocodeProvider + ?Sized,
    M: TextMatcher,
{
    /// Create an area search over `matcher` and `geocoder`.
    #[must_use]
    pub const fn new(matcher: &'a M, geocoder: &'a G) -> Self {
        Self { matcher, geocoder }
    }

    /// Apply the area search for `area` within `city`.
    #[must_use]
    pub fn apply<'h>(
        &self,
        candidates: Vec<&'h AggregatedHotel>,
        area: &str,
        city: &str,
    ) -> Vec<&'h AggregatedHotel> {
        if candidates.is_empty() {
            return candidates;
        }
        let hits = self.matcher.search(area, &candidates);
        if !hits.is_empty() {
            debug!("{} hotels match area {area:?}", hits.len());
            return hits
                .iter()
                .filter_map(|hit| candidates.get(hit.index).copied())
                .collect();
        }
        self.sort_by_distance(candidates, &place_query(area, city))
    }

    fn sort_by_distance<'h>(
        &self,
        mut candidates: Vec<&'h AggregatedHotel>,
        place: &str,
    ) -> Vec<&'h AggregatedHotel> {
        match self.geocoder.geocode(place) {
            Ok(point) => {
                let origin = Coord::from(point);
                candidates.sort_by(|left, right| {
                    haversine_km(origin, left.coordinates.into())
                        .total_cmp(&haversine_km(origin, right.coordinates.into()))
                });
                debug!("sorted {} hotels by distance from {place:?}", candidates.len());
            }
            Err(err) => warn!("geocoding {place:?} failed; area ignored: {err}"),
        }
        candidates
    }
}

/// The place string sent to the geocoder.
fn place_query(area: &str, city: &str) -> String {
    if is_all_cities(city) {
        area.trim().to_owned()
    } else {
        format!("{}, {}", area.trim(), city.trim())
    }
}
