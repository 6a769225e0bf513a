//! Test-only doubles and builders shared by unit and behaviour tests.

use std::sync::{Mutex, PoisonError};

use crate::{
    AggregatedHotel, Coordinates, GeocodeError, GeocodeProvider, PlatformRatings, RawHotelRecord,
    RecordSource, SourceError,
};

/// In-memory `RecordSource` returning fixed rows or a fixed failure.
#[derive(Debug, Clone)]
pub struct MemorySource {
    outcome: Result<Vec<RawHotelRecord>, SourceError>,
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl MemorySource {
    /// Create a source serving `records`.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawHotelRecord>,
    {
        Self {
            outcome: Ok(records.into_iter().collect()),
        }
    }

    /// Create a source whose load always fails as unavailable.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(SourceError::Unavailable {
                origin: "memory".to_owned(),
                message: message.to_owned(),
            }),
        }
    }
}

impl RecordSource for MemorySource {
    fn load(&self) -> Result<Vec<RawHotelRecord>, SourceError> {
        self.outcome.clone()
    }
}

/// `GeocodeProvider` returning a fixed outcome and recording every query.
#[derive(Debug)]
pub struct RecordingGeocoder {
    outcome: Result<Coordinates, GeocodeError>,
    queries: Mutex<Vec<String>>,
}

impl RecordingGeocoder {
    /// Resolve every non-blank place to `point`.
    pub const fn resolving(point: Coordinates) -> Self {
        Self {
            outcome: Ok(point),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Fail every lookup with a network error.
    pub fn unavailable() -> Self {
        Self {
            outcome: Err(GeocodeError::NetworkError {
                url: "http://geocoder.invalid/search".to_owned(),
                message: "connection refused".to_owned(),
            }),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Places looked up so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of lookups so far.
    pub fn call_count(&self) -> usize {
        self.queries().len()
    }
}

impl GeocodeProvider for RecordingGeocoder {
    fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(place.to_owned());
        if place.trim().is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        self.outcome.clone()
    }
}

/// Builder for hand-made [`AggregatedHotel`] fixtures.
///
/// Defaults: address `"{name}, {city}"`, average score 7.0, no reviews,
/// price 1500, coordinates at the origin.
#[derive(Debug, Clone)]
pub struct HotelBuilder {
    hotel: AggregatedHotel,
}

impl HotelBuilder {
    /// Start a hotel called `name` in `city`.
    pub fn new(name: &str, city: &str) -> Self {
        Self {
            hotel: AggregatedHotel {
                name: name.to_owned(),
                address: format!("{name}, {city}"),
                city: city.to_owned(),
                country: None,
                average_score: 7.0,
                total_reviews: 0,
                tags: Vec::new(),
                reviews: Vec::new(),
                confidence_score: 50,
                price_range: 1500.0,
                coordinates: Coordinates::new(0.0, 0.0),
                platform_ratings: PlatformRatings::new(),
                star_rating: None,
                facilities_brief: String::new(),
                review_summary: None,
            },
        }
    }

    /// Override the address.
    #[must_use]
    pub fn address(mut self, address: &str) -> Self {
        address.clone_into(&mut self.hotel.address);
        self
    }

    /// Set the country.
    #[must_use]
    pub fn country(mut self, country: &str) -> Self {
        self.hotel.country = Some(country.to_owned());
        self
    }

    /// Replace the tags.
    #[must_use]
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.hotel.tags = tags.iter().map(|tag| (*tag).to_owned()).collect();
        self
    }

    /// Append a review excerpt.
    #[must_use]
    pub fn review(mut self, review: &str) -> Self {
        self.hotel.reviews.push(review.to_owned());
        self
    }

    /// Set the average score.
    #[must_use]
    pub const fn average_score(mut self, score: f64) -> Self {
        self.hotel.average_score = score;
        self
    }

    /// Set the review volume.
    #[must_use]
    pub const fn total_reviews(mut self, total: u64) -> Self {
        self.hotel.total_reviews = total;
        self
    }

    /// Set the nightly price.
    #[must_use]
    pub const fn price(mut self, price: f64) -> Self {
        self.hotel.price_range = price;
        self
    }

    /// Set the star rating.
    #[must_use]
    pub const fn stars(mut self, stars: u8) -> Self {
        self.hotel.star_rating = Some(stars);
        self
    }

    /// Set the coordinates.
    #[must_use]
    pub const fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.hotel.coordinates = Coordinates::new(lat, lng);
        self
    }

    /// Finish the hotel.
    pub fn build(self) -> AggregatedHotel {
        self.hotel
    }
}
