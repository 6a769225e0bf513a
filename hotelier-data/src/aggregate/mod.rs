//! Raw row to [`AggregatedHotel`] conversion.
//!
//! Each raw row yields exactly one hotel. Missing or malformed fields never
//! fail aggregation:
//! - absent average scores are derived from platform ratings, then zero;
//! - absent prices are estimated from a bracket (see [`PriceBracket`]);
//! - absent or zero coordinates fall back to the city table;
//! - unparsable rating payloads become an empty mapping.

mod price;
mod ratings;
mod text;

use hotelier_core::{
    AggregatedHotel, Coordinates, NEGATIVE_SIGNALS, POSITIVE_SIGNALS, PlatformRatings,
    RawHotelRecord, sentiment_ratio,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cities::city_coordinates;

pub use price::{PriceBracket, PriceMode};
pub use ratings::{RatingParseError, RatingStrategy, parse_platform_ratings};

/// Aggregation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregatorConfig {
    /// How missing prices are estimated.
    pub price_mode: PriceMode,
    /// Seed for the random price draw; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl AggregatorConfig {
    /// Set the price mode.
    #[must_use]
    pub const fn with_price_mode(mut self, price_mode: PriceMode) -> Self {
        self.price_mode = price_mode;
        self
    }

    /// Seed the random price draw.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Converts raw dataset rows into aggregated hotels.
///
/// # Examples
/// ```
/// use hotelier_core::RawHotelRecord;
/// use hotelier_data::{Aggregator, AggregatorConfig, PriceMode};
///
/// let aggregator =
///     Aggregator::new(AggregatorConfig::default().with_price_mode(PriceMode::Midpoint));
/// let hotels = aggregator.aggregate(&[RawHotelRecord {
///     name: "Lotus Inn".into(),
///     city: "Delhi".into(),
///     average_score: Some(8.0),
///     ..RawHotelRecord::default()
/// }]);
///
/// assert_eq!(hotels.len(), 1);
/// assert_eq!(hotels[0].price_range, 2000.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    /// Create an aggregator with `config`.
    pub const fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate every row, seeding the price RNG from the configuration.
    pub fn aggregate(&self, records: &[RawHotelRecord]) -> Vec<AggregatedHotel> {
        let mut rng = self
            .config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        self.aggregate_with_rng(records, &mut rng)
    }

    /// Aggregate every row, drawing estimated prices from `rng`.
    pub fn aggregate_with_rng<R: Rng + ?Sized>(
        &self,
        records: &[RawHotelRecord],
        rng: &mut R,
    ) -> Vec<AggregatedHotel> {
        let hotels: Vec<AggregatedHotel> = records
            .iter()
            .map(|record| self.aggregate_record(record, rng))
            .collect();
        log::debug!("aggregated {} hotels", hotels.len());
        hotels
    }

    /// Aggregate a single row.
    pub fn aggregate_record<R: Rng + ?Sized>(
        &self,
        record: &RawHotelRecord,
        rng: &mut R,
    ) -> AggregatedHotel {
        let platform_ratings = parse_platform_ratings(record, &RatingStrategy::DEFAULT_CHAIN);
        let total_reviews = total_reviews(&platform_ratings);
        let average_score = average_score(record.average_score, &platform_ratings);

        let tokens = text::facility_tokens(record.facilities.as_deref());
        let tags = text::tags(&tokens);
        let facilities_brief = text::facilities_brief(&tokens);

        let positive = text::review_excerpt(record.positive_review.as_deref());
        let negative = text::review_excerpt(record.negative_review.as_deref());
        let reviews = positive
            .into_iter()
            .chain(negative)
            .map(str::to_owned)
            .collect();
        let review_summary = text::review_summary(positive, negative);

        let price_range = record
            .price
            .filter(|price| price.is_finite() && *price > 0.0)
            .unwrap_or_else(|| {
                let bracket = PriceBracket::classify(&tags, &record.address, average_score);
                let estimate = bracket.estimate(self.config.price_mode, rng);
                log::debug!("estimated {estimate:.0} for '{}' ({bracket:?})", record.name);
                estimate
            });

        AggregatedHotel {
            name: record.name.trim().to_owned(),
            address: record.address.trim().to_owned(),
            city: record.city.trim().to_owned(),
            country: record.country.clone(),
            average_score,
            total_reviews,
            tags,
            reviews,
            confidence_score: confidence_score(average_score, total_reviews),
            price_range,
            coordinates: coordinates(record),
            platform_ratings,
            star_rating: text::star_rating(record.star_rating.as_deref()),
            facilities_brief,
            review_summary,
        }
    }
}

fn total_reviews(ratings: &PlatformRatings) -> u64 {
    ratings
        .values()
        .filter_map(|rating| rating.reviews_count)
        .fold(0, u64::saturating_add)
}

/// The direct score when positive, else the review-weighted mean of platform
/// ratings, else their plain mean, else zero. Clamped to `0.0..=10.0`.
fn average_score(direct: Option<f64>, ratings: &PlatformRatings) -> f64 {
    if let Some(score) = direct.filter(|score| score.is_finite() && *score > 0.0) {
        return score.clamp(0.0, 10.0);
    }
    if ratings.is_empty() {
        return 0.0;
    }

    let (weighted_sum, weight) = ratings
        .values()
        .filter_map(|rating| rating.reviews_count.map(|count| (rating.rating, count as f64)))
        .fold((0.0, 0.0), |(sum, total), (rating, count)| {
            (sum + rating * count, total + count)
        });
    let mean = if weight > 0.0 {
        weighted_sum / weight
    } else {
        ratings.values().map(|rating| rating.rating).sum::<f64>() / ratings.len() as f64
    };
    mean.clamp(0.0, 10.0)
}

/// Blend of normalised score, log review volume and the sentiment proxy.
fn confidence_score(average_score: f64, total_reviews: u64) -> u8 {
    let volume = ((total_reviews as f64) + 1.0).ln() / 10.0;
    let sentiment = sentiment_ratio(POSITIVE_SIGNALS, NEGATIVE_SIGNALS);
    let blended = (average_score / 10.0).mul_add(0.5, volume * 0.3) + sentiment * 0.2;
    (blended * 100.0).min(100.0).round().clamp(0.0, 100.0) as u8
}

fn coordinates(record: &RawHotelRecord) -> Coordinates {
    let usable = |value: Option<f64>| value.filter(|v| v.is_finite() && *v != 0.0);
    match (usable(record.latitude), usable(record.longitude)) {
        (Some(lat), Some(lng)) => Coordinates::new(lat, lng),
        _ => city_coordinates(&record.city),
    }
}
