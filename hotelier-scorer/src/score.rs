//! Ranking score formulas.
//!
//! Both formulas return whole numbers in `0..=100`:
//! - final: `100 × (0.4·avg/10 + 0.3·similarity + 0.15·volume + 0.15·sentiment + bonus)`
//! - popularity: `100 × (0.7·avg/10 + 0.3·volume)`
//!
//! where `volume` is [`review_volume_confidence`] and `sentiment` is the
//! presence proxy from [`hotelier_core::sentiment_ratio`].

use hotelier_core::{AggregatedHotel, NEGATIVE_SIGNALS, POSITIVE_SIGNALS, sentiment_ratio};

/// Review count at which volume confidence saturates is `e^8 - 1`.
const VOLUME_LOG_SCALE: f64 = 8.0;

/// Log-scaled review volume, saturating at `1.0`.
///
/// # Examples
/// ```
/// use hotelier_scorer::review_volume_confidence;
///
/// assert_eq!(review_volume_confidence(0), 0.0);
/// assert_eq!(review_volume_confidence(10_000), 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "review counts are log-scaled into a bounded float"
)]
pub fn review_volume_confidence(total_reviews: u64) -> f64 {
    ((total_reviews as f64 + 1.0).ln() / VOLUME_LOG_SCALE).min(1.0)
}

/// Score a fuzzy-matched hotel.
///
/// `similarity` is the matcher's hit similarity and `bonus` the persona
/// bonus.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the final score is a weighted sum of float components"
)]
pub fn final_score(hotel: &AggregatedHotel, similarity: f64, bonus: f64) -> u8 {
    let sentiment = sentiment_ratio(POSITIVE_SIGNALS, NEGATIVE_SIGNALS);
    let blended = 0.4 * hotel.average_score / 10.0
        + 0.3 * similarity
        + 0.15 * review_volume_confidence(hotel.total_reviews)
        + 0.15 * sentiment
        + bonus;
    to_percentage(blended)
}

/// Score a hotel when fuzzy matching found nothing.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the popularity score is a weighted sum of float components"
)]
pub fn popularity_score(hotel: &AggregatedHotel) -> u8 {
    let blended = 0.7 * hotel.average_score / 10.0
        + 0.3 * review_volume_confidence(hotel.total_reviews);
    to_percentage(blended)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped into u8 range before casting"
)]
fn to_percentage(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
