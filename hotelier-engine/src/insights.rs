//! Candidate-set summaries.

use std::cmp::Reverse;
use std::collections::HashMap;

use hotelier_core::{AggregatedHotel, CitySummary, Insights, is_all_cities};

/// Number of tags reported in [`Insights::top_tags`].
pub const TOP_TAG_COUNT: usize = 5;

/// Summarise the filtered candidates for a request in `city`.
///
/// Ratings are averaged to one decimal place and prices to a whole unit. The
/// city summary covers candidates whose city field matches `city`, or every
/// candidate when `city` is blank or `"all"`. An empty candidate set yields
/// zeroed statistics and no price range.
///
/// # Examples
/// ```
/// use hotelier_core::test_support::HotelBuilder;
/// use hotelier_engine::summarise;
///
/// let a = HotelBuilder::new("A", "Goa").average_score(8.0).tags(&["pool"]).build();
/// let b = HotelBuilder::new("B", "Goa").average_score(7.0).tags(&["spa", "pool"]).build();
/// let insights = summarise(&[&a, &b], "Goa");
/// assert_eq!(insights.average_rating, 7.5);
/// assert_eq!(insights.top_tags, vec!["pool".to_owned(), "spa".to_owned()]);
/// assert_eq!(insights.city_summary.count, 2);
/// ```
#[must_use]
pub fn summarise(candidates: &[&AggregatedHotel], city: &str) -> Insights {
    let in_city: Vec<&AggregatedHotel> = if is_all_cities(city) {
        candidates.to_vec()
    } else {
        candidates
            .iter()
            .copied()
            .filter(|hotel| hotel.in_city(city))
            .collect()
    };
    Insights {
        total_hotels: candidates.len(),
        average_rating: round_to_tenth(mean(candidates.iter().map(|hotel| hotel.average_score))),
        top_tags: top_tags(candidates),
        city_summary: CitySummary {
            city: city.trim().to_owned(),
            count: in_city.len(),
            average_rating: round_to_tenth(mean(in_city.iter().map(|hotel| hotel.average_score))),
        },
        average_price: mean(candidates.iter().map(|hotel| hotel.price_range)).round(),
        price_range: price_range(candidates),
    }
}

/// The most frequent tags, ties broken by first appearance.
fn top_tags(candidates: &[&AggregatedHotel]) -> Vec<String> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tag in candidates.iter().flat_map(|hotel| &hotel.tags) {
        let slot = *positions.entry(tag.as_str()).or_insert_with(|| {
            counts.push((tag.as_str(), 0));
            counts.len() - 1
        });
        if let Some((_, count)) = counts.get_mut(slot) {
            *count += 1;
        }
    }
    counts.sort_by_key(|&(_, count)| Reverse(count));
    counts
        .into_iter()
        .take(TOP_TAG_COUNT)
        .map(|(tag, _)| tag.to_owned())
        .collect()
}

fn price_range(candidates: &[&AggregatedHotel]) -> Option<(f64, f64)> {
    candidates.iter().map(|hotel| hotel.price_range).fold(None, |range, price| {
        Some(range.map_or((price, price), |(low, high): (f64, f64)| {
            (low.min(price), high.max(price))
        }))
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "averages are computed over float scores and prices"
)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0.0), |(sum, count), value| (sum + value, count + 1.0));
    if count > 0.0 { sum / count } else { 0.0 }
}

#[expect(clippy::float_arithmetic, reason = "rounding scales by ten")]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
