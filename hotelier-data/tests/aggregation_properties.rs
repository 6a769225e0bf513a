//! Property-based tests for aggregation.
//!
//! # Invariants tested
//!
//! - **Confidence bounds:** `confidence_score` stays within `0..=100`.
//! - **Positive price:** `price_range` is strictly positive.
//! - **Tag hygiene:** tags are lowercase, unique and at most ten.
//! - **Score bounds:** `average_score` stays within `0.0..=10.0`.
//! - **Idempotence:** midpoint-mode aggregation is repeatable.

use std::collections::HashSet;

use hotelier_core::RawHotelRecord;
use hotelier_data::{Aggregator, AggregatorConfig, PriceMode};
use proptest::prelude::*;

fn facility() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Pool".to_owned()),
        Just("pool".to_owned()),
        Just("Spa".to_owned()),
        Just("Free WiFi".to_owned()),
        Just("Business Centre".to_owned()),
        Just("  ".to_owned()),
        "[A-Za-z ]{1,12}",
    ]
}

fn record() -> impl Strategy<Value = RawHotelRecord> {
    (
        "[A-Za-z ]{0,16}",
        prop::collection::vec(facility(), 0..16),
        prop::option::of(-100.0_f64..10_000.0),
        prop::option::of(-5.0_f64..15.0),
        prop::option::of("[0-9a-z.]{0,4}"),
        prop::option::of(
            (0.0_f64..10.0, 0_u64..1_000_000)
                .prop_map(|(rating, count)| {
                    format!(r#"{{"booking": {{"rating": {rating}, "reviews_count": {count}}}}}"#)
                }),
        ),
    )
        .prop_map(|(name, facilities, price, score, stars, ratings)| RawHotelRecord {
            name,
            city: "Delhi".into(),
            facilities: Some(facilities.join(" • ")),
            price,
            average_score: score,
            star_rating: stars,
            platform_ratings_json: ratings,
            ..RawHotelRecord::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every aggregated hotel satisfies the model invariants.
    #[test]
    fn aggregated_hotels_hold_invariants(
        rows in prop::collection::vec(record(), 1..8),
        seed in any::<u64>(),
    ) {
        let aggregator = Aggregator::new(AggregatorConfig::default().with_seed(seed));
        let hotels = aggregator.aggregate(&rows);

        prop_assert_eq!(hotels.len(), rows.len());
        for hotel in &hotels {
            prop_assert!(hotel.confidence_score <= 100);
            prop_assert!(hotel.price_range > 0.0, "price {}", hotel.price_range);
            prop_assert!((0.0..=10.0).contains(&hotel.average_score));
            prop_assert!(hotel.tags.len() <= 10);
            let unique: HashSet<&String> = hotel.tags.iter().collect();
            prop_assert_eq!(unique.len(), hotel.tags.len());
            prop_assert!(hotel.tags.iter().all(|tag| *tag == tag.to_lowercase()));
        }
    }

    /// Property: midpoint aggregation of the same rows is repeatable.
    #[test]
    fn midpoint_aggregation_is_idempotent(rows in prop::collection::vec(record(), 0..8)) {
        let aggregator =
            Aggregator::new(AggregatorConfig::default().with_price_mode(PriceMode::Midpoint));
        prop_assert_eq!(aggregator.aggregate(&rows), aggregator.aggregate(&rows));
    }
}
