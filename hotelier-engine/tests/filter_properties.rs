//! Property-based tests for the city filter.
//!
//! # Invariants tested
//!
//! - **Never empty:** a non-empty collection never filters down to nothing.
//! - **Relevance:** when anything matches, every kept hotel is in the city or
//!   mentions it in its address.
//! - **Fallback:** when nothing matches, the whole collection is kept.
//! - **Uniqueness:** kept hotels have distinct `(name, address)` identities.

use std::collections::HashSet;

use hotelier_core::AggregatedHotel;
use hotelier_core::test_support::HotelBuilder;
use hotelier_engine::filter_by_city;
use proptest::prelude::*;

const CITIES: &[&str] = &["Delhi", "Mumbai", "Goa", "Pune", "Agra"];

fn hotel() -> impl Strategy<Value = AggregatedHotel> {
    (
        "[A-Z][a-z]{2,6}",
        prop::sample::select(CITIES),
        prop::sample::select(CITIES),
    )
        .prop_map(|(name, city, address_city)| {
            HotelBuilder::new(&name, city)
                .address(&format!("{name} Road, {address_city}"))
                .build()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the city filter is relevant, unique and never empty.
    #[test]
    fn city_filter_holds_invariants(
        hotels in prop::collection::vec(hotel(), 1..20),
        city in prop_oneof![prop::sample::select(CITIES), Just("Jaipur")],
    ) {
        let kept = filter_by_city(&hotels, city);
        let needle = city.to_lowercase();
        let relevant = |hotel: &AggregatedHotel| {
            hotel.in_city(city) || hotel.address.to_lowercase().contains(&needle)
        };

        prop_assert!(!kept.is_empty());
        if hotels.iter().any(relevant) {
            prop_assert!(kept.iter().all(|hotel| relevant(hotel)));
            let identities: HashSet<(&str, &str)> =
                kept.iter().map(|hotel| hotel.identity()).collect();
            prop_assert_eq!(identities.len(), kept.len());
        } else {
            prop_assert_eq!(kept.len(), hotels.len());
        }
    }
}
