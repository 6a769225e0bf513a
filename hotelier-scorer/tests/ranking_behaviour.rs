#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for ranking candidate hotels.

use std::cell::RefCell;

use hotelier_core::test_support::HotelBuilder;
use hotelier_core::{AggregatedHotel, Persona, RankedHotel, RecommendationRequest};
use hotelier_scorer::Ranker;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const POOL_HOTEL: &str = "Lotus Inn";
const PLAIN_HOTEL: &str = "Quiet Corner";

#[fixture]
fn candidates() -> RefCell<Vec<AggregatedHotel>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn ranked() -> RefCell<Vec<RankedHotel>> {
    RefCell::new(Vec::new())
}

fn rank(
    request: &RecommendationRequest,
    candidates: &RefCell<Vec<AggregatedHotel>>,
    ranked: &RefCell<Vec<RankedHotel>>,
) {
    let hotels = candidates.borrow();
    let refs: Vec<&AggregatedHotel> = hotels.iter().collect();
    *ranked.borrow_mut() = Ranker::default().rank(request, &refs);
}

// --- Given steps ---

#[given("a pool hotel rated {score:f64} with {reviews:u64} reviews")]
fn pool_hotel(
    score: f64,
    reviews: u64,
    #[from(candidates)] candidates: &RefCell<Vec<AggregatedHotel>>,
) {
    candidates.borrow_mut().push(
        HotelBuilder::new(POOL_HOTEL, "Delhi")
            .tags(&["pool"])
            .average_score(score)
            .total_reviews(reviews)
            .build(),
    );
}

#[given("a plain hotel rated {score:f64} with {reviews:u64} reviews")]
fn plain_hotel(
    score: f64,
    reviews: u64,
    #[from(candidates)] candidates: &RefCell<Vec<AggregatedHotel>>,
) {
    candidates.borrow_mut().push(
        HotelBuilder::new(PLAIN_HOTEL, "Delhi")
            .average_score(score)
            .total_reviews(reviews)
            .build(),
    );
}

#[given("{count:u32} pool hotels")]
fn many_pool_hotels(count: u32, #[from(candidates)] candidates: &RefCell<Vec<AggregatedHotel>>) {
    let mut hotels = candidates.borrow_mut();
    for index in 0..count {
        hotels.push(
            HotelBuilder::new(&format!("Pool Hotel {index}"), "Goa")
                .tags(&["pool"])
                .average_score(f64::from(index % 10))
                .total_reviews(u64::from(index) * 25)
                .build(),
        );
    }
}

// --- When steps ---

#[when("a family traveller asks for a pool")]
fn family_asks_for_pool(
    #[from(candidates)] candidates: &RefCell<Vec<AggregatedHotel>>,
    #[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>,
) {
    let request = RecommendationRequest::new(Some(Persona::Family), "Delhi").with_preference("pool");
    rank(&request, candidates, ranked);
}

#[when("a traveller without a persona asks for a pool")]
fn anyone_asks_for_pool(
    #[from(candidates)] candidates: &RefCell<Vec<AggregatedHotel>>,
    #[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>,
) {
    let request = RecommendationRequest::new(None, "Goa").with_preference("pool");
    rank(&request, candidates, ranked);
}

#[when("a traveller without a persona asks for something nobody offers")]
fn anyone_asks_for_nonsense(
    #[from(candidates)] candidates: &RefCell<Vec<AggregatedHotel>>,
    #[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>,
) {
    let request = RecommendationRequest::new(None, "Delhi").with_preference("zzqxv");
    rank(&request, candidates, ranked);
}

// --- Then steps ---

#[then("only the pool hotel is ranked")]
fn only_pool_hotel(#[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>) {
    let names: Vec<String> = ranked.borrow().iter().map(|r| r.hotel.name.clone()).collect();
    assert_eq!(names, vec![POOL_HOTEL.to_owned()]);
}

#[then("the plain hotel is ranked first")]
fn plain_first(#[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>) {
    let borrowed = ranked.borrow();
    let first = borrowed.first().expect("at least one ranked hotel");
    assert_eq!(first.hotel.name, PLAIN_HOTEL);
}

#[then("the top final score is {expected:u8}")]
fn top_score(expected: u8, #[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>) {
    let borrowed = ranked.borrow();
    let first = borrowed.first().expect("at least one ranked hotel");
    assert_eq!(first.final_score, expected);
}

#[then("{expected:usize} hotels are ranked")]
fn ranked_count(expected: usize, #[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>) {
    assert_eq!(ranked.borrow().len(), expected);
}

#[then("the ranking is ordered by descending score")]
fn descending(#[from(ranked)] ranked: &RefCell<Vec<RankedHotel>>) {
    let borrowed = ranked.borrow();
    assert!(
        borrowed
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.final_score >= b.final_score))
    );
}

// --- Scenario registrations ---

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn family_pool_request(
    candidates: RefCell<Vec<AggregatedHotel>>,
    ranked: RefCell<Vec<RankedHotel>>,
) {
    let _ = (candidates, ranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn popularity_fallback(
    candidates: RefCell<Vec<AggregatedHotel>>,
    ranked: RefCell<Vec<RankedHotel>>,
) {
    let _ = (candidates, ranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn results_are_capped(candidates: RefCell<Vec<AggregatedHotel>>, ranked: RefCell<Vec<RankedHotel>>) {
    let _ = (candidates, ranked);
}
