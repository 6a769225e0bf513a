//! Candidate ranking.

use std::cmp::Reverse;

use hotelier_core::{AggregatedHotel, RankedHotel, RecommendationRequest, TextMatcher};
use log::debug;

use crate::{
    PersonaProfile, WeightedFuzzyMatcher, build_query, final_score, persona_bonus,
    popularity_score,
};

/// Number of hotels returned by default.
pub const DEFAULT_LIMIT: usize = 5;

/// Tunables for [`Ranker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerConfig {
    /// Maximum number of ranked hotels returned.
    pub limit: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Ranks filtered candidates for a request.
///
/// Candidates matching the assembled query are scored with [`final_score`].
/// When nothing matches, every candidate is scored with
/// [`popularity_score`] instead. Ties keep candidate order.
#[derive(Debug, Clone)]
pub struct Ranker<M = WeightedFuzzyMatcher> {
    matcher: M,
    config: RankerConfig,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(WeightedFuzzyMatcher::ranking(), RankerConfig::default())
    }
}

impl<M> Ranker<M> {
    /// Create a ranker from a matcher and configuration.
    #[must_use]
    pub const fn new(matcher: M, config: RankerConfig) -> Self {
        Self { matcher, config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        &self.config
    }
}

impl<M: TextMatcher> Ranker<M> {
    /// Rank `candidates` for `request`, best first.
    ///
    /// # Examples
    /// ```
    /// use hotelier_core::{RecommendationRequest, test_support::HotelBuilder};
    /// use hotelier_scorer::Ranker;
    ///
    /// let pool = HotelBuilder::new("Lotus Inn", "Delhi").tags(&["pool"]).build();
    /// let plain = HotelBuilder::new("Plain Stay", "Delhi").build();
    /// let request = RecommendationRequest::new(None, "Delhi").with_preference("pool");
    ///
    /// let ranked = Ranker::default().rank(&request, &[&plain, &pool]);
    /// assert_eq!(ranked.len(), 1);
    /// assert_eq!(ranked[0].hotel.name, "Lotus Inn");
    /// ```
    #[must_use]
    pub fn rank(
        &self,
        request: &RecommendationRequest,
        candidates: &[&AggregatedHotel],
    ) -> Vec<RankedHotel> {
        let query = build_query(
            request.persona,
            &request.preferences,
            request.filters.extra_requirements(),
        );
        let mut hits = self.matcher.search(&query, candidates);
        let mut ranked: Vec<RankedHotel> = if hits.is_empty() {
            debug!(
                "no matches for {query:?}; ranking {} candidates by popularity",
                candidates.len()
            );
            candidates
                .iter()
                .map(|hotel| ranked_hotel((*hotel).clone(), popularity_score(hotel)))
                .collect()
        } else {
            debug!("{} of {} candidates match {query:?}", hits.len(), candidates.len());
            let profile = request.persona.map(PersonaProfile::for_persona);
            hits.sort_by_key(|hit| hit.index);
            hits.into_iter()
                .filter_map(|hit| {
                    let hotel = *candidates.get(hit.index)?;
                    let score = final_score(hotel, hit.similarity, persona_bonus(profile, hotel));
                    Some(ranked_hotel(hotel.clone(), score))
                })
                .collect()
        };
        ranked.sort_by_key(|entry| Reverse(entry.final_score));
        ranked.truncate(self.config.limit);
        ranked
    }
}

const fn ranked_hotel(hotel: AggregatedHotel, score: u8) -> RankedHotel {
    RankedHotel {
        hotel,
        final_score: score,
    }
}
