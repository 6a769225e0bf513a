//! The recommendation service.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use hotelier_core::{
    AggregatedHotel, GeocodeProvider, RawHotelRecord, RecommendationRequest, Recommendations,
    RecordSource, SourceError, TextMatcher, is_all_cities,
};
use hotelier_data::{Aggregator, AggregatorConfig};
use hotelier_scorer::{Ranker, RankerConfig, WeightedFuzzyMatcher};
use log::{debug, info, warn};

use crate::{
    AreaSearch, filter_by_city, retain_price_band, retain_rating_bounds, retain_star_ratings,
    summarise,
};

/// Tunables for [`RecommendationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// How the dataset is aggregated on first use.
    pub aggregator: AggregatorConfig,
    /// How candidates are ranked.
    pub ranker: RankerConfig,
}

/// Record source for engines built from an already aggregated collection.
///
/// It serves no rows; [`RecommendationEngine::preloaded`] installs the
/// collection directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreloadedSource;

impl RecordSource for PreloadedSource {
    fn load(&self) -> Result<Vec<RawHotelRecord>, SourceError> {
        Ok(Vec::new())
    }
}

/// Hotel recommendation service.
///
/// The engine is generic over its boundaries: a record source for the raw
/// dataset, a geocoder for area searches and a text matcher for ranking. The
/// dataset is aggregated at most once, on first use, and shared immutably by
/// every later request. Installing a refreshed collection means building a
/// new engine with [`RecommendationEngine::preloaded`].
///
/// # Examples
/// ```
/// use hotelier_core::test_support::{MemorySource, RecordingGeocoder};
/// use hotelier_core::{Persona, RawHotelRecord, RecommendationRequest};
/// use hotelier_engine::RecommendationEngine;
///
/// let source = MemorySource::with_records([RawHotelRecord {
///     name: "Lotus Inn".into(),
///     city: "Delhi".into(),
///     facilities: Some("Pool".into()),
///     price: Some(3200.0),
///     ..RawHotelRecord::default()
/// }]);
/// let engine = RecommendationEngine::new(source, RecordingGeocoder::unavailable());
///
/// let request = RecommendationRequest::new(Some(Persona::Family), "Delhi").with_preference("pool");
/// let response = engine.recommend(&request);
/// assert_eq!(response.recommendations.len(), 1);
/// assert_eq!(engine.available_cities(), vec!["Delhi".to_owned()]);
/// ```
#[derive(Debug)]
pub struct RecommendationEngine<S, G, M = WeightedFuzzyMatcher> {
    source: S,
    geocoder: G,
    aggregator: Aggregator,
    ranker: Ranker<M>,
    area_matcher: WeightedFuzzyMatcher,
    hotels: OnceLock<Arc<[AggregatedHotel]>>,
}

impl<S, G> RecommendationEngine<S, G>
where
    S: RecordSource,
    G: GeocodeProvider,
{
    /// Construct an engine using default configuration.
    #[must_use]
    pub fn new(source: S, geocoder: G) -> Self {
        Self::with_config(source, geocoder, EngineConfig::default())
    }

    /// Construct an engine with explicit configuration.
    #[must_use]
    pub fn with_config(source: S, geocoder: G, config: EngineConfig) -> Self {
        Self {
            source,
            geocoder,
            aggregator: Aggregator::new(config.aggregator),
            ranker: Ranker::new(WeightedFuzzyMatcher::ranking(), config.ranker),
            area_matcher: WeightedFuzzyMatcher::area(),
            hotels: OnceLock::new(),
        }
    }
}

impl<G> RecommendationEngine<PreloadedSource, G>
where
    G: GeocodeProvider,
{
    /// Serve an already aggregated collection.
    #[must_use]
    pub fn preloaded(hotels: Arc<[AggregatedHotel]>, geocoder: G) -> Self {
        Self {
            hotels: OnceLock::from(hotels),
            ..Self::new(PreloadedSource, geocoder)
        }
    }
}

impl<S, G, M> RecommendationEngine<S, G, M> {
    /// Replace the ranking matcher, keeping the ranker configuration.
    #[must_use]
    pub fn with_matcher<N>(self, matcher: N) -> RecommendationEngine<S, G, N> {
        RecommendationEngine {
            source: self.source,
            geocoder: self.geocoder,
            aggregator: self.aggregator,
            ranker: Ranker::new(matcher, *self.ranker.config()),
            area_matcher: self.area_matcher,
            hotels: self.hotels,
        }
    }

    /// The geocoder used for area searches.
    #[must_use]
    pub const fn geocoder(&self) -> &G {
        &self.geocoder
    }
}

impl<S, G, M> RecommendationEngine<S, G, M>
where
    S: RecordSource,
    G: GeocodeProvider,
    M: TextMatcher,
{
    /// Aggregate the dataset if that has not happened yet.
    ///
    /// Concurrent first calls block until a single aggregation finishes. A
    /// dataset that cannot be loaded is logged and served as an empty
    /// collection.
    pub fn initialise(&self) {
        self.shared();
    }

    /// A shared handle to the aggregated collection.
    #[must_use]
    pub fn hotels(&self) -> Arc<[AggregatedHotel]> {
        Arc::clone(self.shared())
    }

    fn shared(&self) -> &Arc<[AggregatedHotel]> {
        self.hotels.get_or_init(|| {
            let rows = self.source.load().unwrap_or_else(|err| {
                warn!("dataset unavailable; serving no hotels: {err}");
                Vec::new()
            });
            let hotels = self.aggregator.aggregate(&rows);
            info!("engine ready with {} hotels", hotels.len());
            Arc::from(hotels)
        })
    }

    /// Recommend up to the configured number of hotels for `request`.
    ///
    /// Insights describe the filtered candidates before ranking.
    #[must_use]
    pub fn recommend(&self, request: &RecommendationRequest) -> Recommendations {
        let candidates = self.candidates(request);
        Recommendations {
            recommendations: self.ranker.rank(request, &candidates),
            insights: summarise(&candidates, &request.city),
        }
    }

    /// Hotels whose city equals `city`, ignoring case, or every hotel for a
    /// blank or `"all"` city.
    #[must_use]
    pub fn search_hotels_by_city(&self, city: &str) -> Vec<AggregatedHotel> {
        let hotels = self.shared();
        if is_all_cities(city) {
            return hotels.to_vec();
        }
        hotels
            .iter()
            .filter(|hotel| hotel.in_city(city))
            .cloned()
            .collect()
    }

    /// Distinct non-blank city names, sorted.
    #[must_use]
    pub fn available_cities(&self) -> Vec<String> {
        self.shared()
            .iter()
            .map(|hotel| hotel.city.trim())
            .filter(|city| !city.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    fn candidates(&self, request: &RecommendationRequest) -> Vec<&AggregatedHotel> {
        let filters = &request.filters;
        let mut candidates = filter_by_city(self.shared(), &request.city);
        debug!("{} hotels after city filter", candidates.len());
        retain_price_band(&mut candidates, filters);
        retain_rating_bounds(&mut candidates, filters);
        retain_star_ratings(&mut candidates, filters);
        debug!("{} hotels after structured filters", candidates.len());
        match filters.area() {
            Some(area) => AreaSearch::new(&self.area_matcher, &self.geocoder).apply(
                candidates,
                area,
                &request.city,
            ),
            None => candidates,
        }
    }
}
