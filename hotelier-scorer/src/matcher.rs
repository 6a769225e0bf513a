//! Weighted, token-based fuzzy matching over hotel fields.
//!
//! Queries and field values are split into lowercase alphanumeric tokens of
//! at least two characters. Each query token is paired with its most similar
//! field token; a field's similarity aggregates those best pairs according to
//! [`TokenCoverage`]. A field *matches* when that coverage reaches
//! `1.0 - threshold`, and a hotel is a hit when any field matches. With
//! [`TokenCoverage::All`] a matching field is then marked down for tokens the
//! query leaves unmentioned, so "Marine Drive, Mumbai" ranks the address
//! "Marine Drive, Mumbai" above "Marine Drive, Mumbai, opposite Chowpatty".
//!
//! The hit similarity blends the matched fields as
//! `1 - Π (1 - s_f)^(w_f / Σw)`, so one perfect field yields `1.0` and weaker
//! fields contribute in proportion to their weight.

use hotelier_core::{AggregatedHotel, HotelField, MatchHit, TextMatcher};

use crate::MatcherConfigError;

/// Shortest token considered during matching.
const MIN_TOKEN_CHARS: usize = 2;

/// Largest share of an all-token field score lost to unmentioned field tokens.
const UNCOVERED_TOKEN_PENALTY: f64 = 0.2;

/// String similarity in `0.0..=1.0`, where `1.0` means identical.
pub type Similarity = fn(&str, &str) -> f64;

/// How per-token similarities combine into a field similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenCoverage {
    /// The best single query token decides; suited to keyword queries.
    #[default]
    Any,
    /// Every query token counts equally; suited to place descriptions.
    All,
}

/// A searchable field and its relative weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeight {
    /// Field to search.
    pub field: HotelField,
    /// Relative weight; must be positive.
    pub weight: f64,
}

impl FieldWeight {
    /// Pair `field` with `weight`.
    #[must_use]
    pub const fn new(field: HotelField, weight: f64) -> Self {
        Self { field, weight }
    }
}

/// Settings for [`WeightedFuzzyMatcher`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Fields searched and their weights.
    pub fields: Vec<FieldWeight>,
    /// Looseness in `0.0..1.0`; `0.0` demands exact tokens.
    pub threshold: f64,
    /// Token aggregation rule.
    pub coverage: TokenCoverage,
}

/// Looseness shared by the presets: fields need 60% similarity.
const DEFAULT_THRESHOLD: f64 = 0.4;

impl MatcherConfig {
    /// Preset for ranking queries: tags 0.4, reviews 0.3, name 0.2,
    /// address 0.1.
    #[must_use]
    pub fn ranking() -> Self {
        Self {
            fields: vec![
                FieldWeight::new(HotelField::Tags, 0.4),
                FieldWeight::new(HotelField::Reviews, 0.3),
                FieldWeight::new(HotelField::Name, 0.2),
                FieldWeight::new(HotelField::Address, 0.1),
            ],
            threshold: DEFAULT_THRESHOLD,
            coverage: TokenCoverage::Any,
        }
    }

    /// Preset for area searches: address 0.7, city 0.2, country 0.1.
    #[must_use]
    pub fn area() -> Self {
        Self {
            fields: vec![
                FieldWeight::new(HotelField::Address, 0.7),
                FieldWeight::new(HotelField::City, 0.2),
                FieldWeight::new(HotelField::Country, 0.1),
            ],
            threshold: DEFAULT_THRESHOLD,
            coverage: TokenCoverage::All,
        }
    }

    /// Replace the threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the coverage rule.
    #[must_use]
    pub const fn with_coverage(mut self, coverage: TokenCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    fn validate(&self) -> Result<(), MatcherConfigError> {
        if self.fields.is_empty() {
            return Err(MatcherConfigError::NoFields);
        }
        if let Some(invalid) = self
            .fields
            .iter()
            .find(|entry| !(entry.weight.is_finite() && entry.weight > 0.0))
        {
            return Err(MatcherConfigError::InvalidWeight {
                field: invalid.field,
                weight: invalid.weight,
            });
        }
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(MatcherConfigError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::ranking()
    }
}

/// Token-based fuzzy matcher with weighted fields.
///
/// # Examples
///
/// ```
/// use hotelier_core::{AggregatedHotel, Coordinates, PlatformRatings, TextMatcher};
/// use hotelier_scorer::{MatcherConfig, WeightedFuzzyMatcher};
///
/// let hotel = AggregatedHotel {
///     name: "Lotus Inn".into(),
///     address: "12 Janpath, New Delhi".into(),
///     city: "Delhi".into(),
///     country: None,
///     average_score: 8.0,
///     total_reviews: 10,
///     tags: vec!["swimming pool".into()],
///     reviews: Vec::new(),
///     confidence_score: 60,
///     price_range: 2400.0,
///     coordinates: Coordinates::new(28.6, 77.2),
///     platform_ratings: PlatformRatings::new(),
///     star_rating: Some(4),
///     facilities_brief: "Swimming Pool".into(),
///     review_summary: None,
/// };
///
/// let matcher = WeightedFuzzyMatcher::new(MatcherConfig::ranking())?;
/// let hits = matcher.search("a pol please", &[&hotel]);
/// assert_eq!(hits.len(), 1);
/// # Ok::<(), hotelier_scorer::MatcherConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WeightedFuzzyMatcher {
    config: MatcherConfig,
    similarity: Similarity,
}

impl WeightedFuzzyMatcher {
    /// Build a matcher using normalised Levenshtein similarity.
    ///
    /// # Errors
    /// Returns [`MatcherConfigError`] when no fields are configured, a weight
    /// is not positive, or the threshold lies outside `0.0..1.0`.
    pub fn new(config: MatcherConfig) -> Result<Self, MatcherConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            similarity: strsim::normalized_levenshtein,
        })
    }

    /// The ranking preset.
    #[must_use]
    pub fn ranking() -> Self {
        Self {
            config: MatcherConfig::ranking(),
            similarity: strsim::normalized_levenshtein,
        }
    }

    /// The area-search preset.
    #[must_use]
    pub fn area() -> Self {
        Self {
            config: MatcherConfig::area(),
            similarity: strsim::normalized_levenshtein,
        }
    }

    /// Swap the token similarity function.
    #[must_use]
    pub const fn with_similarity(mut self, similarity: Similarity) -> Self {
        self.similarity = similarity;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "field blending multiplies weighted similarity complements"
    )]
    fn hotel_similarity(&self, query: &[String], hotel: &AggregatedHotel) -> Option<f64> {
        let total_weight: f64 = self.config.fields.iter().map(|entry| entry.weight).sum();
        let cutoff = 1.0 - self.config.threshold;
        let mut unmatched = 1.0_f64;
        let mut any_field = false;

        for entry in &self.config.fields {
            let field_tokens: Vec<String> = entry
                .field
                .texts(hotel)
                .into_iter()
                .flat_map(tokens)
                .collect();
            if let Some(similarity) = self.field_similarity(query, &field_tokens, cutoff) {
                any_field = true;
                unmatched *= (1.0 - similarity).powf(entry.weight / total_weight);
            }
        }

        any_field.then(|| (1.0 - unmatched).clamp(0.0, 1.0))
    }

    /// Similarity of `field_tokens` to `query`, or `None` below `cutoff`.
    ///
    /// The cutoff applies to how well the query is covered. Under
    /// [`TokenCoverage::All`] the returned value also loses up to
    /// [`UNCOVERED_TOKEN_PENALTY`] for field tokens the query never mentions.
    #[expect(
        clippy::float_arithmetic,
        reason = "the uncovered-token penalty scales the coverage score"
    )]
    fn field_similarity(
        &self,
        query: &[String],
        field_tokens: &[String],
        cutoff: f64,
    ) -> Option<f64> {
        if query.is_empty() || field_tokens.is_empty() {
            return None;
        }
        let covered = match self.config.coverage {
            TokenCoverage::Any => query
                .iter()
                .map(|wanted| self.best_match(wanted, field_tokens))
                .fold(0.0_f64, f64::max),
            TokenCoverage::All => self.mean_best(query, field_tokens),
        }
        .clamp(0.0, 1.0);
        if covered < cutoff {
            return None;
        }
        match self.config.coverage {
            TokenCoverage::Any => Some(covered),
            TokenCoverage::All => {
                let extra = 1.0 - self.mean_best(field_tokens, query).clamp(0.0, 1.0);
                Some(covered * UNCOVERED_TOKEN_PENALTY.mul_add(-extra, 1.0))
            }
        }
    }

    fn best_match(&self, wanted: &str, candidates: &[String]) -> f64 {
        candidates
            .iter()
            .map(|candidate| (self.similarity)(wanted, candidate))
            .fold(0.0_f64, f64::max)
    }

    /// Mean over `from` of each token's best similarity within `to`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging token similarities divides by a small token count"
    )]
    fn mean_best(&self, from: &[String], to: &[String]) -> f64 {
        if from.is_empty() {
            return 0.0;
        }
        let total: f64 = from.iter().map(|token| self.best_match(token, to)).sum();
        total / from.len() as f64
    }
}

impl Default for WeightedFuzzyMatcher {
    fn default() -> Self {
        Self::ranking()
    }
}

impl TextMatcher for WeightedFuzzyMatcher {
    fn search(&self, query: &str, hotels: &[&AggregatedHotel]) -> Vec<MatchHit> {
        let query_tokens = tokens(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<MatchHit> = hotels
            .iter()
            .enumerate()
            .filter_map(|(index, hotel)| {
                self.hotel_similarity(&query_tokens, hotel)
                    .map(|similarity| MatchHit { index, similarity })
            })
            .collect();
        hits.sort_by(|left, right| right.similarity.total_cmp(&left.similarity));
        log::debug!(
            "fuzzy search matched {} of {} hotels",
            hits.len(),
            hotels.len()
        );
        hits
    }
}

/// Lowercase alphanumeric tokens of `text`, deduplicated in order.
pub(crate) fn tokens(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for raw in text
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|raw| raw.chars().count() >= MIN_TOKEN_CHARS)
    {
        let lowered = raw.to_lowercase();
        if !found.contains(&lowered) {
            found.push(lowered);
        }
    }
    found
}
