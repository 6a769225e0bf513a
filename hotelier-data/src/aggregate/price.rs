//! Nightly price estimation for rows without a source price.

use rand::Rng;

/// How an estimated price is chosen within its bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceMode {
    /// Draw uniformly from the bracket's half-open range.
    #[default]
    Random,
    /// Use the bracket's midpoint, for reproducible aggregation.
    Midpoint,
}

/// Price band inferred from facilities, address and rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBracket {
    /// Luxury markers or an average score above 9.0.
    Luxury,
    /// Business or spa facilities, or an average score above 8.5.
    Upscale,
    /// An average score above 7.5.
    MidRange,
    /// Everything else.
    Budget,
}

const LUXURY_KEYWORDS: [&str; 5] = ["luxury", "butler", "palace", "suite", "infinity pool"];
const LUXURY_ADDRESS_MARKERS: [&str; 4] = ["palace", "resort", "fort", "marine drive"];
const UPSCALE_KEYWORDS: [&str; 5] = ["business", "spa", "conference", "meeting", "executive"];

impl PriceBracket {
    /// Classify a hotel, checking brackets from most to least expensive.
    ///
    /// `tags` are expected in lowercase; the address is compared ignoring
    /// case.
    ///
    /// # Examples
    /// ```
    /// use hotelier_data::PriceBracket;
    ///
    /// let tags = vec!["spa".to_string()];
    /// assert_eq!(PriceBracket::classify(&tags, "MG Road", 6.0), PriceBracket::Upscale);
    /// assert_eq!(PriceBracket::classify(&[], "MG Road", 9.5), PriceBracket::Luxury);
    /// ```
    pub fn classify(tags: &[String], address: &str, average_score: f64) -> Self {
        let address = address.to_lowercase();
        let has_tag = |keywords: &[&str]| {
            tags.iter()
                .any(|tag| keywords.iter().any(|keyword| tag.contains(keyword)))
        };

        if has_tag(&LUXURY_KEYWORDS)
            || LUXURY_ADDRESS_MARKERS
                .iter()
                .any(|marker| address.contains(marker))
            || average_score > 9.0
        {
            Self::Luxury
        } else if has_tag(&UPSCALE_KEYWORDS) || average_score > 8.5 {
            Self::Upscale
        } else if average_score > 7.5 {
            Self::MidRange
        } else {
            Self::Budget
        }
    }

    /// The half-open `[low, high)` price range of the bracket.
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::Luxury => (4000.0, 7000.0),
            Self::Upscale => (2500.0, 3500.0),
            Self::MidRange => (1500.0, 2500.0),
            Self::Budget => (800.0, 1300.0),
        }
    }

    /// Pick a price inside the bracket.
    pub fn estimate<R: Rng + ?Sized>(self, mode: PriceMode, rng: &mut R) -> f64 {
        let (low, high) = self.bounds();
        match mode {
            PriceMode::Random => rng.gen_range(low..high),
            PriceMode::Midpoint => (low + high) / 2.0,
        }
    }
}
