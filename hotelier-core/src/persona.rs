//! Traveller personas driving the search template and scoring bonus.
//!
//! The enum offers compile-time safety for persona lookups; the keyword data
//! attached to each persona lives in `hotelier-scorer`.
//!
//! # Examples
//! ```
//! use hotelier_core::Persona;
//!
//! assert_eq!(Persona::Family.as_str(), "family");
//! assert_eq!(Persona::Business.to_string(), "business");
//! ```

/// One of the fixed traveller archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Persona {
    /// Travelling with children.
    Family,
    /// Travelling for work.
    Business,
    /// Looking for premium stays.
    Luxury,
    /// Travelling alone, usually on a budget.
    Solo,
    /// Travelling as a couple.
    Couple,
}

impl Persona {
    /// Every persona, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Family,
        Self::Business,
        Self::Luxury,
        Self::Solo,
        Self::Couple,
    ];

    /// Return the persona as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use hotelier_core::Persona;
    ///
    /// assert_eq!(Persona::Couple.as_str(), "couple");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Business => "business",
            Self::Luxury => "luxury",
            Self::Solo => "solo",
            Self::Couple => "couple",
        }
    }

    /// Parse a persona leniently, returning `None` for unknown names.
    ///
    /// Callers treat an unknown persona as "no persona": no query template and
    /// no scoring bonus.
    ///
    /// # Examples
    /// ```
    /// use hotelier_core::Persona;
    ///
    /// assert_eq!(Persona::parse_lenient(" Luxury "), Some(Persona::Luxury));
    /// assert_eq!(Persona::parse_lenient("backpacker"), None);
    /// ```
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "family" => Ok(Self::Family),
            "business" => Ok(Self::Business),
            "luxury" => Ok(Self::Luxury),
            "solo" => Ok(Self::Solo),
            "couple" => Ok(Self::Couple),
            _ => Err(format!("unknown persona '{s}'")),
        }
    }
}
