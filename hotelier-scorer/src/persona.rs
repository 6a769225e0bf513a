//! Persona query templates and bonus keywords.
//!
//! Each persona is described by data alone; adding one means adding a
//! [`PersonaProfile`] constant, not a new branch in the ranking code.

use hotelier_core::{AggregatedHotel, Persona};

/// Bonus awarded per distinct persona keyword found on a hotel.
pub const BONUS_PER_KEYWORD: f64 = 0.02;

/// Upper bound on the persona bonus.
pub const MAX_BONUS: f64 = 0.10;

/// Search template and scoring keywords for one persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaProfile {
    /// Persona described.
    pub persona: Persona,
    /// Keyword phrase prepended to every search for this persona.
    pub query: &'static str,
    /// Lowercase keywords that earn a bonus when found in tags or reviews.
    pub bonus_keywords: &'static [&'static str],
}

const FAMILY: PersonaProfile = PersonaProfile {
    persona: Persona::Family,
    query: "family friendly kids pool playground spacious rooms safe",
    bonus_keywords: &[
        "family",
        "kids",
        "child",
        "pool",
        "playground",
        "babysitting",
        "spacious",
    ],
};

const BUSINESS: PersonaProfile = PersonaProfile {
    persona: Persona::Business,
    query: "business wifi meeting conference workspace airport desk",
    bonus_keywords: &[
        "business",
        "wifi",
        "meeting",
        "conference",
        "workspace",
        "airport",
        "desk",
    ],
};

const LUXURY: PersonaProfile = PersonaProfile {
    persona: Persona::Luxury,
    query: "luxury spa butler suite fine dining premium view",
    bonus_keywords: &[
        "luxury",
        "spa",
        "butler",
        "suite",
        "fine dining",
        "premium",
        "infinity",
    ],
};

const SOLO: PersonaProfile = PersonaProfile {
    persona: Persona::Solo,
    query: "budget social hostel central transport lockers common area",
    bonus_keywords: &[
        "budget",
        "social",
        "hostel",
        "central",
        "transport",
        "lockers",
        "common area",
    ],
};

const COUPLE: PersonaProfile = PersonaProfile {
    persona: Persona::Couple,
    query: "romantic couple honeymoon private view candlelight balcony",
    bonus_keywords: &[
        "romantic",
        "couple",
        "honeymoon",
        "private",
        "view",
        "candlelight",
        "balcony",
    ],
};

/// Every persona profile, in [`Persona::ALL`] order.
pub const PERSONA_PROFILES: [PersonaProfile; 5] = [FAMILY, BUSINESS, LUXURY, SOLO, COUPLE];

impl PersonaProfile {
    /// The profile for `persona`.
    ///
    /// # Examples
    /// ```
    /// use hotelier_core::Persona;
    /// use hotelier_scorer::PersonaProfile;
    ///
    /// assert!(PersonaProfile::for_persona(Persona::Family).bonus_keywords.contains(&"pool"));
    /// ```
    #[must_use]
    pub const fn for_persona(persona: Persona) -> &'static Self {
        match persona {
            Persona::Family => &FAMILY,
            Persona::Business => &BUSINESS,
            Persona::Luxury => &LUXURY,
            Persona::Solo => &SOLO,
            Persona::Couple => &COUPLE,
        }
    }
}

/// Keyword bonus for `hotel` under `profile`.
///
/// Each distinct keyword appearing as a case-insensitive substring of any tag
/// or review adds [`BONUS_PER_KEYWORD`], up to [`MAX_BONUS`]. No profile means
/// no bonus.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the bonus scales a keyword count by a fixed increment"
)]
pub fn persona_bonus(profile: Option<&PersonaProfile>, hotel: &AggregatedHotel) -> f64 {
    let Some(active) = profile else {
        return 0.0;
    };
    let haystacks: Vec<String> = hotel
        .tags
        .iter()
        .chain(&hotel.reviews)
        .map(|text| text.to_lowercase())
        .collect();
    let found = active
        .bonus_keywords
        .iter()
        .filter(|keyword| haystacks.iter().any(|text| text.contains(*keyword)))
        .count();
    let found_f64 = f64::from(u32::try_from(found).unwrap_or(u32::MAX));
    (found_f64 * BONUS_PER_KEYWORD).min(MAX_BONUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_core::test_support::HotelBuilder;
    use rstest::rstest;

    #[rstest]
    fn profiles_follow_persona_order() {
        let personas: Vec<Persona> = PERSONA_PROFILES.iter().map(|p| p.persona).collect();
        assert_eq!(personas, Persona::ALL.to_vec());
        for persona in Persona::ALL {
            assert_eq!(PersonaProfile::for_persona(persona).persona, persona);
        }
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    fn single_keyword_earns_one_increment() {
        let hotel = HotelBuilder::new("Lotus Inn", "Delhi").tags(&["pool"]).build();
        let bonus = persona_bonus(Some(PersonaProfile::for_persona(Persona::Family)), &hotel);
        assert!((bonus - 0.02).abs() < 1e-12);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    fn keywords_match_inside_reviews_ignoring_case() {
        let hotel = HotelBuilder::new("Harbour View", "Mumbai")
            .review("Our HONEYMOON suite had a private Balcony")
            .build();
        let bonus = persona_bonus(Some(PersonaProfile::for_persona(Persona::Couple)), &hotel);
        assert!((bonus - 0.06).abs() < 1e-12);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    fn bonus_is_capped() {
        let hotel = HotelBuilder::new("Fun Park Resort", "Goa")
            .tags(&["family rooms", "kids club", "pool", "playground", "babysitting"])
            .review("Spacious and child friendly")
            .build();
        let bonus = persona_bonus(Some(PersonaProfile::for_persona(Persona::Family)), &hotel);
        assert!((bonus - MAX_BONUS).abs() < 1e-12);
    }

    #[rstest]
    fn no_persona_means_no_bonus() {
        let hotel = HotelBuilder::new("Lotus Inn", "Delhi").tags(&["pool"]).build();
        assert!(persona_bonus(None, &hotel).abs() < f64::EPSILON);
    }
}
