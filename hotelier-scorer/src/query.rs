//! Search query assembly.

use hotelier_core::Persona;

use crate::PersonaProfile;

/// Join the persona template, preferences and extra requirements into one
/// search string, skipping blank parts.
///
/// # Examples
/// ```
/// use hotelier_core::Persona;
/// use hotelier_scorer::build_query;
///
/// let query = build_query(None, &["pool".to_owned(), " ".to_owned()], Some("quiet"));
/// assert_eq!(query, "pool quiet");
/// assert!(build_query(Some(Persona::Solo), &[], None).starts_with("budget"));
/// ```
#[must_use]
pub fn build_query(persona: Option<Persona>, preferences: &[String], extra: Option<&str>) -> String {
    persona
        .map(|chosen| PersonaProfile::for_persona(chosen).query)
        .into_iter()
        .chain(preferences.iter().map(String::as_str))
        .chain(extra)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn persona_template_leads_the_query() {
        let query = build_query(
            Some(Persona::Family),
            &["near metro".to_owned()],
            Some(" late checkout "),
        );
        assert_eq!(
            query,
            "family friendly kids pool playground spacious rooms safe near metro late checkout"
        );
    }

    #[rstest]
    fn empty_inputs_give_an_empty_query() {
        assert!(build_query(None, &[], None).is_empty());
    }
}
