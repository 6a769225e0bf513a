//! Text-field normalisation: facilities, stars and review excerpts.

const FACILITY_SEPARATORS: [char; 2] = ['•', '|'];
const MAX_TAGS: usize = 10;
const BRIEF_FACILITIES: usize = 6;
const EXCERPT_CHARS: usize = 140;
const ELLIPSIS: char = '…';
const REVIEW_PLACEHOLDERS: [&str; 2] = ["no positive", "no negative"];

/// Split a facilities column into trimmed, non-empty tokens.
pub(super) fn facility_tokens(raw: Option<&str>) -> Vec<&str> {
    raw.map(|raw| {
        raw.split(FACILITY_SEPARATORS)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Lowercase, deduplicated tags in encounter order, at most ten.
pub(super) fn tags(tokens: &[&str]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);
    for token in tokens {
        if tags.len() == MAX_TAGS {
            break;
        }
        let tag = token.to_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// The first few facilities joined for display.
pub(super) fn facilities_brief(tokens: &[&str]) -> String {
    tokens
        .iter()
        .take(BRIEF_FACILITIES)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Digits of the star column read as one number.
///
/// Non-digit characters are dropped before parsing, so `"4 star"` is 4 and
/// `"4.5"` reads as 45. Values that do not fit a `u8` are discarded.
pub(super) fn star_rating(raw: Option<&str>) -> Option<u8> {
    let digits: String = raw?.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// A review excerpt, unless it is blank or a dataset placeholder.
pub(super) fn review_excerpt(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|text| {
        !text.is_empty()
            && !REVIEW_PLACEHOLDERS
                .iter()
                .any(|placeholder| text.eq_ignore_ascii_case(placeholder))
    })
}

/// One-line synthesis of the positive and negative excerpts.
pub(super) fn review_summary(positive: Option<&str>, negative: Option<&str>) -> Option<String> {
    let parts: Vec<String> = [
        positive.map(|text| format!("Guests liked: {}", truncate_at_word(text, EXCERPT_CHARS))),
        negative.map(|text| format!("Guests noted: {}", truncate_at_word(text, EXCERPT_CHARS))),
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Cut `text` to at most `limit` characters, preferring a word boundary,
/// and mark the cut with an ellipsis.
fn truncate_at_word(text: &str, limit: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(limit) else {
        return text.to_owned();
    };
    let head = text.get(..cut).unwrap_or(text);
    let head = head
        .rfind(char::is_whitespace)
        .and_then(|space| head.get(..space))
        .filter(|word_cut| !word_cut.trim().is_empty())
        .unwrap_or(head);
    let mut truncated = head
        .trim_end_matches(|ch: char| ch.is_whitespace() || ch == ',' || ch == '.')
        .to_owned();
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn tags_are_lowercase_unique_and_capped() {
        let tokens = facility_tokens(Some(
            "Pool • pool | Spa • Gym • Bar • WiFi • Parking • Lift • Garden • Cafe • Library • Sauna",
        ));
        let tags = tags(&tokens);

        assert_eq!(tags.len(), 10);
        assert_eq!(tags.first().map(String::as_str), Some("pool"));
        assert_eq!(tags.get(1).map(String::as_str), Some("spa"));
        assert!(!tags.contains(&"sauna".to_owned()));
    }

    #[rstest]
    fn brief_keeps_original_case() {
        let tokens = facility_tokens(Some(" Pool |  | Free WiFi • Spa "));
        assert_eq!(facilities_brief(&tokens), "Pool, Free WiFi, Spa");
    }

    #[rstest]
    #[case(Some("4"), Some(4))]
    #[case(Some("5 star"), Some(5))]
    #[case(Some("4.5"), Some(45))]
    #[case(Some("unrated"), None)]
    #[case(Some("999"), None)]
    #[case(None, None)]
    fn star_rating_keeps_digits(#[case] raw: Option<&str>, #[case] expected: Option<u8>) {
        assert_eq!(star_rating(raw), expected);
    }

    #[rstest]
    #[case(Some(" Lovely staff "), Some("Lovely staff"))]
    #[case(Some("No Negative"), None)]
    #[case(Some("  "), None)]
    fn excerpts_skip_placeholders(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(review_excerpt(raw), expected);
    }

    #[rstest]
    fn long_excerpts_are_cut_at_a_word() {
        let text = "word ".repeat(40);
        let cut = truncate_at_word(&text, 140);

        assert!(cut.ends_with("word…"), "unexpected cut: {cut}");
        assert!(cut.chars().count() <= 141);
    }

    #[rstest]
    fn cutting_respects_multibyte_text() {
        let text = "é".repeat(200);
        let cut = truncate_at_word(&text, 140);
        assert_eq!(cut.chars().count(), 141);
    }

    #[rstest]
    fn summary_combines_available_excerpts() {
        assert_eq!(
            review_summary(Some("Great pool"), None).as_deref(),
            Some("Guests liked: Great pool")
        );
        assert_eq!(
            review_summary(Some("Great pool"), Some("Slow lift")).as_deref(),
            Some("Guests liked: Great pool Guests noted: Slow lift")
        );
        assert!(review_summary(None, None).is_none());
    }
}
