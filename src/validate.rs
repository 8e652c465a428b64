//! Search keyword validation.
//!
//! A pure predicate over raw input text. The allowed alphabet matches the
//! portal's search box rules: Hangul syllables, ASCII letters and digits,
//! whitespace, and a fixed punctuation set. A single disallowed character
//! anywhere rejects the whole string; nothing is filtered out partially.

/// Maximum accepted keyword length, counted in Unicode code points.
pub const MAX_KEYWORD_CHARS: usize = 30;

/// Punctuation accepted in search keywords, including the Korean
/// corporate-entity signs `㈜` and `㈔`.
const ALLOWED_PUNCTUATION: &[char] = &[
    '-', '+', '#', '(', ')', '[', ']', '%', '&', ',', '.', '㈜', '㈔', '\'', '/',
];

/// Returns true when `text` is a valid search keyword.
///
/// Rejects the empty string, anything longer than [`MAX_KEYWORD_CHARS`]
/// code points, and any string containing a character outside the allowed
/// set. Pure and total over any string input.
pub fn is_valid_keyword(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if text.chars().count() > MAX_KEYWORD_CHARS {
        return false;
    }
    text.chars().all(is_allowed_char)
}

fn is_allowed_char(c: char) -> bool {
    // Hangul syllables block, U+AC00..=U+D7A3.
    ('가'..='힣').contains(&c)
        || c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || ALLOWED_PUNCTUATION.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_rejected() {
        assert!(!is_valid_keyword(""));
    }

    #[test]
    fn plain_ascii_accepted() {
        assert!(is_valid_keyword("backend developer"));
        assert!(is_valid_keyword("java11"));
    }

    #[test]
    fn hangul_accepted() {
        assert!(is_valid_keyword("개발자"));
        assert!(is_valid_keyword("신입 개발자"));
    }

    #[test]
    fn mixed_with_allowed_punctuation_accepted() {
        assert!(is_valid_keyword("ABC-123 (테스트)"));
        assert!(is_valid_keyword("C++ / C#"));
        assert!(is_valid_keyword("㈜포털 [채용]"));
        assert!(is_valid_keyword("50% 할인, 기획.영업"));
    }

    #[test]
    fn disallowed_character_rejects_whole_string() {
        assert!(!is_valid_keyword("abc!"));
        assert!(!is_valid_keyword("개발자?"));
        assert!(!is_valid_keyword("a@b"));
        assert!(!is_valid_keyword("semi;colon"));
    }

    #[test]
    fn hangul_jamo_outside_syllable_block_rejected() {
        // Compatibility jamo such as ㄱ are not composed syllables.
        assert!(!is_valid_keyword("ㄱㄴㄷ"));
    }

    #[test]
    fn thirty_code_points_is_the_boundary() {
        let exactly_30: String = "가".repeat(30);
        let over_30: String = "가".repeat(31);
        assert!(is_valid_keyword(&exactly_30));
        assert!(!is_valid_keyword(&over_30));
    }

    #[test]
    fn long_ascii_rejected() {
        let long = "a".repeat(31);
        assert!(!is_valid_keyword(&long));
    }

    #[test]
    fn whitespace_only_is_valid_charset_wise() {
        // The charset admits whitespace; trimming to empty is the session
        // controller's gate, not the validator's.
        assert!(is_valid_keyword("   "));
    }
}
