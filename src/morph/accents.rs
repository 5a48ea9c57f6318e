//! Accent stripping for polytonic Greek comparisons.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose to NFD and drop combining marks, so endings compare on bare
/// letters regardless of accent or breathing.
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_breathings() {
        assert_eq!(strip_accents("λόγος"), "λογος");
        assert_eq!(strip_accents("εἰμί"), "ειμι");
        assert_eq!(strip_accents("ἄνθρωπος"), "ανθρωπος");
    }

    #[test]
    fn test_unaccented_text_unchanged() {
        assert_eq!(strip_accents("λογος"), "λογος");
        assert_eq!(strip_accents(""), "");
    }
}
