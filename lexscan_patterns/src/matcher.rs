//! Regex-backed [`TextMatcher`].

use lexscan_core::{Span, TextMatcher};
use regex::Regex;

/// Leftmost-first regex matcher with an optional trailing-context guard.
///
/// The guard stands in for a negative lookahead: a match whose remaining text
/// starts with a guard match is discarded, and the search resumes one
/// character after the discarded match's start.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    not_followed_by: Option<Regex>,
}

impl RegexMatcher {
    #[must_use]
    pub const fn new(regex: Regex) -> Self {
        Self {
            regex,
            not_followed_by: None,
        }
    }

    /// Reject matches whose trailing text begins with `guard`.
    ///
    /// `guard` is only tested at the position right after a match, so it
    /// should be anchored with `^`.
    #[must_use]
    pub fn not_followed_by(mut self, guard: Regex) -> Self {
        self.not_followed_by = Some(guard);
        self
    }

    fn is_rejected(&self, text: &str, end: usize) -> bool {
        self.not_followed_by
            .as_ref()
            .is_some_and(|guard| guard.is_match(&text[end..]))
    }
}

impl TextMatcher for RegexMatcher {
    fn find_at(&self, text: &str, start: usize) -> Option<Span> {
        let mut pos = start;

        while pos <= text.len() {
            let m = self.regex.find_at(text, pos)?;
            if !self.is_rejected(text, m.end()) {
                return Some(Span::new(m.start(), m.end()));
            }
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            pos = m.start() + step;
        }

        None
    }

    fn describe(&self) -> String {
        match &self.not_followed_by {
            Some(guard) => format!("/{}/ not followed by /{}/", self.regex, guard),
            None => format!("/{}/", self.regex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).expect("valid regex should compile")
    }

    #[test]
    fn test_find_at_respects_start() {
        let matcher = RegexMatcher::new(re(r"\d+"));
        assert_eq!(matcher.find_at("12 34", 0), Some(Span::new(0, 2)));
        assert_eq!(matcher.find_at("12 34", 2), Some(Span::new(3, 5)));
        assert_eq!(matcher.find_at("12 34", 5), None);
    }

    #[test]
    fn test_word_boundary_sees_text_before_start() {
        let matcher = RegexMatcher::new(re(r"\b\d+\b"));
        // Offset 1 is inside "a1", so there is no boundary before the digit.
        assert_eq!(matcher.find_at("a1 2", 1), Some(Span::new(3, 4)));
    }

    #[test]
    fn test_guard_rejects_and_resumes() {
        let matcher = RegexMatcher::new(re(r"\d{2}")).not_followed_by(re(r"^x"));
        assert_eq!(matcher.find_at("123 45x 67", 0), Some(Span::new(0, 2)));
        assert_eq!(matcher.find_at("45x 67", 0), Some(Span::new(4, 6)));
        assert_eq!(matcher.find_at("12x34", 0), Some(Span::new(3, 5)));
        assert_eq!(matcher.find_at("45x", 0), None);
    }

    #[test]
    fn test_guard_resumes_past_multibyte_char() {
        let matcher = RegexMatcher::new(re(r"é\d")).not_followed_by(re(r"^!"));
        assert_eq!(matcher.find_at("é1! é2", 0), Some(Span::new(5, 8)));
    }

    #[test]
    fn test_describe_mentions_guard() {
        let matcher = RegexMatcher::new(re(r"\d+")).not_followed_by(re(r"^%"));
        assert_eq!(matcher.describe(), r"/\d+/ not followed by /^%/");
    }
}
