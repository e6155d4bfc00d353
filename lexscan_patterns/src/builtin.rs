//! Built-in extractors: ordinals, integers and two date formats.
//!
//! Each one is a [`PatternDef`] compiled once on first use. Out-of-range date
//! fields are handled entirely by the grammar: the ISO-8601 guard rejects a
//! date whose trailing time or seconds field failed to match, or that runs
//! straight into letters, so no partial date is ever produced.

use lexscan_core::ExtractorDefinition;
use once_cell::sync::Lazy;

use crate::patterns::PatternDef;

pub const MIXED_ORDINALS: &str = "mixed_ordinals";
pub const INTEGERS: &str = "integers";
pub const DATES_ISO8601: &str = "dates_iso8601";
pub const DATES_STRING_MONTH: &str = "dates_string_month";

/// Priority order used when the caller names no extractors.
///
/// Dates come first so their leading year or day is not claimed by
/// `integers`; ordinals precede integers for the same reason.
pub const DEFAULT_ORDER: [&str; 4] = [DATES_ISO8601, DATES_STRING_MONTH, MIXED_ORDINALS, INTEGERS];

const ORDINAL_PATTERN: &str = r"\b\d+(?:st|nd|rd|th)\b";

// Grouped form first: leftmost-first matching would otherwise stop at the
// first comma.
const INTEGER_PATTERN: &str = r"\b\d{1,3}(?:,\d{3})+\b|\b\d+\b";

const ISO8601_PATTERN: &str = concat!(
    r"\b\d{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12]\d|3[01])",
    r"(?:[T ](?:[01]\d|2[0-3]):[0-5]\d",
    r"(?::[0-5]\d)?(?:\.\d+)?",
    r"(?:[A-Z]{3}|Z|[+-]\d{4})?)?",
);

// A date or time cut short by an out-of-range field, or glued to trailing
// letters. Three-letter zones are tried before `Z` so "ZST" is not split.
const ISO8601_GUARD: &str = r"^(?:[T ]\d{1,2}:|:\d|\d|[A-Za-z])";

const STRING_MONTH_PATTERN: &str = concat!(
    r"\b\d{1,2}\s+",
    r"(?i:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?",
    r"|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)",
    r"\.?,?\s+\d{4}\b",
);

#[must_use]
pub fn mixed_ordinals_def() -> PatternDef {
    PatternDef::new(MIXED_ORDINALS, "ordinal", ORDINAL_PATTERN)
}

#[must_use]
pub fn integers_def() -> PatternDef {
    PatternDef::new(INTEGERS, "integer", INTEGER_PATTERN)
}

#[must_use]
pub fn dates_iso8601_def() -> PatternDef {
    PatternDef::new(DATES_ISO8601, "date_iso8601", ISO8601_PATTERN).with_guard(ISO8601_GUARD)
}

#[must_use]
pub fn dates_string_month_def() -> PatternDef {
    PatternDef::new(DATES_STRING_MONTH, "date_string_month", STRING_MONTH_PATTERN)
}

/// All built-in definitions, in [`DEFAULT_ORDER`].
#[must_use]
pub fn builtin_defs() -> Vec<PatternDef> {
    vec![
        dates_iso8601_def(),
        dates_string_month_def(),
        mixed_ordinals_def(),
        integers_def(),
    ]
}

fn compile(def: &PatternDef) -> ExtractorDefinition {
    def.build()
        .unwrap_or_else(|e| panic!("built-in pattern `{}` failed to build: {e}", def.name))
}

static MIXED_ORDINALS_EXTRACTOR: Lazy<ExtractorDefinition> =
    Lazy::new(|| compile(&mixed_ordinals_def()));
static INTEGERS_EXTRACTOR: Lazy<ExtractorDefinition> = Lazy::new(|| compile(&integers_def()));
static DATES_ISO8601_EXTRACTOR: Lazy<ExtractorDefinition> =
    Lazy::new(|| compile(&dates_iso8601_def()));
static DATES_STRING_MONTH_EXTRACTOR: Lazy<ExtractorDefinition> =
    Lazy::new(|| compile(&dates_string_month_def()));

/// "5th", "1st", "22nd"; the suffix is not checked against the digit.
#[must_use]
pub fn mixed_ordinals() -> ExtractorDefinition {
    MIXED_ORDINALS_EXTRACTOR.clone()
}

/// "80", "123,456,789"; decimals split into two integers.
#[must_use]
pub fn integers() -> ExtractorDefinition {
    INTEGERS_EXTRACTOR.clone()
}

/// "2015-07-25", "2018-06-22T18:22:19.123-0800".
#[must_use]
pub fn dates_iso8601() -> ExtractorDefinition {
    DATES_ISO8601_EXTRACTOR.clone()
}

/// "25 Jan 2017", "25 Jan, 2017".
#[must_use]
pub fn dates_string_month() -> ExtractorDefinition {
    DATES_STRING_MONTH_EXTRACTOR.clone()
}

/// Built-in extractor by registry name.
#[must_use]
pub fn by_name(name: &str) -> Option<ExtractorDefinition> {
    match name {
        MIXED_ORDINALS => Some(mixed_ordinals()),
        INTEGERS => Some(integers()),
        DATES_ISO8601 => Some(dates_iso8601()),
        DATES_STRING_MONTH => Some(dates_string_month()),
        _ => None,
    }
}

/// Every built-in extractor, in [`DEFAULT_ORDER`].
#[must_use]
pub fn all() -> Vec<ExtractorDefinition> {
    DEFAULT_ORDER.iter().filter_map(|name| by_name(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexscan_core::{EntityKind, scan};

    fn texts(text: &str, extractors: &[ExtractorDefinition]) -> Vec<String> {
        scan(text, extractors).into_iter().map(|m| m.text).collect()
    }

    #[test]
    fn test_builtin_defs_compile() {
        for def in builtin_defs() {
            assert!(def.build().is_ok(), "{} should compile", def.name);
        }
    }

    #[test]
    fn test_default_order_matches_defs() {
        let names: Vec<_> = builtin_defs().into_iter().map(|d| d.name).collect();
        assert_eq!(names, DEFAULT_ORDER);
        assert_eq!(all().len(), 4);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name(INTEGERS).map(|d| d.label().clone()), Some(EntityKind::Integer));
        assert!(by_name("roman_numerals").is_none());
    }

    #[test]
    fn test_ordinal_suffix_not_checked_against_digit() {
        assert_eq!(texts("the 5st and 22nd", &[mixed_ordinals()]), vec!["5st", "22nd"]);
    }

    #[test]
    fn test_ordinal_requires_known_suffix() {
        assert!(texts("the 5xx and 3s", &[mixed_ordinals()]).is_empty());
    }

    #[test]
    fn test_integers_split_decimals() {
        assert_eq!(texts("77.9%", &[integers()]), vec!["77", "9"]);
    }

    #[test]
    fn test_integers_skip_digits_glued_to_letters() {
        assert_eq!(texts("5th 1st 42", &[integers()]), vec!["42"]);
    }

    #[test]
    fn test_integers_bad_grouping_falls_back_to_plain_runs() {
        assert_eq!(texts("1234,567", &[integers()]), vec!["1234", "567"]);
        assert_eq!(texts("12,34", &[integers()]), vec!["12", "34"]);
    }

    #[test]
    fn test_iso_date_followed_by_digit_is_rejected() {
        assert!(texts("2015-07-311", &[dates_iso8601()]).is_empty());
    }

    #[test]
    fn test_iso_date_followed_by_plain_number_is_kept() {
        assert_eq!(
            texts("on 2015-07-25 10 apples", &[dates_iso8601()]),
            vec!["2015-07-25"]
        );
    }

    #[test]
    fn test_iso_fraction_without_seconds_is_kept_whole() {
        assert_eq!(
            texts("at 2018-06-22 18:22.5 sharp", &[dates_iso8601()]),
            vec!["2018-06-22 18:22.5"]
        );
    }

    #[test]
    fn test_iso_zone_starting_with_z_is_not_split() {
        assert_eq!(
            texts("at 2018-06-22 18:22:19.123ZST.", &[dates_iso8601()]),
            vec!["2018-06-22 18:22:19.123ZST"]
        );
    }

    #[test]
    fn test_iso_date_glued_to_letters_is_rejected() {
        assert!(texts("2018-06-22 18:22MDTX", &[dates_iso8601()]).is_empty());
        assert!(texts("2015-07-25th", &[dates_iso8601()]).is_empty());
    }

    #[test]
    fn test_iso_single_digit_hour_rejects_date() {
        assert!(texts("at 2018-06-22 9:30 ok", &[dates_iso8601()]).is_empty());
    }

    #[test]
    fn test_string_month_full_name_and_case() {
        assert_eq!(
            texts("3 september 1999 and 4 Sept. 2001", &[dates_string_month()]),
            vec!["3 september 1999", "4 Sept. 2001"]
        );
    }

    #[test]
    fn test_string_month_rejects_unknown_month() {
        assert!(texts("25 Janx 2017 or 25 Foo 2017", &[dates_string_month()]).is_empty());
    }
}
