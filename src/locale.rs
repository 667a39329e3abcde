//! Locale-aware parsing of the numeric part of a duration.
//!
//! Only the decimal separator varies between locales. Grouping separators
//! are never accepted, so `1,000ms` is not one thousand milliseconds in
//! any locale.

use fixed_decimal::{Decimal, FloatPrecision};
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale as IcuLocale;

/// How numeric literals are written in a given locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    tag: String,
    decimal_separator: char,
}

impl NumberLocale {
    /// Decimal point, no grouping.
    pub const ENGLISH: NumberLocale = NumberLocale {
        tag: String::new(),
        decimal_separator: '.',
    };

    /// Builds the number conventions for a BCP-47 tag such as `"de-DE"`.
    ///
    /// Tags ICU cannot parse, and locales whose separator is not a single
    /// character, fall back to English.
    pub fn from_tag(tag: &str) -> NumberLocale {
        match detect_decimal_separator(tag) {
            Some(decimal_separator) => NumberLocale {
                tag: tag.to_string(),
                decimal_separator,
            },
            None => {
                log::debug!("no usable decimal separator for locale {tag:?}, using English");
                NumberLocale::ENGLISH
            }
        }
    }

    /// Uses `decimal_separator` directly, bypassing ICU.
    pub fn with_decimal_separator(decimal_separator: char) -> NumberLocale {
        NumberLocale {
            tag: String::new(),
            decimal_separator,
        }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The tag this locale was built from; empty for English.
    pub fn tag(&self) -> &str {
        if self.tag.is_empty() { "en" } else { &self.tag }
    }

    /// Parses an unsigned literal as produced by the lexer: `digits`,
    /// `digits<sep>digits` or `<sep>digits`.
    pub fn parse_literal(&self, literal: &str) -> Option<f64> {
        let mut normalized = String::with_capacity(literal.len() + 1);
        let mut seen_separator = false;
        for ch in literal.chars() {
            if ch.is_ascii_digit() {
                normalized.push(ch);
            } else if ch == self.decimal_separator && !seen_separator {
                if normalized.is_empty() {
                    normalized.push('0');
                }
                normalized.push('.');
                seen_separator = true;
            } else {
                return None;
            }
        }
        if normalized.is_empty() || normalized.ends_with('.') {
            return None;
        }
        normalized.parse().ok()
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        NumberLocale::ENGLISH
    }
}

// Formats a probe value and reads back whatever ICU put between its
// integer and fraction digits.
fn detect_decimal_separator(tag: &str) -> Option<char> {
    let locale: IcuLocale = tag.parse().ok()?;
    let prefs: DecimalFormatterPreferences = (&locale).into();
    let mut opts = DecimalFormatterOptions::default();
    opts.grouping_strategy = Some(GroupingStrategy::Never);
    let formatter = DecimalFormatter::try_new(prefs, opts).ok()?;

    let probe = Decimal::try_from_f64(1.5, FloatPrecision::RoundTrip).ok()?;
    let formatted = formatter.format(&probe).to_string();

    let mut between = formatted
        .chars()
        .skip_while(|c| *c != '1')
        .skip(1)
        .take_while(|c| *c != '5');
    let separator = between.next()?;
    if between.next().is_some() || separator.is_ascii_digit() {
        return None;
    }
    Some(separator)
}
