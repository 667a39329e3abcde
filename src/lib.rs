//! Conversion between millisecond durations and human-readable text.
//!
//! ```
//! use msconv::{Options, format, parse};
//!
//! assert_eq!(parse("1.5h"), Ok(5_400_000.0));
//! assert_eq!(format(10_000, &Options::new().long_form(true)), "10 seconds");
//! assert_eq!(
//!     format(864_000_000, &Options::new().split_output(true).long_form(true).split_delimiter(", ")),
//!     "1 week, 3 days"
//! );
//! ```

pub mod error;
mod format;
mod lexer;
mod locale;
mod number;
mod options;
mod parser;
mod units;

pub use error::{MAX_INPUT_LEN, ParseError, Result};
pub use format::{format, render_one, render_split, select};
pub use locale::NumberLocale;
pub use number::IntoMillis;
pub use options::Options;
pub use parser::Parser;
pub use units::{Unit, UnknownUnit};

/// Parses a single duration token, e.g. `1.5h`, `-200 ms` or `100`.
///
/// A bare number is milliseconds. Blank input and anything that is not
/// exactly one token yield [`ParseError::NoMatch`].
pub fn parse(text: &str) -> Result<f64> {
    Parser::new().parse_one(text)
}

/// Like [`parse`], reading the number with `locale`'s decimal separator.
pub fn parse_with_locale(text: &str, locale: &NumberLocale) -> Result<f64> {
    Parser::new().with_locale(locale.clone()).parse_one(text)
}

/// Parses segments joined by `delimiter` and sums them; the inverse of
/// split formatting.
pub fn parse_multi(text: &str, delimiter: &str) -> Result<f64> {
    Parser::new().with_delimiter(delimiter).parse_multi(text)
}

/// Like [`parse_multi`], reading numbers with `locale`'s decimal separator.
pub fn parse_multi_with_locale(text: &str, delimiter: &str, locale: &NumberLocale) -> Result<f64> {
    Parser::new()
        .with_locale(locale.clone())
        .with_delimiter(delimiter)
        .parse_multi(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entry_points() {
        assert_eq!(parse("2 days"), Ok(172_800_000.0));
        assert!(parse("").unwrap_err().is_no_match());
        assert_eq!(parse_multi("1 second, 200 ms", ", "), Ok(1200.0));
        let de = NumberLocale::with_decimal_separator(',');
        assert_eq!(parse_with_locale("1,5h", &de), Ok(5_400_000.0));
        assert_eq!(parse_multi_with_locale("1,5s 1ms", " ", &de), Ok(1501.0));
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let parser = Parser::new();
        let options = Options::new().split_output(true);
        std::thread::scope(|s| {
            for i in 1..4i64 {
                let parser = &parser;
                let options = &options;
                s.spawn(move || {
                    let text = format(i * 1200, options);
                    assert_eq!(parser.parse_multi(&text), Ok((i * 1200) as f64));
                });
            }
        });
    }
}
