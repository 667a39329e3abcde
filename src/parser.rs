use crate::error::{MAX_INPUT_LEN, ParseError, Result};
use crate::lexer::{DurationToken, Lexer};
use crate::locale::NumberLocale;
use crate::units::Unit;

/// Turns duration text into milliseconds.
///
/// A `Parser` carries the number locale and the delimiter used between
/// segments of multi-segment input. It holds no other state, so one value
/// can be shared freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Parser {
    locale: NumberLocale,
    delimiter: String,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            locale: NumberLocale::ENGLISH,
            delimiter: " ".to_string(),
        }
    }

    pub fn with_locale(mut self, locale: NumberLocale) -> Parser {
        self.locale = locale;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Parser {
        self.delimiter = delimiter.into();
        self
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Parses a single duration token such as `1.5h`, `-200 ms` or `100`.
    ///
    /// The whole input must be one token. A bare number is milliseconds.
    pub fn parse_one(&self, input: &str) -> Result<f64> {
        check_input(input)?;
        let mut lexer = Lexer::with_decimal_separator(input, self.locale.decimal_separator());
        let token = lexer.match_entire().map_err(|err| {
            log::debug!("no duration in {input:?}: {err}");
            ParseError::no_match(input)
        })?;
        let magnitude = self.magnitude(&token, input)?;
        Ok(if token.negative { -magnitude } else { magnitude })
    }

    /// Parses segments joined by the delimiter, e.g. `1 week, 3 days`, and
    /// sums them.
    ///
    /// The sign of the first segment applies to the whole sum; later
    /// segments contribute their magnitude. This mirrors split formatting,
    /// which writes `-1 second, 200 ms` for -1200.
    pub fn parse_multi(&self, input: &str) -> Result<f64> {
        check_input(input)?;
        let core = self.delimiter.trim();
        let mut lexer = Lexer::with_decimal_separator(input, self.locale.decimal_separator());
        let mut negative = None;
        let mut total = 0.0;

        loop {
            let token = lexer.next_token().map_err(|err| {
                log::debug!("no duration segment in {input:?}: {err}");
                ParseError::no_match(input)
            })?;
            total += self.magnitude(&token, input)?;
            negative.get_or_insert(token.negative);

            if lexer.is_at_end() {
                break;
            }
            let delimited = if core.is_empty() {
                lexer.skip_whitespace()
            } else {
                lexer.skip_whitespace();
                let found = lexer.eat(core);
                lexer.skip_whitespace();
                found
            };
            if !delimited || lexer.is_at_end() {
                log::debug!(
                    "expected {:?} between segments at offset {} of {input:?}",
                    self.delimiter,
                    lexer.offset()
                );
                return Err(ParseError::no_match(input));
            }
        }

        Ok(if negative == Some(true) { -total } else { total })
    }

    fn magnitude(&self, token: &DurationToken, input: &str) -> Result<f64> {
        let value = self
            .locale
            .parse_literal(&token.literal)
            .ok_or_else(|| ParseError::no_match(input))?;
        let unit = match &token.unit {
            None => Unit::Millisecond,
            Some(word) => Unit::resolve(word).ok_or_else(|| ParseError::UnsupportedUnit {
                unit: word.clone(),
            })?,
        };
        Ok(value * unit.factor_ms())
    }
}

fn check_input(input: &str) -> Result<()> {
    let len = input.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(ParseError::InputTooLong {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    if input.trim().is_empty() {
        return Err(ParseError::no_match(input));
    }
    Ok(())
}
