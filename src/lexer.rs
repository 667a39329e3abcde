use std::fmt;
use std::str::Chars;

/// One duration token: `-1.5 hours`, `200ms`, `.5`.
#[derive(Clone, Debug, PartialEq)]
pub struct DurationToken {
    pub negative: bool,
    /// The numeric literal exactly as written, using the lexer's decimal
    /// separator.
    pub literal: String,
    /// The unit word exactly as written. `None` means milliseconds.
    pub unit: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
    pub message: String,
    pub offset: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.offset, self.message)
    }
}

impl std::error::Error for LexError {}

#[derive(Clone)]
struct Checkpoint<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    offset: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
    chars: Chars<'a>,
    current: Option<char>,
    offset: usize,
    decimal_separator: char,
}

impl<'a> Lexer<'a> {
    #[cfg(test)]
    pub fn new(source: &'a str) -> Self {
        Self::with_decimal_separator(source, '.')
    }

    pub fn with_decimal_separator(source: &'a str, decimal_separator: char) -> Self {
        let mut chars = source.chars();
        let current = chars.next();
        Self {
            source,
            chars,
            current,
            offset: 0,
            decimal_separator,
        }
    }

    fn peek(&self) -> Option<char> {
        self.current
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current;
        if let Some(c) = ch {
            self.offset += c.len_utf8();
            self.current = self.chars.next();
        }
        ch
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            chars: self.chars.clone(),
            current: self.current,
            offset: self.offset,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        self.chars = checkpoint.chars;
        self.current = checkpoint.current;
        self.offset = checkpoint.offset;
    }

    fn error(&self, message: impl Into<String>) -> LexError {
        LexError {
            message: message.into(),
            offset: self.offset,
        }
    }

    fn is_whitespace(ch: char) -> bool {
        matches!(ch, '\t' | '\u{000B}' | '\u{000C}' | ' ' | '\u{00A0}' | '\u{FEFF}')
            || ch.is_whitespace() && !matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
    }

    fn is_unit_char(ch: char) -> bool {
        ch.is_ascii_alphabetic() || !ch.is_ascii() && unicode_ident::is_xid_start(ch)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Skips whitespace, returning whether any was consumed.
    pub fn skip_whitespace(&mut self) -> bool {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if Self::is_whitespace(ch) {
                self.advance();
            } else {
                break;
            }
        }
        self.offset != start
    }

    /// Consumes `expected` if the remaining input starts with it.
    pub fn eat(&mut self, expected: &str) -> bool {
        if expected.is_empty() || !self.remaining().starts_with(expected) {
            return false;
        }
        let end = self.offset + expected.len();
        while self.offset < end {
            self.advance();
        }
        true
    }

    fn read_digits(&mut self, s: &mut String) -> usize {
        let mut count = 0;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                s.push(ch);
                self.advance();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    fn read_numeric_literal(&mut self) -> Result<String, LexError> {
        let mut s = String::new();
        let integer_digits = self.read_digits(&mut s);

        if self.peek() == Some(self.decimal_separator)
            && self.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            s.push(self.decimal_separator);
            self.advance();
            self.read_digits(&mut s);
        } else if integer_digits == 0 {
            return Err(self.error("Expected a numeric literal"));
        }
        Ok(s)
    }

    fn read_unit_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if Self::is_unit_char(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        word
    }

    /// Reads one token starting at the current position. Input after the
    /// token is left unconsumed.
    pub fn next_token(&mut self) -> Result<DurationToken, LexError> {
        let negative = if self.peek() == Some('-') {
            self.advance();
            true
        } else {
            false
        };

        let literal = self.read_numeric_literal()?;

        // Whitespace only belongs to the token when a unit follows it.
        let before_space = self.checkpoint();
        self.skip_whitespace();
        let unit = if self.peek().is_some_and(Self::is_unit_char) {
            Some(self.read_unit_word())
        } else {
            self.restore(before_space);
            None
        };

        Ok(DurationToken {
            negative,
            literal,
            unit,
        })
    }

    /// Reads exactly one token that must span the whole input. Whitespace
    /// may trail a bare number but not a unit.
    pub fn match_entire(&mut self) -> Result<DurationToken, LexError> {
        let token = self.next_token()?;
        if token.unit.is_none() {
            self.skip_whitespace();
        }
        if !self.is_at_end() {
            return Err(self.error(format!(
                "Unexpected trailing input: {:?}",
                self.remaining()
            )));
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> DurationToken {
        Lexer::new(src).match_entire().unwrap()
    }

    fn token(negative: bool, literal: &str, unit: Option<&str>) -> DurationToken {
        DurationToken {
            negative,
            literal: literal.into(),
            unit: unit.map(Into::into),
        }
    }

    #[test]
    fn bare_number() {
        assert_eq!(lex("100"), token(false, "100", None));
        assert_eq!(lex("-100"), token(true, "100", None));
    }

    #[test]
    fn numeric_literal_forms() {
        assert_eq!(lex("1.5h"), token(false, "1.5", Some("h")));
        assert_eq!(lex(".5ms"), token(false, ".5", Some("ms")));
        assert_eq!(lex("-.5 hr"), token(true, ".5", Some("hr")));
    }

    #[test]
    fn whitespace_between_number_and_unit() {
        assert_eq!(lex("1   s"), token(false, "1", Some("s")));
        assert_eq!(lex("53\tmilliseconds"), token(false, "53", Some("milliseconds")));
    }

    #[test]
    fn unit_case_is_preserved() {
        assert_eq!(lex("1.5H"), token(false, "1.5", Some("H")));
    }

    #[test]
    fn unknown_unit_word_is_still_a_token() {
        assert_eq!(lex("10 parsecs"), token(false, "10", Some("parsecs")));
        assert_eq!(lex("10µs"), token(false, "10", Some("µs")));
    }

    #[test]
    fn rejects_missing_number() {
        assert!(Lexer::new("").match_entire().is_err());
        assert!(Lexer::new("ms").match_entire().is_err());
        assert!(Lexer::new("-").match_entire().is_err());
        assert!(Lexer::new(".").match_entire().is_err());
    }

    #[test]
    fn rejects_trailing_input() {
        let err = Lexer::new("10-.5").match_entire().unwrap_err();
        assert_eq!(err.offset, 2);
        assert!(Lexer::new("10.").match_entire().is_err());
        assert!(Lexer::new("1h ").match_entire().is_err());
        assert!(Lexer::new("10 ☃").match_entire().is_err());
        assert!(Lexer::new("1.2.3").match_entire().is_err());
    }

    #[test]
    fn trailing_whitespace_without_unit_is_not_consumed() {
        let mut lexer = Lexer::new("1 200ms");
        assert_eq!(lexer.next_token().unwrap(), token(false, "1", None));
        assert_eq!(lexer.remaining(), " 200ms");
        assert!(lexer.skip_whitespace());
        assert_eq!(lexer.next_token().unwrap(), token(false, "200", Some("ms")));
        assert!(lexer.is_at_end());
    }

    #[test]
    fn bare_number_may_trail_whitespace() {
        assert_eq!(lex("1 "), token(false, "1", None));
        assert_eq!(lex("-.5 \t"), token(true, ".5", None));
        assert!(Lexer::new("1 x ").match_entire().is_err());
    }

    #[test]
    fn custom_decimal_separator() {
        let mut lexer = Lexer::with_decimal_separator("1,5 h", ',');
        assert_eq!(lexer.match_entire().unwrap(), token(false, "1,5", Some("h")));
        assert!(Lexer::with_decimal_separator("1.5h", ',').match_entire().is_err());
    }

    #[test]
    fn eat_delimiter() {
        let mut lexer = Lexer::new("1s, 2ms");
        lexer.next_token().unwrap();
        assert!(!lexer.eat(";"));
        assert!(lexer.eat(","));
        assert_eq!(lexer.offset(), 3);
        assert_eq!(lexer.remaining(), " 2ms");
    }

    #[test]
    fn lex_error_display() {
        let err = Lexer::new("abc").match_entire().unwrap_err();
        assert_eq!(err.to_string(), "0: Expected a numeric literal");
    }
}
