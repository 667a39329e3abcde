/// Controls how [`format`](crate::format) renders a duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// `20 seconds` instead of `20s`.
    pub long_form: bool,
    /// Round the displayed number. When off, the full value is shown.
    pub round_numbers: bool,
    /// Decimal places kept when rounding; 0 rounds to an integer.
    /// Trailing zeros are dropped, so `3.0` at 2 places shows as `3`.
    pub round_precision: u32,
    /// Decompose into several units, e.g. `1w 3d` instead of `10d`.
    pub split_output: bool,
    /// Joins segments in split mode.
    pub split_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            long_form: false,
            round_numbers: true,
            round_precision: 0,
            split_output: false,
            split_delimiter: " ".to_string(),
        }
    }
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    pub fn long_form(mut self, yes: bool) -> Options {
        self.long_form = yes;
        self
    }

    pub fn round_numbers(mut self, yes: bool) -> Options {
        self.round_numbers = yes;
        self
    }

    pub fn round_precision(mut self, digits: u32) -> Options {
        self.round_precision = digits;
        self
    }

    pub fn split_output(mut self, yes: bool) -> Options {
        self.split_output = yes;
        self
    }

    pub fn split_delimiter(mut self, delimiter: impl Into<String>) -> Options {
        self.split_delimiter = delimiter.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert!(!opts.long_form);
        assert!(opts.round_numbers);
        assert_eq!(opts.round_precision, 0);
        assert!(!opts.split_output);
        assert_eq!(opts.split_delimiter, " ");
    }

    #[test]
    fn precision_drops_trailing_zeros() {
        let opts = Options::new().round_precision(2);
        assert_eq!(crate::format(3 * 86_400_000, &opts), "3d");
        assert_eq!(crate::format(129_600_000, &opts), "1.5d");
    }

    #[test]
    fn builder_chain() {
        let opts = Options::new()
            .long_form(true)
            .split_output(true)
            .split_delimiter(", ")
            .round_precision(2)
            .round_numbers(false);
        assert_eq!(
            opts,
            Options {
                long_form: true,
                round_numbers: false,
                round_precision: 2,
                split_output: true,
                split_delimiter: ", ".into(),
            }
        );
    }
}
