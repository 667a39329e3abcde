use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const MILLISECOND: f64 = 1.0;
const SECOND: f64 = MILLISECOND * 1000.0;
const MINUTE: f64 = SECOND * 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;
// Julian year: 365.25 days.
const YEAR: f64 = DAY * 365.25;

/// A unit of duration, ordered from smallest to largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

// Every alias accepted by the lexer, lowercase.
const ALIASES: &[(&str, Unit)] = &[
    ("milliseconds", Unit::Millisecond),
    ("millisecond", Unit::Millisecond),
    ("msecs", Unit::Millisecond),
    ("msec", Unit::Millisecond),
    ("ms", Unit::Millisecond),
    ("seconds", Unit::Second),
    ("second", Unit::Second),
    ("secs", Unit::Second),
    ("sec", Unit::Second),
    ("s", Unit::Second),
    ("minutes", Unit::Minute),
    ("minute", Unit::Minute),
    ("mins", Unit::Minute),
    ("min", Unit::Minute),
    ("m", Unit::Minute),
    ("hours", Unit::Hour),
    ("hour", Unit::Hour),
    ("hrs", Unit::Hour),
    ("hr", Unit::Hour),
    ("h", Unit::Hour),
    ("days", Unit::Day),
    ("day", Unit::Day),
    ("d", Unit::Day),
    ("weeks", Unit::Week),
    ("week", Unit::Week),
    ("w", Unit::Week),
    ("years", Unit::Year),
    ("year", Unit::Year),
    ("yrs", Unit::Year),
    ("yr", Unit::Year),
    ("y", Unit::Year),
];

static ALIAS_TABLE: LazyLock<FxHashMap<&'static str, Unit>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

impl Unit {
    /// All units, largest first. This is the order the selector walks.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// Resolves an alias such as `"hrs"` or `"Hours"` to its unit.
    ///
    /// Matching is exact and case-insensitive; partial words are not
    /// accepted.
    pub fn resolve(alias: &str) -> Option<Unit> {
        if let Some(unit) = ALIAS_TABLE.get(alias) {
            return Some(*unit);
        }
        if alias.chars().any(|c| c.is_uppercase()) {
            return ALIAS_TABLE.get(alias.to_lowercase().as_str()).copied();
        }
        None
    }

    /// Number of milliseconds in one of this unit.
    pub fn factor_ms(self) -> f64 {
        match self {
            Unit::Millisecond => MILLISECOND,
            Unit::Second => SECOND,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Week => WEEK,
            Unit::Year => YEAR,
        }
    }

    /// Total order used by the selector; millisecond is 0, year is 6.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Label used by the compact form, e.g. `h`.
    pub fn short_label(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Year => "y",
        }
    }

    /// Spelled-out label used by the long form.
    ///
    /// Milliseconds keep their short label (`500 ms`) in long form.
    pub fn long_label(self, plural: bool) -> &'static str {
        match (self, plural) {
            (Unit::Millisecond, _) => "ms",
            (Unit::Second, false) => "second",
            (Unit::Second, true) => "seconds",
            (Unit::Minute, false) => "minute",
            (Unit::Minute, true) => "minutes",
            (Unit::Hour, false) => "hour",
            (Unit::Hour, true) => "hours",
            (Unit::Day, false) => "day",
            (Unit::Day, true) => "days",
            (Unit::Week, false) => "week",
            (Unit::Week, true) => "weeks",
            (Unit::Year, false) => "year",
            (Unit::Year, true) => "years",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownUnit(pub String);

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown duration unit: {}", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::resolve(s).ok_or_else(|| UnknownUnit(s.to_string()))
    }
}
