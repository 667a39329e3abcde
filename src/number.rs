//! Numeric plumbing shared by the formatter: display of `f64` values,
//! rounding policy, and conversion of caller numeric types into the
//! canonical millisecond `f64`.

use fixed_decimal::{Decimal, FloatPrecision, Sign, SignedRoundingMode, UnsignedRoundingMode};
use num_bigint::BigInt;
use std::time::Duration;

/// Shortest round-trip spelling of `x`, JavaScript style: `500`, `2.71`,
/// `NaN`, `-Infinity`.
pub fn to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format(x).to_string()
}

/// Rounds half away from zero to an integer.
pub fn round_integer(x: f64) -> f64 {
    x.round()
}

/// Rounds half away from zero to `digits` decimal places and spells the
/// result without trailing zeros: `2.711044375` at 2 gives `2.71`.
pub fn to_fixed_string(x: f64, digits: u32) -> String {
    if !x.is_finite() {
        return to_string(x);
    }
    let Ok(mut dec) = Decimal::try_from_f64(x, FloatPrecision::RoundTrip) else {
        return to_string(x);
    };
    let position = -(digits.min(i16::MAX as u32) as i16);
    dec.round_with_mode(
        position,
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
    );
    dec.absolute.trim_end();

    let absolute = dec.absolute.to_string();
    let is_zero = !absolute.chars().any(|c| matches!(c, '1'..='9'));
    if dec.sign == Sign::Negative && !is_zero {
        format!("-{absolute}")
    } else {
        absolute
    }
}

/// Conversion of a caller's numeric type into milliseconds as `f64`.
///
/// Integers beyond 2^53 lose precision like any `f64`; `BigInt` values that
/// do not fit an `i64` are rounded to the nearest `f64` and overflow to
/// infinity.
pub trait IntoMillis {
    fn into_millis(self) -> f64;
}

macro_rules! lossless_into_millis {
    ($($t:ty),*) => {
        $(impl IntoMillis for $t {
            fn into_millis(self) -> f64 {
                f64::from(self)
            }
        })*
    };
}

macro_rules! cast_into_millis {
    ($($t:ty),*) => {
        $(impl IntoMillis for $t {
            fn into_millis(self) -> f64 {
                self as f64
            }
        })*
    };
}

lossless_into_millis!(f64, f32, i8, i16, i32, u8, u16, u32);
cast_into_millis!(i64, u64, i128, u128, isize, usize);

impl IntoMillis for Duration {
    fn into_millis(self) -> f64 {
        self.as_nanos() as f64 / 1_000_000.0
    }
}

impl IntoMillis for &BigInt {
    fn into_millis(self) -> f64 {
        match i64::try_from(self) {
            Ok(small) => small as f64,
            Err(_) => self.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

impl IntoMillis for BigInt {
    fn into_millis(self) -> f64 {
        (&self).into_millis()
    }
}
