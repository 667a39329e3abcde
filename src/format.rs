use crate::number::{self, IntoMillis};
use crate::options::Options;
use crate::parser::Parser;
use crate::units::Unit;

/// Formats a millisecond value as text.
///
/// Never fails: NaN and infinities are spelled out with the millisecond
/// label (`NaNms`, `-Infinity ms`).
pub fn format<T: IntoMillis>(value: T, options: &Options) -> String {
    let value_ms = value.into_millis();
    if options.split_output {
        render_split(value_ms, options)
    } else {
        render_one(value_ms, options)
    }
}

/// Picks the largest unit whose factor does not exceed `abs_ms`.
///
/// Week and year are only candidates when `allow_years_and_weeks` is set;
/// otherwise day is the largest unit. Magnitudes below one millisecond,
/// and NaN, select milliseconds.
pub fn select(abs_ms: f64, allow_years_and_weeks: bool) -> Unit {
    Unit::ALL
        .into_iter()
        .filter(|unit| allow_years_and_weeks || *unit <= Unit::Day)
        .find(|unit| abs_ms >= unit.factor_ms())
        .unwrap_or(Unit::Millisecond)
}

/// Renders `value_ms` in the single most significant unit, capped at days.
pub fn render_one(value_ms: f64, options: &Options) -> String {
    if !value_ms.is_finite() {
        return render_millis_literal(value_ms, options);
    }
    let unit = select(value_ms.abs(), false);
    let magnitude = value_ms / unit.factor_ms();
    segment(&display_number(magnitude, options), magnitude, unit, options)
}

/// Renders `value_ms` as a sequence of units from largest to smallest,
/// joined by the split delimiter: `1w 3d`, `-1 second, 200 ms`.
///
/// Every segment above milliseconds is a whole count. The millisecond
/// segment, when reached, carries the rest and is rounded like a single
/// value. Only the first segment carries the sign.
pub fn render_split(value_ms: f64, options: &Options) -> String {
    if !value_ms.is_finite() || value_ms == 0.0 {
        return render_millis_literal(value_ms, options);
    }

    let parser = Parser::new();
    let negative = value_ms < 0.0;
    let mut remainder = value_ms.abs();
    let mut segments: Vec<String> = Vec::with_capacity(Unit::ALL.len());

    for _ in 0..Unit::ALL.len() {
        let unit = select(remainder, true);
        let sign = if negative && segments.is_empty() { -1.0 } else { 1.0 };
        let text = if unit == Unit::Millisecond {
            let magnitude = sign * remainder;
            segment(&display_number(magnitude, options), magnitude, unit, options)
        } else {
            let count = sign * (remainder / unit.factor_ms()).trunc();
            segment(&number::to_string(count), count, unit, options)
        };

        // The emitted text, not the count, decides what is left over, so
        // the segments always parse back to the value they describe.
        let emitted = match parser.parse_one(&text) {
            Ok(ms) => ms.abs(),
            Err(err) => {
                log::debug!("split segment {text:?} does not parse back ({err}), stopping");
                segments.push(text);
                break;
            }
        };
        remainder -= emitted;
        log::trace!("split segment {text:?}, {remainder} ms left");
        segments.push(text);

        if unit == Unit::Millisecond || remainder <= 0.0 {
            break;
        }
        if remainder < 1.0 {
            log::debug!("dropping sub-millisecond residue {remainder} of {value_ms}");
            break;
        }
    }

    segments.join(options.split_delimiter.as_str())
}

fn render_millis_literal(value_ms: f64, options: &Options) -> String {
    segment(
        &number::to_string(value_ms),
        value_ms,
        Unit::Millisecond,
        options,
    )
}

fn display_number(magnitude: f64, options: &Options) -> String {
    if !options.round_numbers {
        number::to_string(magnitude)
    } else if options.round_precision > 0 {
        number::to_fixed_string(magnitude, options.round_precision)
    } else {
        number::to_string(number::round_integer(magnitude))
    }
}

// `count` is the unrounded number of units; it alone decides plurality.
fn segment(number: &str, count: f64, unit: Unit, options: &Options) -> String {
    if options.long_form {
        let plural = count.abs() >= 1.5;
        format!("{number} {}", unit.long_label(plural))
    } else {
        format!("{number}{}", unit.short_label())
    }
}
