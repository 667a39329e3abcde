use msconv::{
    MAX_INPUT_LEN, NumberLocale, Options, ParseError, Unit, format, parse, parse_multi,
    parse_with_locale,
};

fn split_long() -> Options {
    Options::new()
        .split_output(true)
        .long_form(true)
        .split_delimiter(", ")
}

#[test]
fn hours_with_fraction() {
    assert_eq!(parse("1.5h"), Ok(5_400_000.0));
}

#[test]
fn default_format_of_small_value() {
    assert_eq!(format(500, &Options::default()), "500ms");
}

#[test]
fn long_form_seconds() {
    assert_eq!(format(10_000, &Options::new().long_form(true)), "10 seconds");
}

#[test]
fn days_rounded_and_with_precision() {
    assert_eq!(format(234_234_234, &Options::new().long_form(true)), "3 days");
    assert_eq!(format(234_234_234, &Options::default()), "3d");
    assert_eq!(
        format(
            234_234_234,
            &Options::new().long_form(true).round_precision(2)
        ),
        "2.71 days"
    );
}

#[test]
fn split_long_form() {
    assert_eq!(format(864_000_000, &split_long()), "1 week, 3 days");
    assert_eq!(
        format(864_001_200, &split_long()),
        "1 week, 3 days, 1 second, 200 ms"
    );
}

#[test]
fn split_output_parses_back() {
    for value in [864_000_000i64, 864_001_200, -864_001_200, 1200, 31_557_600_000] {
        let text = format(value, &split_long());
        assert_eq!(parse_multi(&text, ", "), Ok(value as f64), "{text}");
    }
    let compact = format(-103_680_000, &Options::new().split_output(true));
    assert_eq!(compact, "-1d 4h 48m");
    assert_eq!(parse_multi(&compact, " "), Ok(-103_680_000.0));
}

#[test]
fn single_unit_output_never_uses_weeks_or_years() {
    assert_eq!(format(31_557_600_000i64, &Options::default()), "365d");
    assert_eq!(format(Unit::Week.factor_ms(), &Options::default()), "7d");
}

#[test]
fn non_finite_values_render_as_milliseconds() {
    assert_eq!(format(f64::NAN, &Options::default()), "NaNms");
    assert_eq!(format(f64::INFINITY, &Options::default()), "Infinityms");
    assert_eq!(
        format(f64::NEG_INFINITY, &Options::new().long_form(true)),
        "-Infinity ms"
    );
    assert_eq!(format(f64::NAN, &split_long()), "NaN ms");
}

#[test]
fn error_taxonomy() {
    let long = "1".repeat(MAX_INPUT_LEN + 1);
    assert_eq!(
        parse(&long),
        Err(ParseError::InputTooLong {
            len: MAX_INPUT_LEN + 1,
            max: MAX_INPUT_LEN
        })
    );
    assert!(parse("").unwrap_err().is_no_match());
    assert!(parse("hello").unwrap_err().is_no_match());
    assert_eq!(
        parse("3 lightyears"),
        Err(ParseError::UnsupportedUnit {
            unit: "lightyears".into()
        })
    );
}

#[test]
fn localized_decimal_separator() {
    let de = NumberLocale::from_tag("de-DE");
    assert_eq!(
        parse_with_locale("1,5 Stunden", &de),
        Err(ParseError::UnsupportedUnit {
            unit: "Stunden".into()
        })
    );
    assert_eq!(parse_with_locale("2,5 h", &de), Ok(9_000_000.0));
}
