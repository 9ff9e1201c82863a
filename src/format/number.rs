//! Core number formatting.

use std::fmt;

use super::abbreviation::{abbreviate, Abbreviation};
use super::input::NumericInput;
use super::options::{FormatOptions, Precision};
use super::precision::{auto_precision, round_fixed};

/// Abbreviated values always show exactly one decimal before trimming.
const ABBREVIATED_PRECISION: usize = 1;

/// A formatted number, split so the suffix can be styled apart from the digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    /// Digits, point, grouping separators and minus sign.
    pub body: String,
    /// Suffix applied by abbreviation, never part of `body`.
    pub abbreviation: Option<Abbreviation>,
}

impl FormattedOutput {
    /// The abbreviation suffix letter, if any.
    pub fn abbreviation_suffix(&self) -> Option<&'static str> {
        self.abbreviation.map(Abbreviation::suffix)
    }
}

impl fmt::Display for FormattedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)?;
        if let Some(abbreviation) = self.abbreviation {
            f.write_str(abbreviation.suffix())?;
        }
        Ok(())
    }
}

/// Format `input` for display.
///
/// Returns `None` when the input is absent or not a finite number; callers
/// show [`FormatOptions::placeholder`] instead.
///
/// Grouping separators are only inserted when the rounded value has no
/// fractional part, so `1234.5` stays `"1234.5"` while `1234` becomes
/// `"1,234"`.
pub fn format_number(input: impl Into<NumericInput>, options: &FormatOptions) -> Option<FormattedOutput> {
    let value = input.into().value()?;

    let (reduced, abbreviation) = if options.abbreviate {
        abbreviate(value, options.abbreviation_threshold)
    } else {
        (value, None)
    };

    let digits = match (abbreviation, options.precision) {
        (Some(_), _) => ABBREVIATED_PRECISION,
        (None, Precision::Auto) => usize::from(auto_precision(
            Some(value),
            options.large_number_threshold,
            options.default_precision,
        )),
        (None, Precision::Fixed(digits)) => usize::from(digits),
    };

    let rounded = round_fixed(reduced, digits);
    let trimmed = trim_trailing_zeros(&rounded);

    let body = match options.separator.as_deref() {
        Some(separator) if !trimmed.contains('.') => group_thousands(trimmed, separator),
        _ => trimmed.to_string(),
    };

    Some(FormattedOutput { body, abbreviation })
}

/// Drop trailing fractional zeros, and the point when nothing remains after it.
fn trim_trailing_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// Insert `separator` between groups of three integer digits.
fn group_thousands(integer: &str, separator: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3 * separator.len());
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(digits: u8) -> FormatOptions {
        FormatOptions::default().with_precision(Precision::Fixed(digits))
    }

    fn body(input: impl Into<NumericInput>, options: &FormatOptions) -> String {
        format_number(input, options).expect("value formats").body
    }

    #[test]
    fn missing_inputs_produce_nothing() {
        let options = FormatOptions::default();
        assert_eq!(format_number(None::<f64>, &options), None);
        assert_eq!(format_number(NumericInput::Absent, &options), None);
        assert_eq!(format_number(f64::NAN, &options), None);
        assert_eq!(format_number(f64::INFINITY, &options), None);
        assert_eq!(format_number("abc", &options), None);
        assert_eq!(format_number("", &options), None);
    }

    #[test]
    fn zero_is_not_missing() {
        assert_eq!(body(0.0, &FormatOptions::default()), "0");
    }

    #[test]
    fn fixed_precision_trims_trailing_zeros() {
        assert_eq!(body(12.5, &fixed(2)), "12.5");
        assert_eq!(body(12.0, &fixed(2)), "12");
        assert_eq!(body(12.346, &fixed(2)), "12.35");
        assert_eq!(body(6.4, &fixed(0)), "6");
    }

    #[test]
    fn fixed_precision_never_exceeds_requested_digits() {
        for value in [0.1, 1.23456, 98.7654321, 0.000_123, 4321.987] {
            for digits in 0..6_u8 {
                let out = body(value, &fixed(digits).with_separator(None));
                let fraction = out.split('.').nth(1).map_or(0, str::len);
                assert!(fraction <= usize::from(digits), "{} at {} gave {}", value, digits, out);
            }
        }
    }

    #[test]
    fn abbreviation_boundaries() {
        let options = FormatOptions::default().with_abbreviation(true);

        let out = format_number(999.0, &options).unwrap();
        assert_eq!(out.body, "999");
        assert_eq!(out.abbreviation, None);

        let out = format_number(1000.0, &options).unwrap();
        assert_eq!(out.body, "1");
        assert_eq!(out.abbreviation_suffix(), Some("k"));

        let out = format_number(1_500_000.0, &options).unwrap();
        assert_eq!(out.body, "1.5");
        assert_eq!(out.abbreviation_suffix(), Some("m"));
    }

    #[test]
    fn abbreviation_always_uses_one_decimal() {
        let options = FormatOptions::default()
            .with_abbreviation(true)
            .with_precision(Precision::Fixed(3));
        assert_eq!(body(12_345_678.0, &options), "12.3");
        assert_eq!(body(1_250.0, &options), "1.3");
        assert_eq!(body(2_000_000_000.0, &options), "2");
    }

    #[test]
    fn abbreviation_respects_threshold() {
        let options = FormatOptions::default()
            .with_abbreviation(true)
            .with_abbreviation_threshold(100_000.0);
        let out = format_number(45_000.0, &options).unwrap();
        assert_eq!(out.body, "45,000");
        assert_eq!(out.abbreviation, None);
        assert_eq!(format_number(450_000.0, &options).unwrap().to_string(), "450k");
    }

    #[test]
    fn abbreviated_body_is_grouped_when_whole() {
        let options = FormatOptions::default().with_abbreviation(true);
        let out = format_number(1_234_000_000_000.0, &options).unwrap();
        assert_eq!(out.body, "1,234");
        assert_eq!(out.abbreviation_suffix(), Some("b"));
    }

    #[test]
    fn auto_precision_keeps_significant_digits() {
        let options = FormatOptions::default().with_auto_precision(100.0, 2);
        assert_eq!(body(0.0032, &options), "0.0032");
        assert_eq!(body(42.125, &options), "42.13");
        assert_eq!(body(1_234_567.89, &options), "1,234,568");
    }

    #[test]
    fn grouping_is_skipped_when_fraction_remains() {
        let options = fixed(1).with_separator(Some(","));
        assert_eq!(body(1234.5, &options), "1234.5");
        assert_eq!(body(1234.0, &options), "1,234");
    }

    #[test]
    fn grouping_with_custom_and_no_separator() {
        let options = fixed(0).with_separator(Some(" "));
        assert_eq!(body(1_234_567.0, &options), "1 234 567");
        assert_eq!(body(1_234_567.0, &fixed(0).with_separator(None)), "1234567");
        assert_eq!(body(-9_876_543.0, &fixed(0)), "-9,876,543");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(body(-42.0, &FormatOptions::default()), "-42");
        assert_eq!(body(-0.004, &fixed(2)), "0");
    }

    #[test]
    fn numeric_text_is_accepted() {
        assert_eq!(body("2500", &fixed(0)), "2,500");
        assert_eq!(body(String::from("0.25"), &fixed(2)), "0.25");
    }

    #[test]
    fn formatting_is_repeatable() {
        let options = FormatOptions::default().with_abbreviation(true);
        for value in [0.0, 17.2, 999.999, 65_432.1, -3.5, 7e9] {
            assert_eq!(format_number(value, &options), format_number(value, &options));
        }
    }

    #[test]
    fn group_thousands_positions() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("123456", ","), "123,456");
        assert_eq!(group_thousands("-1234567", "."), "-1.234.567");
    }

    #[test]
    fn trim_trailing_zeros_cases() {
        assert_eq!(trim_trailing_zeros("12.50"), "12.5");
        assert_eq!(trim_trailing_zeros("12.00"), "12");
        assert_eq!(trim_trailing_zeros("100"), "100");
        assert_eq!(trim_trailing_zeros("0.0"), "0");
    }
}
