//! Fractional digit selection and fixed-point rounding.

use super::options::MAX_PRECISION;

/// Choose how many fractional digits to show for `value`.
///
/// Fractions keep enough digits to reach their first significant figure
/// plus one, large numbers show none, and everything in between uses
/// `default_precision`.
pub fn auto_precision(value: Option<f64>, large_number_threshold: f64, default_precision: u8) -> u8 {
    let value = match value {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => return 0,
    };
    let magnitude = value.abs();

    if magnitude < 1.0 {
        let digits = (-magnitude.log10()).ceil() + 1.0;
        digits.min(f64::from(MAX_PRECISION)) as u8
    } else if magnitude > large_number_threshold {
        0
    } else {
        default_precision
    }
}

/// Render `value` with exactly `digits` fractional digits.
///
/// Ties round away from zero. A result that rounds to zero carries no
/// minus sign.
pub fn round_fixed(value: f64, digits: usize) -> String {
    let magnitude = value.abs();

    let mut text = if exact_fraction_digits(magnitude) == digits + 1 {
        // The expansion stops one place past the kept digits, on a 5.
        let mut exact = format!("{:.*}", digits + 1, magnitude);
        exact.pop();
        if exact.ends_with('.') {
            exact.pop();
        }
        increment_last_digit(&exact)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    if value.is_sign_negative() && text.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        text.insert(0, '-');
    }
    text
}

/// Number of digits after the point in the exact decimal expansion of `value`.
fn exact_fraction_digits(value: f64) -> usize {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let bits = value.abs().to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);

    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased_exponent - 1075)
    };
    // value = mantissa * 2^exponent; an odd mantissa over 2^k has k decimals.
    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent >= 0 {
        0
    } else {
        exponent.unsigned_abs() as usize
    }
}

/// Add one unit in the last place of a plain decimal string.
fn increment_last_digit(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                return chars.into_iter().collect();
            },
        }
    }
    chars.insert(0, '1');
    chars.into_iter().collect()
}
