//! k/m/b abbreviation of large magnitudes.

use std::fmt;

/// Magnitude suffix applied to an abbreviated number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abbreviation {
    /// Thousands, `k`.
    Thousand,
    /// Millions, `m`.
    Million,
    /// Billions, `b`.
    Billion,
}

impl Abbreviation {
    /// Rules in the order they are tried, largest first.
    pub const DESCENDING: [Abbreviation; 3] = [
        Abbreviation::Billion,
        Abbreviation::Million,
        Abbreviation::Thousand,
    ];

    /// The value one unit of this suffix stands for.
    pub fn divisor(self) -> f64 {
        match self {
            Abbreviation::Thousand => 1e3,
            Abbreviation::Million => 1e6,
            Abbreviation::Billion => 1e9,
        }
    }

    /// The suffix letter.
    pub fn suffix(self) -> &'static str {
        match self {
            Abbreviation::Thousand => "k",
            Abbreviation::Million => "m",
            Abbreviation::Billion => "b",
        }
    }
}

impl fmt::Display for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Reduce `value` by the largest rule it reaches, provided it also reaches `floor`.
///
/// Comparisons use the signed value, so negative numbers are returned
/// unchanged. Callers that want negatives abbreviated pass the magnitude.
pub fn abbreviate(value: f64, floor: f64) -> (f64, Option<Abbreviation>) {
    Abbreviation::DESCENDING
        .into_iter()
        .find(|rule| value >= rule.divisor() && value >= floor)
        .map_or((value, None), |rule| (value / rule.divisor(), Some(rule)))
}
