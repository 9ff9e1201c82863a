//! Formatting options.

use std::fmt;
use std::str::FromStr;

use crate::error::StatfmtError;

/// Largest fixed precision accepted, matching fixed-point conversion limits.
pub const MAX_PRECISION: u8 = 100;

/// Number of fractional digits to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Pick digits from the magnitude of the value.
    #[default]
    Auto,
    /// Always round to this many digits.
    Fixed(u8),
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Auto => f.write_str("auto"),
            Precision::Fixed(digits) => write!(f, "{}", digits),
        }
    }
}

impl FromStr for Precision {
    type Err = StatfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Precision::Auto);
        }
        match trimmed.parse::<u8>() {
            Ok(digits) if digits <= MAX_PRECISION => Ok(Precision::Fixed(digits)),
            _ => Err(StatfmtError::invalid_precision(s, MAX_PRECISION)),
        }
    }
}

/// Configuration for a single formatting call.
///
/// Every threshold that affects the output lives here, so the result of
/// [`format_number`](super::format_number) depends only on its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Fractional digits, fixed or automatic.
    pub precision: Precision,
    /// Reduce large magnitudes to k/m/b.
    pub abbreviate: bool,
    /// Values below this floor are never abbreviated.
    pub abbreviation_threshold: f64,
    /// Thousands separator, `None` disables grouping.
    pub separator: Option<String>,
    /// Literal text before the number.
    pub prefix: String,
    /// Literal text after the number.
    pub suffix: String,
    /// Shown instead of the number when the input is missing or invalid.
    pub placeholder: String,
    /// Above this magnitude, auto precision shows no decimals.
    pub large_number_threshold: f64,
    /// Auto precision for values between 1 and the large number threshold.
    pub default_precision: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: Precision::Auto,
            abbreviate: false,
            abbreviation_threshold: 0.0,
            separator: Some(",".to_string()),
            prefix: String::new(),
            suffix: String::new(),
            placeholder: "N/A".to_string(),
            large_number_threshold: 100.0,
            default_precision: 2,
        }
    }
}

impl FormatOptions {
    /// Create options with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the precision.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Enable or disable k/m/b abbreviation.
    pub fn with_abbreviation(mut self, abbreviate: bool) -> Self {
        self.abbreviate = abbreviate;
        self
    }

    /// Set the floor below which abbreviation never applies.
    pub fn with_abbreviation_threshold(mut self, threshold: f64) -> Self {
        self.abbreviation_threshold = threshold;
        self
    }

    /// Set the grouping separator, `None` to disable grouping.
    pub fn with_separator(mut self, separator: Option<&str>) -> Self {
        self.separator = separator.map(str::to_string);
        self
    }

    /// Set the literal prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the literal suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the placeholder for missing values.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the thresholds used by automatic precision.
    pub fn with_auto_precision(mut self, large_number_threshold: f64, default_precision: u8) -> Self {
        self.large_number_threshold = large_number_threshold;
        self.default_precision = default_precision;
        self
    }
}
