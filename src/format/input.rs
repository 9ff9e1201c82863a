//! Raw inputs accepted by the formatter.

/// A value that may or may not hold a usable number.
///
/// Absent input is distinct from zero: it always renders as the placeholder.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericInput {
    /// No value.
    #[default]
    Absent,
    /// A numeric value, possibly NaN or infinite.
    Number(f64),
    /// Text that may parse to a number.
    Text(String),
}

impl NumericInput {
    /// The finite value held by this input, if any.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Absent => return None,
            NumericInput::Number(n) => *n,
            NumericInput::Text(text) => parse_number(text)?,
        };
        value.is_finite().then_some(value)
    }

    /// Whether the input holds no usable number.
    pub fn is_missing(&self) -> bool {
        self.value().is_none()
    }
}

/// Parse trimmed text as a decimal number. Empty text is missing.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<u64> for NumericInput {
    fn from(value: u64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(NumericInput::Absent, Into::into)
    }
}
