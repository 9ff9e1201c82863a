//! Number formatting.
//!
//! This module turns raw statistic values into display strings: automatic
//! or fixed precision, k/m/b abbreviation, and thousands grouping. It has no
//! dependency on any rendering layer; see [`crate::render`] for decoration.

mod abbreviation;
mod input;
mod number;
mod options;
mod precision;

pub use abbreviation::{abbreviate, Abbreviation};
pub use input::NumericInput;
pub use number::{format_number, FormattedOutput};
pub use options::{FormatOptions, Precision, MAX_PRECISION};
pub use precision::{auto_precision, round_fixed};
