//! statfmt - display formatting for displacement statistics.
//!
//! statfmt turns raw figures (people displaced, events recorded, conflict
//! and disaster totals) into the strings shown on dashboards and embedded
//! widgets, and renders them as styled terminal text.
//!
//! # Features
//!
//! - Automatic or fixed decimal precision
//! - k/m/b abbreviation with a configurable floor
//! - Thousands grouping with any separator
//! - Prefix, suffix and explicit sign decorations
//! - Placeholder for missing values
//! - ratatui and crossterm adapters with Gruvbox themes
//!
//! # Example
//!
//! ```
//! use statfmt::format::{format_number, FormatOptions};
//! use statfmt::render::{render_number, SignDisplay};
//!
//! let options = FormatOptions::default().with_abbreviation(true);
//!
//! let output = format_number(1_500_000.0, &options).unwrap();
//! assert_eq!(output.body, "1.5");
//! assert_eq!(output.abbreviation_suffix(), Some("m"));
//!
//! let rendered = render_number(-42.0, &options, SignDisplay::Always);
//! assert_eq!(rendered.to_string(), "-42");
//!
//! let missing = render_number(None::<f64>, &options, SignDisplay::Auto);
//! assert_eq!(missing.to_string(), "N/A");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod error;
pub mod format;
pub mod render;
pub mod report;

pub use error::{Result, StatfmtError};
pub use format::{format_number, FormatOptions, FormattedOutput, NumericInput, Precision};
pub use render::{render_number, DecoratedNumber, SignDisplay};
