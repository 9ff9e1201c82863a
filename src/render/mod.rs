//! Decorated number rendering.
//!
//! Wraps [`format_number`] and splits the result into prefix, sign, body,
//! abbreviation suffix and literal suffix so each piece can be styled on
//! its own. The placeholder replaces everything when there is no value.

mod spans;
mod styled;
mod theme;

use std::fmt;

use crate::format::{format_number, FormatOptions, FormattedOutput, NumericInput};

pub use styled::write_styled;
pub use theme::{NumberPalette, Rgb, Theme};

/// Sign shown as its own piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl Sign {
    /// The sign character.
    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }

    fn of(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Sign::Plus)
        } else if value < 0.0 {
            Some(Sign::Minus)
        } else {
            None
        }
    }
}

/// How the sign of a value is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    /// Negative values keep their minus inside the body.
    #[default]
    Auto,
    /// Format the magnitude and show `+`/`-` as a separate piece. Zero gets no sign.
    Always,
}

/// What a piece of decorated output represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// Literal prefix.
    Prefix,
    /// Explicit sign.
    Sign(Sign),
    /// Digits.
    Body,
    /// k/m/b suffix.
    Abbreviation,
    /// Literal suffix.
    Suffix,
    /// Placeholder for a missing value.
    Placeholder,
}

/// One styleable piece of a decorated number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'a> {
    /// What the text is.
    pub kind: PieceKind,
    /// The text itself.
    pub text: &'a str,
}

/// A number ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratedNumber {
    /// A formatted value with its decorations.
    Value {
        /// Literal prefix.
        prefix: String,
        /// Explicit sign, only with [`SignDisplay::Always`].
        sign: Option<Sign>,
        /// Formatted digits and abbreviation.
        output: FormattedOutput,
        /// Literal suffix.
        suffix: String,
    },
    /// Placeholder shown instead of a missing value.
    Placeholder(String),
}

impl DecoratedNumber {
    /// Whether this is the placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, DecoratedNumber::Placeholder(_))
    }

    /// Non-empty pieces in display order.
    pub fn pieces(&self) -> Vec<Piece<'_>> {
        match self {
            DecoratedNumber::Placeholder(text) => vec![Piece {
                kind: PieceKind::Placeholder,
                text: text.as_str(),
            }],
            DecoratedNumber::Value {
                prefix,
                sign,
                output,
                suffix,
            } => {
                let mut pieces = Vec::with_capacity(5);
                if !prefix.is_empty() {
                    pieces.push(Piece {
                        kind: PieceKind::Prefix,
                        text: prefix.as_str(),
                    });
                }
                if let Some(sign) = sign {
                    pieces.push(Piece {
                        kind: PieceKind::Sign(*sign),
                        text: sign.as_str(),
                    });
                }
                pieces.push(Piece {
                    kind: PieceKind::Body,
                    text: output.body.as_str(),
                });
                if let Some(abbreviation) = output.abbreviation {
                    pieces.push(Piece {
                        kind: PieceKind::Abbreviation,
                        text: abbreviation.suffix(),
                    });
                }
                if !suffix.is_empty() {
                    pieces.push(Piece {
                        kind: PieceKind::Suffix,
                        text: suffix.as_str(),
                    });
                }
                pieces
            },
        }
    }
}

impl fmt::Display for DecoratedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.pieces() {
            f.write_str(piece.text)?;
        }
        Ok(())
    }
}

/// Format `input` and attach the decorations from `options`.
pub fn render_number(
    input: impl Into<NumericInput>,
    options: &FormatOptions,
    sign_display: SignDisplay,
) -> DecoratedNumber {
    let formatted = match sign_display {
        SignDisplay::Auto => format_number(input, options).map(|output| (None, output)),
        SignDisplay::Always => input
            .into()
            .value()
            .and_then(|value| format_number(value.abs(), options).map(|output| (Sign::of(value), output))),
    };

    match formatted {
        Some((sign, output)) => DecoratedNumber::Value {
            prefix: options.prefix.clone(),
            sign,
            output,
            suffix: options.suffix.clone(),
        },
        None => DecoratedNumber::Placeholder(options.placeholder.clone()),
    }
}
