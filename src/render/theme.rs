//! Color themes for decorated numbers.

use std::fmt;
use std::str::FromStr;

use super::{PieceKind, Sign};

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" | "gruvbox-dark" => Ok(Theme::GruvboxDark),
            "light" | "gruvbox-light" => Ok(Theme::GruvboxLight),
            other => Err(format!("unknown theme '{}', expected dark or light", other)),
        }
    }
}

/// A 24-bit color usable by both terminal backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for ratatui::style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        ratatui::style::Color::Rgb(r, g, b)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        crossterm::style::Color::Rgb { r, g, b }
    }
}

/// Colors for each piece of a decorated number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPalette {
    /// Literal prefix color.
    pub prefix: Rgb,
    /// `+` sign color.
    pub positive: Rgb,
    /// `-` sign color.
    pub negative: Rgb,
    /// Digits color.
    pub body: Rgb,
    /// Abbreviation suffix color.
    pub abbreviation: Rgb,
    /// Literal suffix color.
    pub suffix: Rgb,
    /// Placeholder color.
    pub placeholder: Rgb,
}

impl NumberPalette {
    /// Create color palette from theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                prefix: Rgb(168, 153, 132),
                positive: Rgb(184, 187, 38),
                negative: Rgb(251, 73, 52),
                body: Rgb(235, 219, 178),
                abbreviation: Rgb(251, 184, 108),
                suffix: Rgb(168, 153, 132),
                placeholder: Rgb(146, 131, 116),
            },
            Theme::GruvboxLight => Self {
                prefix: Rgb(124, 111, 100),
                positive: Rgb(121, 116, 14),
                negative: Rgb(157, 0, 6),
                body: Rgb(60, 56, 54),
                abbreviation: Rgb(175, 58, 3),
                suffix: Rgb(124, 111, 100),
                placeholder: Rgb(146, 131, 116),
            },
        }
    }

    /// Color for a piece.
    pub fn color(&self, kind: PieceKind) -> Rgb {
        match kind {
            PieceKind::Prefix => self.prefix,
            PieceKind::Sign(Sign::Plus) => self.positive,
            PieceKind::Sign(Sign::Minus) => self.negative,
            PieceKind::Body => self.body,
            PieceKind::Abbreviation => self.abbreviation,
            PieceKind::Suffix => self.suffix,
            PieceKind::Placeholder => self.placeholder,
        }
    }
}

impl Default for NumberPalette {
    fn default() -> Self {
        Self::from_theme(Theme::default())
    }
}
