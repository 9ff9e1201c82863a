//! ratatui adapter.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{DecoratedNumber, NumberPalette, PieceKind};

impl PieceKind {
    /// Style for this piece under `palette`.
    pub fn style(self, palette: &NumberPalette) -> Style {
        let style = Style::default().fg(palette.color(self).into());
        match self {
            PieceKind::Abbreviation => style.add_modifier(Modifier::BOLD),
            PieceKind::Placeholder => style.add_modifier(Modifier::ITALIC),
            _ => style,
        }
    }
}

impl DecoratedNumber {
    /// Build a styled line, one span per piece.
    pub fn to_line(&self, palette: &NumberPalette) -> Line<'static> {
        let spans: Vec<Span<'static>> = self
            .pieces()
            .into_iter()
            .map(|piece| Span::styled(piece.text.to_string(), piece.kind.style(palette)))
            .collect();
        Line::from(spans)
    }
}
