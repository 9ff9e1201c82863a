//! crossterm adapter for writing colored numbers to a terminal.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{PrintStyledContent, Stylize};

use super::{DecoratedNumber, NumberPalette, PieceKind};

/// Queue a decorated number as colored text. The caller flushes.
pub fn write_styled<W: Write>(
    out: &mut W,
    number: &DecoratedNumber,
    palette: &NumberPalette,
) -> std::io::Result<()> {
    for piece in number.pieces() {
        let content = piece.text.with(palette.color(piece.kind).into());
        let content = match piece.kind {
            PieceKind::Abbreviation => content.bold(),
            PieceKind::Placeholder => content.italic(),
            _ => content,
        };
        queue!(out, PrintStyledContent(content))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatOptions;
    use crate::render::{render_number, SignDisplay};

    fn strip_ansi(bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        let mut plain = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {},
                (false, c) => plain.push(c),
            }
        }
        plain
    }

    #[test]
    fn writes_all_pieces_in_order() {
        let options = FormatOptions::default().with_abbreviation(true).with_prefix("~");
        let number = render_number(2_000_000.0, &options, SignDisplay::Always);
        let mut out = Vec::new();
        write_styled(&mut out, &number, &NumberPalette::default()).unwrap();

        assert_eq!(strip_ansi(&out), "~+2m");
    }

    #[test]
    fn writes_placeholder() {
        let number = render_number("n/a", &FormatOptions::default().with_placeholder("--"), SignDisplay::Auto);
        let mut out = Vec::new();
        write_styled(&mut out, &number, &NumberPalette::default()).unwrap();
        assert_eq!(strip_ansi(&out), "--");
    }
}
