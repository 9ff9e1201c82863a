//! Column reports of formatted values.
//!
//! A report formats a list of raw values with shared options and writes them
//! one per line, optionally right-aligned and colored.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::{Result, StatfmtError};
use crate::format::{FormatOptions, NumericInput};
use crate::render::{render_number, write_styled, DecoratedNumber, NumberPalette, SignDisplay};

/// Configuration for building and writing a report.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Options applied to every value.
    pub format: FormatOptions,
    /// How signs are shown.
    pub sign_display: SignDisplay,
    /// Right-align values to the widest entry.
    pub align: bool,
    /// Reject values that are present but not numbers.
    pub strict: bool,
    /// Colors used when writing colored output.
    pub palette: NumberPalette,
}

/// Formatted values in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    rows: Vec<DecoratedNumber>,
}

impl Report {
    /// Format every raw value.
    ///
    /// Blank values become the placeholder. In strict mode any other value
    /// without a finite number is an error naming its 1-based position.
    pub fn build<I, S>(values: I, config: &ReportConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = Vec::new();
        for (index, raw) in values.into_iter().enumerate() {
            let raw = raw.as_ref();
            let input = NumericInput::from(raw);

            if input.is_missing() {
                if config.strict && !raw.trim().is_empty() {
                    return Err(StatfmtError::invalid_number(index + 1, raw));
                }
                tracing::debug!("Value {} ('{}') shown as placeholder", index + 1, raw);
            }

            rows.push(render_number(input, &config.format, config.sign_display));
        }

        tracing::info!(
            "Formatted {} values ({} placeholders)",
            rows.len(),
            rows.iter().filter(|row| row.is_placeholder()).count()
        );
        Ok(Self { rows })
    }

    /// Formatted rows.
    pub fn rows(&self) -> &[DecoratedNumber] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display width of the widest row.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.to_string().width())
            .max()
            .unwrap_or(0)
    }

    /// Write rows as plain text, one per line.
    pub fn write_plain<W: Write>(&self, out: &mut W, align: bool) -> Result<()> {
        let width = if align { self.width() } else { 0 };
        for row in &self.rows {
            let text = row.to_string();
            writeln!(out, "{}{}", padding(&text, width), text)?;
        }
        Ok(())
    }

    /// Write rows with terminal colors, one per line.
    pub fn write_colored<W: Write>(&self, out: &mut W, align: bool, palette: &NumberPalette) -> Result<()> {
        let width = if align { self.width() } else { 0 };
        for row in &self.rows {
            write!(out, "{}", padding(&row.to_string(), width))?;
            write_styled(out, row, palette)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Spaces needed to right-align `text` in `width` columns.
fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Precision;

    fn config() -> ReportConfig {
        ReportConfig {
            format: FormatOptions::default().with_abbreviation(true),
            ..ReportConfig::default()
        }
    }

    fn plain(report: &Report, align: bool) -> String {
        let mut out = Vec::new();
        report.write_plain(&mut out, align).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn formats_each_value() {
        let report = Report::build(["1500000", "999", "", "abc"], &config()).unwrap();
        assert_eq!(report.len(), 4);
        assert_eq!(plain(&report, false), "1.5m\n999\nN/A\nN/A\n");
    }

    #[test]
    fn aligns_to_widest() {
        let report = Report::build(["5", "12345", "-"], &ReportConfig::default()).unwrap();
        assert_eq!(report.width(), 6);
        assert_eq!(plain(&report, true), "     5\n12,345\n   N/A\n");
    }

    #[test]
    fn alignment_counts_display_width() {
        let mut config = ReportConfig::default();
        config.format = config.format.with_prefix("€").with_precision(Precision::Fixed(0));
        let report = Report::build(["1", "100"], &config).unwrap();
        assert_eq!(plain(&report, true), "  €1\n€100\n");
    }

    #[test]
    fn strict_rejects_text() {
        let config = ReportConfig {
            strict: true,
            ..config()
        };
        let err = Report::build(["1", "", "two"], &config).unwrap_err();
        assert!(matches!(err, StatfmtError::InvalidNumber { line: 3, .. }));
    }

    #[test]
    fn strict_allows_blank_values() {
        let config = ReportConfig {
            strict: true,
            ..config()
        };
        let report = Report::build(["", "  "], &config).unwrap();
        assert!(report.rows().iter().all(DecoratedNumber::is_placeholder));
    }

    #[test]
    fn colored_output_pads_before_styles() {
        let report = Report::build(["1", "1000000"], &config()).unwrap();
        let mut out = Vec::new();
        report
            .write_colored(&mut out, true, &NumberPalette::default())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(' '));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn empty_report() {
        let report = Report::build(Vec::<String>::new(), &ReportConfig::default()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.width(), 0);
        assert_eq!(plain(&report, true), "");
    }
}
