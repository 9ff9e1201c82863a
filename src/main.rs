//! statfmt - format displacement statistics for display.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use statfmt::format::{FormatOptions, Precision};
use statfmt::render::{NumberPalette, SignDisplay, Theme};
use statfmt::report::{Report, ReportConfig};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "statfmt")]
#[command(about = "Format numbers for statistic displays", long_about = None)]
struct Args {
    /// Values to format; read one per line from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Fractional digits: 'auto' or a number from 0 to 100
    #[arg(long, default_value = "auto")]
    precision: Precision,

    /// Abbreviate thousands, millions and billions as k, m and b
    #[arg(long)]
    abbreviate: bool,

    /// Never abbreviate values below this
    #[arg(long, default_value_t = 0.0)]
    abbreviation_threshold: f64,

    /// Thousands separator
    #[arg(long, default_value = ",")]
    separator: String,

    /// Disable thousands grouping
    #[arg(long, conflicts_with = "separator")]
    no_separator: bool,

    /// Text before each number
    #[arg(long, default_value = "")]
    prefix: String,

    /// Text after each number
    #[arg(long, default_value = "")]
    suffix: String,

    /// Text shown for missing or invalid values
    #[arg(long, default_value = "N/A")]
    placeholder: String,

    /// Auto precision shows no decimals above this magnitude
    #[arg(long, default_value_t = 100.0)]
    large_number_threshold: f64,

    /// Auto precision for values between 1 and the large number threshold
    #[arg(long, default_value_t = 2)]
    default_precision: u8,

    /// Show '+' or '-' before every non-zero value
    #[arg(long)]
    sign: bool,

    /// Right-align output to the widest value
    #[arg(long)]
    align: bool,

    /// Fail on values that are not numbers instead of printing the placeholder
    #[arg(long)]
    strict: bool,

    /// When to use terminal colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Color theme: dark or light
    #[arg(long, default_value = "dark")]
    theme: Theme,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn report_config(&self) -> ReportConfig {
        let separator = (!self.no_separator).then_some(self.separator.as_str());
        let format = FormatOptions::new()
            .with_precision(self.precision)
            .with_abbreviation(self.abbreviate)
            .with_abbreviation_threshold(self.abbreviation_threshold)
            .with_separator(separator)
            .with_prefix(self.prefix.as_str())
            .with_suffix(self.suffix.as_str())
            .with_placeholder(self.placeholder.as_str())
            .with_auto_precision(self.large_number_threshold, self.default_precision);

        ReportConfig {
            format,
            sign_display: if self.sign {
                SignDisplay::Always
            } else {
                SignDisplay::Auto
            },
            align: self.align,
            strict: self.strict,
            palette: NumberPalette::from_theme(self.theme),
        }
    }

    fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting statfmt");
    }

    let values = if args.values.is_empty() {
        tracing::debug!("Reading values from stdin");
        io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
    } else {
        args.values.clone()
    };

    let config = args.report_config();
    let report = match Report::build(&values, &config) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("Formatting failed: {}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.use_color() {
        report.write_colored(&mut out, config.align, &config.palette)?;
    } else {
        report.write_plain(&mut out, config.align)?;
    }
    out.flush()?;

    if args.log.is_some() {
        tracing::info!("statfmt exited");
    }

    Ok(())
}
