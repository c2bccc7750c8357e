//! marker-points CLI: print the normalized coordinates of marker pixels.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use marker_points::core::{CoordMode, ExtractParams, Rgba};
use marker_points::extract::{extract_from_image, load_rgba, ExtractError};
use marker_points::ExtractReport;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

const MODE_HELP: &str = "\
Modes:
  gl   origin at the image center, y up, range [-1, 1]; prints `x, y, 0.0`
  img  origin at the top-left pixel, y down, range [0, 1); prints `x, y`";

#[derive(Parser, Debug)]
#[command(name = "marker-points")]
#[command(about = "Extract marker points of one exact color (default #00ff00) from an image")]
#[command(after_help = MODE_HELP)]
#[command(version)]
struct Cli {
    /// Output coordinate convention: `gl` or `img`.
    mode: Option<String>,

    /// Path to the input image.
    image: Option<PathBuf>,

    /// Marker color as hex `RRGGBB` (alpha is always ff).
    color: Option<String>,

    /// What to print on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write a JSON report to this path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log more to stderr (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One comma-separated line per point.
    Text,
    /// A JSON report with pixel and normalized coordinates.
    Json,
}

fn init_logging(cli: &Cli) {
    #[cfg(feature = "tracing")]
    {
        let _ = cli;
        marker_points::core::init_tracing(false);
    }
    #[cfg(not(feature = "tracing"))]
    {
        let level = marker_points::core::level_from_verbosity(cli.verbose, cli.quiet);
        // Only fails when another logger is already installed.
        let _ = marker_points::core::init_with_level(level);
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let (Some(mode), Some(image)) = (cli.mode.as_deref(), cli.image.as_ref()) else {
        // Missing positionals are a help request, not a failure.
        Cli::command().print_help()?;
        return Ok(());
    };

    let mode: CoordMode = match mode.parse() {
        Ok(mode) => mode,
        Err(err) => Cli::command().error(ErrorKind::InvalidValue, err).exit(),
    };
    let target = match cli.color.as_deref() {
        Some(hex) => Rgba::from_hex(hex).map_err(ExtractError::from)?,
        None => Rgba::DEFAULT_TARGET,
    };
    let params = ExtractParams { mode, target };

    run_extract(&cli, image, params)
}

fn run_extract(cli: &Cli, image: &Path, params: ExtractParams) -> CliResult<()> {
    let img = load_rgba(image)?;
    let markers = extract_from_image(&img, &params);
    log::info!("{} marker pixels matched {}", markers.len(), params.target);

    let report = ExtractReport::new(
        image.display().to_string(),
        img.width() as usize,
        img.height() as usize,
        params,
        markers,
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        OutputFormat::Text => {
            for marker in &report.points {
                writeln!(out, "{}", marker.point)?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", report.to_json_string()?)?,
    }
    out.flush()?;

    if let Some(path) = &cli.out {
        report.write_json(path)?;
        log::info!("report written to {}", path.display());
    }
    Ok(())
}
