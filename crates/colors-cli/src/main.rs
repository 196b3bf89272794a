//! colors - Color conversion CLI
//!
//! Converts a single color between XYZ, xyY, CIELab, CIELuv, LCh, sRGB and HSV.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "colors")]
#[command(author, version, about = "Color conversion between common color spaces")]
#[command(long_about = "
Converts colors between XYZ, xyY, CIELab, CIELuv, LCh, sRGB and HSV.
Space names are case-insensitive. XYZ is the hub; D65 is the white point.

Examples:
  colors convert sRGB 1 0 0 --to CIELab     # sRGB red in Lab
  colors convert lab 50 20 -30 --to hsv -p 4
  colors convert XYZ 0.2 0.3 0.4 --to LCh --json
  colors route HSV LCh                      # HSV -> sRGB -> XYZ -> CIELab -> LCh
  colors spaces                             # List spaces and components
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity (-v debug, -vv trace); RUST_LOG applies when absent
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one color to another space
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show the conversion hops between two spaces
    #[command(visible_alias = "r")]
    Route(RouteArgs),

    /// List supported spaces
    Spaces,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source space (e.g. sRGB, CIELab, xyY)
    space: String,

    /// Source coordinates, in component order
    #[arg(num_args = 3, value_names = ["C0", "C1", "C2"], allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Target space
    #[arg(short, long)]
    to: String,

    /// Decimal places in the plain output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Print JSON instead of `SPACE(c0, c1, c2)`
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RouteArgs {
    /// Source space
    from: String,

    /// Target space
    to: String,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Route(args) => commands::route::run(args),
        Commands::Spaces => commands::spaces::run(),
    }
}
