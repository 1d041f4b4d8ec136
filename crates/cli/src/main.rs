mod plot;
mod store;

use self::{plot::Plot, store::StoreAction};
use axt_canvas::CanvasError;
use axt_easing::{EasingCurve, EasingError};
use axt_storage::StorageError;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "axt", version, about = "Easing curves, plotting and a small JSON store")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Lists catalog curves whose name contains FILTER.
    List {
        filter: Option<String>,
        /// Also print the CSS-style alias.
        #[arg(long)]
        css: bool,
    },
    /// Eases X, optionally mapping the result into [MIN, MAX].
    #[command(allow_negative_numbers = true)]
    Convert {
        curve: String,
        x: f64,
        #[arg(long, requires = "max")]
        min: Option<f64>,
        #[arg(long, requires = "min")]
        max: Option<f64>,
    },
    /// Finds the time at which CURVE reaches Y.
    #[command(allow_negative_numbers = true)]
    Invert { curve: String, y: f64 },
    /// Prints the cubic-Bézier approximation of CURVE.
    Points {
        curve: String,
        #[arg(long)]
        json: bool,
    },
    /// Draws CURVE as text, and optionally as a PNG.
    Plot {
        curve: String,
        #[arg(long, default_value_t = 48, value_parser = plot_size())]
        width: u16,
        #[arg(long, default_value_t = 16, value_parser = plot_size())]
        height: u16,
        #[arg(long)]
        png: Option<PathBuf>,
    },
    Store {
        #[arg(long, env = "AXT_STORE")]
        store: PathBuf,
        #[command(subcommand)]
        action: StoreAction,
    },
}

fn plot_size() -> clap::builder::RangedI64ValueParser<u16> {
    clap::value_parser!(u16).range(2..=i64::from(plot::MAX_SIZE))
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Easing(#[from] EasingError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    const fn tag(&self) -> &'static str {
        match self {
            Self::Easing(_) => " ERR/Easing",
            Self::Canvas(_) => " ERR/Canvas",
            Self::Storage(_) => " ERR/Storage",
            Self::Json(_) => " ERR/Json",
        }
    }
}

fn print_plot(curve: EasingCurve, plot: &Plot) {
    println!(
        "{} {}",
        curve.name().bright_green().bold(),
        curve.control_points().bright_blue()
    );

    for row in plot.rows() {
        println!("│{}", row.bright_blue());
    }

    println!("└{}", "─".repeat(plot.width()));
}

async fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::List { filter, css } => {
            for curve in axt_easing::list_curves(filter.as_deref().unwrap_or_default()) {
                if css {
                    println!(
                        "{:12} {}",
                        curve.name().bright_green(),
                        curve.css_name().bright_blue()
                    );
                } else {
                    println!("{}", curve.name().bright_green());
                }
            }
        }
        Command::Convert {
            curve,
            x,
            min,
            max,
        } => {
            let value = match (min, max) {
                (Some(min), Some(max)) => axt_easing::convert_in_range_named(&curve, x, min, max)?,
                _ => axt_easing::convert_named(&curve, x)?,
            };

            println!("{value}");
        }
        Command::Invert { curve, y } => println!("{}", axt_easing::invert_named(&curve, y)?),
        Command::Points { curve, json } => {
            let points = axt_easing::control_points_named(&curve)?;

            if json {
                println!("{}", serde_json::to_string(&points)?);
            } else {
                println!("{points}");
            }
        }
        Command::Plot {
            curve,
            width,
            height,
            png,
        } => {
            let curve = curve.parse::<EasingCurve>()?;
            let plot = Plot::new(curve, width, height)?;

            print_plot(curve, &plot);

            if let Some(path) = png {
                plot.save_png(&path)?;

                eprintln!(
                    "[{:18}] Saved plot to {}",
                    "INFO/Plot".bright_green(),
                    path.display().bright_blue().bold()
                );
            }
        }
        Command::Store { store, action } => store::run(store, action).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("[{:18}] {error}", error.tag().bright_red());

            ExitCode::FAILURE
        }
    }
}
