//! Web particles CLI - count and classify particles trapped in a spider web photo.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use web_particles::{Particle, Summary, analyze_with_particles, load_rgb, save_rgb};

/// Detect particles in a spider web photo and classify them by size.
#[derive(Debug, Parser)]
#[command(name = "web-particles", version, about)]
struct Cli {
    /// Photo to analyze (png, jpg or jpeg).
    input: PathBuf,

    /// Write the annotated image here (png, jpg or jpeg).
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the summary and every particle as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    particles: &'a [Particle],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let image = load_rgb(&cli.input)
        .with_context(|| format!("cannot analyze {}", cli.input.display()))?;

    let analysis = analyze_with_particles(&image);
    info!(
        input = %cli.input.display(),
        particles = analysis.summary.total,
        "analysis complete"
    );

    if let Some(output) = &cli.output {
        save_rgb(&analysis.annotated, output).context("cannot write annotated image")?;
        info!(output = %output.display(), "annotated image written");
    }

    if cli.json {
        let report = JsonReport {
            summary: &analysis.summary,
            particles: &analysis.particles,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", text_report(&analysis.summary));
    }

    Ok(())
}

fn text_report(summary: &Summary) -> String {
    format!(
        "Coarse    {}\n\
         Medium    {}\n\
         Fine      {}\n\
         Total     {}\n\
         Avg Size  {} px\n\
         \n\
         C  Coarse  >50px\n\
         M  Medium  20-50px\n\
         F  Fine    <20px\n",
        summary.coarse, summary.medium, summary.fine, summary.total, summary.avg
    )
}
