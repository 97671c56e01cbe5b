//! `rectangles`: intersections, containment and adjacency of two rectangles.
//!
//! ```text
//! rectangles --rect1 0 10 5 5 --rect2 3 8 5 5 -i -c -a
//! ```
//!
//! Results go to stdout and logs to stderr. The exit status is 1 when the
//! input is invalid or the configuration cannot be loaded.

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use output::Renderer;
use rectangles_core::application::CollisionInteractor;
use rectangles_core::{init_logging, ConfigLoader};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Runs one query, writing the report to `out` or the violations to `err`.
///
/// Configuration and logging failures are returned, not written, so that they
/// are reported exactly once by `main`.
fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> Result<ExitCode> {
    let mut config = ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.to_lowercase();
    }
    init_logging(&config.logging, false).context("failed to initialize logging")?;

    let format = cli.format.unwrap_or(config.output.format);
    let renderer = Renderer::new(format, config.output.precision);
    let color = config.output.color;

    let query = cli.query();
    tracing::debug!(?query, "executing collision query");

    match CollisionInteractor::new().execute(&query) {
        Ok(report) => {
            renderer
                .with_color(color.enabled(atty::is(atty::Stream::Stdout)))
                .render_report(out, &report)
                .context("failed to write report")?;
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(violations) => {
            tracing::info!(%violations, "invalid input");
            renderer
                .with_color(color.enabled(atty::is(atty::Stream::Stderr)))
                .render_violations(err, &violations)
                .context("failed to write violations")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
