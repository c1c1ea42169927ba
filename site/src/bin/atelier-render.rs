//! Static export of the portfolio page.
//!
//! Writes one self-contained HTML file (stylesheet inlined) that any static
//! host can serve. Logs go to stderr so `--content-json` output stays clean.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use atelier_site::{render_site, RenderOptions, SITE_CONTENT};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "atelier-render")]
#[command(about = "Render the 3D fashion portfolio to a static HTML file")]
#[command(version)]
struct Args {
    /// Output file
    #[arg(long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Pin the footer copyright year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Print the page content as JSON to stdout instead of rendering
    #[arg(long)]
    content_json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: &Args) -> Result<()> {
    if args.content_json {
        let json = serde_json::to_string_pretty(&SITE_CONTENT)
            .context("failed to serialize page content")?;
        println!("{json}");
        return Ok(());
    }

    let html = render_site(&RenderOptions { year: args.year });

    if let Some(dir) = args.out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(&args.out, &html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(path = %args.out.display(), bytes = html.len(), "wrote portfolio page");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
