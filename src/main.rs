// SPDX-License-Identifier: PMPL-1.0-or-later
//! Seobot CLI - On-Page SEO Analysis Bot
//!
//! Part of the gitbot-fleet ecosystem.

use clap::{Parser, Subcommand, ValueEnum};
use seobot::report::{generate_report, OutputFormat};
use seobot::{fetcher, fleet, SuggestionKind};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// On-page SEO analysis bot for the gitbot-fleet
#[derive(Parser)]
#[command(name = "seobot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL through the proxy chain and analyze it
    Url {
        /// Address of the page to analyze
        url: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Analyze a saved HTML file (`-` reads stdin)
    File {
        /// Path to the HTML file
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Run as a fleet member (machine-readable findings)
    Fleet {
        /// URL or file path to analyze
        target: String,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("seobot=debug")
    } else {
        EnvFilter::new("seobot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Url {
            url,
            format,
            output,
            verbose,
        } => {
            init_logging(verbose);
            let html = load_url(&url).await?;
            let report = seobot::analyze_html(&html);
            write_output(&generate_report(&report, format.into()), output.as_deref())?;

            if has_blocking_suggestions(&report) {
                std::process::exit(1);
            }
        }

        Commands::File {
            file,
            format,
            output,
            verbose,
        } => {
            init_logging(verbose);
            let html = load_file(&file)?;
            let report = seobot::analyze_html(&html);
            write_output(&generate_report(&report, format.into()), output.as_deref())?;

            if has_blocking_suggestions(&report) {
                std::process::exit(1);
            }
        }

        Commands::Fleet { target, verbose } => {
            init_logging(verbose);
            let html = if target.starts_with("http://") || target.starts_with("https://") {
                load_url(&target).await?
            } else {
                load_file(Path::new(&target))?
            };
            let report = seobot::analyze_html(&html);
            let findings = fleet::findings_from_report(&report);
            println!("{}", serde_json::to_string_pretty(&findings)?);

            if findings.blocks_release() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Title and meta description failures are the blocking class
fn has_blocking_suggestions(report: &seobot::AnalysisReport) -> bool {
    report
        .suggestions
        .iter()
        .any(|s| s.kind == SuggestionKind::Error)
}

async fn load_url(url: &str) -> anyhow::Result<String> {
    let client = reqwest::Client::new();
    let html = fetcher::fetch_website_content(&client, url).await?;
    fetcher::validate_html(&html)?;
    Ok(html)
}

fn load_file(path: &Path) -> anyhow::Result<String> {
    let html = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    fetcher::validate_html(&html)?;
    Ok(html)
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
