//! Nano Filters CLI
//!
//! Build tool for minimizing filter lists and refreshing third-party lists.

mod jobs;
mod layout;
mod lists;
mod update;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::{Parser, Subcommand};

use nf_core::sanitize::DEFAULT_PATTERN;
use nf_core::{parse_header, validate_download, FileKind, Sanitizer};

use crate::jobs::{build_jobs, run_jobs, JobSelection};
use crate::layout::BuildLayout;
use crate::update::{run_update, UpdateOptions};

#[derive(Parser)]
#[command(name = "nf-cli")]
#[command(about = "Nano Filters build tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimize filter lists, resources, and hosts files
    Minimize {
        /// Repository root
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Only build lists maintained in this repository
        #[arg(long)]
        nano_only: bool,

        /// Also build the Public Suffix List and asset manifest
        #[arg(long, conflicts_with = "nano_only")]
        all: bool,

        /// Omit the build timestamp so unchanged input gives identical output
        #[arg(long)]
        stable: bool,
    },

    /// Download third-party lists
    Update {
        /// Repository root
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// JSON file with `[{ "name", "url" }]` replacing the built-in table
        #[arg(short, long)]
        sources: Option<PathBuf>,

        /// Pause between downloads
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },

    /// Remove unwanted entries from a downloaded list, in place
    Sanitize {
        /// List to sanitize (defaults to ThirdParty/MalwareDomain1.txt)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Repository root
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Case-insensitive pattern of lines to remove
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        pattern: String,
    },

    /// Show the header of a built file
    Info {
        /// Built file to inspect
        #[arg(short, long)]
        input: PathBuf,

        /// File kind: filter, hosts, resource, or psl
        #[arg(short, long, default_value = "filter")]
        kind: String,
    },

    /// Check that a downloaded file is not an HTML error page
    Validate {
        /// File to validate
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Minimize {
            root,
            nano_only,
            all,
            stable,
        } => cmd_minimize(root, JobSelection { nano_only, all }, stable),
        Commands::Update {
            root,
            sources,
            delay_ms,
        } => run_update(UpdateOptions {
            root,
            sources,
            delay: Duration::from_millis(delay_ms),
        }),
        Commands::Sanitize {
            input,
            root,
            pattern,
        } => cmd_sanitize(input, root, &pattern),
        Commands::Info { input, kind } => cmd_info(&input, &kind),
        Commands::Validate { input } => cmd_validate(&input),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn cmd_minimize(root: PathBuf, selection: JobSelection, stable: bool) -> Result<(), String> {
    let start = Instant::now();
    let layout = BuildLayout::new(root);
    let generated_at = if stable { None } else { Some(Utc::now()) };

    let jobs = build_jobs(&layout, selection, generated_at);
    log::info!("Building {} file(s) in '{}'", jobs.len(), layout.root().display());

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to start tokio runtime: {}", e))?;
    let done = runtime.block_on(run_jobs(jobs))?;

    log::info!(
        "Done: {} file(s) in {:.1}ms",
        done,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn cmd_sanitize(input: Option<PathBuf>, root: PathBuf, pattern: &str) -> Result<(), String> {
    let input = input.unwrap_or_else(|| BuildLayout::new(root).third_party_dir().join("MalwareDomain1.txt"));
    let sanitizer = Sanitizer::new(pattern).map_err(|e| e.to_string())?;

    let content = fs::read_to_string(&input)
        .map_err(|e| format!("Failed to read '{}': {}", input.display(), e))?;
    let sanitized = sanitizer.sanitize(&content);
    fs::write(&input, &sanitized.text)
        .map_err(|e| format!("Failed to write '{}': {}", input.display(), e))?;

    log::info!(
        "Sanitized '{}': {} line(s) removed",
        input.display(),
        sanitized.removed.len()
    );
    Ok(())
}

fn cmd_info(input: &Path, kind: &str) -> Result<(), String> {
    let kind = FileKind::from_name(kind).ok_or_else(|| format!("Unknown file kind '{}'", kind))?;
    let content = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read '{}': {}", input.display(), e))?;

    let header = parse_header(&content, kind);
    let field = |v: Option<&str>| v.unwrap_or("-").to_string();

    println!("File: {}", input.display());
    println!("  Title:       {}", field(header.title.as_deref()));
    println!(
        "  Expires:     {}",
        header
            .expires_days
            .map(|d| format!("{} days", d))
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Cached:      {}", field(header.cached.as_deref()));
    println!("  License:     {}", field(header.license.as_deref()));
    println!("  Source:      {}", field(header.source.as_deref()));

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), String> {
    let bytes = fs::read(input)
        .map_err(|e| format!("Failed to read '{}': {}", input.display(), e))?;

    validate_download(&input.display().to_string(), &bytes).map_err(|e| e.to_string())?;

    println!("'{}' looks like a plain-text list", input.display());
    println!("  Size:        {} bytes", bytes.len());
    Ok(())
}
