//! javaimport-cli: Command-line front-end for the javaimport package filter.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use javaimport_core::{paths, Config};
use javaimport_filter::PathFilter;
use serde::Serialize;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "javaimport")]
#[command(about = "Package filter for Java classpath indexing", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (default: $JAVAIMPORT_CONFIG or ~/.config/javaimport/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Packages to exclude (comma-separated, repeatable)
    #[arg(short, long, global = true)]
    exclude: Vec<String>,

    /// Packages to keep even when excluded (comma-separated, repeatable)
    #[arg(short, long, global = true)]
    include: Vec<String>,

    /// Verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled exclude and include patterns
    Patterns,

    /// Filter class/source paths (arguments, or stdin one per line)
    Check {
        /// Paths relative to their classpath root, e.g. java/lang/String.class
        paths: Vec<String>,

        /// Output format (plain, json, table)
        #[arg(short, long, default_value = "plain")]
        format: String,

        /// Print rejected paths instead of kept ones
        #[arg(long)]
        rejected: bool,
    },
}

#[derive(Serialize)]
struct Decision<'a> {
    path: &'a str,
    keep: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    javaimport_core::logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Patterns) => {
            let filter = build_filter(cli.config.as_deref(), &cli.exclude, &cli.include)?;
            patterns(&filter)?;
        }
        Some(Commands::Check {
            paths: ref candidates,
            ref format,
            rejected,
        }) => {
            let filter = build_filter(cli.config.as_deref(), &cli.exclude, &cli.include)?;
            check(&filter, candidates, format, rejected)?;
        }
        None => {
            println!("javaimport v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn patterns(filter: &PathFilter) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "exclude: {}", filter.exclude_pattern())?;
    writeln!(out, "include: {}", filter.include_pattern())?;
    Ok(())
}

fn check(filter: &PathFilter, args: &[String], format: &str, rejected: bool) -> Result<()> {
    let candidates = if args.is_empty() {
        read_stdin_paths()?
    } else {
        args.to_vec()
    };

    let started_at = Instant::now();
    let total = candidates.len();
    let (kept, skipped) = filter.partition(candidates);
    info!(
        "Checked {} paths ({} kept, {} rejected) in {:?}",
        total,
        kept.len(),
        skipped.len(),
        started_at.elapsed()
    );

    let (selected, keep) = if rejected {
        (skipped, false)
    } else {
        (kept, true)
    };

    let mut out = BufWriter::new(std::io::stdout().lock());
    match format {
        "json" => {
            let decisions: Vec<Decision> = selected
                .iter()
                .map(|path| Decision { path, keep })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&decisions)?)?;
        }
        "table" => {
            writeln!(out, "{:<8} PATH", "DECISION")?;
            let label = if keep { "keep" } else { "reject" };
            for path in &selected {
                writeln!(out, "{:<8} {}", label, path)?;
            }
        }
        _ => {
            for path in &selected {
                writeln!(out, "{}", path)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

fn read_stdin_paths() -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read paths from stdin")?;
        let path = line.trim();
        if !path.is_empty() {
            paths.push(path.to_string());
        }
    }
    debug!("Read {} paths from stdin", paths.len());
    Ok(paths)
}

fn build_filter(
    config_arg: Option<&str>,
    excludes: &[String],
    includes: &[String],
) -> Result<PathFilter> {
    let mut config = load_config(config_arg)?;
    config.merge_cli(excludes, includes);

    PathFilter::from_config(&config.filter).context("Invalid package filter")
}

fn load_config(config_arg: Option<&str>) -> Result<Config> {
    if let Some(arg) = config_arg {
        let path = paths::expand(arg);
        return Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let config_path: PathBuf = paths::config_path();
    if config_path.exists() {
        Config::load(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        debug!("No config at {}, using defaults", config_path.display());
        Ok(Config::default())
    }
}
