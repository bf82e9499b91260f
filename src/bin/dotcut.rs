//! Dotcut CLI: cut a subgraph out of a graph description.
//!
//! Usage:
//!   dotcut [options] <input> <output> [+include | -exclude | nodups | include]...
//!
//! `include.txt` and `exclude.txt` in the working directory (or
//! `--sidecar-dir`) are appended to the inclusion and exclusion lists.
//!
//! Options have no short forms, so `-v`, `-h` or `-V` after the paths are
//! exclusions like any other `-id`.

use clap::error::ErrorKind;
use clap::Parser;
use dotcut::{Profile, SelectionConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Exit status for bad invocations
const EXIT_USAGE: i32 = 7;

#[derive(Parser)]
#[command(
    name = "dotcut",
    version,
    about = "Extract a reachable subgraph from a graph description",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Graph description to read
    input: PathBuf,
    /// File to write the filtered description to
    output: PathBuf,
    /// `+id` includes, `-id` excludes, `nodups` drops repeated edges, a bare id includes
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    selectors: Vec<String>,
    /// YAML selection profile (include, exclude, nodups)
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Directory holding include.txt / exclude.txt (default: working directory)
    #[arg(long)]
    sidecar_dir: Option<PathBuf>,
    /// Write a JSON summary of the run
    #[arg(long)]
    report: Option<PathBuf>,
    /// Suppress repeated edges (same as the `nodups` selector)
    #[arg(long)]
    nodups: bool,
    /// Log more (--verbose info, twice for debug); DOTCUT_LOG overrides
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("DOTCUT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<SelectionConfig, String> {
    let mut config = SelectionConfig::from_tokens(&cli.selectors);
    config.no_dups |= cli.nodups;

    if let Some(path) = &cli.profile {
        let profile = Profile::load(path).map_err(|e| e.to_string())?;
        config.merge_profile(profile);
    }

    let sidecar_dir = match &cli.sidecar_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    config.load_sidecars(&sidecar_dir);

    Ok(config)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(EXIT_USAGE);
            }
        },
    };
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };
    tracing::debug!(
        include = config.include.len(),
        exclude = config.exclude.len(),
        no_dups = config.no_dups,
        "selection loaded"
    );

    // Input/output failures are reported but still exit 0.
    let summary = match config.extractor().run(&cli.input, &cli.output) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if let Some(path) = &cli.report {
        if let Err(e) = summary.write_report(path) {
            eprintln!("Warning: {}", e);
        }
    }
}
