use clap::{Parser, Subcommand};
use semver::Version;
use std::path::PathBuf;
use std::process;

use prdoc_io::prelude::*;

mod commands;
mod config;
mod logging;

use config::PrdocConfig;
use logging::{Verbosity, init_logging};

#[derive(Debug, Parser)]
#[command(name = "prdoc", version, about = "Validate and aggregate PRDoc change records")]
struct Cli {
    /// Config file (defaults to ./.prdoc.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse, schema-check and validate record files or directories.
    Check {
        /// Files or directories (defaults to the configured record directory)
        paths: Vec<PathBuf>,
        /// Treat unknown audiences as errors
        #[arg(long)]
        strict_audience: bool,
        /// Emit structured diagnostics as JSON on stderr
        #[arg(long)]
        diagnostics_json: bool,
    },
    /// Show a summary of one record.
    Inspect {
        path: PathBuf,
    },
    /// Aggregate per-crate bumps across a record directory.
    Plan {
        dir: Option<PathBuf>,
        /// Current version of a crate, as <crate>=<version>. Repeatable.
        #[arg(long = "current", value_parser = commands::parse_current)]
        current: Vec<(String, Version)>,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render a Markdown changelog grouped by audience.
    Changelog {
        dir: Option<PathBuf>,
        /// Only include entries for this audience
        #[arg(long)]
        audience: Option<String>,
        /// Top-level heading
        #[arg(long)]
        heading: Option<String>,
    },
    /// Print a record in canonical YAML form.
    Fmt {
        path: PathBuf,
        /// Exit 1 if the file is not already canonical
        #[arg(long)]
        check: bool,
    },
    /// Print the bundled JSON Schema.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let config = PrdocConfig::load(cli.config.as_deref())?;
    let extension = config.prdoc.extension.clone();
    let mut opts = config.validate_options();

    let code = match cli.cmd {
        Command::Check { paths, strict_audience, diagnostics_json } => {
            opts.strict_audience |= strict_audience;
            let paths = if paths.is_empty() { vec![config.prdoc.dir.clone()] } else { paths };
            commands::check(&paths, &extension, &opts, diagnostics_json)?
        }
        Command::Inspect { path } => commands::inspect(&path)?,
        Command::Plan { dir, current, json } => {
            let mut versions = config.current_versions()?;
            versions.extend(current);
            let dir = dir.unwrap_or_else(|| config.prdoc.dir.clone());
            commands::plan(&dir, &extension, &opts, &versions, json)?
        }
        Command::Changelog { dir, audience, heading } => {
            let dir = dir.unwrap_or_else(|| config.prdoc.dir.clone());
            let changelog_opts = ChangelogOptions { heading, audience };
            commands::changelog(&dir, &extension, &opts, &changelog_opts)?
        }
        Command::Fmt { path, check } => commands::fmt(&path, check)?,
        Command::Schema => commands::schema(),
    };

    if code != commands::EXIT_OK {
        process::exit(code);
    }
    Ok(())
}
