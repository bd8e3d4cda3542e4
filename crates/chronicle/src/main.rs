//! Chronicle CLI - builds a personal site from Markdown posts and gists.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "chronicle")]
#[command(about = "Builds a personal site from Markdown posts and gists")]
#[command(version)]
pub struct Cli {
    /// Defaults to `build`
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root; content, templates and outputs are relative to it
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Path to the site config file, relative to the root
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a site config, templates and sample content
    Init {
        /// Overwrite files that already exist
        #[arg(short, long)]
        yes: bool,
    },

    /// Build every site artifact
    Build {
        /// Output directory (defaults to config or the project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Date stamped on undated projects (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        build_date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Some(Commands::Init { yes }) => {
            commands::init::run(&cli.root, &cli.config, yes)?;
        }
        Some(Commands::Build { output, build_date }) => {
            commands::build::run(&cli.root, &cli.config, output, build_date)?;
        }
        None => {
            commands::build::run(&cli.root, &cli.config, None, None)?;
        }
    }

    Ok(())
}
