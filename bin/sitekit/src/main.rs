//! sitekit CLI
//!
//! Validate and scaffold website builder content documents.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use sitekit::cmd::new::DocumentKind;

/// Command-line interface for sitekit.
#[derive(Parser)]
#[command(
    name = "sitekit",
    version,
    about = "Validate and scaffold website builder content"
)]
struct Cli {
    /// Path to configuration file [default: sitekit.toml, if present]
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate the globals document and every block document
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// List every block type tag
    Types,
    /// Write a starter document
    New {
        /// Kind of document to create
        #[arg(value_enum)]
        kind: DocumentKind,
        /// Path for the new document (defaults to .json when no extension)
        path: std::path::PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sitekit::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict } => {
            sitekit::cmd::check::run(cli.config.as_deref(), strict)?;
        }
        Commands::Types => {
            sitekit::cmd::types::run();
        }
        Commands::New { kind, path } => {
            sitekit::cmd::new::run(kind, &path)?;
        }
    }

    Ok(())
}
