#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InitStrategy, ListStrategy, ScanInput, ScanStrategy, VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "lexscan")]
#[command(about = "Extract ordinals, integers and dates from text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text and print the extracted entities
    Scan {
        /// Text to scan (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Extractor to run, highest priority first (repeatable)
        #[arg(short = 'e', long = "extractor")]
        extractors: Vec<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,

        /// Print scan counters to stderr
        #[arg(long)]
        stats: bool,
    },
    /// List available extractors
    List,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            text,
            file,
            extractors,
            json,
            stats,
        } => ScanStrategy.execute(ScanInput {
            text,
            file,
            extractors,
            json,
            stats,
        }),
        Commands::List => ListStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
