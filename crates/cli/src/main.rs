//! `tridocs` -- command-line front end for the tridocs backend.
//!
//! Upload PDF assembly manuals, inspect their extracted steps, download
//! generated artifacts, and walk through a manual step by step in the
//! terminal.
//!
//! The backend address comes from `TRIDOCS_API_URL` (default
//! `http://localhost:8000`); a `.env` file in the working directory is
//! honored.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tridocs_client::{ClientConfig, ManualsApi};

use commands::{download, hash, list, show, upload, walk};

/// Step-by-step assembly manuals: upload, inspect, download, walk through
#[derive(Parser)]
#[command(name = "tridocs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all processed manuals
    List,

    /// Upload a PDF manual and run the processing pipeline
    Upload(upload::UploadArgs),

    /// Print a manual's content hash and whether the backend knows it
    Hash(hash::HashArgs),

    /// Show every step of a processed manual
    Show(show::ShowArgs),

    /// Download a manual's artifacts to a directory
    Download(download::DownloadArgs),

    /// Walk through a manual's steps interactively
    Walk(walk::WalkArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::from_env();
    let api = ManualsApi::from_config(&config)?;

    match cli.command {
        Commands::List => list::run(&api).await,
        Commands::Upload(args) => upload::run(&api, args).await,
        Commands::Hash(args) => hash::run(&api, args).await,
        Commands::Show(args) => show::run(&api, args).await,
        Commands::Download(args) => download::run(&api, args).await,
        Commands::Walk(args) => walk::run(&api, args).await,
    }
}
