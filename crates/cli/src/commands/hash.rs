//! Hash command - predict a manual's backend key from its bytes.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tridocs_client::ManualsApi;
use tridocs_core::hashing::short_sha1_hex;

/// Arguments for the hash command.
#[derive(Args)]
pub struct HashArgs {
    /// PDF file to hash
    pub file: PathBuf,
}

pub async fn run(api: &ManualsApi, args: HashArgs) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(&args.file).await?;
    let hash = short_sha1_hex(&bytes);

    println!("{}", style(&hash).cyan().bold());

    match api.find_manual(&hash).await? {
        Some(info) => println!(
            "{} already processed as '{}' ({} steps)",
            style("✓").green(),
            info.pdf_filename,
            info.step_count
        ),
        None => println!("{} not on the backend yet", style("ℹ").blue()),
    }

    Ok(())
}
