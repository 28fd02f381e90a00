//! Upload command - send a PDF through the processing pipeline.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tridocs_client::{ManualsApi, UploadOptions};
use tridocs_core::hashing::short_sha1_hex;

/// Arguments for the upload command.
#[derive(Args)]
pub struct UploadArgs {
    /// PDF file to upload
    pub file: PathBuf,

    /// Skip speech audio generation
    #[arg(long)]
    pub skip_tts: bool,

    /// Skip 3D model generation
    #[arg(long)]
    pub skip_3d: bool,

    /// Upload even if the backend already has this manual
    #[arg(long)]
    pub force: bool,
}

pub async fn run(api: &ManualsApi, args: UploadArgs) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(&args.file).await?;
    let hash = short_sha1_hex(&bytes);

    // Identity is the content hash, so re-uploading a known manual is a
    // no-op on the backend; skip the round trip unless forced.
    if !args.force {
        if let Some(existing) = api.find_manual(&hash).await? {
            println!(
                "{} already processed as '{}' ({} steps, hash {})",
                style("✓").green(),
                existing.pdf_filename,
                existing.step_count,
                style(&existing.hash).cyan()
            );
            println!("  use --force to upload anyway");
            return Ok(());
        }
    }

    let filename = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "manual.pdf".to_string());

    let options = UploadOptions {
        generate_tts: !args.skip_tts,
        generate_3d: !args.skip_3d,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(format!("Processing {filename}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = api.upload_bytes(filename, bytes, options).await;
    spinner.finish_and_clear();

    let outcome = outcome?;

    println!(
        "{} {} ({} steps, hash {})",
        style("✓").green().bold(),
        outcome.message,
        outcome.steps_processed,
        style(&outcome.pdf_hash).cyan()
    );
    if let Some(count) = outcome.tts_files_generated {
        println!("  {count} speech clip(s) generated");
    }
    if let Some(count) = outcome.models_generated {
        println!("  {count} 3D model(s) generated");
    }

    Ok(())
}
