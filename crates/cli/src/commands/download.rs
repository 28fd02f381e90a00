//! Download command - save a manual's artifacts to a local directory.

use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tridocs_client::{ApiError, ManualsApi};
use tridocs_core::artifact::{validate_hash, ArtifactKind, STEP_ARTIFACT_KINDS};

/// Arguments for the download command.
#[derive(Args)]
pub struct DownloadArgs {
    /// Content hash of the manual
    pub hash: String,

    /// Download a single step instead of the whole manual
    #[arg(short, long)]
    pub step: Option<u32>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

pub async fn run(api: &ManualsApi, args: DownloadArgs) -> anyhow::Result<()> {
    validate_hash(&args.hash)?;

    let all_steps = api.step_indices(&args.hash).await?;
    let steps: Vec<u32> = match args.step {
        Some(step) => {
            if !all_steps.contains(&step) {
                anyhow::bail!(
                    "Step {step} out of range: manual {} has {} step(s)",
                    args.hash,
                    all_steps.len()
                );
            }
            vec![step]
        }
        None => all_steps,
    };

    tokio::fs::create_dir_all(&args.out).await?;

    // One unit for the PDF plus four artifacts per step.
    let pb = ProgressBar::new(1 + steps.len() as u64 * STEP_ARTIFACT_KINDS.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg:<30} [{bar:25.cyan/blue}] {pos}/{len}")
            .expect("valid template"),
    );

    // The source PDF is required; failing to fetch it aborts the download.
    pb.set_message("source pdf");
    let pdf_bytes = api.fetch_bytes(&api.pdf_url(&args.hash)).await?;
    let pdf_path = args.out.join(ArtifactKind::Pdf.local_filename(&args.hash, 0));
    tokio::fs::write(&pdf_path, pdf_bytes).await?;
    pb.inc(1);

    let mut saved = 1usize;
    let mut skipped = 0usize;

    for &step in &steps {
        for &kind in STEP_ARTIFACT_KINDS {
            pb.set_message(format!("{kind} step {step}"));
            let url = api.artifact_url(kind, &args.hash, step);

            match api.fetch_bytes(&url).await {
                Ok(bytes) => {
                    let path = args.out.join(kind.local_filename(&args.hash, step));
                    tokio::fs::write(&path, bytes).await?;
                    saved += 1;
                }
                // A step asset that was never generated (TTS or 3D pass
                // skipped) comes back 404; that is not a failure.
                Err(ApiError::Api { status: 404, .. }) => {
                    pb.println(format!(
                        "{} no {kind} for step {step}",
                        style("⚠").yellow()
                    ));
                    skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    println!(
        "{} {saved} file(s) saved to {}{}",
        style("✓").green().bold(),
        args.out.display(),
        if skipped > 0 {
            format!(", {skipped} missing artifact(s) skipped")
        } else {
            String::new()
        }
    );

    Ok(())
}
