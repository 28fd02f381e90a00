//! Show command - print every step of a processed manual.

use clap::Args;
use console::style;
use tridocs_client::ManualsApi;
use tridocs_core::artifact::validate_hash;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Content hash of the manual
    pub hash: String,
}

pub async fn run(api: &ManualsApi, args: ShowArgs) -> anyhow::Result<()> {
    validate_hash(&args.hash)?;

    let indices = api.step_indices(&args.hash).await?;
    let total = indices.len();

    if indices.is_empty() {
        println!("Manual {} has no steps.", style(&args.hash).cyan());
        return Ok(());
    }

    // Positions are optional enrichment served per step; fetch them
    // concurrently up front. The requests are independent -- no ordering
    // or deduplication is needed.
    let positions = futures::future::join_all(
        indices
            .iter()
            .map(|&step| api.step_position(&args.hash, step)),
    )
    .await;

    for (&step, position) in indices.iter().zip(&positions) {
        let instruction = api.instruction(&args.hash, step).await?;

        println!(
            "{} {}",
            style(format!("[{}/{}]", step + 1, total)).bold(),
            style(&instruction.title).green().bold()
        );
        match position {
            Some(p) => println!(
                "      {} page {}, y {:.0}",
                style("◆").dim(),
                p.page_number,
                p.y_coordinate
            ),
            // Degraded view: the step still renders without a source location.
            None => println!("      {} source location unavailable", style("◇").dim()),
        }
        for line in instruction.description.lines() {
            println!("      {line}");
        }
        println!();
    }

    Ok(())
}
