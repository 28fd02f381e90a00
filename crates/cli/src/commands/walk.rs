//! Walk command - interactive step-by-step terminal walkthrough.

use std::io::Write;

use clap::Args;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};
use tridocs_client::ManualsApi;
use tridocs_core::artifact::validate_hash;
use tridocs_core::steps::StepCursor;

/// Arguments for the walk command.
#[derive(Args)]
pub struct WalkArgs {
    /// Content hash of the manual
    pub hash: String,
}

pub async fn run(api: &ManualsApi, args: WalkArgs) -> anyhow::Result<()> {
    validate_hash(&args.hash)?;

    let indices = api.step_indices(&args.hash).await?;
    let mut cursor = StepCursor::new(indices.len() as u32);

    if cursor.is_empty() {
        println!("Manual {} has no steps.", style(&args.hash).cyan());
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        render_step(api, &args.hash, &cursor).await?;

        print!("{}", style("[n]ext  [p]rev  [q]uit > ").dim());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        // next/prev clamp at the ends, so mashing `n` on the last step
        // just redraws it.
        match line.trim() {
            "n" | "" => cursor.next(),
            "p" => cursor.prev(),
            "q" => break,
            other => println!("Unknown input '{other}'"),
        }
    }

    Ok(())
}

async fn render_step(api: &ManualsApi, hash: &str, cursor: &StepCursor) -> anyhow::Result<()> {
    let step = cursor.step_index();
    let instruction = api.instruction(hash, step).await?;
    let position = api.step_position(hash, step).await;

    println!();
    println!(
        "{} {}",
        style(format!("Step {} of {}", cursor.current(), cursor.total())).bold().cyan(),
        match position {
            Some(p) => style(format!("(page {})", p.page_number)).dim().to_string(),
            None => String::new(),
        }
    );
    println!("{}", style(&instruction.title).green().bold());
    println!("{}", instruction.description);
    println!();

    Ok(())
}
