//! List command - show all processed manuals.

use console::style;
use tridocs_client::ManualsApi;

pub async fn run(api: &ManualsApi) -> anyhow::Result<()> {
    let list = api.list_manuals().await?;

    if list.pdfs.is_empty() {
        println!("No manuals processed yet.");
        return Ok(());
    }

    println!(
        "{:<14} {:>5}  {}",
        style("HASH").bold(),
        style("STEPS").bold(),
        style("FILENAME").bold()
    );
    for pdf in &list.pdfs {
        println!(
            "{:<14} {:>5}  {}",
            style(&pdf.hash).cyan(),
            pdf.step_count,
            pdf.pdf_filename
        );
    }

    println!("\n{} manual(s)", list.total_count);
    Ok(())
}
