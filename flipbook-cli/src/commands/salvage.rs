use anyhow::{Context, Result};
use colored::*;
use flipbook_core::{decoder::salvage_store, encoder::save_project};
use std::fs;
use tracing::info;

pub fn execute(input: &str, output: &str) -> Result<()> {
    info!("Salvaging project file: {}", input);

    let data = fs::read(input)
        .with_context(|| format!("Failed to read project file: {}", input))?;

    let (store, damage) = salvage_store(&data);

    println!("\n=== Salvage Results ===");
    println!("Bytes examined:    {}", data.len());
    println!("Frames recovered:  {}", store.len().to_string().green());
    match &damage {
        None => println!("{} No damage found", "✓".green()),
        Some(err) => println!("{} Stopped at damaged record: {}", "!".yellow(), err),
    }

    save_project(&store, output)
        .with_context(|| format!("Failed to write recovered project: {}", output))?;

    println!("\nRecovered project written to: {}", output);
    Ok(())
}
