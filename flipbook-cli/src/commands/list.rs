use anyhow::{Context, Result};
use colored::*;
use flipbook_core::{decoder::load_project, Frame};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use tracing::info;

#[derive(Serialize)]
struct FrameRow<'a> {
    position: usize,
    #[serde(flatten)]
    frame: &'a Frame,
}

pub fn execute(project: &str, json: bool, output: &str) -> Result<()> {
    info!("Listing frames of {}", project);

    let store = load_project(project)
        .with_context(|| format!("Failed to load project: {}", project))?;

    if json {
        let rows: Vec<FrameRow> = store
            .iter()
            .enumerate()
            .map(|(i, frame)| FrameRow {
                position: i + 1,
                frame,
            })
            .collect();

        let out = serde_json::to_string_pretty(&rows)?;
        if output == "-" {
            io::stdout().write_all(out.as_bytes())?;
            println!();
        } else {
            fs::write(output, out)?;
            println!("Frame list written to: {}", output);
        }
        return Ok(());
    }

    if store.is_empty() {
        println!("{} (no frames)", project.bold());
        return Ok(());
    }

    println!("{}", project.bold());
    println!("{:>4}  {:<20} {:>9}    {}", "#", "Name", "Duration", "Path");
    for (i, frame) in store.iter().enumerate() {
        println!(
            "{:>4}  {:<20} {:>6} ms    {}",
            i + 1,
            frame.name,
            frame.duration,
            frame.path
        );
    }
    println!("\n{} frame(s)", store.len());

    Ok(())
}
