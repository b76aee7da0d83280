use anyhow::{Context, Result};
use colored::*;
use flipbook_core::{decoder::load_project, encoder::save_project};
use tracing::info;

pub fn execute(project: &str, name: &str, position: usize) -> Result<()> {
    info!("Moving frame {:?} to position {} in {}", name, position, project);

    let mut store = load_project(project)
        .with_context(|| format!("Failed to load project: {}", project))?;

    store.move_to(name, position)?;

    save_project(&store, project)
        .with_context(|| format!("Failed to save project: {}", project))?;

    println!(
        "{} Frame {:?} is now at position {}",
        "✓".green(),
        name,
        position
    );
    Ok(())
}
