use anyhow::{bail, Context, Result};
use colored::*;
use flipbook_core::{decoder::load_project, encoder::save_project};
use tracing::info;

pub fn execute(project: &str, name: Option<&str>, position: Option<usize>) -> Result<()> {
    let mut store = load_project(project)
        .with_context(|| format!("Failed to load project: {}", project))?;

    let removed = match (name, position) {
        (Some(name), None) => {
            info!("Removing frame {:?} from {}", name, project);
            store.remove(name)?
        }
        (None, Some(position)) => {
            info!("Removing frame at position {} from {}", position, project);
            store.remove_at(position)?
        }
        _ => bail!("Specify exactly one of --name or --position"),
    };

    save_project(&store, project)
        .with_context(|| format!("Failed to save project: {}", project))?;

    println!(
        "{} Removed frame {:?} ({} frame(s) left)",
        "✓".green(),
        removed.name,
        store.len()
    );
    Ok(())
}
