use anyhow::{bail, Context, Result};
use colored::*;
use flipbook_core::{encoder::save_project, FrameStore};
use std::path::Path;
use tracing::info;

pub fn execute(project: &str, force: bool) -> Result<()> {
    info!("Creating new project: {}", project);

    if Path::new(project).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", project);
    }

    save_project(&FrameStore::new(), project)
        .with_context(|| format!("Failed to create project file: {}", project))?;

    println!("{} Created empty project: {}", "✓".green(), project);
    Ok(())
}
