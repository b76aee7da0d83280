use anyhow::{bail, Context, Result};
use colored::*;
use flipbook_core::{decoder::load_project, encoder::save_project, Frame};
use std::path::Path;
use tracing::info;

pub fn execute(
    project: &str,
    name: &str,
    duration: u32,
    path: &str,
    position: Option<usize>,
    force: bool,
) -> Result<()> {
    info!("Adding frame {:?} to {}", name, project);

    let mut store = load_project(project).with_context(|| {
        format!(
            "Failed to load project {} (create one with `flipbook new`)",
            project
        )
    })?;

    // Name uniqueness and image existence are caller contracts of the core;
    // this is where they get checked.
    if store.contains(name) {
        bail!("A frame named {:?} already exists in the project", name);
    }
    if !force && !Path::new(path).exists() {
        bail!(
            "Can't find image file {:?}; frame will not be added (use --force to add anyway)",
            path
        );
    }

    let frame = Frame::new(name, duration, path)?;
    match position {
        Some(k) => store.insert_at(frame, k)?,
        None => store.push(frame),
    }

    save_project(&store, project)
        .with_context(|| format!("Failed to save project: {}", project))?;

    println!(
        "{} Added frame {:?} ({} frame(s) total)",
        "✓".green(),
        name,
        store.len()
    );
    Ok(())
}
