use anyhow::{bail, Context, Result};
use colored::*;
use flipbook_core::{decoder::load_project, encoder::save_project};
use tracing::info;

pub fn execute(project: &str, name: Option<&str>, all: bool, ms: u32) -> Result<()> {
    let mut store = load_project(project)
        .with_context(|| format!("Failed to load project: {}", project))?;

    match (name, all) {
        (Some(name), false) => {
            info!("Setting duration of {:?} to {} ms", name, ms);
            store.set_duration(name, ms)?;
            println!("{} Frame {:?} now shows for {} ms", "✓".green(), name, ms);
        }
        (None, true) => {
            info!("Setting duration of all frames to {} ms", ms);
            store.set_all_durations(ms);
            println!(
                "{} All {} frame(s) now show for {} ms",
                "✓".green(),
                store.len(),
                ms
            );
        }
        _ => bail!("Specify exactly one of --name or --all"),
    }

    save_project(&store, project)
        .with_context(|| format!("Failed to save project: {}", project))?;

    Ok(())
}
