mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "flipbook")]
#[command(about = "Flipbook - Stop-motion movie maker", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty project file
    New {
        /// Project file to create
        #[arg(short, long)]
        project: String,

        /// Overwrite an existing project file
        #[arg(long)]
        force: bool,
    },

    /// Add a frame to a project
    Add {
        /// Project file to edit
        #[arg(short, long)]
        project: String,

        /// Unique frame name
        #[arg(short, long)]
        name: String,

        /// Display duration in milliseconds
        #[arg(short, long)]
        duration: u32,

        /// Path to the frame's image file
        #[arg(long)]
        path: String,

        /// 1-based position to insert at (appends by default)
        #[arg(long)]
        position: Option<usize>,

        /// Add the frame even if the image file does not exist
        #[arg(long)]
        force: bool,
    },

    /// Remove a frame from a project
    Remove {
        /// Project file to edit
        #[arg(short, long)]
        project: String,

        /// Name of the frame to remove
        #[arg(short, long)]
        name: Option<String>,

        /// 1-based position of the frame to remove
        #[arg(long, conflicts_with = "name")]
        position: Option<usize>,
    },

    /// Move a frame to a new position
    Move {
        /// Project file to edit
        #[arg(short, long)]
        project: String,

        /// Name of the frame to move
        #[arg(short, long)]
        name: String,

        /// New 1-based position
        #[arg(long)]
        position: usize,
    },

    /// Change frame durations
    Duration {
        /// Project file to edit
        #[arg(short, long)]
        project: String,

        /// Name of the frame to retime
        #[arg(short, long)]
        name: Option<String>,

        /// Retime every frame in the project
        #[arg(long, conflicts_with = "name")]
        all: bool,

        /// New duration in milliseconds
        #[arg(short, long)]
        ms: u32,
    },

    /// List the frames of a project
    List {
        /// Project file to read
        #[arg(short, long)]
        project: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Output file for JSON ("-" for stdout)
        #[arg(short, long, default_value = "-")]
        output: String,
    },

    /// Recover frames from a damaged project file
    Salvage {
        /// Damaged project file to read
        #[arg(short, long)]
        input: String,

        /// Destination for the recovered project
        #[arg(short, long)]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::New { project, force } => commands::new::execute(&project, force),

        Commands::Add {
            project,
            name,
            duration,
            path,
            position,
            force,
        } => commands::add::execute(&project, &name, duration, &path, position, force),

        Commands::Remove {
            project,
            name,
            position,
        } => commands::remove::execute(&project, name.as_deref(), position),

        Commands::Move {
            project,
            name,
            position,
        } => commands::move_frame::execute(&project, &name, position),

        Commands::Duration {
            project,
            name,
            all,
            ms,
        } => commands::duration::execute(&project, name.as_deref(), all, ms),

        Commands::List {
            project,
            json,
            output,
        } => commands::list::execute(&project, json, &output),

        Commands::Salvage { input, output } => commands::salvage::execute(&input, &output),
    }
}
