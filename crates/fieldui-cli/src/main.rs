use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fieldui_cli::commands;
use fieldui_cli::logging;
use fieldui_cli::manifest::Manifest;

#[derive(Parser)]
#[command(name = "fieldui")]
#[command(about = "Derive field UI local tasks from entity type metadata")]
struct Args {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive local tasks for every fieldable entity type in a manifest
    Generate {
        /// JSON manifest describing entity types and their modes
        #[arg(short, long, env = "FIELDUI_MANIFEST")]
        manifest: PathBuf,

        /// Point base routes at each entity type's admin form route
        #[arg(long)]
        patch: bool,
    },
    /// List built-in field types
    FieldTypes,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let output = match args.command {
        Command::Generate { manifest, patch } => {
            let manifest = Manifest::load(&manifest)?;
            let tasks = commands::generate(&manifest, patch)?;
            commands::render(&tasks, args.pretty)?
        }
        Command::FieldTypes => commands::field_types(args.pretty)?,
    };
    println!("{output}");
    Ok(())
}
