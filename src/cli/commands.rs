use crate::loader::{ControllerLoader, ControllerRegistry, LoaderConfig};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line interface for treemount
///
/// Operator-facing discovery tooling; actual mounting happens in the host
/// process where controller factories are registered.
#[derive(Parser)]
#[command(name = "treemount")]
#[command(about = "Treemount CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a controllers directory and print the would-be mount table
    Scan {
        /// Controllers root directory
        #[arg(short, long)]
        root: PathBuf,

        /// Base route every mount path is composed under
        #[arg(short, long, default_value = "/")]
        base: String,

        /// Controller file extensions (comma-separated or repeated)
        #[arg(long, num_args = 1.., value_delimiter = ',', default_value = "ctrl")]
        extensions: Vec<String>,

        /// Emit JSON instead of the table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Scan {
            root,
            base,
            extensions,
            json,
        } => scan(&root, &base, extensions, json),
    }
}

fn scan(root: &Path, base: &str, extensions: Vec<String>, json: bool) -> anyhow::Result<()> {
    let config = LoaderConfig {
        base_route: base.to_string(),
        extensions,
        ..LoaderConfig::default()
    };
    let loader = ControllerLoader::with_config(root, ControllerRegistry::new(), config);
    let found = loader
        .discover()
        .with_context(|| format!("failed to scan controllers under '{}'", root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for controller in &found {
            println!("{:<24} {}", controller.mount_path, controller.file);
        }
        println!("{} controller file(s) discovered", found.len());
    }
    Ok(())
}
