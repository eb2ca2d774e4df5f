//! reflgen CLI
//!
//! Generates reflection metadata for the annotated headers reachable from a
//! root source file.
//!
//! # Usage
//!
//! ```bash
//! # Generate from the project in the current directory
//! reflgen src/main.cpp
//!
//! # Project rooted elsewhere, explicit configuration
//! reflgen src/main.cpp ../game --config ../game/tools/reflgen.yaml
//!
//! # Show every correlation decision
//! RUST_LOG=reflgen=debug reflgen src/main.cpp
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reflgen::{GeneratorConfig, ReflectionPipeline, DEFAULT_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reflgen")]
#[command(about = "Reflection metadata generator for annotated C++ headers", long_about = None)]
struct Cli {
    /// Root source file, relative to the working directory
    source: PathBuf,

    /// Project root (defaults to the current directory)
    working_dir: Option<PathBuf>,

    /// Configuration file (defaults to reflgen.yaml in the project root, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let root = match cli.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let config = load_config(&root, cli.config)?;

    let pipeline = ReflectionPipeline::for_project(&root, &config);
    let summary = pipeline
        .run(&[&cli.source])
        .with_context(|| format!("reflection generation failed for {}", cli.source.display()))?;

    println!("{}", summary);
    Ok(())
}

fn load_config(root: &std::path::Path, explicit: Option<PathBuf>) -> Result<GeneratorConfig> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = root.join(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(GeneratorConfig::default());
            }
            default
        }
    };
    GeneratorConfig::from_yaml(&path).with_context(|| format!("invalid configuration {}", path.display()))
}
