mod config;
mod pipeline;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{CutCellConfig, Mode, load_config_from_path};

const DEFAULT_CONFIG: &str = "cutcell.toml";

/// Terrain-following cut-cell mesh generator.
#[derive(Parser, Debug)]
#[command(name = "cutcell", version, about, long_about = None)]
struct Cli {
    /// TOML configuration; defaults to ./cutcell.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured mode
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Horizontal cell count override
    #[arg(long)]
    nx: Option<i64>,

    /// Vertical cell count override
    #[arg(long)]
    nz: Option<i64>,

    /// Vertex output path override
    #[arg(long)]
    vertices: Option<PathBuf>,

    /// Face output path override
    #[arg(long)]
    faces: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn load_config(&self) -> Result<CutCellConfig, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => load_config_from_path(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => {
                load_config_from_path(Path::new(DEFAULT_CONFIG))?
            }
            None => {
                log::info!("no {} found; using built-in defaults", DEFAULT_CONFIG);
                CutCellConfig::default()
            }
        };
        if let Some(mode) = self.mode {
            cfg.mode = mode;
        }
        if let Some(nx) = self.nx {
            cfg.domain.nx = nx;
        }
        if let Some(nz) = self.nz {
            cfg.domain.nz = nz;
        }
        if let Some(p) = &self.vertices {
            cfg.output.vertices = p.clone();
        }
        if let Some(p) = &self.faces {
            cfg.output.faces = p.clone();
        }
        Ok(cfg)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    let cfg = cli.load_config()?;
    log::debug!("config: {:?}", cfg);
    let summary = pipeline::run(&cfg).inspect_err(|e| log::error!("{}", e))?;
    log::info!(
        "done: {} -> {} vertices, {} faces",
        summary.initial_vertices,
        summary.final_vertices,
        summary.faces
    );
    Ok(())
}
