use std::path::{Path, PathBuf};

use cutcell_mesh::{DomainSpec, MeshError};
use cutcell_shave::RootOptions;
use cutcell_terrain::{MountainConfig, SchaerMountain, TerrainError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read error: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Domain(#[from] MeshError),
    #[error(transparent)]
    Terrain(#[from] TerrainError),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CutCellConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub domain: DomainConfig,
    #[serde(default)]
    pub mountain: MountainConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `cut` shaves a vertex-only grid; `structured` keeps the full grid with faces.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Cut,
    Structured,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DomainConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_nx")]
    pub nx: i64,
    #[serde(default = "default_nz")]
    pub nz: i64,
}
fn default_width() -> f64 {
    25.0e3
}
fn default_height() -> f64 {
    15.0e3
}
fn default_nx() -> i64 {
    50
}
fn default_nz() -> i64 {
    15
}
impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            nx: default_nx(),
            nz: default_nz(),
        }
    }
}

impl DomainConfig {
    pub fn to_spec(&self) -> Result<DomainSpec, ConfigError> {
        let nx = cell_count("domain.nx", self.nx)?;
        let nz = cell_count("domain.nz", self.nz)?;
        Ok(DomainSpec::new(self.width, self.height, nx, nz)?)
    }
}

fn cell_count(field: &'static str, n: i64) -> Result<usize, ConfigError> {
    if n < 1 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("need at least one cell, got {}", n),
        });
    }
    usize::try_from(n).map_err(|e| ConfigError::Invalid {
        field,
        reason: e.to_string(),
    })
}

#[derive(Clone, Debug, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_xtol")]
    pub xtol: f64,
    #[serde(default = "default_rtol")]
    pub rtol: f64,
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
}
fn default_xtol() -> f64 {
    RootOptions::default().xtol
}
fn default_rtol() -> f64 {
    RootOptions::default().rtol
}
fn default_max_iter() -> usize {
    RootOptions::default().max_iter
}
impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            xtol: default_xtol(),
            rtol: default_rtol(),
            max_iter: default_max_iter(),
        }
    }
}

impl SolverConfig {
    pub fn to_options(&self) -> Result<RootOptions, ConfigError> {
        if !(self.xtol.is_finite() && self.xtol > 0.0) {
            return Err(ConfigError::Invalid {
                field: "solver.xtol",
                reason: format!("must be finite and positive, got {}", self.xtol),
            });
        }
        if !(self.rtol.is_finite() && self.rtol >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "solver.rtol",
                reason: format!("must be finite and non-negative, got {}", self.rtol),
            });
        }
        if self.max_iter == 0 {
            return Err(ConfigError::Invalid {
                field: "solver.max_iter",
                reason: "must be at least 1".into(),
            });
        }
        Ok(RootOptions {
            xtol: self.xtol,
            rtol: self.rtol,
            max_iter: self.max_iter,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_vertices_path")]
    pub vertices: PathBuf,
    #[serde(default = "default_faces_path")]
    pub faces: PathBuf,
}
fn default_vertices_path() -> PathBuf {
    PathBuf::from("vertices.dat")
}
fn default_faces_path() -> PathBuf {
    PathBuf::from("faces.dat")
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            vertices: default_vertices_path(),
            faces: default_faces_path(),
        }
    }
}

impl CutCellConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn mountain(&self) -> Result<SchaerMountain, ConfigError> {
        Ok(SchaerMountain::try_from(&self.mountain)?)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<CutCellConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    CutCellConfig::from_toml_str(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_reference_setup() {
        let cfg = CutCellConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.mode, Mode::Cut);
        let d = cfg.domain.to_spec().unwrap();
        assert_eq!((d.width(), d.height(), d.nx(), d.nz()), (25.0e3, 15.0e3, 50, 15));
        let m = cfg.mountain().unwrap();
        assert_eq!((m.half_width(), m.peak_height(), m.wavelength()), (5.0e3, 5.0e3, 4.0e3));
        assert_eq!(cfg.output.vertices, PathBuf::from("vertices.dat"));
        assert_eq!(cfg.output.faces, PathBuf::from("faces.dat"));
        assert_eq!(cfg.solver.to_options().unwrap(), RootOptions::default());
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = CutCellConfig::from_toml_str(
            r#"
            mode = "structured"

            [domain]
            nx = 10

            [mountain]
            wavelength = 8000.0

            [output]
            vertices = "out/v.dat"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.mode, Mode::Structured);
        assert_eq!(cfg.domain.nx, 10);
        assert_eq!(cfg.domain.nz, 15);
        assert_eq!(cfg.mountain.wavelength, 8000.0);
        assert_eq!(cfg.mountain.half_width, 5.0e3);
        assert_eq!(cfg.output.vertices, PathBuf::from("out/v.dat"));
        assert_eq!(cfg.output.faces, PathBuf::from("faces.dat"));
    }

    #[test]
    fn non_positive_cell_counts_are_configuration_errors() {
        let cfg = CutCellConfig::from_toml_str("[domain]\nnx = 0").unwrap();
        assert!(matches!(
            cfg.domain.to_spec(),
            Err(ConfigError::Invalid { field: "domain.nx", .. })
        ));
        let cfg = CutCellConfig::from_toml_str("[domain]\nnz = -3").unwrap();
        assert!(matches!(
            cfg.domain.to_spec(),
            Err(ConfigError::Invalid { field: "domain.nz", .. })
        ));
    }

    #[test]
    fn oversized_grid_is_a_domain_error() {
        let cfg = CutCellConfig::from_toml_str("[domain]\nnx = 9223372036854775807").unwrap();
        assert!(matches!(
            cfg.domain.to_spec(),
            Err(ConfigError::Domain(MeshError::Configuration { field: "nx * nz", .. }))
        ));
    }

    #[test]
    fn bad_extent_and_mountain_surface_typed_errors() {
        let cfg = CutCellConfig::from_toml_str("[domain]\nwidth = -1.0").unwrap();
        assert!(matches!(
            cfg.domain.to_spec(),
            Err(ConfigError::Domain(MeshError::Configuration { field: "width", .. }))
        ));
        let cfg = CutCellConfig::from_toml_str("[mountain]\nhalf_width = 0.0").unwrap();
        assert!(matches!(cfg.mountain(), Err(ConfigError::Terrain(_))));
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(matches!(
            CutCellConfig::from_toml_str("mode = \"sideways\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn solver_limits_validated() {
        let cfg = CutCellConfig::from_toml_str("[solver]\nmax_iter = 0").unwrap();
        assert!(cfg.solver.to_options().is_err());
        let cfg = CutCellConfig::from_toml_str("[solver]\nxtol = 1e-6").unwrap();
        assert_eq!(cfg.solver.to_options().unwrap().xtol, 1e-6);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config_from_path(Path::new("/nonexistent/cutcell.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
