//! Grid -> (optional) shave -> output.

use std::error::Error;

use cutcell_mesh::{FaceMode, Mesh};
use cutcell_shave::{ShaveReport, Shaver};

use crate::config::{CutCellConfig, Mode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub initial_vertices: usize,
    pub final_vertices: usize,
    pub faces: usize,
    pub shave: Option<ShaveReport>,
}

/// Builds the mesh described by `cfg`. Structured meshes keep their faces and
/// are never shaved; cut meshes are vertex-only.
pub fn build_mesh(cfg: &CutCellConfig) -> Result<(Mesh, RunSummary), Box<dyn Error>> {
    let domain = cfg.domain.to_spec()?;
    let face_mode = match cfg.mode {
        Mode::Cut => FaceMode::VerticesOnly,
        Mode::Structured => FaceMode::Structured,
    };
    let mut mesh = domain.to_mesh(face_mode)?;
    let initial_vertices = mesh.len();
    log::info!(
        "grid {}x{} over {} x {}: {} vertices",
        domain.nx(),
        domain.nz(),
        domain.width(),
        domain.height(),
        initial_vertices
    );

    let shave = match cfg.mode {
        Mode::Structured => None,
        Mode::Cut => {
            let mountain = cfg.mountain()?;
            let shaver = Shaver::with_options(cfg.solver.to_options()?);
            let report = shaver.shave(&mut mesh, &domain, &mountain)?;
            log::info!(
                "shaved: +{} surface, +{} crossings, -{} below ground ({} root evaluations)",
                report.surface_inserted,
                report.crossings_inserted,
                report.removed,
                report.root_evaluations
            );
            Some(report)
        }
    };

    let summary = RunSummary {
        initial_vertices,
        final_vertices: mesh.len(),
        faces: mesh.face_count(),
        shave,
    };
    Ok((mesh, summary))
}

pub fn run(cfg: &CutCellConfig) -> Result<RunSummary, Box<dyn Error>> {
    let (mesh, summary) = build_mesh(cfg)?;
    cutcell_io::write_vertices_file(&mesh, &cfg.output.vertices)?;
    cutcell_io::write_faces_file(&mesh, &cfg.output.faces)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutcell_mesh::Vertex;

    #[test]
    fn cut_mode_reference_run() {
        let cfg = CutCellConfig::default();
        let (mesh, summary) = build_mesh(&cfg).unwrap();
        assert_eq!(summary.initial_vertices, 816);
        assert_eq!(summary.faces, 0);
        let report = summary.shave.unwrap();
        assert_eq!(report.removed, 35);
        assert_eq!(summary.final_vertices, 840);
        assert!(!mesh.contains(Vertex::new(0.0, 0.0)));
    }

    #[test]
    fn structured_mode_keeps_grid_and_faces() {
        let cfg = CutCellConfig {
            mode: Mode::Structured,
            ..CutCellConfig::default()
        };
        let (mesh, summary) = build_mesh(&cfg).unwrap();
        assert_eq!(summary.shave, None);
        assert_eq!(summary.final_vertices, 816);
        assert_eq!(summary.faces, 50 * 16 + 51 * 15);
        assert!(mesh.face_endpoints().is_ok());
    }

    #[test]
    fn run_writes_both_files() {
        let dir = std::env::temp_dir().join(format!("cutcell-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut cfg = CutCellConfig::default();
        cfg.output.vertices = dir.join("vertices.dat");
        cfg.output.faces = dir.join("faces.dat");
        let summary = run(&cfg).unwrap();
        let v = std::fs::read_to_string(&cfg.output.vertices).unwrap();
        let f = std::fs::read_to_string(&cfg.output.faces).unwrap();
        assert_eq!(v.lines().count(), summary.final_vertices);
        assert!(f.is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_domain_stops_the_run() {
        let mut cfg = CutCellConfig::default();
        cfg.domain.nx = 0;
        assert!(build_mesh(&cfg).is_err());
    }
}
