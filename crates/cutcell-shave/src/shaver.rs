//! Shaving: insert terrain vertices into a grid, then drop what lies below it.

use cutcell_geom::Vertex;
use cutcell_mesh::{DomainSpec, Mesh};
use cutcell_terrain::Terrain;

use crate::error::{GeometryError, ShaveResult};
use crate::roots::{RootOptions, brentq};

/// A horizontal grid line `z` crossed by the terrain strictly inside
/// `(x_left, x_right)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub z: f64,
    pub x_left: f64,
    pub x_right: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShaveReport {
    pub surface_inserted: usize,
    pub crossings_inserted: usize,
    pub removed: usize,
    pub root_evaluations: usize,
}

#[inline]
fn height_at<T: Terrain + ?Sized>(terrain: &T, x: f64) -> Result<f64, GeometryError> {
    let height = terrain.height_at(x);
    if height.is_finite() {
        Ok(height)
    } else {
        Err(GeometryError::NonFiniteHeight { x, height })
    }
}

/// Brackets where the terrain crosses each horizontal grid line, rows
/// bottom to top and columns west to east.
///
/// Only a strictly negative product `(h(x_left) - z) * (h(x_right) - z)`
/// counts. A zero product (terrain touching the line at a column, e.g. flat
/// ground at `z = 0`) is skipped.
pub fn find_crossings<T: Terrain + ?Sized>(
    domain: &DomainSpec,
    terrain: &T,
) -> Result<Vec<Crossing>, GeometryError> {
    let xs = domain.vertical_face_positions();
    let heights = xs
        .iter()
        .map(|&x| height_at(terrain, x))
        .collect::<Result<Vec<_>, _>>()?;
    let columns: Vec<(f64, f64)> = xs.iter().copied().zip(heights).collect();

    let mut out = Vec::new();
    for z in domain.horizontal_face_positions() {
        for w in columns.windows(2) {
            let ((x_left, h_left), (x_right, h_right)) = (w[0], w[1]);
            if (h_left - z) * (h_right - z) < 0.0 {
                out.push(Crossing { z, x_left, x_right });
            }
        }
    }
    Ok(out)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Shaver {
    pub options: RootOptions,
}

impl Shaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RootOptions) -> Self {
        Self { options }
    }

    /// Cuts `mesh` in place: surface vertices, then grid line crossings,
    /// then removal of every vertex strictly below the terrain.
    ///
    /// Not transactional; on error the mesh may hold a partial cut.
    pub fn shave<T: Terrain + ?Sized>(
        &self,
        mesh: &mut Mesh,
        domain: &DomainSpec,
        terrain: &T,
    ) -> ShaveResult<ShaveReport> {
        let before = mesh.len();
        let surface_inserted = self.insert_surface(mesh, domain, terrain)?;
        let (crossings_inserted, root_evaluations) = self.insert_crossings(mesh, domain, terrain)?;
        let removed = self.prune(mesh, terrain)?;
        let report = ShaveReport {
            surface_inserted,
            crossings_inserted,
            removed,
            root_evaluations,
        };
        log::debug!(
            "shave: {} -> {} vertices ({:?})",
            before,
            mesh.len(),
            report
        );
        Ok(report)
    }

    /// Adds `(x, h(x))` for every vertical grid line.
    pub fn insert_surface<T: Terrain + ?Sized>(
        &self,
        mesh: &mut Mesh,
        domain: &DomainSpec,
        terrain: &T,
    ) -> ShaveResult<usize> {
        let xs = domain.vertical_face_positions();
        for &x in &xs {
            let z = height_at(terrain, x)?;
            mesh.add_vertex(Vertex::new(x, z));
        }
        log::debug!("surface: inserted {} vertices", xs.len());
        Ok(xs.len())
    }

    /// Solves each crossing from [`find_crossings`] and adds the terrain point
    /// there. Returns the number of vertices added and function evaluations
    /// spent in root finding.
    pub fn insert_crossings<T: Terrain + ?Sized>(
        &self,
        mesh: &mut Mesh,
        domain: &DomainSpec,
        terrain: &T,
    ) -> ShaveResult<(usize, usize)> {
        let crossings = find_crossings(domain, terrain)?;
        let mut evaluations = 0;
        for c in &crossings {
            let root = brentq(
                |x| terrain.height_at(x) - c.z,
                c.x_left,
                c.x_right,
                &self.options,
            )?;
            evaluations += root.evaluations;
            // z from the terrain, not the grid line, so the point sits on the surface
            let z = height_at(terrain, root.x)?;
            log::trace!(
                "crossing z={} in [{}, {}] -> x={} after {} iterations",
                c.z,
                c.x_left,
                c.x_right,
                root.x,
                root.iterations
            );
            mesh.add_vertex(Vertex::new(root.x, z));
        }
        log::debug!(
            "crossings: inserted {} vertices ({} evaluations)",
            crossings.len(),
            evaluations
        );
        Ok((crossings.len(), evaluations))
    }

    /// Removes every vertex with `z < h(x)`; vertices on the surface stay.
    pub fn prune<T: Terrain + ?Sized>(&self, mesh: &mut Mesh, terrain: &T) -> ShaveResult<usize> {
        let mut below = Vec::new();
        for v in mesh.vertices() {
            if v.z < height_at(terrain, v.x)? {
                below.push(v);
            }
        }
        let removed = mesh.remove_vertices(below)?;
        log::debug!("prune: removed {} vertices below ground", removed);
        Ok(removed)
    }
}

