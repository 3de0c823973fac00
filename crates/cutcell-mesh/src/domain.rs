//! Rectangular domain centred on `x = 0` with evenly spaced grid lines.

use cutcell_geom::{Vertex, pairs};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

fn grid_vertex_count(nx: usize, nz: usize) -> Option<usize> {
    nx.checked_add(1)?.checked_mul(nz.checked_add(1)?)
}

/// Whether `to_mesh` also builds the axis-aligned grid faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FaceMode {
    #[default]
    VerticesOnly,
    Structured,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainSpec {
    x_min: f64,
    width: f64,
    height: f64,
    nx: usize,
    nz: usize,
    dx: f64,
    dz: f64,
}

impl DomainSpec {
    pub fn new(width: f64, height: f64, nx: usize, nz: usize) -> MeshResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(MeshError::configuration("width", width, "must be finite and positive"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(MeshError::configuration("height", height, "must be finite and positive"));
        }
        if nx == 0 {
            return Err(MeshError::configuration("nx", nx, "need at least one cell"));
        }
        if nz == 0 {
            return Err(MeshError::configuration("nz", nz, "need at least one cell"));
        }
        let addressable = grid_vertex_count(nx, nz)
            .is_some_and(|n| n <= isize::MAX as usize / size_of::<Option<Vertex>>());
        if !addressable {
            return Err(MeshError::configuration(
                "nx * nz",
                format!("{} x {}", nx, nz),
                "grid too large to allocate",
            ));
        }
        Ok(Self {
            x_min: -width / 2.0,
            width,
            height,
            nx,
            nz,
            dx: width / nx as f64,
            dz: height / nz as f64,
        })
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }
    #[inline]
    pub fn nz(&self) -> usize {
        self.nz
    }
    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }
    #[inline]
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Grid vertex count, `(nx + 1) * (nz + 1)`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.nx + 1) * (self.nz + 1)
    }

    /// x of each vertical grid line, west to east.
    pub fn vertical_face_positions(&self) -> Vec<f64> {
        (0..=self.nx)
            .map(|i| self.x_min + self.dx * i as f64)
            .collect()
    }

    /// z of each horizontal grid line, from the ground (`z = 0`) up.
    pub fn horizontal_face_positions(&self) -> Vec<f64> {
        (0..=self.nz).map(|k| self.dz * k as f64).collect()
    }

    pub fn vertical_face_position_pairs(&self) -> Vec<(f64, f64)> {
        pairs(&self.vertical_face_positions())
    }

    pub fn horizontal_face_position_pairs(&self) -> Vec<(f64, f64)> {
        pairs(&self.horizontal_face_positions())
    }

    /// Row-major grid (z outer, x inner), optionally with row faces followed
    /// by column faces.
    pub fn to_mesh(&self, faces: FaceMode) -> MeshResult<Mesh> {
        let xs = self.vertical_face_positions();
        let zs = self.horizontal_face_positions();
        let mut mesh = Mesh::with_capacity(self.vertex_count());
        for &z in &zs {
            for &x in &xs {
                mesh.add_vertex(Vertex::new(x, z));
            }
        }

        if faces == FaceMode::Structured {
            let x_pairs = pairs(&xs);
            let z_pairs = pairs(&zs);
            for &z in &zs {
                for &(x_left, x_right) in &x_pairs {
                    let left = mesh.vertex_index(Vertex::new(x_left, z))?;
                    let right = mesh.vertex_index(Vertex::new(x_right, z))?;
                    mesh.add_face(left, right)?;
                }
            }
            for &x in &xs {
                for &(z_bottom, z_top) in &z_pairs {
                    let bottom = mesh.vertex_index(Vertex::new(x, z_bottom))?;
                    let top = mesh.vertex_index(Vertex::new(x, z_top))?;
                    mesh.add_face(bottom, top)?;
                }
            }
        }

        log::debug!(
            "built {}x{} grid: {} vertices, {} faces",
            self.nx,
            self.nz,
            mesh.len(),
            mesh.face_count()
        );
        Ok(mesh)
    }
}
