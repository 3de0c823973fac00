//! Structured grid construction and the mutable vertex mesh it produces.
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod mesh;

pub use cutcell_geom::Vertex;
pub use domain::{DomainSpec, FaceMode};
pub use error::{MeshError, MeshResult};
pub use mesh::{Face, Mesh, VertexId};
