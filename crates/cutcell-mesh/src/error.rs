//! Mesh and domain errors.

use thiserror::Error;

use crate::mesh::VertexId;

pub type MeshResult<T> = Result<T, MeshError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("invalid domain: {field} = {value} ({reason})")]
    Configuration {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("vertex ({x}, {z}) not found in mesh")]
    NotFound { x: f64, z: f64 },

    #[error("vertex id {0} does not refer to a live vertex")]
    UnknownVertex(VertexId),

    #[error("face list is stale: {removed} vertex(es) removed since faces were built")]
    StaleFaces { removed: usize },
}

impl MeshError {
    pub fn configuration(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::Configuration {
            field,
            value: value.to_string(),
            reason,
        }
    }

    pub fn not_found(x: f64, z: f64) -> Self {
        Self::NotFound { x, z }
    }
}
