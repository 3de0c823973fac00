use cutcell_mesh::MeshError;
use thiserror::Error;

pub type ShaveResult<T> = Result<T, ShaveError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid bracket [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("root search in [{a}, {b}] did not converge after {iterations} iterations")]
    NoConvergence { a: f64, b: f64, iterations: usize },

    #[error("terrain height at x = {x} is not finite ({height})")]
    NonFiniteHeight { x: f64, height: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShaveError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),
}
