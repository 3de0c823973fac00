use std::path::{Path, PathBuf};

use cutcell_mesh::MeshError;
use thiserror::Error;

pub type OutputResult<T> = Result<T, OutputError>;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),
}

impl OutputError {
    pub fn create(path: &Path, source: std::io::Error) -> Self {
        Self::Create {
            path: path.to_path_buf(),
            source,
        }
    }
}
