use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrafactorError {
    #[error(transparent)]
    Filter(#[from] crate::terraform::FilterError),

    #[error("{} not found", .path.display())]
    StateFileNotFound { path: PathBuf },

    #[error("error opening terraform state file {}: {source}", .path.display())]
    StateFileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
