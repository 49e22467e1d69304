//! Level store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur reading or writing the persisted level.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The level file could not be read, created, or written.
    #[error("level file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The level file exists but does not hold a non-negative integer.
    #[error("level file {} does not contain a level: {contents:?}", path.display())]
    Corrupt { path: PathBuf, contents: String },
}
