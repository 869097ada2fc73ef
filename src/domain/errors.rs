use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the configuration store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read configuration file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write configuration file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed configuration file {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[source] serde_json::Error),

    #[error("no machine found with name {0}")]
    ProfileNotFound(String),
}
