use std::path::PathBuf;

/// Errors that may occur while writing the JSON summary.
///
/// # Variants
///
/// * `Serialization` - The summary could not be serialized.
/// * `FileCreation` - The output file could not be created.
/// * `FileWrite` - Writing to the output (file or stdout) failed.
#[derive(Debug, thiserror::Error)]
pub enum FileCreationError {
    #[error("cannot serialize summary: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cannot create {path}: {source}")]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write summary: {0}")]
    FileWrite(#[from] std::io::Error),
}
