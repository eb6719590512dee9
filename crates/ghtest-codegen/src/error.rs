//! Error types for ghtest-codegen.

/// Errors from discovery, rendering, and writing the generated file.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A required argument was missing or empty. Nothing was written.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The temporary file could not be moved over the output path.
    #[error("failed to write output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
