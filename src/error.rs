use std::io;

/// All error types for mesh loading, saving and derivation.
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;
