use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the evaluation library.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),

    #[error("Invalid scoring config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error("Failed to read profile at {}: {source}", .path.display())]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse profile at {}: {message}", .path.display())]
    ProfileParse { path: PathBuf, message: String },

    #[error("Unsupported profile format: {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("All {failed} profile files failed to load")]
    NoProfilesLoaded { failed: usize, all_invalid: bool },
}

impl EvalError {
    /// True for errors caused by the content of a profile rather than I/O.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            EvalError::InvalidInput(_)
            | EvalError::ProfileParse { .. }
            | EvalError::UnsupportedFormat(_) => true,
            EvalError::NoProfilesLoaded { all_invalid, .. } => *all_invalid,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
