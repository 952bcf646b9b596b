//! Build initialization errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop initialization before the generator reports a result.
///
/// A generator that runs and exits non-zero is not an error; its
/// [`Invocation`](crate::Invocation) is returned for the caller to inspect.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot write {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to start generator '{program}'")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

/// Result type for build initialization.
pub type Result<T> = std::result::Result<T, BuildError>;
