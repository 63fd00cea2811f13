use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error raised when a source cannot be constructed from its token.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source not found: {path}")]
    NotFound { path: PathBuf },

    #[error("not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("failed to read source {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One side of the comparison, loaded eagerly from a command-line token.
///
/// The argument grammar treats this type as opaque: it only cares that
/// construction takes a single token and may fail. The rest of the tool
/// reads the loaded contents through the accessors.
#[derive(Debug, Clone)]
pub struct Source {
    path: PathBuf,
    contents: String,
}

impl Source {
    /// Build a source from a command-line token, reading the file it names.
    pub fn new(token: &str) -> Result<Self, SourceError> {
        let path = PathBuf::from(token);

        if !path.exists() {
            return Err(SourceError::NotFound { path });
        }

        if !path.is_file() {
            return Err(SourceError::NotAFile { path });
        }

        let contents =
            fs::read_to_string(&path).map_err(|source| SourceError::Read {
                path: path.clone(),
                source,
            })?;

        Ok(Source { path, contents })
    }

    /// The path this source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full text of the source.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}
