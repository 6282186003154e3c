//! Conversions from library errors into AstgenError

use super::{AstgenError, ErrorKind};
use std::path::Path;

impl From<serde_json::Error> for AstgenError {
    fn from(err: serde_json::Error) -> Self {
        AstgenError::new(ErrorKind::ManifestError, err.to_string())
            .with_note(format!("at line {}, column {}", err.line(), err.column()))
    }
}

/// Attach the destination path to an I/O failure
pub trait OutputPathContext<T> {
    fn at_output_path(self, path: &Path) -> Result<T, AstgenError>;
}

impl<T> OutputPathContext<T> for std::io::Result<T> {
    fn at_output_path(self, path: &Path) -> Result<T, AstgenError> {
        self.map_err(|err| AstgenError::output_write(path, err))
    }
}
