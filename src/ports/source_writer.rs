use std::path::PathBuf;

use crate::domain::AppError;

/// Port for persisting generated source files.
pub trait SourceWriter {
    /// Destination a class would be written to.
    fn destination(&self, class_name: &str) -> PathBuf;

    /// Write `text` as the source of `class_name`, replacing any existing file.
    ///
    /// Returns the destination path.
    fn write_source(&self, class_name: &str, text: &str) -> Result<PathBuf, AppError>;
}
