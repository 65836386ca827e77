use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, GeneratorConfig};
use crate::ports::SourceWriter;

/// Source writer placing `<ClassName>.<ext>` files into one folder.
#[derive(Debug, Clone)]
pub struct FilesystemSourceWriter {
    folder: PathBuf,
    extension: String,
}

impl FilesystemSourceWriter {
    pub fn new(folder: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { folder: folder.into(), extension: extension.into() }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.source_folder, &config.extension)
    }
}

impl SourceWriter for FilesystemSourceWriter {
    fn destination(&self, class_name: &str) -> PathBuf {
        self.folder.join(format!("{}.{}", class_name, self.extension))
    }

    fn write_source(&self, class_name: &str, text: &str) -> Result<PathBuf, AppError> {
        let destination = self.destination(class_name);
        let write_error = |source| AppError::FileWrite { path: destination.clone(), source };

        fs::create_dir_all(&self.folder).map_err(write_error)?;
        fs::write(&destination, text).map_err(write_error)?;
        Ok(destination)
    }
}
