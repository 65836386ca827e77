use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::template::is_generic_template_name;
use crate::domain::{AppError, GeneratorConfig, Template, TemplateDescriptor};
use crate::ports::TemplateStore;

/// Template store reading from one folder on disk.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    folder: PathBuf,
    extension: String,
    sample_template: String,
}

impl FilesystemTemplateStore {
    pub fn new(
        folder: impl Into<PathBuf>,
        extension: impl Into<String>,
        sample_template: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            extension: extension.into(),
            sample_template: sample_template.into(),
        }
    }

    /// Create a store for the configured template folder.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.template_folder, &config.extension, config.sample_template_name())
    }

    fn not_found(&self, name: &str) -> AppError {
        AppError::TemplateNotFound { name: name.to_string(), folder: self.folder.clone() }
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn list_templates(&self) -> Result<Vec<TemplateDescriptor>, AppError> {
        let directory_error =
            |source: io::Error| AppError::TemplateDirectory { path: self.folder.clone(), source };

        let mut templates = Vec::new();
        for entry in fs::read_dir(&self.folder).map_err(directory_error)? {
            let entry = entry.map_err(directory_error)?;
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !is_generic_template_name(&file_name, &self.extension, &self.sample_template) {
                continue;
            }
            if entry.file_type().map_err(directory_error)?.is_file() {
                templates.push(TemplateDescriptor::new(file_name));
            }
        }
        Ok(templates)
    }

    fn locate(&self, name: &str) -> PathBuf {
        self.folder.join(name)
    }

    fn load(&self, name: &str) -> Result<Template, AppError> {
        // Names are resolved inside the folder only.
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(self.not_found(name));
        }

        let path = self.locate(name);
        if !path.is_file() {
            return Err(self.not_found(name));
        }

        let text = fs::read_to_string(&path)
            .map_err(|source| AppError::TemplateRead { path: path.clone(), source })?;
        Ok(Template::new(name, text))
    }

    fn sample_template_name(&self) -> &str {
        &self.sample_template
    }
}
