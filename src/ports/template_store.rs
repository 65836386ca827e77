use std::path::PathBuf;

use crate::domain::{AppError, Template, TemplateDescriptor};

/// Port for discovering and loading template files.
pub trait TemplateStore {
    /// Generic templates in the template folder, in enumeration order.
    ///
    /// The reserved sample template is never listed.
    fn list_templates(&self) -> Result<Vec<TemplateDescriptor>, AppError>;

    /// Location a template name resolves to, for progress reporting.
    fn locate(&self, name: &str) -> PathBuf;

    /// Load one template by file name.
    fn load(&self, name: &str) -> Result<Template, AppError>;

    /// File name of the reserved sample template.
    fn sample_template_name(&self) -> &str;
}
