use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::template::is_generic_template_name;
use crate::domain::{AppError, Template, TemplateDescriptor};
use crate::ports::TemplateStore;

/// In-memory template store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: BTreeMap<String, String>,
}

impl MemoryTemplateStore {
    pub const SAMPLE_TEMPLATE: &'static str = "SampleTemplate.java";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, name: &str, text: &str) -> Self {
        self.templates.insert(name.to_string(), text.to_string());
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn list_templates(&self) -> Result<Vec<TemplateDescriptor>, AppError> {
        Ok(self
            .templates
            .keys()
            .filter(|name| is_generic_template_name(name, "java", Self::SAMPLE_TEMPLATE))
            .map(|name| TemplateDescriptor::new(name.as_str()))
            .collect())
    }

    fn locate(&self, name: &str) -> PathBuf {
        PathBuf::from("templates").join(name)
    }

    fn load(&self, name: &str) -> Result<Template, AppError> {
        self.templates.get(name).map(|text| Template::new(name, text.as_str())).ok_or_else(|| {
            AppError::TemplateNotFound { name: name.to_string(), folder: PathBuf::from("templates") }
        })
    }

    fn sample_template_name(&self) -> &str {
        Self::SAMPLE_TEMPLATE
    }
}
