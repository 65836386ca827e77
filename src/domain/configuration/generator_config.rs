//! Generator configuration domain model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "classwriter.toml";

/// Folder layout and file naming used by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Folder containing the template files.
    #[serde(default = "default_template_folder")]
    pub template_folder: PathBuf,
    /// Folder generated sources are written to.
    #[serde(default = "default_source_folder")]
    pub source_folder: PathBuf,
    /// File extension of templates and generated sources, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// File name of the reserved sample template.
    #[serde(default)]
    pub sample_template: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_folder: default_template_folder(),
            source_folder: default_source_folder(),
            extension: default_extension(),
            sample_template: None,
        }
    }
}

impl GeneratorConfig {
    /// Sample template file name, `SampleTemplate.<extension>` unless configured.
    pub fn sample_template_name(&self) -> String {
        self.sample_template.clone().unwrap_or_else(|| format!("SampleTemplate.{}", self.extension))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.extension.trim().is_empty() {
            return Err(AppError::config_error("extension must not be empty"));
        }
        if !self.extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::config_error(format!(
                "extension '{}' must be alphanumeric without a leading dot",
                self.extension
            )));
        }
        let sample = self.sample_template_name();
        if !sample.ends_with(&format!(".{}", self.extension)) {
            return Err(AppError::config_error(format!(
                "sample_template '{}' must end with .{}",
                sample, self.extension
            )));
        }
        if sample.contains('/') || sample.contains('\\') {
            return Err(AppError::config_error(format!(
                "sample_template '{}' must be a file name, not a path",
                sample
            )));
        }
        Ok(())
    }
}

fn default_template_folder() -> PathBuf {
    PathBuf::from("templates")
}

fn default_source_folder() -> PathBuf {
    PathBuf::from("sources")
}

fn default_extension() -> String {
    "java".to_string()
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_uses_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.sample_template_name(), "SampleTemplate.java");
    }

    #[test]
    fn sample_template_follows_extension() {
        let config = parse_config_content(
            r#"
template_folder = "/opt/templates"
source_folder = "out"
extension = "kt"
"#,
        )
        .unwrap();
        assert_eq!(config.template_folder, PathBuf::from("/opt/templates"));
        assert_eq!(config.sample_template_name(), "SampleTemplate.kt");
        assert_eq!(config.extension, "kt");
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(parse_config_content("templates = \"x\""), Err(AppError::TomlParse(_))));
    }

    #[test]
    fn rejects_invalid_extension() {
        let err = parse_config_content("extension = \".java\"").unwrap_err();
        assert!(err.to_string().contains("extension"));
        assert!(parse_config_content("extension = \"\"").is_err());
    }

    #[test]
    fn rejects_mismatched_sample_template() {
        let err = parse_config_content("sample_template = \"Sample.txt\"").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(parse_config_content("sample_template = \"../SampleTemplate.java\"").is_err());
        assert!(parse_config_content("sample_template = \"CustomSample.java\"").is_ok());
    }
}
