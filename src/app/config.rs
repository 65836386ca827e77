//! Configuration loading from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, GeneratorConfig};

/// Values given on the command line, taking precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub template_folder: Option<PathBuf>,
    pub source_folder: Option<PathBuf>,
    pub extension: Option<String>,
}

/// Load the generator configuration.
///
/// An explicit `config_path` must exist. Otherwise `classwriter.toml` in `root`
/// is used when present, falling back to defaults.
pub fn load_config(
    root: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<GeneratorConfig, AppError> {
    let mut config = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            parse_config_content(&fs::read_to_string(path)?)?
        }
        None => {
            let default_path = root.join(CONFIG_FILE);
            if default_path.is_file() {
                parse_config_content(&fs::read_to_string(default_path)?)?
            } else {
                GeneratorConfig::default()
            }
        }
    };

    if let Some(folder) = overrides.template_folder {
        config.template_folder = folder;
    }
    if let Some(folder) = overrides.source_folder {
        config.source_folder = folder;
    }
    if let Some(extension) = overrides.extension {
        config.extension = extension;
    }

    if config.template_folder.is_relative() {
        config.template_folder = root.join(&config.template_folder);
    }
    if config.source_folder.is_relative() {
        config.source_folder = root.join(&config.source_folder);
    }

    config.validate()?;
    Ok(config)
}
