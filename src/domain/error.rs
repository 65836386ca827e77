use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for classwriter operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An identifier-like input failed validation.
    #[error("Invalid character in '{value}': expected {expected}")]
    InvalidCharacter { value: String, expected: &'static str },

    /// A fully qualified name could not be split into package and class.
    #[error("Invalid class name '{0}': expected <package>.<ClassName>")]
    InvalidName(String),

    /// Method signature text could not be parsed.
    #[error("Invalid method signature '{signature}': {reason}")]
    InvalidSignature { signature: String, reason: String },

    /// Template directory could not be listed.
    #[error("Unable to list template folder '{}': {source}", path.display())]
    TemplateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Requested template is not present in the template folder.
    #[error("'{name}' seems not to be contained in '{}'", folder.display())]
    TemplateNotFound { name: String, folder: PathBuf },

    /// Template file exists but could not be read.
    #[error("Unable to read template file '{}': {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination file could not be opened or written.
    #[error("Cannot open '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
