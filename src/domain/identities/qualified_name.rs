use std::fmt;

use crate::domain::AppError;

/// A package-qualified class name, split on its last dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    package: String,
    class_name: String,
}

impl QualifiedName {
    /// Split `full_name` into package and simple class name.
    ///
    /// Names without a dot, or with an empty package or class part, are rejected.
    pub fn parse(full_name: &str) -> Result<Self, AppError> {
        let (package, class_name) = full_name
            .rsplit_once('.')
            .ok_or_else(|| AppError::InvalidName(full_name.to_string()))?;

        if package.is_empty() || class_name.is_empty() {
            return Err(AppError::InvalidName(full_name.to_string()));
        }

        Ok(Self { package: package.to_string(), class_name: class_name.to_string() })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.class_name)
    }
}
