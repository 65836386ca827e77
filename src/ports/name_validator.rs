use crate::domain::AppError;

/// Port for rejecting unsafe identifiers before they are spliced into source text.
pub trait NameValidator {
    /// Accept plain identifiers such as class or bound names.
    fn check_alphanumeric(&self, value: &str) -> Result<(), AppError>;

    /// Accept dotted package names, including package-qualified class names.
    fn check_package_name(&self, value: &str) -> Result<(), AppError>;
}
