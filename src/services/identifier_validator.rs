use crate::domain::AppError;
use crate::domain::identities::validation::{is_alphanumeric, is_package_name};
use crate::ports::NameValidator;

/// Default validator: ASCII alphanumeric identifiers and dotted package names.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierValidator;

impl NameValidator for IdentifierValidator {
    fn check_alphanumeric(&self, value: &str) -> Result<(), AppError> {
        if is_alphanumeric(value) {
            Ok(())
        } else {
            Err(AppError::InvalidCharacter {
                value: value.to_string(),
                expected: "ASCII letters and digits only",
            })
        }
    }

    fn check_package_name(&self, value: &str) -> Result<(), AppError> {
        if is_package_name(value) {
            Ok(())
        } else {
            Err(AppError::InvalidCharacter {
                value: value.to_string(),
                expected: "dot-separated segments of ASCII letters, digits and '_'",
            })
        }
    }
}
