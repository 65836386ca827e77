/// Checks a plain identifier: non-empty, ASCII letters and digits only.
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Checks a dotted package name.
///
/// Checks:
/// - Non-empty
/// - No leading, trailing or doubled dots
/// - Each segment is ASCII alphanumeric or '_'
pub fn is_package_name(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value.split('.').all(|segment| {
        !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}
