use std::fmt;

/// Suffix every template file stem carries.
pub const TEMPLATE_SUFFIX: &str = "Template";

/// Whether `file_name` names a generic template.
///
/// A generic template matches `<alnum>+Template.<extension>` and is not the
/// reserved sample template, which is only ever selected explicitly.
pub fn is_generic_template_name(file_name: &str, extension: &str, sample_template: &str) -> bool {
    if file_name == sample_template {
        return false;
    }

    let Some(stem) = file_name.strip_suffix(extension).and_then(|rest| rest.strip_suffix('.'))
    else {
        return false;
    };
    let Some(prefix) = stem.strip_suffix(TEMPLATE_SUFFIX) else {
        return false;
    };

    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Identifies a template file inside the template folder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateDescriptor {
    file_name: String,
}

impl TemplateDescriptor {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { file_name: file_name.into() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Template name without `Template.<ext>`, e.g. `Foo` for `FooTemplate.java`.
    pub fn base_name(&self) -> &str {
        let stem = self.file_name.rsplit_once('.').map_or(self.file_name.as_str(), |(s, _)| s);
        stem.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(stem)
    }
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}
