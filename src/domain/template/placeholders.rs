/// Placeholder names recognized by the generators.
pub mod tokens {
    pub const PACKAGE_NAME: &str = "PACKAGENAME";
    pub const CLASS_NAME: &str = "CLASSNAME";

    pub const PACKAGE: &str = "PACKAGE";
    pub const METHOD_SIGNATURE: &str = "METHODSIG";
    pub const REMOTE_HOST: &str = "REMOTEHOST";
    pub const REMOTE_PORT: &str = "REMOTEPORT";
    pub const BOUND_NAME: &str = "BOUNDNAME";
    pub const CLASS: &str = "CLASS";
    pub const METHOD_NAME: &str = "METHODNAME";
    pub const RETURN_TYPE: &str = "RETURNTYPE";
    pub const ARG_COUNT: &str = "ARGCOUNT";
    pub const ARGUMENTS: &str = "ARGUMENTS";
}

/// Literal token for a placeholder name, e.g. `<CLASSNAME>`.
pub fn placeholder_token(name: &str) -> String {
    format!("<{name}>")
}

/// Ordered binding of placeholder names to replacement values.
///
/// Bindings are applied in insertion order. Rebinding a name replaces its value
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
