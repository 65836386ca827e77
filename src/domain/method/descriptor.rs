use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Declared type of a parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
}

impl TypeDescriptor {
    /// Create a descriptor; varargs (`T...`) are normalized to arrays (`T[]`).
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = match name.strip_suffix("...") {
            Some(element) => format!("{element}[]"),
            None => name,
        };
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Array types use source notation (`int[]`) or binary notation (`[I`).
    pub fn is_array(&self) -> bool {
        self.name.ends_with("[]") || self.name.starts_with('[')
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Description of a target method: name, return type and ordered parameter types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Modifiers in declaration order, e.g. `public abstract`.
    pub modifiers: Vec<String>,
    pub declaring_type: Option<String>,
    pub name: String,
    pub return_type: TypeDescriptor,
    pub parameters: Vec<TypeDescriptor>,
    /// Declared exception types.
    pub exceptions: Vec<String>,
}

impl MethodDescriptor {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        parameters: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        Self {
            modifiers: Vec::new(),
            declaring_type: None,
            name: name.into(),
            return_type: TypeDescriptor::new(return_type),
            parameters: parameters.into_iter().collect(),
            exceptions: Vec::new(),
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Full signature text, e.g.
    /// `public abstract java.lang.String com.example.Api.login(java.lang.String,int[]) throws java.rmi.RemoteException`.
    pub fn signature(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier} ")?;
        }
        write!(f, "{} ", self.return_type)?;
        if let Some(declaring_type) = &self.declaring_type {
            write!(f, "{declaring_type}.")?;
        }
        let parameters =
            self.parameters.iter().map(TypeDescriptor::name).collect::<Vec<_>>().join(",");
        write!(f, "{}({})", self.name, parameters)?;
        if !self.exceptions.is_empty() {
            write!(f, " throws {}", self.exceptions.join(","))?;
        }
        Ok(())
    }
}

impl FromStr for MethodDescriptor {
    type Err = AppError;

    /// Parse `[modifiers] <return> [<declaring>.]<name>(<type> [name], ...) [throws ..]`.
    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AppError::InvalidSignature {
            signature: signature.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = signature.trim();
        let open = trimmed.find('(').ok_or_else(|| invalid("missing '('"))?;
        let close = trimmed.rfind(')').ok_or_else(|| invalid("missing ')'"))?;
        if close < open {
            return Err(invalid("unbalanced parentheses"));
        }

        let exceptions = parse_throws(trimmed[close + 1..].trim())
            .ok_or_else(|| invalid("unexpected text after parameter list"))?;

        let head = split_top_level_whitespace(&trimmed[..open]);
        let [modifiers @ .., return_type, qualified_name] = head.as_slice() else {
            return Err(invalid("expected '<return type> <method name>'"));
        };
        if modifiers.iter().any(|m| !m.chars().all(|c| c.is_ascii_lowercase())) {
            return Err(invalid("unexpected text before return type"));
        }

        let (declaring_type, name) = match qualified_name.rsplit_once('.') {
            Some((declaring, name)) => (Some(declaring.to_string()), name),
            None => (None, *qualified_name),
        };
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
            return Err(invalid("method name is not an identifier"));
        }

        let parameters = split_top_level(&trimmed[open + 1..close])
            .into_iter()
            .map(|parameter| parse_parameter(parameter).ok_or_else(|| invalid("empty parameter")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            declaring_type,
            name: name.to_string(),
            return_type: TypeDescriptor::new(*return_type),
            parameters,
            exceptions,
        })
    }
}

/// Parse an optional `throws A, B` trailer. `None` if the text is anything else.
fn parse_throws(trailer: &str) -> Option<Vec<String>> {
    if trailer.is_empty() {
        return Some(Vec::new());
    }

    let list = trailer.strip_prefix("throws")?;
    if !list.starts_with(char::is_whitespace) {
        return None;
    }

    let exceptions: Vec<String> =
        split_top_level(list).into_iter().map(|e| e.trim().to_string()).collect();
    let malformed = |e: &String| e.is_empty() || e.contains(char::is_whitespace);
    if exceptions.is_empty() || exceptions.iter().any(malformed) {
        return None;
    }
    Some(exceptions)
}

/// Split on whitespace outside of generic brackets, dropping empty pieces.
fn split_top_level_whitespace(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (index, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    parts.push(&text[begin..index]);
                }
                continue;
            }
            _ => {}
        }
        start.get_or_insert(index);
    }
    if let Some(begin) = start {
        parts.push(&text[begin..]);
    }
    parts
}

/// Split a parameter list on commas outside of generic brackets.
fn split_top_level(list: &str) -> Vec<&str> {
    if list.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, c) in list.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&list[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}

/// Parse `<type> [name]`; the name is dropped.
fn parse_parameter(parameter: &str) -> Option<TypeDescriptor> {
    let parameter = parameter.trim();
    if parameter.is_empty() {
        return None;
    }

    let declared_type = match parameter.rsplit_once(char::is_whitespace) {
        Some((ty, name))
            if !name.is_empty()
                && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
                && !ty.trim_end().ends_with(',') =>
        {
            ty.trim()
        }
        _ => parameter,
    };

    let declared_type = declared_type.strip_prefix("final ").unwrap_or(declared_type).trim();
    Some(TypeDescriptor::new(declared_type))
}
