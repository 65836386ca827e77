use super::placeholders::{PlaceholderMap, placeholder_token};

/// Raw template text loaded from one template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    text: String,
}

impl Template {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }

    /// File name the template was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn contains_placeholder(&self, name: &str) -> bool {
        self.text.contains(&placeholder_token(name))
    }

    /// Replace every literal `<name>` token with `value`.
    ///
    /// The value is inserted verbatim; tokens it contains are only replaced by
    /// later substitutions.
    pub fn substitute(&mut self, name: &str, value: &str) {
        let token = placeholder_token(name);
        if self.text.contains(&token) {
            self.text = self.text.replace(&token, value);
        }
    }

    /// Apply all bindings in order.
    pub fn apply(&mut self, bindings: &PlaceholderMap) {
        for (name, value) in bindings.iter() {
            self.substitute(name, value);
        }
    }

    /// Bound names whose token does not occur in the template.
    pub fn unused_bindings<'a>(&self, bindings: &'a PlaceholderMap) -> Vec<&'a str> {
        bindings.names().filter(|name| !self.contains_placeholder(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let mut template = Template::new("FooTemplate.java", "<CLASSNAME> x = new <CLASSNAME>();");
        template.substitute("CLASSNAME", "Foo");
        assert_eq!(template.text(), "Foo x = new Foo();");
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let mut template = Template::new("T", "<CLASS> <CLASSNAME> <classname> CLASSNAME");
        template.substitute("CLASS", "X");
        assert_eq!(template.text(), "X <CLASSNAME> <classname> CLASSNAME");
    }

    #[test]
    fn unknown_tokens_are_left_untouched() {
        let mut template = Template::new("T", "package <PACKAGENAME>; // <OTHER>");
        let mut bindings = PlaceholderMap::new();
        bindings.bind("PACKAGENAME", "a.b");
        template.apply(&bindings);
        assert_eq!(template.text(), "package a.b; // <OTHER>");
    }

    #[test]
    fn later_bindings_see_earlier_values() {
        let mut template = Template::new("T", "<A>");
        let mut bindings = PlaceholderMap::new();
        bindings.bind("A", "<B>").bind("B", "done");
        template.apply(&bindings);
        assert_eq!(template.text(), "done");
    }

    #[test]
    fn reports_unused_bindings() {
        let template = Template::new("T", "package <PACKAGENAME>;");
        let mut bindings = PlaceholderMap::new();
        bindings.bind("PACKAGENAME", "a").bind("CLASSNAME", "B");
        assert_eq!(template.unused_bindings(&bindings), vec!["CLASSNAME"]);
    }

    proptest! {
        #[test]
        fn substitution_is_idempotent(
            before in "[a-z ;{}]{0,20}",
            after in "[a-z ;{}]{0,20}",
            value in "[A-Za-z0-9.]{0,12}",
        ) {
            let source = format!("{before}<CLASSNAME>{after}<CLASSNAME>");
            let mut once = Template::new("T", source);
            once.substitute("CLASSNAME", &value);
            let mut twice = once.clone();
            twice.substitute("CLASSNAME", &value);
            prop_assert_eq!(once, twice);
        }
    }
}
