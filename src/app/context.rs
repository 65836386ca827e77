use crate::ports::{NameValidator, SourceWriter, StatusLogger, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<T, S, V, L>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    templates: T,
    sources: S,
    validator: V,
    logger: L,
}

impl<T, S, V, L> AppContext<T, S, V, L>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    /// Create a new application context.
    pub fn new(templates: T, sources: S, validator: V, logger: L) -> Self {
        Self { templates, sources, validator, logger }
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the source writer.
    pub fn sources(&self) -> &S {
        &self.sources
    }

    /// Get a reference to the name validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Get a mutable reference to the status logger.
    pub fn logger(&mut self) -> &mut L {
        &mut self.logger
    }

    /// Consume the context, returning the status logger.
    pub fn into_logger(self) -> L {
        self.logger
    }
}
