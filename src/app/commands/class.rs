use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::template::tokens;
use crate::domain::{AppError, PlaceholderMap, QualifiedName, Template};
use crate::ports::{NameValidator, SourceWriter, StatusLogger, TemplateStore};

/// Instantiate a generic template as `full_class_name` and write it to disk.
///
/// The name is validated before any substitution; the template is consumed.
pub fn execute<T, S, V, L>(
    ctx: &mut AppContext<T, S, V, L>,
    mut template: Template,
    full_class_name: &str,
) -> Result<PathBuf, AppError>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    ctx.validator().check_package_name(full_class_name)?;
    let name = QualifiedName::parse(full_class_name)?;

    let bindings = class_bindings(&name);
    warn_unused_bindings(ctx, &template, &bindings);
    template.apply(&bindings);

    let destination = ctx.sources().destination(name.class_name());
    ctx.logger().begin(&format!("Writing class '{}' to disk", destination.display()));
    persist(ctx, name.class_name(), template.text())
}

/// Placeholder bindings for a generic class.
pub fn class_bindings(name: &QualifiedName) -> PlaceholderMap {
    let mut bindings = PlaceholderMap::new();
    bindings
        .bind(tokens::PACKAGE_NAME, name.package())
        .bind(tokens::CLASS_NAME, name.class_name());
    bindings
}

pub(crate) fn warn_unused_bindings<T, S, V, L>(
    ctx: &mut AppContext<T, S, V, L>,
    template: &Template,
    bindings: &PlaceholderMap,
) where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    for name in template.unused_bindings(bindings) {
        ctx.logger().warn(&format!(
            "template '{}' does not contain placeholder <{}>",
            template.name(),
            name
        ));
    }
}

/// Write generated text, closing the progress line opened by the caller.
pub(crate) fn persist<T, S, V, L>(
    ctx: &mut AppContext<T, S, V, L>,
    class_name: &str,
    text: &str,
) -> Result<PathBuf, AppError>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    match ctx.sources().write_source(class_name, text) {
        Ok(destination) => {
            ctx.logger().done();
            Ok(destination)
        }
        Err(err) => {
            ctx.logger().failed();
            Err(err)
        }
    }
}
