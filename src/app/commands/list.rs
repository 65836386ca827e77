use crate::app::AppContext;
use crate::domain::{AppError, TemplateDescriptor};
use crate::ports::{NameValidator, SourceWriter, StatusLogger, TemplateStore};

/// List generic templates, sorted by file name.
pub fn execute<T, S, V, L>(
    ctx: &mut AppContext<T, S, V, L>,
) -> Result<Vec<TemplateDescriptor>, AppError>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    let mut templates = ctx.templates().list_templates()?;
    templates.sort();
    Ok(templates)
}
