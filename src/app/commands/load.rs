use crate::app::AppContext;
use crate::domain::{AppError, Template};
use crate::ports::{NameValidator, SourceWriter, StatusLogger, TemplateStore};

/// Load a template by file name, reporting progress.
pub fn execute<T, S, V, L>(ctx: &mut AppContext<T, S, V, L>, name: &str) -> Result<Template, AppError>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    let path = ctx.templates().locate(name);
    ctx.logger().begin(&format!("Reading template file: '{}'", path.display()));

    match ctx.templates().load(name) {
        Ok(template) => {
            ctx.logger().done();
            Ok(template)
        }
        Err(err) => {
            ctx.logger().failed();
            Err(err)
        }
    }
}
