use std::path::PathBuf;

use super::class::{persist, warn_unused_bindings};
use super::load;
use crate::app::AppContext;
use crate::domain::{AppError, PreparedSample, SampleRequest};
use crate::ports::{NameValidator, SourceWriter, StatusLogger, TemplateStore};

/// Specialize the sample template for one remote method.
///
/// All identifiers are validated before the template is loaded.
pub fn prepare<T, S, V, L>(
    ctx: &mut AppContext<T, S, V, L>,
    request: &SampleRequest,
) -> Result<PreparedSample, AppError>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    let validator = ctx.validator();
    validator.check_alphanumeric(&request.class_name)?;
    validator.check_alphanumeric(&request.bound_name)?;
    validator.check_package_name(&request.package_name)?;
    validator.check_alphanumeric(&request.sample_class_name)?;

    let sample_template = ctx.templates().sample_template_name().to_string();
    let mut template = load::execute(ctx, &sample_template)?;

    let bindings = request.bindings();
    warn_unused_bindings(ctx, &template, &bindings);

    ctx.logger().begin("Preparing sample");
    template.apply(&bindings);
    ctx.logger().done();

    Ok(PreparedSample {
        class_name: request.sample_class_name.clone(),
        text: template.into_text(),
    })
}

/// Write a prepared sample to `<sample class>.<ext>`.
pub fn write<T, S, V, L>(
    ctx: &mut AppContext<T, S, V, L>,
    sample: &PreparedSample,
) -> Result<PathBuf, AppError>
where
    T: TemplateStore,
    S: SourceWriter,
    V: NameValidator,
    L: StatusLogger,
{
    let destination = ctx.sources().destination(&sample.class_name);
    ctx.logger().begin(&format!("Writing sample '{}' to disk", destination.display()));
    persist(ctx, &sample.class_name, &sample.text)
}
