//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::{
    AppContext,
    commands::{all, class, list, load, sample},
};
use crate::ports::StatusLogger;
use crate::services::{FilesystemSourceWriter, FilesystemTemplateStore, IdentifierValidator};

pub use crate::app::config::{ConfigOverrides, load_config};
pub use crate::domain::{
    AppError, GeneratorConfig, MethodDescriptor, PreparedSample, SampleRequest, TemplateDescriptor,
    TypeDescriptor,
};

type FilesystemContext<L> =
    AppContext<FilesystemTemplateStore, FilesystemSourceWriter, IdentifierValidator, L>;

/// Create an `AppContext` for a given configuration.
fn create_context<L: StatusLogger>(config: &GeneratorConfig, logger: L) -> FilesystemContext<L> {
    AppContext::new(
        FilesystemTemplateStore::from_config(config),
        FilesystemSourceWriter::from_config(config),
        IdentifierValidator,
        logger,
    )
}

/// List generic templates in the configured template folder, sorted by name.
pub fn list_templates(config: &GeneratorConfig) -> Result<Vec<TemplateDescriptor>, AppError> {
    let mut ctx = create_context(config, crate::ports::NoopStatusLogger);
    list::execute(&mut ctx)
}

/// Instantiate `template_name` as `full_class_name` and write it to the source folder.
///
/// Returns the destination path.
pub fn write_class(
    config: &GeneratorConfig,
    template_name: &str,
    full_class_name: &str,
    logger: impl StatusLogger,
) -> Result<PathBuf, AppError> {
    let mut ctx = create_context(config, logger);
    let template = load::execute(&mut ctx, template_name)?;
    class::execute(&mut ctx, template, full_class_name)
}

/// Instantiate every generic template into `package`.
///
/// Each class is named after its template, e.g. `FooTemplate.java` becomes
/// `<package>.Foo`. Returns the destination paths in template name order.
pub fn write_all_classes(
    config: &GeneratorConfig,
    package: &str,
    logger: impl StatusLogger,
) -> Result<Vec<PathBuf>, AppError> {
    let mut ctx = create_context(config, logger);
    all::execute(&mut ctx, package)
}

/// Specialize the sample template without writing it.
pub fn prepare_sample(
    config: &GeneratorConfig,
    request: &SampleRequest,
    logger: impl StatusLogger,
) -> Result<PreparedSample, AppError> {
    let mut ctx = create_context(config, logger);
    sample::prepare(&mut ctx, request)
}

/// Specialize the sample template and write it to `<sample class>.<ext>`.
///
/// Returns the destination path.
pub fn write_sample(
    config: &GeneratorConfig,
    request: &SampleRequest,
    logger: impl StatusLogger,
) -> Result<PathBuf, AppError> {
    let mut ctx = create_context(config, logger);
    let prepared = sample::prepare(&mut ctx, request)?;
    sample::write(&mut ctx, &prepared)
}
