//! classwriter: Materialize source files from placeholder templates.
//!
//! Two kinds of artifacts are produced: a named class instantiated from any
//! discovered `<Name>Template.<ext>` file, and a sample class built from the
//! reserved sample template plus the signature of one remote method.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigOverrides, list_templates, load_config, prepare_sample, write_all_classes, write_class,
    write_sample,
};
pub use domain::{
    AppError, GeneratorConfig, MethodDescriptor, PlaceholderMap, PreparedSample, QualifiedName,
    SampleRequest, Template, TemplateDescriptor, TypeDescriptor,
};
