mod name_validator;
mod source_writer;
mod status_logger;
mod template_store;

pub use name_validator::NameValidator;
pub use source_writer::SourceWriter;
pub use status_logger::{NoopStatusLogger, StatusLogger};
pub use template_store::TemplateStore;
