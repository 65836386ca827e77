mod console_logger;
mod identifier_validator;
mod source_filesystem;
mod template_filesystem;

pub use console_logger::ConsoleStatusLogger;
pub use identifier_validator::IdentifierValidator;
pub use source_filesystem::FilesystemSourceWriter;
pub use template_filesystem::FilesystemTemplateStore;
