mod memory_source_writer;
mod memory_template_store;
mod recording_logger;

pub use memory_source_writer::MemorySourceWriter;
pub use memory_template_store::MemoryTemplateStore;
pub use recording_logger::RecordingLogger;
