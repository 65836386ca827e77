use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::SourceWriter;

/// In-memory source writer for testing.
#[derive(Debug, Default)]
pub struct MemorySourceWriter {
    pub written: RefCell<BTreeMap<String, String>>,
    pub should_fail: bool,
}

impl MemorySourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    pub fn source(&self, class_name: &str) -> Option<String> {
        self.written.borrow().get(class_name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.written.borrow().is_empty()
    }
}

impl SourceWriter for MemorySourceWriter {
    fn destination(&self, class_name: &str) -> PathBuf {
        PathBuf::from("sources").join(format!("{class_name}.java"))
    }

    fn write_source(&self, class_name: &str, text: &str) -> Result<PathBuf, AppError> {
        let destination = self.destination(class_name);
        if self.should_fail {
            return Err(AppError::FileWrite {
                path: destination,
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock write failure"),
            });
        }
        self.written.borrow_mut().insert(class_name.to_string(), text.to_string());
        Ok(destination)
    }
}
