use crate::ports::StatusLogger;

/// Status logger capturing output as lines for assertions.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub lines: Vec<String>,
    pending: Option<String>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish(&mut self, suffix: &str) {
        let line = self.pending.take().unwrap_or_default();
        self.lines.push(format!("{line}{suffix}"));
    }
}

impl StatusLogger for RecordingLogger {
    fn begin(&mut self, message: &str) {
        if let Some(open) = self.pending.take() {
            self.lines.push(open);
        }
        self.pending = Some(format!("{message}... "));
    }

    fn done(&mut self) {
        self.finish("done.");
    }

    fn failed(&mut self) {
        self.finish("failed.");
    }

    fn info(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.lines.push(format!("Warning: {message}"));
    }
}
