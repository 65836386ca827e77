/// Port for line-oriented progress output.
///
/// Every `begin` is followed by exactly one `done` or `failed`.
pub trait StatusLogger {
    /// Start a progress line, e.g. `Writing class 'Foo.java' to disk... `.
    fn begin(&mut self, message: &str);

    /// Terminate the current progress line successfully.
    fn done(&mut self);

    /// Terminate the current progress line with a failure.
    fn failed(&mut self);

    /// Print a standalone informational line.
    fn info(&mut self, message: &str);

    /// Print a standalone warning line.
    fn warn(&mut self, message: &str);
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStatusLogger;

impl StatusLogger for NoopStatusLogger {
    fn begin(&mut self, _message: &str) {}

    fn done(&mut self) {}

    fn failed(&mut self) {}

    fn info(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}
}

impl<L: StatusLogger + ?Sized> StatusLogger for &mut L {
    fn begin(&mut self, message: &str) {
        (**self).begin(message);
    }

    fn done(&mut self) {
        (**self).done();
    }

    fn failed(&mut self) {
        (**self).failed();
    }

    fn info(&mut self, message: &str) {
        (**self).info(message);
    }

    fn warn(&mut self, message: &str) {
        (**self).warn(message);
    }
}
