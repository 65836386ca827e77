use std::io::{self, Write};

use crate::ports::StatusLogger;

/// Status logger writing progress to stdout and warnings to stderr.
#[derive(Debug, Default)]
pub struct ConsoleStatusLogger {
    line_open: bool,
}

impl ConsoleStatusLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn close_line(&mut self) {
        if self.line_open {
            println!();
            self.line_open = false;
        }
    }
}

impl StatusLogger for ConsoleStatusLogger {
    fn begin(&mut self, message: &str) {
        self.close_line();
        print!("[+] {}... ", message);
        let _ = io::stdout().flush();
        self.line_open = true;
    }

    fn done(&mut self) {
        println!("done.");
        self.line_open = false;
    }

    fn failed(&mut self) {
        println!("failed.");
        self.line_open = false;
    }

    fn info(&mut self, message: &str) {
        self.close_line();
        println!("[+] {}", message);
    }

    fn warn(&mut self, message: &str) {
        self.close_line();
        eprintln!("[-] Warning: {}", message);
    }
}
