//! Shared testing utilities for classwriter integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_TEMPLATE: &str = r#"package <PACKAGE>Sample;

public class <CLASSNAME> {
    // <METHODSIG>
    public static void main(String[] argv) throws Exception {
        Registry registry = LocateRegistry.getRegistry("<REMOTEHOST>", <REMOTEPORT>);
        <CLASS> stub = (<CLASS>) registry.lookup("<BOUNDNAME>");
        <RETURNTYPE> response = stub.<METHODNAME>(<ARGUMENTS>);
        System.out.println("Called <METHODNAME> with <ARGCOUNT> argument(s): " + response);
    }
}
"#;

/// Testing harness providing an isolated template and source folder.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty `templates/` folder.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("templates"))
            .expect("Failed to create templates directory");
        Self { root }
    }

    /// Working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn templates_path(&self) -> PathBuf {
        self.root.path().join("templates")
    }

    pub fn sources_path(&self) -> PathBuf {
        self.root.path().join("sources")
    }

    /// Write a template file into `templates/`.
    pub fn add_template(&self, name: &str, content: &str) {
        fs::write(self.templates_path().join(name), content).expect("Failed to write template");
    }

    /// Write the default sample template.
    pub fn add_sample_template(&self) {
        self.add_template("SampleTemplate.java", SAMPLE_TEMPLATE);
    }

    /// Read a generated source file from `sources/`.
    pub fn read_source(&self, file_name: &str) -> String {
        fs::read_to_string(self.sources_path().join(file_name))
            .unwrap_or_else(|e| panic!("Failed to read generated {}: {}", file_name, e))
    }

    pub fn assert_source_not_exists(&self, file_name: &str) {
        assert!(
            !self.sources_path().join(file_name).exists(),
            "{} should not have been written",
            file_name
        );
    }

    /// Build a command for invoking the compiled `classwriter` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("classwriter").expect("Failed to locate classwriter binary");
        cmd.current_dir(self.work_dir());
        cmd
    }
}
