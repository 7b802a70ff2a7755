#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the link-audit binary.
#[macro_export]
macro_rules! link_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("link-audit"))
    };
}

/// A temporary static-site tree for integration tests.
pub struct SiteFixture {
    pub dir: TempDir,
}

impl SiteFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp tree.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
