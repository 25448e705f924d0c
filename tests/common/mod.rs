//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_project().with_template_archive();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::should_skip_network_tests;
    #[allow(unused_imports)]
    pub use super::template_zip;
    pub use super::TestFixture;
}

/// Check if network tests should be skipped.
///
/// Returns `true` if the `SKIP_NETWORK_TESTS` environment variable is set.
#[allow(dead_code)]
pub fn should_skip_network_tests() -> bool {
    env::var("SKIP_NETWORK_TESTS").is_ok()
}

/// Builds a small Xcode template archive in memory.
///
/// The archive mirrors the real template layout closely enough for the
/// merge step: an Xcode project file and the `app` directory.
pub fn template_zip() -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    zip.add_directory("pygame-ios/app/pygame-ios/", options)
        .expect("Failed to add directory");
    zip.start_file("pygame-ios/pygame-ios.xcodeproj/project.pbxproj", options)
        .expect("Failed to start file");
    zip.write_all(b"// !$*UTF8*$!")
        .expect("Failed to write file");
    zip.start_file("pygame-ios/app/main.m", options)
        .expect("Failed to start file");
    zip.write_all(b"int main(void) { return 0; }")
        .expect("Failed to write file");
    zip.finish().expect("Failed to finish archive").into_inner()
}

/// A temporary workspace holding a project directory and, optionally, a
/// template archive next to it.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_project()
///     .with_template_archive();
///
/// fixture
///     .command()
///     .args(["game", "game.py", "2.5.3"])
///     .arg(fixture.archive_path())
///     .assert()
///     .success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add the sample project: `game/game.py` and `game/assets/sprite.png`.
    pub fn with_project(self) -> Self {
        self.with_file("game/game.py", "import pygame\n")
            .with_binary_file("game/assets/sprite.png", &[0x89, b'P', b'N', b'G'])
    }

    /// Add `template.zip` next to the project.
    pub fn with_template_archive(self) -> Self {
        self.with_binary_file("template.zip", &template_zip())
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a binary file with the given path and content.
    pub fn with_binary_file(self, path: &str, content: &[u8]) -> Self {
        self.temp_dir
            .child(path)
            .write_binary(content)
            .expect("Failed to write binary file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the sample project directory.
    #[allow(dead_code)]
    pub fn project_path(&self) -> PathBuf {
        self.temp_dir.path().join("game")
    }

    /// Path of the template archive.
    #[allow(dead_code)]
    pub fn archive_path(&self) -> PathBuf {
        self.temp_dir.path().join("template.zip")
    }

    /// The directory the project files are merged into.
    #[allow(dead_code)]
    pub fn app_path(&self) -> PathBuf {
        self.project_path()
            .join("pygame-ios-template/pygame-ios/app/pygame-ios")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command configured to run in this fixture's directory.
    ///
    /// Endpoint variables are cleared so a developer's environment cannot
    /// redirect the run.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pygame-ios");
        cmd.current_dir(self.path())
            .env_remove("PYGAME_IOS_TEMPLATE")
            .env_remove("PYGAME_IOS_RELEASE_API")
            .env_remove("PYGAME_IOS_DOWNLOAD_URL")
            .env_remove("PYGAME_IOS_VERSIONS_URL")
            .env("NO_COLOR", "1");
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_project() {
        let fixture = TestFixture::new().with_project();
        assert!(fixture.project_path().join("game.py").exists());
        assert!(fixture.project_path().join("assets/sprite.png").exists());
    }

    #[test]
    fn test_template_zip_is_readable() {
        let archive = zip::ZipArchive::new(std::io::Cursor::new(template_zip())).unwrap();
        assert_eq!(archive.len(), 3);
    }
}
