//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Isolated project directory.
///
/// Each test gets its own temporary directory laid out like the pyopengv
/// project: a readme and a `pyopengv/` package directory.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Project with the fixture readme and an externally built binary.
  pub fn with_binary(name: &str) -> Self {
    let env = Self::without_binary();
    env.write_file(&format!("pyopengv/{}", name), b"\x7fELF prebuilt");
    env
  }

  /// Project with the fixture readme but no extension binary.
  pub fn without_binary() -> Self {
    let env = Self::empty();
    let readme = std::fs::read(fixture_path("README.txt")).unwrap();
    env.write_file("README.txt", &readme);
    env.write_file("pyopengv/__init__.py", b"from .pyopengv import *\n");
    env
  }

  /// Empty project directory.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Write a file relative to the project directory.
  pub fn write_file(&self, relative_path: &str, content: &[u8]) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn project_path(&self) -> PathBuf {
    let p = self.temp.path().to_path_buf();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  pub fn dist_path(&self) -> PathBuf {
    self.project_path().join("dist")
  }

  /// Wheels present in the output directory.
  pub fn wheels(&self) -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir(self.dist_path()) {
      Ok(entries) => entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect(),
      Err(_) => Vec::new(),
    };
    names.sort();
    names
  }

  /// Get a pre-configured Command for the opengv-dist binary.
  ///
  /// Clears the environment overlays so host settings cannot leak in and
  /// points `--project-dir` at the test project.
  pub fn cmd(&self, subcommand: &str) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("opengv-dist");
    cmd.env_remove("OPENGV_DIST_PYTHON_VERSION");
    cmd.env_remove("OPENGV_DIST_PLAT_NAME");
    cmd.env_remove("OPENGV_DIST_PYTHON");
    cmd.env_remove("MACOSX_DEPLOYMENT_TARGET");
    cmd.env_remove("RUST_LOG");
    cmd.arg(subcommand).arg("--project-dir").arg(self.project_path());
    cmd
  }
}
