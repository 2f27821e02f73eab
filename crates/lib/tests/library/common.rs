//! Shared fixtures for library integration tests.

use std::io::Read;
use std::path::Path;

use opengv_dist_lib::config::{BuildConfig, TargetConfig};
use tempfile::TempDir;

pub const README: &str = "OpenGV\n======\n\nPython bindings for OpenGV.\n";

/// A project directory with a readme and an externally built binary.
pub fn project(binary: Option<&str>) -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("README.txt"), README).unwrap();
  std::fs::create_dir(temp.path().join("pyopengv")).unwrap();
  std::fs::write(temp.path().join("pyopengv/__init__.py"), "from .pyopengv import *\n").unwrap();
  if let Some(name) = binary {
    std::fs::write(temp.path().join("pyopengv").join(name), b"\x7fELF not really").unwrap();
  }
  temp
}

pub fn config(dir: &Path) -> BuildConfig {
  BuildConfig::new(dir).with_target(TargetConfig {
    python_version: Some("3.8".to_string()),
    plat_name: Some("linux_x86_64".to_string()),
    interpreter: Some("opengv-dist-no-such-python".to_string()),
    ..Default::default()
  })
}

pub fn dist_entries(dir: &Path) -> usize {
  match std::fs::read_dir(dir.join("dist")) {
    Ok(entries) => entries.count(),
    Err(_) => 0,
  }
}

pub fn read_member(path: &Path, name: &str) -> Vec<u8> {
  let mut archive = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
  let mut data = Vec::new();
  archive.by_name(name).unwrap().read_to_end(&mut data).unwrap();
  data
}
