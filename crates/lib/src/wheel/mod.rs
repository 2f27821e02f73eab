//! Wheel archive emission.
//!
//! # Layout
//!
//! ```text
//! {name}-{version}-{python}-{abi}-{platform}.whl
//! ├── pyopengv/...                      # selected package files
//! └── {name}-{version}.dist-info/
//!     ├── METADATA
//!     ├── WHEEL
//!     ├── top_level.txt
//!     └── RECORD
//! ```
//!
//! The archive is staged in a temporary file inside the output directory and
//! renamed into place once complete, so a failed write leaves no artifact.

mod writer;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{APP_NAME, APP_VERSION, WHEEL_VERSION};
use crate::metadata::PackageDescriptor;
use crate::package_data::SelectedFile;
use crate::tag::ArtifactTag;
use crate::util::hash::{ContentHash, HashError, hash_file};

pub use writer::{WheelWriter, render_record};

#[derive(Debug, Error)]
pub enum WheelError {
  #[error("failed to create output directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to read {}: {source}", path.display())]
  ReadSource { path: PathBuf, source: io::Error },

  #[error("failed to write archive: {0}")]
  Write(#[source] io::Error),

  #[error("failed to move archive to {}: {source}", path.display())]
  Persist { path: PathBuf, source: io::Error },

  #[error("archive already contains {0}")]
  DuplicateEntry(String),

  #[error(transparent)]
  Zip(#[from] zip::result::ZipError),

  #[error(transparent)]
  Hash(#[from] HashError),
}

/// One archive member as listed in `RECORD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
  pub path: String,
  pub digest: Option<String>,
  pub size: Option<u64>,
}

/// What a build emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDescriptor {
  pub name: String,
  pub version: String,
  pub filename: String,
  pub path: PathBuf,
  pub tag: ArtifactTag,
  pub size: u64,
  pub sha256: ContentHash,
  pub manifest: Vec<ManifestEntry>,
}

/// File name of the wheel for `descriptor` tagged with `tag`.
pub fn wheel_filename(descriptor: &PackageDescriptor, tag: &ArtifactTag) -> String {
  format!(
    "{}-{}-{}.whl",
    descriptor.escaped_name(),
    descriptor.escaped_version(),
    tag
  )
}

/// Contents of the `WHEEL` file.
pub fn render_wheel_file(tag: &ArtifactTag) -> String {
  format!(
    "Wheel-Version: {}\nGenerator: {} ({})\nRoot-Is-Purelib: {}\nTag: {}\n",
    WHEEL_VERSION, APP_NAME, APP_VERSION, tag.is_pure, tag
  )
}

/// Write the wheel into `out_dir`.
///
/// An existing wheel with the same name is replaced.
pub fn write_wheel(
  out_dir: &Path,
  descriptor: &PackageDescriptor,
  tag: &ArtifactTag,
  files: &[SelectedFile],
) -> Result<ArtifactDescriptor, WheelError> {
  fs::create_dir_all(out_dir).map_err(|source| WheelError::CreateDir {
    path: out_dir.to_path_buf(),
    source,
  })?;

  let filename = wheel_filename(descriptor, tag);
  let path = out_dir.join(&filename);
  let dist_info = descriptor.dist_info_dir();

  let staging = NamedTempFile::new_in(out_dir).map_err(WheelError::Write)?;
  let mut writer = WheelWriter::new(staging);

  for file in files {
    let data = fs::read(&file.source).map_err(|source| WheelError::ReadSource {
      path: file.source.clone(),
      source,
    })?;
    debug!(path = %file.archive_path, size = data.len(), "adding file");
    writer.add(&file.archive_path, &data)?;
  }

  writer.add(&format!("{}/METADATA", dist_info), descriptor.render_metadata().as_bytes())?;
  writer.add(&format!("{}/WHEEL", dist_info), render_wheel_file(tag).as_bytes())?;
  writer.add(&format!("{}/top_level.txt", dist_info), descriptor.top_level().as_bytes())?;

  let (staging, manifest) = writer.finish(&format!("{}/RECORD", dist_info))?;
  staging.as_file().sync_all().map_err(WheelError::Write)?;
  staging.persist(&path).map_err(|e| WheelError::Persist {
    path: path.clone(),
    source: e.error,
  })?;

  let size = fs::metadata(&path).map_err(WheelError::Write)?.len();
  let sha256 = hash_file(&path)?;
  info!(path = %path.display(), size, tag = %tag, "wrote wheel");

  Ok(ArtifactDescriptor {
    name: descriptor.name.clone(),
    version: descriptor.version.clone(),
    filename,
    path,
    tag: tag.clone(),
    size,
    sha256,
    manifest,
  })
}
