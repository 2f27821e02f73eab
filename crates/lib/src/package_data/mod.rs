//! Selection of files bundled into the installed package tree.
//!
//! Each declared package contributes its Python modules plus every file
//! matching one of its package-data patterns. Only the package directory's
//! own files are considered; sub-packages are declared separately.

mod pattern;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::metadata::PackageDescriptor;
use crate::warning::BuildWarning;

pub use pattern::GlobPattern;

#[derive(Debug, Error)]
pub enum PackageDataError {
  #[error("package directory {} for '{package}' does not exist", path.display())]
  MissingPackageDir { package: String, path: PathBuf },

  #[error("failed to list {}: {message}", path.display())]
  Walk { path: PathBuf, message: String },
}

/// Why a file is part of the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOrigin {
  Module,
  PackageData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
  pub source: PathBuf,
  /// Path inside the archive, `/`-separated.
  pub archive_path: String,
  pub origin: FileOrigin,
}

/// Files chosen for the artifact plus the warnings raised choosing them.
#[derive(Debug, Default)]
pub struct Selection {
  pub files: Vec<SelectedFile>,
  pub warnings: Vec<BuildWarning>,
}

/// Per-package inclusion patterns.
#[derive(Debug, Clone, Default)]
pub struct PackageDataSelector {
  packages: Vec<String>,
  patterns: BTreeMap<String, Vec<GlobPattern>>,
}

impl PackageDataSelector {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a selector from the packages and package data of a descriptor.
  pub fn from_descriptor(descriptor: &PackageDescriptor) -> Self {
    let mut selector = Self::new();
    for package in &descriptor.packages {
      selector.add_package(package);
    }
    for (package, patterns) in &descriptor.package_data {
      for pattern in patterns {
        selector.add_pattern(package, pattern);
      }
    }
    selector
  }

  pub fn add_package(&mut self, package: &str) {
    if !self.packages.iter().any(|p| p == package) {
      self.packages.push(package.to_string());
    }
  }

  /// Append a pattern to a package's ordered pattern list.
  ///
  /// Patterns for packages that are never declared are ignored at selection
  /// time.
  pub fn add_pattern(&mut self, package: &str, pattern: &str) {
    self
      .patterns
      .entry(package.to_string())
      .or_default()
      .push(GlobPattern::new(pattern));
  }

  pub fn patterns(&self, package: &str) -> &[GlobPattern] {
    self.patterns.get(package).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Select files under `project_dir`.
  ///
  /// # Errors
  ///
  /// Fails if a declared package directory is missing or unreadable. A
  /// pattern matching nothing only adds a [`BuildWarning::EmptyGlobMatch`].
  pub fn select(&self, project_dir: &Path) -> Result<Selection, PackageDataError> {
    let mut selection = Selection::default();
    let mut seen = BTreeSet::new();

    for package in &self.packages {
      let rel_dir = package.replace('.', "/");
      let dir = project_dir.join(&rel_dir);
      if !dir.is_dir() {
        return Err(PackageDataError::MissingPackageDir {
          package: package.clone(),
          path: dir,
        });
      }

      let entries = list_files(&dir)?;
      let patterns = self.patterns(package);
      let mut match_counts = vec![0usize; patterns.len()];

      for (name, source) in entries {
        let mut origin = None;
        for (i, pattern) in patterns.iter().enumerate() {
          if pattern.matches(&name) {
            match_counts[i] += 1;
            origin = Some(FileOrigin::PackageData);
          }
        }
        if origin.is_none() && name.ends_with(".py") {
          origin = Some(FileOrigin::Module);
        }

        let Some(origin) = origin else {
          continue;
        };

        let archive_path = format!("{}/{}", rel_dir, name);
        if seen.insert(archive_path.clone()) {
          debug!(path = %archive_path, ?origin, "selected file");
          selection.files.push(SelectedFile {
            source,
            archive_path,
            origin,
          });
        }
      }

      for (pattern, count) in patterns.iter().zip(match_counts) {
        if count == 0 {
          warn!(package = %package, pattern = %pattern, "package-data pattern matched no files");
          selection.warnings.push(BuildWarning::EmptyGlobMatch {
            package: package.clone(),
            pattern: pattern.to_string(),
          });
        }
      }
    }

    for package in self.patterns.keys() {
      if !self.packages.contains(package) {
        warn!(package = %package, "package data declared for a package that is not included");
      }
    }

    selection.files.sort_by(|a, b| a.archive_path.cmp(&b.archive_path));
    Ok(selection)
  }
}

/// List the regular files directly inside `dir`, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, PackageDataError> {
  let mut files = Vec::new();

  let walker = WalkDir::new(dir)
    .min_depth(1)
    .max_depth(1)
    .follow_links(true)
    .sort_by_file_name();

  for entry in walker {
    let entry = entry.map_err(|e| PackageDataError::Walk {
      path: dir.to_path_buf(),
      message: e.to_string(),
    })?;
    if !entry.file_type().is_file() {
      continue;
    }
    // Non UTF-8 names cannot be written to RECORD; skip them.
    let Some(name) = entry.file_name().to_str() else {
      warn!(path = ?entry.path(), "skipping file with non UTF-8 name");
      continue;
    };
    files.push((name.to_string(), entry.path().to_path_buf()));
  }

  Ok(files)
}
