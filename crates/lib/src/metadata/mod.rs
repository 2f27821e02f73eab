//! Package metadata assembly.
//!
//! Builds the [`PackageDescriptor`] from the fixed project values in
//! [`crate::consts`] and the long description read from a text resource.

mod types;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::{
  EXTENSION_DATA_PATTERN, PACKAGE_NAME, PROJECT_AUTHOR, PROJECT_DESCRIPTION, PROJECT_DOCUMENTATION_URL,
  PROJECT_LICENSE, PROJECT_NAME, PROJECT_URL, PROJECT_VERSION,
};

pub use types::{PackageDescriptor, PackageSummary, escape_component};

#[derive(Debug, Error)]
pub enum MetadataError {
  #[error("long description resource {} could not be read: {source}", path.display())]
  MissingResource { path: PathBuf, source: io::Error },
}

/// Read a resource file in full.
///
/// The handle lives only inside this function and is closed on every return
/// path, including failures part-way through the read.
fn read_resource(path: &Path) -> Result<String, MetadataError> {
  let to_err = |source| MetadataError::MissingResource {
    path: path.to_path_buf(),
    source,
  };

  let mut file = File::open(path).map_err(to_err)?;
  let mut content = String::new();
  file.read_to_string(&mut content).map_err(to_err)?;
  Ok(content)
}

/// Assemble the package descriptor.
///
/// # Errors
///
/// Returns [`MetadataError::MissingResource`] if `readme` does not exist or
/// cannot be read as UTF-8 text. No partial descriptor is produced.
pub fn assemble(readme: &Path) -> Result<PackageDescriptor, MetadataError> {
  let long_description = read_resource(readme)?;
  debug!(path = %readme.display(), bytes = long_description.len(), "read long description");

  let mut package_data = BTreeMap::new();
  package_data.insert(PACKAGE_NAME.to_string(), vec![EXTENSION_DATA_PATTERN.to_string()]);

  Ok(PackageDescriptor {
    name: PROJECT_NAME.to_string(),
    version: PROJECT_VERSION.to_string(),
    description: PROJECT_DESCRIPTION.to_string(),
    long_description,
    url: PROJECT_URL.to_string(),
    documentation_url: PROJECT_DOCUMENTATION_URL.to_string(),
    author: PROJECT_AUTHOR.to_string(),
    license: PROJECT_LICENSE.to_string(),
    packages: vec![PACKAGE_NAME.to_string()],
    package_data,
  })
}
