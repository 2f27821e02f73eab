//! Native extension registration.
//!
//! Extensions are declared, never compiled: a [`ExtensionKind::Prebuilt`]
//! extension's binary is produced by an external toolchain and only bundled
//! as package data, and [`ExtensionKind::Compiled`] sources are recorded for
//! classification only.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::consts::EXTENSION_NAME;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtensionError {
  #[error("extension '{name}' is already registered")]
  DuplicateExtensionName { name: String },
}

/// How an extension's binary comes to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtensionKind {
  /// Built from the listed sources.
  Compiled { sources: Vec<PathBuf> },
  /// Binary supplied out-of-band.
  Prebuilt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionDescriptor {
  /// Dotted module path, e.g. `pyopengv.pyopengv`.
  pub name: String,
  #[serde(flatten)]
  pub kind: ExtensionKind,
}

impl ExtensionDescriptor {
  pub fn prebuilt(name: &str) -> Self {
    Self {
      name: name.to_string(),
      kind: ExtensionKind::Prebuilt,
    }
  }

  pub fn compiled(name: &str, sources: Vec<PathBuf>) -> Self {
    Self {
      name: name.to_string(),
      kind: ExtensionKind::Compiled { sources },
    }
  }

  /// Build a descriptor from a possibly-empty source list.
  ///
  /// An empty list means the binary is supplied externally.
  pub fn from_sources(name: &str, sources: Vec<PathBuf>) -> Self {
    if sources.is_empty() {
      Self::prebuilt(name)
    } else {
      Self::compiled(name, sources)
    }
  }

  pub fn is_prebuilt(&self) -> bool {
    matches!(self.kind, ExtensionKind::Prebuilt)
  }
}

/// Extensions the project declares: the externally built binding module.
pub fn project_extensions() -> Vec<ExtensionDescriptor> {
  vec![ExtensionDescriptor::from_sources(EXTENSION_NAME, Vec::new())]
}

/// Extensions registered for one build, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
  extensions: Vec<ExtensionDescriptor>,
}

impl ExtensionRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an extension.
  ///
  /// # Errors
  ///
  /// Returns [`ExtensionError::DuplicateExtensionName`] if an extension with
  /// the same name was already registered. The registry is left unchanged.
  pub fn register(&mut self, extension: ExtensionDescriptor) -> Result<(), ExtensionError> {
    if self.extensions.iter().any(|e| e.name == extension.name) {
      return Err(ExtensionError::DuplicateExtensionName { name: extension.name });
    }
    debug!(name = %extension.name, prebuilt = extension.is_prebuilt(), "registered extension");
    self.extensions.push(extension);
    Ok(())
  }

  pub fn extensions(&self) -> &[ExtensionDescriptor] {
    &self.extensions
  }

  pub fn len(&self) -> usize {
    self.extensions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.extensions.is_empty()
  }

  /// Whether the package ships any native code, prebuilt or compiled.
  pub fn has_native_content(&self) -> bool {
    !self.extensions.is_empty()
  }

  /// Whether any extension lists sources to compile.
  pub fn has_compiled_sources(&self) -> bool {
    self
      .extensions
      .iter()
      .any(|e| matches!(&e.kind, ExtensionKind::Compiled { sources } if !sources.is_empty()))
  }
}
