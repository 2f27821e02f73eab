//! Non-fatal build diagnostics.
//!
//! Warnings never stop a build. They travel with the artifact so callers can
//! tell a complete artifact from a possibly incomplete one.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum BuildWarning {
  /// A package-data pattern selected no files.
  EmptyGlobMatch { package: String, pattern: String },
  /// The artifact was tagged pure although native extensions are registered.
  PureWithNativeContent { extensions: Vec<String> },
}

impl fmt::Display for BuildWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyGlobMatch { package, pattern } => {
        write!(f, "pattern '{}' in package '{}' matched no files", pattern, package)
      }
      Self::PureWithNativeContent { extensions } => write!(
        f,
        "artifact is tagged pure but ships native extensions: {}",
        extensions.join(", ")
      ),
    }
  }
}
