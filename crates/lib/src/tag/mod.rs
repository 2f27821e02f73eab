//! Artifact tagging.
//!
//! The base finalize step infers purity from compiled extension sources,
//! which misclassifies prebuilt extensions as pure. [`PlatformTagOverride`]
//! decorates any [`FinalizeCommand`] and forces the artifact to be
//! platform-specific once the base step has run.

mod command;
mod python;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{PURE_ABI_TAG, PURE_PLATFORM_TAG, PURE_PYTHON_TAG};
use crate::platform::PlatformError;

pub use command::{BaseFinalize, FinalizeCommand, PlatformTagOverride};
pub use python::PythonVersion;

#[derive(Debug, Error)]
pub enum TagError {
  #[error("purity override applied before the base finalize step completed")]
  OverrideOrdering,

  #[error("artifact tag requested before finalize")]
  NotFinalized,

  #[error(transparent)]
  Platform(#[from] PlatformError),

  #[error("platform-specific artifact cannot use the '{0}' platform tag")]
  PlatformSentinel(String),

  #[error("invalid python version '{0}', expected MAJOR.MINOR")]
  InvalidPythonVersion(String),

  #[error("failed to query python version from '{interpreter}': {message}")]
  InterpreterProbe { interpreter: String, message: String },
}

/// Compatibility tags of an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactTag {
  pub python_tag: String,
  pub abi_tag: String,
  pub platform_tag: String,
  pub is_pure: bool,
}

impl ArtifactTag {
  /// Tag of an artifact with no native content: `py3-none-any`.
  pub fn pure() -> Self {
    Self {
      python_tag: PURE_PYTHON_TAG.to_string(),
      abi_tag: PURE_ABI_TAG.to_string(),
      platform_tag: PURE_PLATFORM_TAG.to_string(),
      is_pure: true,
    }
  }

  /// Tag of an artifact built for one interpreter and platform.
  ///
  /// # Errors
  ///
  /// Returns [`TagError::PlatformSentinel`] for the `any` platform.
  pub fn platform_specific(python: PythonVersion, platform_tag: &str) -> Result<Self, TagError> {
    if platform_tag.is_empty() || platform_tag == PURE_PLATFORM_TAG {
      return Err(TagError::PlatformSentinel(platform_tag.to_string()));
    }
    Ok(Self {
      python_tag: python.interpreter_tag(),
      abi_tag: python.abi_tag(),
      platform_tag: platform_tag.to_string(),
      is_pure: false,
    })
  }
}

impl fmt::Display for ArtifactTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}-{}", self.python_tag, self.abi_tag, self.platform_tag)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pure_tag_is_universal() {
    let tag = ArtifactTag::pure();
    assert!(tag.is_pure);
    assert_eq!(tag.to_string(), "py3-none-any");
  }

  #[test]
  fn platform_specific_tag_is_concrete() {
    let tag = ArtifactTag::platform_specific(PythonVersion::new(3, 8), "linux_x86_64").unwrap();
    assert!(!tag.is_pure);
    assert_eq!(tag.to_string(), "cp38-cp38-linux_x86_64");
  }

  #[test]
  fn platform_specific_tag_rejects_any() {
    let err = ArtifactTag::platform_specific(PythonVersion::new(3, 8), "any").unwrap_err();
    assert!(matches!(err, TagError::PlatformSentinel(p) if p == "any"));
  }
}
