use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TargetConfig;
use crate::extension::ExtensionRegistry;
use crate::metadata::PackageSummary;
use crate::tag::{BaseFinalize, FinalizeCommand, PlatformTagOverride};
use crate::warning::BuildWarning;
use crate::wheel::ArtifactDescriptor;

/// The two shipped build configurations.
///
/// They share every piece of metadata and differ only in whether the
/// finalize command is wrapped in [`PlatformTagOverride`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPoint {
  /// Stock tagging heuristic.
  Default,
  /// Always emits a platform- and ABI-specific artifact.
  PlatformTagged,
}

impl EntryPoint {
  /// Build the finalize command for this entry point.
  pub fn command(self, extensions: ExtensionRegistry, target: TargetConfig) -> Box<dyn FinalizeCommand> {
    let base = BaseFinalize::new(extensions, target);
    match self {
      Self::Default => Box::new(base),
      Self::PlatformTagged => Box::new(PlatformTagOverride::new(base)),
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Default => "default",
      Self::PlatformTagged => "platform_tagged",
    }
  }
}

impl fmt::Display for EntryPoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
  pub entry_point: EntryPoint,
  pub package: PackageSummary,
  pub artifact: ArtifactDescriptor,
  pub warnings: Vec<BuildWarning>,
}

impl BuildReport {
  /// False when a package-data pattern matched nothing, meaning the
  /// artifact may be missing files.
  pub fn is_complete(&self) -> bool {
    !self
      .warnings
      .iter()
      .any(|w| matches!(w, BuildWarning::EmptyGlobMatch { .. }))
  }
}
