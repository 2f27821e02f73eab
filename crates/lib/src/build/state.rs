use std::fmt;

use serde::{Deserialize, Serialize};

/// Stages of one build invocation.
///
/// Stages advance strictly in declaration order. `Failed` is terminal and
/// reachable from every stage before `Emitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
  Initialized,
  MetadataAssembled,
  ExtensionsRegistered,
  DataSelected,
  Finalized,
  Emitted,
  Failed,
}

impl BuildState {
  /// The stage that follows this one on success.
  pub fn next(self) -> Option<Self> {
    match self {
      Self::Initialized => Some(Self::MetadataAssembled),
      Self::MetadataAssembled => Some(Self::ExtensionsRegistered),
      Self::ExtensionsRegistered => Some(Self::DataSelected),
      Self::DataSelected => Some(Self::Finalized),
      Self::Finalized => Some(Self::Emitted),
      Self::Emitted | Self::Failed => None,
    }
  }

  pub fn is_terminal(self) -> bool {
    self.next().is_none()
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Initialized => "initialized",
      Self::MetadataAssembled => "metadata_assembled",
      Self::ExtensionsRegistered => "extensions_registered",
      Self::DataSelected => "data_selected",
      Self::Finalized => "finalized",
      Self::Emitted => "emitted",
      Self::Failed => "failed",
    }
  }
}

impl fmt::Display for BuildState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
