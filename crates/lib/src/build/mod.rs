//! Build entry points.
//!
//! A build runs as a fixed sequence of stages (see [`BuildState`]):
//! metadata assembly, extension registration, package-data selection,
//! finalize, and emission of exactly one wheel. The two [`EntryPoint`]s
//! differ only in the finalize command they use.

mod run;
mod state;
mod types;

use thiserror::Error;

use crate::config::BuildConfig;
use crate::extension::ExtensionError;
use crate::metadata::MetadataError;
use crate::package_data::PackageDataError;
use crate::tag::TagError;
use crate::wheel::WheelError;

pub use run::BuildRun;
pub use state::BuildState;
pub use types::{BuildReport, EntryPoint};

#[derive(Debug, Error)]
pub enum BuildError {
  #[error(transparent)]
  Metadata(#[from] MetadataError),

  #[error(transparent)]
  Extension(#[from] ExtensionError),

  #[error(transparent)]
  PackageData(#[from] PackageDataError),

  #[error(transparent)]
  Tag(#[from] TagError),

  #[error(transparent)]
  Wheel(#[from] WheelError),

  #[error("invalid build transition from {from} to {to}")]
  InvalidTransition { from: BuildState, to: BuildState },

  #[error("{0} missing from an earlier stage")]
  MissingStageOutput(&'static str),
}

/// Run a complete build for `entry_point`.
///
/// # Errors
///
/// Any fatal error aborts the build; no artifact is left in the output
/// directory.
pub fn build(config: &BuildConfig, entry_point: EntryPoint) -> Result<BuildReport, BuildError> {
  BuildRun::new(config, entry_point).run()
}
