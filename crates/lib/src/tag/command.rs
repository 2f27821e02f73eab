use tracing::{debug, info};

use crate::config::TargetConfig;
use crate::extension::ExtensionRegistry;
use crate::platform::{host_wheel_tag, normalize_plat_name};

use super::{ArtifactTag, PythonVersion, TagError};

/// The finalize hook of an artifact build command.
///
/// A command is constructed, finalized, and then asked for its artifact tag.
pub trait FinalizeCommand {
  /// Compute the command's options. Safe to call more than once.
  fn finalize(&mut self) -> Result<(), TagError>;

  /// Purity decided by finalize; `None` until finalize has run.
  fn root_is_pure(&self) -> Option<bool>;

  fn is_finalized(&self) -> bool {
    self.root_is_pure().is_some()
  }

  /// Mark the artifact as platform-specific.
  ///
  /// # Errors
  ///
  /// Returns [`TagError::OverrideOrdering`] if finalize has not run yet.
  fn force_platform_specific(&mut self) -> Result<(), TagError>;

  /// Resolve the artifact tag from the finalized options.
  fn artifact_tag(&self) -> Result<ArtifactTag, TagError>;
}

impl<C: FinalizeCommand + ?Sized> FinalizeCommand for Box<C> {
  fn finalize(&mut self) -> Result<(), TagError> {
    (**self).finalize()
  }

  fn root_is_pure(&self) -> Option<bool> {
    (**self).root_is_pure()
  }

  fn force_platform_specific(&mut self) -> Result<(), TagError> {
    (**self).force_platform_specific()
  }

  fn artifact_tag(&self) -> Result<ArtifactTag, TagError> {
    (**self).artifact_tag()
  }
}

/// The stock finalize step.
///
/// Purity is inferred from whether any extension has sources to compile.
#[derive(Debug, Clone)]
pub struct BaseFinalize {
  extensions: ExtensionRegistry,
  target: TargetConfig,
  root_is_pure: Option<bool>,
}

impl BaseFinalize {
  pub fn new(extensions: ExtensionRegistry, target: TargetConfig) -> Self {
    Self {
      extensions,
      target,
      root_is_pure: None,
    }
  }

  fn python_version(&self) -> Result<PythonVersion, TagError> {
    match &self.target.python_version {
      Some(version) => version.parse(),
      None => PythonVersion::probe(self.target.interpreter()),
    }
  }

  fn platform_tag(&self) -> Result<String, TagError> {
    if let Some(name) = &self.target.plat_name {
      return Ok(normalize_plat_name(name));
    }
    Ok(host_wheel_tag(self.target.deployment_target.as_deref())?)
  }
}

impl FinalizeCommand for BaseFinalize {
  fn finalize(&mut self) -> Result<(), TagError> {
    let is_pure = !self.extensions.has_compiled_sources();
    debug!(
      is_pure,
      extensions = self.extensions.len(),
      "finalized build options"
    );
    self.root_is_pure = Some(is_pure);
    Ok(())
  }

  fn root_is_pure(&self) -> Option<bool> {
    self.root_is_pure
  }

  fn force_platform_specific(&mut self) -> Result<(), TagError> {
    if self.root_is_pure.is_none() {
      return Err(TagError::OverrideOrdering);
    }
    self.root_is_pure = Some(false);
    Ok(())
  }

  fn artifact_tag(&self) -> Result<ArtifactTag, TagError> {
    match self.root_is_pure {
      None => Err(TagError::NotFinalized),
      Some(true) => Ok(ArtifactTag::pure()),
      Some(false) => ArtifactTag::platform_specific(self.python_version()?, &self.platform_tag()?),
    }
  }
}

/// Decorator that forces a platform-specific artifact.
///
/// Runs the wrapped command's finalize unchanged and then clears its purity
/// flag. Every other operation is delegated.
#[derive(Debug, Clone)]
pub struct PlatformTagOverride<C> {
  inner: C,
}

impl<C: FinalizeCommand> PlatformTagOverride<C> {
  pub fn new(inner: C) -> Self {
    Self { inner }
  }

  pub fn inner(&self) -> &C {
    &self.inner
  }

  pub fn into_inner(self) -> C {
    self.inner
  }
}

impl<C: FinalizeCommand> FinalizeCommand for PlatformTagOverride<C> {
  fn finalize(&mut self) -> Result<(), TagError> {
    self.inner.finalize()?;
    if self.inner.root_is_pure() == Some(true) {
      info!("forcing platform-specific artifact tag");
    }
    self.inner.force_platform_specific()
  }

  fn root_is_pure(&self) -> Option<bool> {
    self.inner.root_is_pure()
  }

  fn force_platform_specific(&mut self) -> Result<(), TagError> {
    self.inner.force_platform_specific()
  }

  fn artifact_tag(&self) -> Result<ArtifactTag, TagError> {
    self.inner.artifact_tag()
  }
}
