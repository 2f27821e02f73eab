use tracing::{debug, info, warn};

use crate::config::BuildConfig;
use crate::extension::{ExtensionDescriptor, ExtensionRegistry, project_extensions};
use crate::metadata::{self, PackageDescriptor};
use crate::package_data::{PackageDataSelector, SelectedFile};
use crate::tag::ArtifactTag;
use crate::warning::BuildWarning;
use crate::wheel::{self, ArtifactDescriptor};

use super::{BuildError, BuildReport, BuildState, EntryPoint};

/// One build invocation.
///
/// Owns everything the build produces; nothing outlives it. Each step checks
/// that the run is in the stage right before it and moves the run to
/// [`BuildState::Failed`] on any error.
pub struct BuildRun<'a> {
  config: &'a BuildConfig,
  entry_point: EntryPoint,
  state: BuildState,
  declared: Vec<ExtensionDescriptor>,
  descriptor: Option<PackageDescriptor>,
  extensions: ExtensionRegistry,
  files: Vec<SelectedFile>,
  warnings: Vec<BuildWarning>,
  tag: Option<ArtifactTag>,
}

impl<'a> BuildRun<'a> {
  /// A run declaring the project's own extensions.
  pub fn new(config: &'a BuildConfig, entry_point: EntryPoint) -> Self {
    Self::with_extensions(config, entry_point, project_extensions())
  }

  /// A run declaring `extensions` instead of the project's.
  pub fn with_extensions(config: &'a BuildConfig, entry_point: EntryPoint, extensions: Vec<ExtensionDescriptor>) -> Self {
    Self {
      config,
      entry_point,
      state: BuildState::Initialized,
      declared: extensions,
      descriptor: None,
      extensions: ExtensionRegistry::new(),
      files: Vec::new(),
      warnings: Vec::new(),
      tag: None,
    }
  }

  pub fn state(&self) -> BuildState {
    self.state
  }

  pub fn entry_point(&self) -> EntryPoint {
    self.entry_point
  }

  pub fn descriptor(&self) -> Option<&PackageDescriptor> {
    self.descriptor.as_ref()
  }

  pub fn warnings(&self) -> &[BuildWarning] {
    &self.warnings
  }

  /// Verify the run sits in `expected` before starting a step.
  fn begin(&mut self, expected: BuildState) -> Result<(), BuildError> {
    if self.state != expected {
      let err = BuildError::InvalidTransition {
        from: self.state,
        to: expected.next().unwrap_or(BuildState::Failed),
      };
      self.state = BuildState::Failed;
      return Err(err);
    }
    Ok(())
  }

  fn advance(&mut self) {
    if let Some(next) = self.state.next() {
      debug!(from = %self.state, to = %next, "build stage complete");
      self.state = next;
    }
  }

  fn fail(&mut self, err: impl Into<BuildError>) -> BuildError {
    let err = err.into();
    warn!(stage = %self.state, error = %err, "build failed");
    self.state = BuildState::Failed;
    err
  }

  fn require_descriptor(&mut self) -> Result<PackageDescriptor, BuildError> {
    if let Some(descriptor) = &self.descriptor {
      return Ok(descriptor.clone());
    }
    Err(self.fail(BuildError::MissingStageOutput("package descriptor")))
  }

  pub fn assemble_metadata(&mut self) -> Result<(), BuildError> {
    self.begin(BuildState::Initialized)?;
    match metadata::assemble(&self.config.readme) {
      Ok(descriptor) => {
        info!(name = %descriptor.name, version = %descriptor.version, "assembled metadata");
        self.descriptor = Some(descriptor);
        self.advance();
        Ok(())
      }
      Err(e) => Err(self.fail(e)),
    }
  }

  pub fn register_extensions(&mut self) -> Result<(), BuildError> {
    self.begin(BuildState::MetadataAssembled)?;
    for extension in std::mem::take(&mut self.declared) {
      if let Err(e) = self.extensions.register(extension) {
        return Err(self.fail(e));
      }
    }
    self.advance();
    Ok(())
  }

  pub fn select_data(&mut self) -> Result<(), BuildError> {
    self.begin(BuildState::ExtensionsRegistered)?;
    let descriptor = self.require_descriptor()?;
    let selector = PackageDataSelector::from_descriptor(&descriptor);
    match selector.select(&self.config.project_dir) {
      Ok(selection) => {
        info!(files = selection.files.len(), warnings = selection.warnings.len(), "selected package files");
        self.files = selection.files;
        self.warnings.extend(selection.warnings);
        self.advance();
        Ok(())
      }
      Err(e) => Err(self.fail(e)),
    }
  }

  pub fn finalize(&mut self) -> Result<(), BuildError> {
    self.begin(BuildState::DataSelected)?;
    let mut command = self
      .entry_point
      .command(self.extensions.clone(), self.config.target.clone());

    let tag = match command.finalize().and_then(|_| command.artifact_tag()) {
      Ok(tag) => tag,
      Err(e) => return Err(self.fail(e)),
    };

    if tag.is_pure && self.extensions.has_native_content() {
      let extensions: Vec<String> = self.extensions.extensions().iter().map(|e| e.name.clone()).collect();
      warn!(extensions = ?extensions, "native extensions registered but artifact is tagged pure");
      self.warnings.push(BuildWarning::PureWithNativeContent { extensions });
    }

    info!(entry_point = %self.entry_point, tag = %tag, is_pure = tag.is_pure, "finalized artifact tag");
    self.tag = Some(tag);
    self.advance();
    Ok(())
  }

  pub fn emit(&mut self) -> Result<ArtifactDescriptor, BuildError> {
    self.begin(BuildState::Finalized)?;
    let descriptor = self.require_descriptor()?;
    let Some(tag) = self.tag.clone() else {
      return Err(self.fail(BuildError::MissingStageOutput("artifact tag")));
    };

    match wheel::write_wheel(&self.config.out_dir, &descriptor, &tag, &self.files) {
      Ok(artifact) => {
        self.advance();
        Ok(artifact)
      }
      Err(e) => Err(self.fail(e)),
    }
  }

  /// Run every stage in order and report the emitted artifact.
  pub fn run(mut self) -> Result<BuildReport, BuildError> {
    info!(entry_point = %self.entry_point, project = %self.config.project_dir.display(), "starting build");
    self.assemble_metadata()?;
    self.register_extensions()?;
    self.select_data()?;
    self.finalize()?;
    let artifact = self.emit()?;

    let package = self.require_descriptor()?.summary();
    Ok(BuildReport {
      entry_point: self.entry_point,
      package,
      artifact,
      warnings: self.warnings,
    })
  }
}
