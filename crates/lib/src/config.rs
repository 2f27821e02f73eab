//! Build configuration.
//!
//! A [`BuildConfig`] is created once per invocation and passed by reference
//! through the build. Target settings come from the environment and can be
//! overridden field by field (the CLI layers its flags on top).

use std::path::{Path, PathBuf};

use crate::consts::{DIST_DIR, README_FILENAME};
use crate::platform::MACOSX_DEPLOYMENT_TARGET;

/// Python version (`X.Y`) the platform-specific artifact targets.
pub const ENV_PYTHON_VERSION: &str = "OPENGV_DIST_PYTHON_VERSION";

/// Explicit platform tag, e.g. `manylinux2014_x86_64`.
pub const ENV_PLAT_NAME: &str = "OPENGV_DIST_PLAT_NAME";

/// Interpreter probed when no Python version is configured.
pub const ENV_PYTHON: &str = "OPENGV_DIST_PYTHON";

/// Interpreter probed when neither a version nor an interpreter is set.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Settings that decide the tags of a platform-specific artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetConfig {
  pub python_version: Option<String>,
  pub plat_name: Option<String>,
  pub interpreter: Option<String>,
  pub deployment_target: Option<String>,
}

impl TargetConfig {
  /// Read target settings from the environment. Empty values count as unset.
  pub fn from_env() -> Self {
    Self {
      python_version: env_var(ENV_PYTHON_VERSION),
      plat_name: env_var(ENV_PLAT_NAME),
      interpreter: env_var(ENV_PYTHON),
      deployment_target: env_var(MACOSX_DEPLOYMENT_TARGET),
    }
  }

  /// Layer `overrides` on top of `self`; set fields in `overrides` win.
  pub fn merge(self, overrides: TargetConfig) -> Self {
    Self {
      python_version: overrides.python_version.or(self.python_version),
      plat_name: overrides.plat_name.or(self.plat_name),
      interpreter: overrides.interpreter.or(self.interpreter),
      deployment_target: overrides.deployment_target.or(self.deployment_target),
    }
  }

  pub fn interpreter(&self) -> &str {
    self.interpreter.as_deref().unwrap_or(DEFAULT_INTERPRETER)
  }
}

fn env_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Everything one build invocation needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  /// Directory holding the readme and the package directories.
  pub project_dir: PathBuf,
  /// Directory the artifact is written to; created if missing.
  pub out_dir: PathBuf,
  /// Long-description resource.
  pub readme: PathBuf,
  pub target: TargetConfig,
}

impl BuildConfig {
  /// Configuration with the default layout under `project_dir` and target
  /// settings from the environment.
  pub fn new(project_dir: &Path) -> Self {
    Self {
      project_dir: project_dir.to_path_buf(),
      out_dir: project_dir.join(DIST_DIR),
      readme: project_dir.join(README_FILENAME),
      target: TargetConfig::from_env(),
    }
  }

  pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
    self.out_dir = out_dir;
    self
  }

  pub fn with_readme(mut self, readme: PathBuf) -> Self {
    self.readme = readme;
    self
  }

  /// Override target settings field by field.
  pub fn with_target(mut self, overrides: TargetConfig) -> Self {
    self.target = self.target.merge(overrides);
    self
  }
}
