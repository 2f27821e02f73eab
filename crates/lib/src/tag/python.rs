use std::fmt;
use std::process::Command;
use std::str::FromStr;

use tracing::{debug, info};

use super::TagError;

const VERSION_SCRIPT: &str = "import sys; print('%d.%d' % sys.version_info[:2])";

/// A CPython `major.minor` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
  pub major: u32,
  pub minor: u32,
}

impl PythonVersion {
  pub fn new(major: u32, minor: u32) -> Self {
    Self { major, minor }
  }

  /// Interpreter tag, e.g. `cp38`.
  pub fn interpreter_tag(&self) -> String {
    format!("cp{}{}", self.major, self.minor)
  }

  /// ABI tag. CPython before 3.8 used the `m` (pymalloc) suffix.
  pub fn abi_tag(&self) -> String {
    if (self.major, self.minor) < (3, 8) {
      format!("cp{}{}m", self.major, self.minor)
    } else {
      self.interpreter_tag()
    }
  }

  /// Ask an interpreter for its version.
  pub fn probe(interpreter: &str) -> Result<Self, TagError> {
    debug!(interpreter = %interpreter, "probing interpreter version");
    let output = Command::new(interpreter)
      .args(["-c", VERSION_SCRIPT])
      .output()
      .map_err(|e| TagError::InterpreterProbe {
        interpreter: interpreter.to_string(),
        message: e.to_string(),
      })?;

    if !output.status.success() {
      return Err(TagError::InterpreterProbe {
        interpreter: interpreter.to_string(),
        message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version: PythonVersion = stdout.trim().parse()?;
    info!(interpreter = %interpreter, version = %version, "detected python version");
    Ok(version)
  }
}

impl FromStr for PythonVersion {
  type Err = TagError;

  /// Parse `X.Y` or `X.Y.Z`; the patch level is ignored.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || TagError::InvalidPythonVersion(s.to_string());
    let mut parts = s.trim().split('.');
    let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some_and(|p| p.parse::<u32>().is_err()) {
      return Err(invalid());
    }
    Ok(Self { major, minor })
  }
}

impl fmt::Display for PythonVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.major, self.minor)
  }
}
