//! Host platform detection and wheel platform tags.

pub mod arch;
pub mod os;

use arch::Arch;
use os::Os;
use thiserror::Error;

/// Environment variable selecting the minimum macOS version of a wheel.
pub const MACOSX_DEPLOYMENT_TARGET: &str = "MACOSX_DEPLOYMENT_TARGET";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
  #[error("unsupported build platform: {os}/{arch}")]
  Unsupported { os: String, arch: String },

  #[error("invalid MACOSX_DEPLOYMENT_TARGET '{0}', expected MAJOR or MAJOR.MINOR")]
  InvalidDeploymentTarget(String),
}

/// An operating system and CPU architecture pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
  pub arch: Arch,
  pub os: Os,
}

impl Platform {
  pub fn new(arch: Arch, os: Os) -> Self {
    Self { arch, os }
  }

  /// Detect the platform this binary runs on.
  pub fn current() -> Result<Self, PlatformError> {
    match (Arch::current(), Os::current()) {
      (Some(arch), Some(os)) => Ok(Self { arch, os }),
      _ => Err(unsupported(std::env::consts::OS, std::env::consts::ARCH)),
    }
  }

  /// Wheel platform tag for this platform.
  ///
  /// `deployment_target` only affects macOS. It defaults to 10.9 on x86_64
  /// and is raised to at least 11.0 on arm64. From macOS 11 on, tags carry
  /// only the major version.
  pub fn wheel_tag(&self, deployment_target: Option<&str>) -> Result<String, PlatformError> {
    match self.os {
      Os::Linux => Ok(format!("linux_{}", self.arch.machine())),
      Os::MacOs => {
        let (floor, arch) = match self.arch {
          Arch::X86_64 => (MacosVersion::new(10, 9), "x86_64"),
          Arch::Aarch64 => (MacosVersion::new(11, 0), "arm64"),
          other => return Err(unsupported("macos", other.machine())),
        };
        let requested = match deployment_target.map(str::trim).filter(|t| !t.is_empty()) {
          Some(target) => target.parse::<MacosVersion>()?,
          None => floor,
        };
        let version = requested.max(floor).tag_version();
        Ok(format!("macosx_{}_{}_{}", version.major, version.minor, arch))
      }
      Os::Windows => match self.arch {
        Arch::X86_64 => Ok("win_amd64".to_string()),
        Arch::X86 => Ok("win32".to_string()),
        Arch::Aarch64 => Ok("win_arm64".to_string()),
        other => Err(unsupported("windows", other.machine())),
      },
    }
  }
}

fn unsupported(os: &str, arch: &str) -> PlatformError {
  PlatformError::Unsupported {
    os: os.to_string(),
    arch: arch.to_string(),
  }
}

/// A macOS `major.minor` version as used in deployment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MacosVersion {
  major: u32,
  minor: u32,
}

impl MacosVersion {
  fn new(major: u32, minor: u32) -> Self {
    Self { major, minor }
  }

  /// Version as written in a wheel tag: macOS 11 and later drop the minor.
  fn tag_version(self) -> Self {
    if self.major >= 11 { Self::new(self.major, 0) } else { self }
  }
}

impl std::str::FromStr for MacosVersion {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || PlatformError::InvalidDeploymentTarget(s.to_string());
    let mut parts = s.split('.');
    let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let minor = match parts.next() {
      Some(p) => p.parse().map_err(|_| invalid())?,
      None => 0,
    };
    if parts.next().is_some() {
      return Err(invalid());
    }
    Ok(Self::new(major, minor))
  }
}

/// Wheel platform tag of the current host.
pub fn host_wheel_tag(deployment_target: Option<&str>) -> Result<String, PlatformError> {
  Platform::current()?.wheel_tag(deployment_target)
}

/// Normalize a user supplied platform name into tag form.
///
/// `macosx-10.9-x86_64` becomes `macosx_10_9_x86_64`.
pub fn normalize_plat_name(name: &str) -> String {
  name.trim().replace(['-', '.'], "_")
}
