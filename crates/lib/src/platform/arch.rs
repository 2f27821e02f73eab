use std::fmt;

/// CPU architectures with a known wheel platform spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  Armv7,
  Ppc64le,
  Ppc64,
  S390x,
  Riscv64,
}

impl Arch {
  /// Architecture of the running binary.
  pub fn current() -> Option<Self> {
    Self::from_target(std::env::consts::ARCH, cfg!(target_endian = "little"))
  }

  /// Map a Rust `target_arch` name onto a wheel architecture.
  ///
  /// `powerpc64` is split by byte order since the two ABIs ship separate wheels.
  pub fn from_target(arch: &str, little_endian: bool) -> Option<Self> {
    match arch {
      "x86_64" => Some(Self::X86_64),
      "x86" => Some(Self::X86),
      "aarch64" => Some(Self::Aarch64),
      "arm" => Some(Self::Armv7),
      "powerpc64" if little_endian => Some(Self::Ppc64le),
      "powerpc64" => Some(Self::Ppc64),
      "s390x" => Some(Self::S390x),
      "riscv64" => Some(Self::Riscv64),
      _ => None,
    }
  }

  /// Machine name as `uname -m` reports it, used in `linux_<arch>` tags.
  pub fn machine(&self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "i686",
      Self::Aarch64 => "aarch64",
      Self::Armv7 => "armv7l",
      Self::Ppc64le => "ppc64le",
      Self::Ppc64 => "ppc64",
      Self::S390x => "s390x",
      Self::Riscv64 => "riscv64",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.machine())
  }
}
