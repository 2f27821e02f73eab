/// Operating systems with a wheel platform tag family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  pub fn current() -> Option<Self> {
    Self::from_target(std::env::consts::OS)
  }

  pub fn from_target(os: &str) -> Option<Self> {
    match os {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }
}
