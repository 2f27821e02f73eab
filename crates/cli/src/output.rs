//! Terminal and JSON rendering for build reports.
//!
//! Status lines go to stdout, warnings and errors to stderr so that
//! `--output json` keeps stdout machine-readable.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use opengv_dist_lib::util::hash::ContentHash;
use opengv_dist_lib::warning::BuildWarning;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const BUILT: &str = "✓";
  pub const FAILED: &str = "✗";
  pub const WARNING: &str = "⚠";
}

/// Hex digits of an artifact digest shown in text output.
const DIGEST_PREFIX_LEN: usize = 12;

/// `sha256:` followed by the leading digits of the digest.
pub fn short_digest(hash: &ContentHash) -> String {
  let len = hash.0.len().min(DIGEST_PREFIX_LEN);
  format!("sha256:{}", &hash.0[..len])
}

/// Archive size in binary units, as wheel sizes are usually quoted.
pub fn format_size(bytes: u64) -> String {
  const KIB: u64 = 1024;
  const MIB: u64 = KIB * 1024;

  if bytes >= MIB {
    format!("{:.1} MiB", bytes as f64 / MIB as f64)
  } else if bytes >= KIB {
    format!("{:.1} KiB", bytes as f64 / KIB as f64)
  } else {
    format!("{} B", bytes)
  }
}

pub fn print_built(filename: &str) {
  println!(
    "{} Built {}",
    symbols::BUILT.if_supports_color(Stream::Stdout, |s| s.green()),
    filename.if_supports_color(Stream::Stdout, |s| s.bold())
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::FAILED.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_build_warnings(warnings: &[BuildWarning]) {
  for warning in warnings {
    print_warning(&warning.to_string());
  }
}

/// Section heading in `info` output.
pub fn print_section(title: &str) {
  println!("{}:", title.if_supports_color(Stream::Stdout, |s| s.bold()));
}

/// Indented `label: value` line.
pub fn print_field(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_digest_is_prefixed() {
    let hash = ContentHash("2cf24dba5fb0a30e26e83b2ac5b9e29e".to_string());
    assert_eq!(short_digest(&hash), "sha256:2cf24dba5fb0");
    assert_eq!(short_digest(&ContentHash("abc".to_string())), "sha256:abc");
  }

  #[test]
  fn sizes_use_binary_units() {
    assert_eq!(format_size(500), "500 B");
    assert_eq!(format_size(1536), "1.5 KiB");
    assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
  }
}
