use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::METADATA_VERSION;

/// Static description of the distribution being packaged.
///
/// Every field is set explicitly by [`super::assemble`]; only
/// `long_description` comes from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
  pub name: String,
  pub version: String,
  pub description: String,
  pub long_description: String,
  pub url: String,
  pub documentation_url: String,
  pub author: String,
  pub license: String,
  /// Python packages included in the distribution, in declaration order.
  pub packages: Vec<String>,
  /// Package path to ordered glob patterns of files bundled verbatim.
  pub package_data: BTreeMap<String, Vec<String>>,
}

/// The fields both entry points must agree on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
  pub name: String,
  pub version: String,
  pub description: String,
  pub url: String,
  pub author: String,
  pub license: String,
}

impl PackageDescriptor {
  pub fn summary(&self) -> PackageSummary {
    PackageSummary {
      name: self.name.clone(),
      version: self.version.clone(),
      description: self.description.clone(),
      url: self.url.clone(),
      author: self.author.clone(),
      license: self.license.clone(),
    }
  }

  /// Distribution name as it appears in archive and dist-info names.
  pub fn escaped_name(&self) -> String {
    escape_component(&self.name)
  }

  pub fn escaped_version(&self) -> String {
    escape_component(&self.version)
  }

  /// Name of the `*.dist-info` directory inside the wheel.
  pub fn dist_info_dir(&self) -> String {
    format!("{}-{}.dist-info", self.escaped_name(), self.escaped_version())
  }

  /// Top-level import names, one per line, for `top_level.txt`.
  pub fn top_level(&self) -> String {
    let mut roots: Vec<&str> = self
      .packages
      .iter()
      .map(|p| p.split('.').next().unwrap_or(p.as_str()))
      .collect();
    roots.sort_unstable();
    roots.dedup();

    let mut out = String::new();
    for root in roots {
      out.push_str(root);
      out.push('\n');
    }
    out
  }

  /// Render the core metadata file (`METADATA`).
  ///
  /// Headers first, then a blank line and the long description verbatim.
  pub fn render_metadata(&self) -> String {
    let mut out = String::new();
    out.push_str(&format!("Metadata-Version: {}\n", METADATA_VERSION));
    out.push_str(&format!("Name: {}\n", self.name));
    out.push_str(&format!("Version: {}\n", self.version));
    out.push_str(&format!("Summary: {}\n", self.description));
    out.push_str(&format!("Home-page: {}\n", self.url));
    out.push_str(&format!("Author: {}\n", self.author));
    out.push_str(&format!("License: {}\n", self.license));
    out.push_str(&format!("Project-URL: Documentation, {}\n", self.documentation_url));
    out.push('\n');
    out.push_str(&self.long_description);
    out
  }
}

/// Escape a name or version for use in a wheel filename.
///
/// Runs of characters outside `[A-Za-z0-9.]` collapse to a single `_`.
pub fn escape_component(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  let mut in_run = false;
  for c in value.chars() {
    if c.is_ascii_alphanumeric() || c == '.' {
      out.push(c);
      in_run = false;
    } else if !in_run {
      out.push('_');
      in_run = true;
    }
  }
  out
}
