//! Implementation of the `wheel` and `platform-wheel` commands.
//!
//! Both commands run the same build; `platform-wheel` wraps the finalize
//! step so the artifact is always tagged for a concrete platform and ABI.

use anyhow::{Context, Result};

use opengv_dist_lib::build::{EntryPoint, build};
use opengv_dist_lib::config::{BuildConfig, TargetConfig};

use crate::BuildArgs;
use crate::output::{
  OutputFormat, format_size, print_build_warnings, print_built, print_field, print_json, print_warning, short_digest,
};

/// Resolve command-line arguments into a build configuration.
///
/// Flags take precedence over the environment.
fn build_config(args: &BuildArgs) -> Result<BuildConfig> {
  let project_dir = dunce::canonicalize(&args.project_dir)
    .with_context(|| format!("Project directory not found: {}", args.project_dir.display()))?;

  let mut config = BuildConfig::new(&project_dir).with_target(TargetConfig {
    python_version: args.python_version.clone(),
    plat_name: args.plat_name.clone(),
    interpreter: args.python.clone(),
    deployment_target: None,
  });
  if let Some(out_dir) = &args.out_dir {
    config = config.with_out_dir(out_dir.clone());
  }
  if let Some(readme) = &args.readme {
    config = config.with_readme(readme.clone());
  }
  Ok(config)
}

pub fn cmd_wheel(args: &BuildArgs, entry_point: EntryPoint, format: OutputFormat) -> Result<()> {
  let config = build_config(args)?;

  let report = build(&config, entry_point).with_context(|| format!("Failed to build {} wheel", entry_point))?;

  if format.is_json() {
    return print_json(&report);
  }

  print_build_warnings(&report.warnings);

  let artifact = &report.artifact;
  print_built(&artifact.filename);
  print_field("Path", &artifact.path.display().to_string());
  print_field("Tag", &artifact.tag.to_string());
  print_field("Pure", &artifact.tag.is_pure.to_string());
  print_field("Files", &artifact.manifest.len().to_string());
  print_field("Size", &format_size(artifact.size));
  print_field("Digest", &short_digest(&artifact.sha256));

  if !report.is_complete() {
    print_warning("Artifact may be incomplete: some package-data patterns matched no files");
  }

  Ok(())
}
