//! Failed and degraded builds, and rebuilds.

use opengv_dist_lib::build::{BuildError, BuildRun, BuildState, EntryPoint, build};
use opengv_dist_lib::extension::{ExtensionDescriptor, ExtensionError};
use opengv_dist_lib::metadata::MetadataError;
use opengv_dist_lib::warning::BuildWarning;

use super::common::{config, dist_entries, project};

#[test]
fn missing_readme_emits_nothing() {
  let temp = project(Some("pyopengv.so"));
  std::fs::remove_file(temp.path().join("README.txt")).unwrap();
  let config = config(temp.path());
  let mut run = BuildRun::new(&config, EntryPoint::PlatformTagged);

  let err = run.assemble_metadata().unwrap_err();

  assert!(matches!(err, BuildError::Metadata(MetadataError::MissingResource { .. })));
  assert_eq!(run.state(), BuildState::Failed);
  assert!(build(&config, EntryPoint::PlatformTagged).is_err());
  assert_eq!(dist_entries(temp.path()), 0);
}

#[test]
fn duplicate_extension_emits_nothing() {
  let temp = project(Some("pyopengv.so"));
  let config = config(temp.path());
  let run = BuildRun::with_extensions(
    &config,
    EntryPoint::PlatformTagged,
    vec![
      ExtensionDescriptor::prebuilt("pyopengv"),
      ExtensionDescriptor::prebuilt("pyopengv"),
    ],
  );

  let err = run.run().unwrap_err();

  assert!(matches!(
    err,
    BuildError::Extension(ExtensionError::DuplicateExtensionName { ref name }) if name == "pyopengv"
  ));
  assert_eq!(dist_entries(temp.path()), 0);
}

#[test]
fn missing_binary_still_builds_with_warning() {
  let temp = project(None);

  let report = build(&config(temp.path()), EntryPoint::PlatformTagged).unwrap();

  assert!(!report.is_complete());
  assert_eq!(
    report.warnings,
    vec![BuildWarning::EmptyGlobMatch {
      package: "pyopengv".to_string(),
      pattern: "pyopengv.*".to_string(),
    }]
  );
  assert!(report.artifact.path.exists());
}

#[test]
fn rebuilding_replaces_the_wheel() {
  let temp = project(Some("pyopengv.so"));
  let config = config(temp.path());

  let first = build(&config, EntryPoint::PlatformTagged).unwrap();
  let second = build(&config, EntryPoint::PlatformTagged).unwrap();

  assert_eq!(first.artifact.sha256, second.artifact.sha256);
  assert_eq!(dist_entries(temp.path()), 1);
}
