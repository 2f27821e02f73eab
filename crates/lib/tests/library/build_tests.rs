//! Successful builds through both entry points.

use opengv_dist_lib::build::{EntryPoint, build};
use opengv_dist_lib::util::hash::RecordDigest;

use super::common::{README, config, project, read_member};

#[test]
fn platform_entry_point_emits_platform_wheel() {
  let temp = project(Some("pyopengv.so"));

  let report = build(&config(temp.path()), EntryPoint::PlatformTagged).unwrap();

  assert_eq!(report.artifact.filename, "opengv-0.0.0a0-cp38-cp38-linux_x86_64.whl");
  assert!(!report.artifact.tag.is_pure);
  assert!(report.warnings.is_empty());
  assert!(temp.path().join("dist").join(&report.artifact.filename).exists());

  let wheel = String::from_utf8(read_member(&report.artifact.path, "opengv-0.0.0a0.dist-info/WHEEL")).unwrap();
  assert!(wheel.contains("Root-Is-Purelib: false\n"));
  assert!(wheel.contains("Tag: cp38-cp38-linux_x86_64\n"));
}

#[test]
fn default_entry_point_emits_pure_wheel() {
  let temp = project(Some("pyopengv.so"));

  let report = build(&config(temp.path()), EntryPoint::Default).unwrap();

  assert_eq!(report.artifact.filename, "opengv-0.0.0a0-py3-none-any.whl");
  assert!(report.artifact.tag.is_pure);
}

#[test]
fn entry_points_agree_on_metadata() {
  let default_project = project(Some("pyopengv.so"));
  let platform_project = project(Some("pyopengv.so"));

  let default = build(&config(default_project.path()), EntryPoint::Default).unwrap();
  let platform = build(&config(platform_project.path()), EntryPoint::PlatformTagged).unwrap();

  assert_eq!(default.package, platform.package);
  assert_eq!(default.artifact.name, platform.artifact.name);
  assert_eq!(default.artifact.version, platform.artifact.version);
  assert_ne!(default.artifact.tag.is_pure, platform.artifact.tag.is_pure);

  let metadata = "opengv-0.0.0a0.dist-info/METADATA";
  assert_eq!(
    read_member(&default.artifact.path, metadata),
    read_member(&platform.artifact.path, metadata)
  );
}

#[test]
fn wheel_bundles_binary_and_long_description() {
  let temp = project(Some("pyopengv.cpython-38-x86_64-linux-gnu.so"));

  let report = build(&config(temp.path()), EntryPoint::PlatformTagged).unwrap();

  let paths: Vec<_> = report.artifact.manifest.iter().map(|e| e.path.as_str()).collect();
  assert!(paths.contains(&"pyopengv/__init__.py"));
  assert!(paths.contains(&"pyopengv/pyopengv.cpython-38-x86_64-linux-gnu.so"));

  let metadata =
    String::from_utf8(read_member(&report.artifact.path, "opengv-0.0.0a0.dist-info/METADATA")).unwrap();
  assert!(metadata.ends_with(README));
}

#[test]
fn record_digests_match_members() {
  let temp = project(Some("pyopengv.pyd"));

  let report = build(&config(temp.path()), EntryPoint::PlatformTagged).unwrap();

  for entry in &report.artifact.manifest {
    let data = read_member(&report.artifact.path, &entry.path);
    match &entry.digest {
      Some(digest) => {
        let expected = RecordDigest::of(&data);
        assert_eq!(digest, &expected.digest, "digest of {}", entry.path);
        assert_eq!(entry.size, Some(expected.size));
      }
      None => assert!(entry.path.ends_with("RECORD")),
    }
  }
}
