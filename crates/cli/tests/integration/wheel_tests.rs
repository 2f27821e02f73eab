//! Default entry point integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn wheel_is_tagged_pure() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("wheel")
    .assert()
    .success()
    .stdout(predicate::str::contains("opengv-0.0.0a0-py3-none-any.whl"))
    .stderr(predicate::str::contains("tagged pure"));

  assert_eq!(env.wheels(), vec!["opengv-0.0.0a0-py3-none-any.whl"]);
}

#[test]
fn wheel_does_not_need_a_python_version() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("wheel")
    .arg("--python")
    .arg("opengv-dist-no-such-python")
    .assert()
    .success();
}

#[test]
fn wheel_honors_out_dir() {
  let env = TestEnv::with_binary("pyopengv.so");
  let out_dir = env.project_path().join("artifacts");

  env.cmd("wheel").arg("--out-dir").arg(&out_dir).assert().success();

  assert!(out_dir.join("opengv-0.0.0a0-py3-none-any.whl").exists());
  assert!(env.wheels().is_empty());
}

#[test]
fn wheel_with_custom_readme() {
  let env = TestEnv::with_binary("pyopengv.so");
  env.write_file("docs/LONG.txt", b"custom long description\n");
  std::fs::remove_file(env.project_path().join("README.txt")).unwrap();

  env
    .cmd("wheel")
    .arg("--readme")
    .arg(env.project_path().join("docs/LONG.txt"))
    .assert()
    .success();
}

#[test]
fn wheel_json_reports_artifact() {
  let env = TestEnv::with_binary("pyopengv.so");

  let output = env.cmd("wheel").arg("--output").arg("json").output().unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["entry_point"], "default");
  assert_eq!(report["package"]["name"], "opengv");
  assert_eq!(report["artifact"]["tag"]["is_pure"], true);
  assert_eq!(report["warnings"][0]["warning"], "pure_with_native_content");
}

#[test]
fn wheel_missing_readme_fails() {
  let env = TestEnv::with_binary("pyopengv.so");
  std::fs::remove_file(env.project_path().join("README.txt")).unwrap();

  env
    .cmd("wheel")
    .assert()
    .failure()
    .stderr(predicate::str::contains("README.txt"));

  assert!(env.wheels().is_empty());
}
