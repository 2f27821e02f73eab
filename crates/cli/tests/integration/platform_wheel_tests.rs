//! Platform-forcing entry point integration tests.

use std::io::Read;

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn platform_wheel_is_tagged_for_platform() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("platform-wheel")
    .args(["--python-version", "3.8", "--plat-name", "linux_x86_64"])
    .assert()
    .success()
    .stdout(predicate::str::contains("opengv-0.0.0a0-cp38-cp38-linux_x86_64.whl"))
    .stdout(predicate::str::contains("Pure: false"));

  assert_eq!(env.wheels(), vec!["opengv-0.0.0a0-cp38-cp38-linux_x86_64.whl"]);
}

#[test]
fn platform_wheel_reads_target_from_environment() {
  let env = TestEnv::with_binary("pyopengv.pyd");

  env
    .cmd("platform-wheel")
    .env("OPENGV_DIST_PYTHON_VERSION", "3.11")
    .env("OPENGV_DIST_PLAT_NAME", "win-amd64")
    .assert()
    .success();

  assert_eq!(env.wheels(), vec!["opengv-0.0.0a0-cp311-cp311-win_amd64.whl"]);
}

#[test]
fn flags_override_environment() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("platform-wheel")
    .env("OPENGV_DIST_PYTHON_VERSION", "3.11")
    .args(["--python-version", "3.7", "--plat-name", "linux_aarch64"])
    .assert()
    .success();

  assert_eq!(env.wheels(), vec!["opengv-0.0.0a0-cp37-cp37m-linux_aarch64.whl"]);
}

#[test]
fn platform_wheel_contains_binary() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("platform-wheel")
    .args(["--python-version", "3.8", "--plat-name", "linux_x86_64"])
    .assert()
    .success();

  let wheel = env.dist_path().join("opengv-0.0.0a0-cp38-cp38-linux_x86_64.whl");
  let mut archive = zip::ZipArchive::new(std::fs::File::open(wheel).unwrap()).unwrap();
  assert!(archive.by_name("pyopengv/pyopengv.so").is_ok());

  let mut wheel_file = String::new();
  archive
    .by_name("opengv-0.0.0a0.dist-info/WHEEL")
    .unwrap()
    .read_to_string(&mut wheel_file)
    .unwrap();
  assert!(wheel_file.contains("Root-Is-Purelib: false"));
}

#[test]
fn missing_binary_warns_but_builds() {
  let env = TestEnv::without_binary();

  env
    .cmd("platform-wheel")
    .args(["--python-version", "3.8", "--plat-name", "linux_x86_64"])
    .assert()
    .success()
    .stderr(predicate::str::contains("pyopengv.*"))
    .stderr(predicate::str::contains("may be incomplete"));

  assert_eq!(env.wheels().len(), 1);
}

#[test]
fn plat_name_any_is_rejected() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("platform-wheel")
    .args(["--python-version", "3.8", "--plat-name", "any"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("any"));

  assert!(env.wheels().is_empty());
}

#[test]
fn unknown_interpreter_fails() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("platform-wheel")
    .args(["--python", "opengv-dist-no-such-python", "--plat-name", "linux_x86_64"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("opengv-dist-no-such-python"));

  assert!(env.wheels().is_empty());
}

#[test]
fn invalid_python_version_fails() {
  let env = TestEnv::with_binary("pyopengv.so");

  env
    .cmd("platform-wheel")
    .args(["--python-version", "three", "--plat-name", "linux_x86_64"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid python version"));
}

#[test]
fn missing_package_dir_fails() {
  let env = TestEnv::empty();
  env.write_file("README.txt", b"readme\n");

  env
    .cmd("platform-wheel")
    .args(["--python-version", "3.8", "--plat-name", "linux_x86_64"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("pyopengv"));

  assert!(env.wheels().is_empty());
}
