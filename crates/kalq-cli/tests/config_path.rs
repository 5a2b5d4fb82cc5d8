use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_config_path_honors_kalq_home() {
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("kalq")
        .env("KALQ_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(home.path().to_str().unwrap()))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_the_template_once() {
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("kalq")
        .env("KALQ_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(home.path().join("config.toml").exists());

    cargo_bin_cmd!("kalq")
        .env("KALQ_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
