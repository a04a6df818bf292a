use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("modelpeek").expect("binary exists")
}

fn install_model(temp: &TempDir, name: &str, version: &str) {
    let root = temp.child(name);
    root.create_dir_all().unwrap();
    root.child("meta.json")
        .write_str(&format!(r#"{{"name": "{name}", "version": "{version}"}}"#))
        .unwrap();
}

#[test]
fn list_with_no_models_prints_not_found_and_succeeds() {
    let temp = TempDir::new().unwrap();

    let mut cmd = command();
    cmd.arg("--list").arg("--models-dir").arg(temp.path());

    cmd.assert().success().stdout(predicate::str::contains("No models found"));
}

#[test]
fn list_with_missing_home_still_succeeds() {
    let temp = TempDir::new().unwrap();

    let mut cmd = command();
    cmd.arg("--list").arg("--models-dir").arg(temp.path().join("does-not-exist"));

    cmd.assert().success().stdout(predicate::str::contains("No models found"));
}

#[test]
fn list_prints_names_and_versions() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", "3.7.1");
    install_model(&temp, "xx_ent_wiki_sm", "3.0.0");

    let mut cmd = command();
    cmd.arg("--list").arg("--models-dir").arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("en_core_web_sm"))
        .stdout(predicate::str::contains("3.7.1"))
        .stdout(predicate::str::contains("xx_ent_wiki_sm"))
        .stdout(predicate::str::contains("3.0.0"));
}

#[test]
fn list_short_flag_works() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", "3.7.1");

    let mut cmd = command();
    cmd.arg("-l").arg("--models-dir").arg(temp.path());

    cmd.assert().success().stdout(predicate::str::contains("en_core_web_sm"));
}

#[test]
fn list_skips_directories_without_metadata() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", "3.7.1");
    temp.child("not_a_model").create_dir_all().unwrap();

    let mut cmd = command();
    cmd.arg("--list").arg("--models-dir").arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("en_core_web_sm"))
        .stdout(predicate::str::contains("not_a_model").not());
}
