use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".portfolio-showcase").join("config.json")
}

/// Helper to get the local store path in the temp dir
fn store_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path()
        .join(".portfolio-showcase")
        .join("local_storage.json")
}

const BINARY_NAME: &str = "portfolio-showcase";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Configure command should write the project to the config file.
fn configure_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("configure")
        .arg("--project-id")
        .arg("my-portfolio")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("my-portfolio"));
}

#[test]
/// Starting without any project ID fails before touching the network.
fn start_without_project_id_fails() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .env("HOME", tmp.path())
        .env_remove("FIRESTORE_EMULATOR_HOST")
        .assert()
        .failure()
        .stderr(contains("No project ID"));
}

#[test]
/// Show-cache prints every entry of the local store.
fn show_cache_prints_entries() {
    let tmp = temp_home_dir();
    let store_path = store_file_path(&tmp);
    fs::create_dir_all(store_path.parent().unwrap()).unwrap();
    fs::write(
        &store_path,
        r#"{"certificates": "[]", "projects": "[{\"id\":\"p1\"}]"}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("show-cache")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("certificates: []"))
        .stdout(contains(r#"projects: [{"id":"p1"}]"#));
}

#[test]
/// Show-cache with a key prints just that value.
fn show_cache_prints_single_key() {
    let tmp = temp_home_dir();
    let store_path = store_file_path(&tmp);
    fs::create_dir_all(store_path.parent().unwrap()).unwrap();
    fs::write(&store_path, r#"{"projects": "[]"}"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["show-cache", "projects"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
/// Clear-cache should delete an existing store file.
fn clear_cache_deletes_store_file() {
    let tmp = temp_home_dir();
    let store_path = store_file_path(&tmp);
    fs::create_dir_all(store_path.parent().unwrap()).unwrap();
    fs::write(&store_path, "{}").unwrap();
    assert!(store_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear-cache")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Local store cleared"));

    assert!(!store_path.exists());
}
