//! Integration tests for the `nexus` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn nexus(cwd: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("nexus");
    cmd.current_dir(cwd.path())
        .env_remove("NEXUS_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    nexus(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--frontend"))
        .stdout(predicate::str::contains("--no-install"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    nexus(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_json_includes_alias() {
    let temp = TempDir::new().unwrap();
    let out = nexus(&temp)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["mvc", "clean", "hexagonal"]);
    assert_eq!(entries[2]["aliases"][0], "hexa");
}

#[test]
fn test_list_plain_names() {
    let temp = TempDir::new().unwrap();
    nexus(&temp)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("mvc\nclean\nhexagonal\n");
}

#[test]
fn test_no_color_env_values() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "", "0", "false"] {
        nexus(&temp)
            .env("NO_COLOR", value)
            .args(["list", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("clean"));
    }
}

#[test]
fn test_global_flags_before_subcommand() {
    let temp = TempDir::new().unwrap();
    nexus(&temp)
        .args(["-v", "--no-color", "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hexagonal\""));
}

#[test]
fn test_direct_backend_generation() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("api");

    nexus(&temp)
        .args([
            "--type", "backend", "--model", "clean", "--database", "postgres", "--name",
            "shop-api", "-d", "api", "--no-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop-api"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(target.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "shop-api");
    assert!(manifest["dependencies"]["pg"].is_string());
    assert!(target.join(".env").exists());
    assert!(target.join("src/domain").is_dir());
}

#[test]
fn test_direct_fullstack_generation_nests_frontend() {
    let temp = TempDir::new().unwrap();

    nexus(&temp)
        .args([
            "--type", "fullstack", "--frontend", "react", "--css", "tailwind", "--name",
            "shop", "-d", "shop", "--no-install",
        ])
        .assert()
        .success();

    let root = temp.path().join("shop");
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert!(manifest["scripts"]["frontend:dev"].is_string());
    assert!(manifest["dependencies"]["react"].is_string());
    assert!(root.join("src/frontend/package.json").exists());
}

#[test]
fn test_direct_mode_accepts_non_empty_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "keep me").unwrap();

    nexus(&temp)
        .args(["--type", "backend", "--name", "api", "--no-install"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
        "keep me"
    );
    assert!(temp.path().join("package.json").exists());
}

#[test]
fn test_json_output_format() {
    let temp = TempDir::new().unwrap();
    let out = nexus(&temp)
        .args([
            "--output-format", "json", "--type", "backend", "--name", "api", "-d", "api",
            "--no-install",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["mode"], "direct");
    assert_eq!(report["projectType"], "backend");
    assert_eq!(report["install"], "skipped");
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf/nexus.toml");

    nexus(&temp)
        .args(["--config", path.to_str().unwrap(), "init"])
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[defaults]"));
    assert!(written.contains("package_manager = \"npm\""));

    // Second run without --force leaves the file alone.
    fs::write(&path, "# mine\n").unwrap();
    nexus(&temp)
        .args(["--config", path.to_str().unwrap(), "init"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn test_config_defaults_are_used() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nexus.toml");
    fs::write(&path, "[defaults]\nauthor = \"Ada\"\n").unwrap();

    nexus(&temp)
        .args([
            "--config", path.to_str().unwrap(), "--type", "backend", "--name", "api", "-d",
            "api", "--no-install",
        ])
        .assert()
        .success();

    let manifest = fs::read_to_string(temp.path().join("api/package.json")).unwrap();
    assert!(manifest.contains("\"author\": \"Ada\""));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    nexus(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nexus"));
}
