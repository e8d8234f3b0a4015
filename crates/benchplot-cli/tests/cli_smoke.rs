//! CLI binary smoke tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("benchplot").unwrap()
}

fn write_scenarios(dir: &std::path::Path) -> std::path::PathBuf {
    let scenarios = serde_json::json!({
        "scenarios": [
            {
                "name": "A",
                "run_times": [10.0, 12.0],
                "run_time_statistics": { "ips": 1000.0, "std_dev_ips": 50.0, "minimum": 10.0, "maximum": 12.0 }
            },
            {
                "name": "B",
                "run_times": [20.0, 22.0],
                "run_time_statistics": { "ips": 500.0, "std_dev_ips": 10.0, "minimum": 20.0, "maximum": 22.0 }
            }
        ]
    });
    let path = dir.join("scenarios.json");
    std::fs::write(&path, serde_json::to_string_pretty(&scenarios).unwrap()).unwrap();
    path
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchplot"));
}

#[test]
fn writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenarios(dir.path());
    let output = dir.path().join("out.html");

    cmd()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--title")
        .arg("Smoke")
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Smoke</title>"));
    assert!(html.contains("ips-comparison"));
}

#[test]
fn config_overrides_axis_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenarios(dir.path());
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "run_time_axis_title": "Run Time in nanoseconds" }"#).unwrap();
    let output = dir.path().join("out.html");

    cmd()
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("Run Time in nanoseconds"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .arg(dir.path().join("missing.json"))
        .arg("-o")
        .arg(dir.path().join("out.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read scenarios"));
}
