// tests/cli_test.rs
use std::process::Command;

fn run_buildenv(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "buildenv", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_screen() {
    let output = run_buildenv(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("buildenv"));
    assert!(stdout.contains("--development"));
    assert!(stdout.contains("--production"));
}

#[test]
fn test_version_flag() {
    let output = run_buildenv(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("buildenv "));
}

#[test]
fn test_show_output_in_development() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_buildenv(&["--development", "--root", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Mode: development"));
    assert!(stdout.contains("Branch: develop"));
    assert!(stdout.contains("Version: develop-r"));
    assert!(stdout.contains("Root: "));
}

#[test]
fn test_show_output_in_test_mode() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_buildenv(&["--test", "--root", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Mode: test"));
    assert!(stdout.contains("Branch: master"));
}

#[test]
fn test_production_run_against_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"1.2.3\"\n",
    )
    .unwrap();

    let output = run_buildenv(&["--production", "--root", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Mode: production"));
    assert!(stdout.contains("Version: 1.2.3"));
    assert!(stdout.contains("Branch: v1.2.3"));
}
