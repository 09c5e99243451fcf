//! CLI integration tests

use std::process::Command;

use tempfile::TempDir;

fn plyer_notify_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plyer-notify"))
}

/// Binary with its config directory pointed at a fresh temp dir
fn isolated_bin(dir: &TempDir) -> Command {
    let mut cmd = plyer_notify_bin();
    cmd.env("XDG_CONFIG_HOME", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let output = plyer_notify_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notification"));
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--message"));
    assert!(stdout.contains("--app-icon"));
    assert!(stdout.contains("--importance"));
    assert!(stdout.contains("--toast"));
    assert!(stdout.contains("--chronometer"));
    assert!(stdout.contains("--only-alert-once"));
    assert!(stdout.contains("--ongoing"));
    assert!(stdout.contains("--backend"));
}

#[test]
fn version_output() {
    let output = plyer_notify_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plyer-notify"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_help() {
    let output = plyer_notify_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_path_command() {
    let dir = TempDir::new().unwrap();
    let output = isolated_bin(&dir)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plyer-notify"));
    assert!(stdout.contains("config.toml"));
    assert!(stdout.contains(&*dir.path().to_string_lossy()));
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();

    let set = isolated_bin(&dir)
        .args(["config", "set", "importance", "urgent"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = isolated_bin(&dir)
        .args(["config", "get", "importance"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "urgent");

    assert!(dir.path().join("plyer-notify/config.toml").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_and_list() {
    let dir = TempDir::new().unwrap();

    let init = isolated_bin(&dir)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(init.status.success());

    let list = isolated_bin(&dir)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");
    assert!(list.status.success());
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(stdout.contains("app_name"));
    assert!(stdout.contains("plyer-notify"));
    assert!(stdout.contains("default"));
    assert!(stdout.contains("auto"));
}

#[cfg(not(target_os = "android"))]
#[test]
fn android_backend_off_device_fails() {
    let dir = TempDir::new().unwrap();
    let output = isolated_bin(&dir)
        .args(["--message", "hello", "--backend", "android"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No usable implementation found!"),
        "Expected not-implemented error, got: {}",
        stderr
    );
}
