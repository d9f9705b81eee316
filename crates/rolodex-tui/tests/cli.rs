use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

#[test]
fn version_flag_prints_name() {
    let output = cargo_bin_cmd!("rolodex")
        .arg("--version")
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with("rolodex "));
}

#[test]
fn missing_explicit_config_fails_before_tui() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("config.toml");

    let output = cargo_bin_cmd!("rolodex")
        .args(["--verbose", "--config", missing.to_str().expect("path")])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.starts_with("error: load config"), "stderr: {}", stderr);
    assert!(stderr.contains("config file not found"), "stderr: {}", stderr);
}

#[test]
fn invalid_config_value_is_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "tick_rate_ms = 0\n").expect("write config");

    let output = cargo_bin_cmd!("rolodex")
        .args(["--verbose", "--config", path.to_str().expect("path")])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invalid tick_rate_ms value: 0"), "stderr: {}", stderr);
}
