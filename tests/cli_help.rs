use std::process::Command;

#[test]
fn test_help_mentions_init() {
    let bin = env!("CARGO_BIN_EXE_mddbl");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Run 'mddbl init' to create mddbl.json"),
        "help output should point at init; got:\n{}",
        stdout
    );
    for command in ["deploy", "wipe", "module", "target", "config", "list", "debug"] {
        assert!(stdout.contains(command), "help should list '{}'", command);
    }
}

#[test]
fn test_no_arguments_prints_help() {
    let bin = env!("CARGO_BIN_EXE_mddbl");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin).current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_version() {
    let bin = env!("CARGO_BIN_EXE_mddbl");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
