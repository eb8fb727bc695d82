mod common;

use common::*;

#[test]
fn wipe_runs_target_command() {
    let env = TestEnv::with_config(SAMPLE_CONFIG);

    let result = env.run(&["wipe", "echo"]);

    assert!(result.success, "wipe failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("Wiping echo"));
    assert!(result.stdout.contains("Executing: echo erased"));
    assert!(result.stdout.contains("erased\n"));
}

#[test]
fn wipe_unknown_target_fails() {
    let env = TestEnv::with_config(SAMPLE_CONFIG);

    let result = env.run(&["wipe", "pico"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("target 'pico' not defined, please check the module configuration"),
        "{}",
        result.stderr
    );
}

#[test]
fn wipe_without_command_fails() {
    let env = TestEnv::with_config(SAMPLE_CONFIG);

    let result = env.run(&["--json", "wipe", "esp32"]);

    assert_eq!(result.exit_code, 1);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["kind"], "WipeCommandMissing");
}

#[cfg(unix)]
#[test]
fn wipe_failure_reports_exit_code() {
    let env = TestEnv::with_config(&SAMPLE_CONFIG.replace("echo erased", "exit 3"));

    let result = env.run(&["wipe", "echo"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("exit code 3"), "{}", result.stderr);
}

#[test]
fn wipe_json_events() {
    let env = TestEnv::with_config(SAMPLE_CONFIG);

    let result = env.run(&["--json", "wipe", "echo"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "wipe");
    assert_eq!(events[0]["command"], "echo erased");
    assert_eq!(events[1]["event"], "complete");
    assert!(result.stderr.contains("erased\n"), "{}", result.stderr);
}
