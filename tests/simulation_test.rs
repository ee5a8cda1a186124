use std::process::{Command, Output};

fn run_headless(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_intersection_sim"))
        .args(args)
        .env("RUST_LOG", "warn,intersection_sim=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_headless(&["--ticks", "100", "--report-every", "0"]);

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that simulation statistics are logged
#[test]
fn test_simulation_statistics_logged() {
    let output = run_headless(&["--ticks", "60", "--report-every", "0", "--mode", "adaptive"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    for statistic in [
        "Ticks run: 60",
        "Final mode: adaptive",
        "Vehicles queued:",
        "Mean wait samples:",
        "Average mean wait:",
    ] {
        assert!(stderr.contains(statistic), "Missing '{}' statistic", statistic);
    }
}

/// Test that periodic reports draw the intersection map
#[test]
fn test_reports_draw_the_map() {
    let output = run_headless(&["--ticks", "20", "--report-every", "10"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- After tick 10 ---"));
    assert!(stdout.contains("--- After tick 20 ---"));
    assert!(stdout.contains("=== Intersection Map ==="));
    assert!(stdout.contains("=== Final State ==="));
}

/// Test that scripted toggles and resets are logged
#[test]
fn test_toggle_and_reset_commands() {
    let output = run_headless(&[
        "--ticks",
        "40",
        "--report-every",
        "0",
        "--toggle-every",
        "10",
        "--reset-at",
        "25",
    ]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Control mode: fixed -> adaptive"));
    assert!(stderr.contains("Control mode: adaptive -> fixed"));
    assert!(stderr.contains("Simulation reset"));
}

/// Test that bad configuration is refused before the simulation starts
#[test]
fn test_invalid_configuration_fails() {
    let output = run_headless(&["--spawn-probability", "1.5"]);
    assert!(!output.status.success());

    let output = run_headless(&["--period", "0"]);
    assert!(!output.status.success());
}
