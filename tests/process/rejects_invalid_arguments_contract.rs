use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_template_fails_before_staging() {
    let ctx = TestContext::new();
    ctx.write("rover.obs", "rover");
    ctx.write("base/base.obs", "base");
    ctx.write("base/base.nav", "nav");

    ctx.cli()
        .args(["-c", "absent.conf", "-r", "rover.obs", "-b", "base"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration template not found: absent.conf"));

    ctx.assert_staging_removed();
    assert!(ctx.result_dirs().is_empty());
    assert!(ctx.toolkit().get_log().is_empty());
}

#[test]
fn missing_rover_input_is_reported() {
    let ctx = TestContext::new();
    ctx.write_template();
    ctx.write("base.obs", "base");

    ctx.cli()
        .args(["-c", "ppk.conf", "-r", "rover.obs", "-b", "base.obs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Rover input not found"));
}

#[test]
fn missing_required_flag_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-c", "ppk.conf", "-r", "rover.obs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--base"));

    assert!(ctx.run_logs().is_empty());
}

#[test]
fn invalid_solution_format_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-c", "ppk.conf", "-r", "rover.obs", "-b", "base.obs", "-s", "kml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("llh"));
}

#[test]
fn help_lists_flags_and_exits_cleanly() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--antenna-height"))
        .stdout(predicate::str::contains("--solution-format"));

    assert!(ctx.run_logs().is_empty());
}

#[test]
fn failure_is_reported_with_logging_disabled() {
    let ctx = TestContext::new();
    ctx.write("rover.obs", "rover");
    ctx.write("base.obs", "base");

    ctx.cli()
        .env("RUST_LOG", "off")
        .args(["-c", "absent.conf", "-r", "rover.obs", "-b", "base.obs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Configuration template not found"));

    let logs = ctx.run_logs();
    assert_eq!(logs.len(), 1);
    let log = std::fs::read_to_string(&logs[0]).unwrap();
    assert!(log.contains("Error: Configuration template not found"));
}
