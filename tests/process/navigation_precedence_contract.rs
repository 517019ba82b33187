use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn base_navigation_wins_over_rover_navigation() {
    let ctx = TestContext::new();
    ctx.write_template();
    ctx.write("rover/rover.obs", "rover");
    ctx.write("rover/rover.nav", "rover nav");
    ctx.write("base/base.obs", "base");
    ctx.write("base/base.nav", "base nav");

    ctx.cli().args(["-c", "ppk.conf", "-r", "rover", "-b", "base"]).assert().success();

    let solves = ctx.toolkit().invocations("rnx2rtkp");
    assert!(solves[0].ends_with("/base/base.nav"));
}

#[test]
fn rover_navigation_is_used_when_base_has_none() {
    let ctx = TestContext::new();
    ctx.write_template();
    ctx.write("rover/rover.obs", "rover");
    ctx.write("rover/rover.nav", "rover nav");
    ctx.write("base.obs", "base");

    ctx.cli().args(["-c", "ppk.conf", "-r", "rover", "-b", "base.obs"]).assert().success();

    let solves = ctx.toolkit().invocations("rnx2rtkp");
    assert!(solves[0].ends_with("/rover/rover.nav"));
}

#[test]
fn missing_navigation_is_reported() {
    let ctx = TestContext::new();
    ctx.write_template();
    ctx.write("rover.obs", "rover");
    ctx.write("base.obs", "base");

    ctx.cli()
        .args(["-c", "ppk.conf", "-r", "rover.obs", "-b", "base.obs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No navigation file found"));

    ctx.assert_staging_removed();
}

#[test]
fn explicit_navigation_file_is_used() {
    let ctx = TestContext::new();
    ctx.write_template();
    ctx.write("rover.obs", "rover");
    ctx.write("base.obs", "base");
    ctx.write("brdc/brdc0010.24n", "broadcast");

    ctx.cli()
        .args(["-c", "ppk.conf", "-r", "rover.obs", "-b", "base.obs", "-n", "brdc/brdc0010.24n"])
        .assert()
        .success();

    let solves = ctx.toolkit().invocations("rnx2rtkp");
    assert!(solves[0].ends_with("/base/brdc0010.24n"));
}
