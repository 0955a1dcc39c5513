//! Binary-level tests for `zone-ctl`. Nothing here touches the Azure CLI;
//! every case stops before the first control-plane call.

use assert_cmd::Command;
use predicates::prelude::*;

fn zone_ctl() -> Command {
    let mut cmd = Command::cargo_bin("zone-ctl").unwrap();
    // Keep user/global config out of the picture.
    cmd.env("HOME", std::env::temp_dir());
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    zone_ctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("remediate"))
        .stdout(predicate::str::contains("policy"));
}

#[test]
fn test_policy_shows_default_lists() {
    zone_ctl()
        .arg("policy")
        .assert()
        .success()
        .stdout(predicate::str::contains("eastus"))
        .stdout(predicate::str::contains("p1v3"));
}

#[test]
fn test_policy_json_is_parsable() {
    let output = zone_ctl().args(["policy", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["zone_capable_regions"].is_array());
    assert!(value["zone_capable_skus"].is_array());
}

#[test]
fn test_config_policy_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("zoneaudit.toml");
    std::fs::write(
        &config,
        "[policy]\nzone_capable_regions = [\"moonbase\"]\nzone_capable_skus = [\"Z9\"]\n",
    )
    .unwrap();

    zone_ctl()
        .args(["--config", config.to_str().unwrap(), "policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moonbase"))
        .stdout(predicate::str::contains("z9"))
        .stdout(predicate::str::contains("eastus").not());
}

#[test]
fn test_policy_save_writes_global_config() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("zone-ctl").unwrap();
    cmd.env("HOME", home.path());

    cmd.args(["policy", "--save"]).assert().success();

    let saved = home.path().join(".zoneaudit.toml");
    let content = std::fs::read_to_string(&saved).unwrap();
    assert!(content.contains("zone_capable_regions"));
    assert!(content.contains("min_capacity"));
}

#[test]
fn test_audit_banner_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("ids.txt");
    std::fs::write(
        &list,
        "/subscriptions/s/resourceGroups/g/providers/Microsoft.Web/serverfarms/p\n",
    )
    .unwrap();
    let config = dir.path().join("zoneaudit.toml");
    std::fs::write(&config, "[azure]\ncommand = \"zone-ctl-no-such-binary\"\n").unwrap();

    // The run stops at the az availability probe; by then the progress
    // banner must already have gone to stderr, leaving stdout untouched.
    zone_ctl()
        .args([
            "--config",
            config.to_str().unwrap(),
            "audit",
            list.to_str().unwrap(),
            "--json",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Auditing"));
}

#[test]
fn test_audit_missing_id_file_fails() {
    zone_ctl()
        .args(["audit", "/nonexistent/ids.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be read"));
}

#[test]
fn test_audit_empty_id_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("ids.txt");
    std::fs::write(&list, "# only comments\n\n").unwrap();

    zone_ctl()
        .args(["audit", list.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no resource IDs"));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("zoneaudit.toml");
    std::fs::write(&config, "this is not toml [[").unwrap();

    zone_ctl()
        .args(["--config", config.to_str().unwrap(), "policy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}
