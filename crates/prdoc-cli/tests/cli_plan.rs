mod util;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn rows(stdout: &[u8]) -> Vec<Vec<String>> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| l.split_whitespace().map(str::to_string).collect())
        .collect()
}

#[test]
fn plan_table_takes_highest_bump_per_crate() {
    let mut cmd = cargo_bin_cmd!("prdoc");
    cmd.arg("plan")
        .arg(util::samples_dir())
        .args(["--current", "polkadot-primitives=7.0.0"])
        .args(["--current", "polkadot-statement-distribution=0.4.2"]);

    let output = cmd.assert().success().code(0).get_output().stdout.clone();

    assert_eq!(
        rows(&output),
        vec![
            vec!["crate", "bump", "current", "next", "origins"],
            vec!["polkadot-primitives", "major", "7.0.0", "8.0.0", "#101,#102"],
            vec!["polkadot-statement-distribution", "minor", "0.4.2", "0.4.3", "#101,#103"],
            vec!["cumulus-client-consensus-aura", "minor", "-", "-", "#101"],
            vec!["polkadot-runtime-parachains", "minor", "-", "-", "#102"],
        ]
    );
}

#[test]
fn plan_json_is_structured() {
    let mut cmd = cargo_bin_cmd!("prdoc");
    cmd.arg("plan")
        .arg(util::samples_dir())
        .arg("--json")
        .args(["--current", "polkadot-runtime-parachains=1.2.3"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let crates = plan["crates"].as_array().unwrap();

    assert_eq!(crates.len(), 4);
    assert_eq!(crates[0]["name"], "polkadot-primitives");
    assert_eq!(crates[0]["bump"], "major");
    assert!(crates[0].get("current").is_none());

    assert_eq!(crates[3]["name"], "polkadot-runtime-parachains");
    assert_eq!(crates[3]["current"], "1.2.3");
    assert_eq!(crates[3]["next"], "1.3.0");
}

#[test]
fn plan_reads_versions_from_config() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("prdoc.toml");
    std::fs::write(&config, "[versions]\npolkadot-primitives = \"0.9.1\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("prdoc");
    cmd.arg("--config").arg(&config).arg("plan").arg(util::samples_dir());

    let output = cmd.assert().success().get_output().stdout.clone();
    assert_eq!(rows(&output)[1], vec!["polkadot-primitives", "major", "0.9.1", "0.10.0", "#101,#102"]);
}

#[test]
fn plan_rejects_malformed_current() {
    let mut cmd = cargo_bin_cmd!("prdoc");
    cmd.arg("plan").arg(util::samples_dir()).args(["--current", "polkadot-primitives"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected <crate>=<version>"));
}

#[test]
fn plan_skips_bad_records_and_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::copy(util::sample("pr_103.prdoc"), tmp.path().join("pr_103.prdoc")).unwrap();
    std::fs::copy(util::fixture("bad_yaml.prdoc"), tmp.path().join("pr_104.prdoc")).unwrap();
    std::fs::copy(util::fixture("duplicate_crate.prdoc"), tmp.path().join("pr_105.prdoc")).unwrap();

    let mut cmd = cargo_bin_cmd!("prdoc");
    cmd.arg("plan").arg(tmp.path());

    let output = cmd
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("pr_104.prdoc"))
        .stderr(predicate::str::contains("pr_105.prdoc"))
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        rows(&output)[1..],
        [vec!["polkadot-statement-distribution", "patch", "-", "-", "#103"]]
    );
}

#[test]
fn plan_reports_version_that_cannot_be_bumped() {
    let mut cmd = cargo_bin_cmd!("prdoc");
    cmd.arg("plan")
        .arg(util::samples_dir())
        .args(["--current", "polkadot-primitives=18446744073709551615.0.0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "cannot apply major bump to polkadot-primitives 18446744073709551615.0.0",
        ));
}

#[test]
fn plan_prints_validation_warnings() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::copy(util::fixture("unknown_audience.prdoc"), tmp.path().join("pr_7.prdoc")).unwrap();

    let mut cmd = cargo_bin_cmd!("prdoc");
    cmd.arg("plan").arg(tmp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("frame-support"))
        .stderr(predicate::str::contains("pr_7.prdoc: warning: doc[0] unknown audience 'Auditors'"));
}
