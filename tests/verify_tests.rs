mod common;
use common::{SECRET, run_session, tk, todays_report};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_verify_accepts_a_sealed_report() {
    let input = format!("did things\n:quit\n{SECRET}\n");
    let (log_dir, assert) = run_session("verify_sealed", &input);
    assert.success();

    let report = todays_report(&log_dir);
    tk().args(["verify", &report.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seal intact"));
}

#[test]
fn test_verify_rejects_a_tampered_report() {
    let input = format!("did things\n:quit\n{SECRET}\n");
    let (log_dir, assert) = run_session("verify_tampered", &input);
    assert.success();

    let report = todays_report(&log_dir);

    // Lift the read-only bit and flip one content byte.
    let mut perms = fs::metadata(&report).unwrap().permissions();
    perms.set_readonly(false);
    fs::set_permissions(&report, perms).unwrap();
    let mut bytes = fs::read(&report).unwrap();
    let i = bytes
        .windows(10)
        .position(|w| w == b"did things")
        .unwrap();
    bytes[i] = b'X';
    fs::write(&report, &bytes).unwrap();

    tk().args(["verify", &report.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Seal verification failed"));
}

#[test]
fn test_verify_rejects_an_unsealed_report() {
    let (log_dir, assert) = run_session("verify_unsealed", "note\n");
    assert.success();

    let report = todays_report(&log_dir);
    tk().args(["verify", &report.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no seal trailer"));
}

#[test]
fn test_verify_missing_file_fails() {
    tk().args(["verify", "/nonexistent/report.pdf"])
        .assert()
        .failure();
}
