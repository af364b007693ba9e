use std::fs;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use shadowflow::types::Sentence;
use tempfile::tempdir;

fn shadowflow() -> Command {
    Command::cargo_bin("shadowflow").expect("binary builds")
}

#[test]
fn segment_emits_sentence_json() -> Result<()> {
    let dir = tempdir()?;
    let captions = dir.path().join("captions.json");
    fs::write(
        &captions,
        r#"[
            {"text": "Hello", "start": 0.0, "duration": 1.0},
            {"text": "world.", "start": 1.0, "duration": 1.0},
            {"text": "Bye", "start": 5.0, "duration": 1.0}
        ]"#,
    )?;

    let output = shadowflow().arg("segment").arg(&captions).output()?;
    assert!(output.status.success());

    let sentences: Vec<Sentence> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "Hello world.");
    assert_eq!(sentences[1].text, "Bye");
    Ok(())
}

#[test]
fn segment_rejects_missing_file() {
    shadowflow()
        .arg("segment")
        .arg("no-such-captions.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn segment_rejects_malformed_timing() -> Result<()> {
    let dir = tempdir()?;
    let captions = dir.path().join("captions.json");
    fs::write(
        &captions,
        r#"[{"text": "bad", "start": 1.0, "duration": -2.0}]"#,
    )?;

    shadowflow()
        .arg("segment")
        .arg(&captions)
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative duration"));
    Ok(())
}

#[test]
fn score_reports_full_contraction_match() {
    shadowflow()
        .args(["score", "--reference", "I am going to go", "--candidate", "I'm gonna go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\":100"));
}

#[test]
fn score_reads_reference_from_file() -> Result<()> {
    let dir = tempdir()?;
    let reference = dir.path().join("reference.txt");
    fs::write(&reference, "hello everyone welcome to the show")?;

    shadowflow()
        .arg("score")
        .arg("--reference-file")
        .arg(&reference)
        .args(["--candidate", "hello everyone welcome the show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\":83"))
        .stdout(predicate::str::contains("\"missed\""));
    Ok(())
}

#[test]
fn score_requires_an_attempt_source() {
    shadowflow()
        .args(["score", "--reference", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--candidate"));
}
