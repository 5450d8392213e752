#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const STRESS: &str = r#"
id = "caregiver-stress"
title = "Caregiver Stress Check"
kind = "stress"

[[questions]]
id = 1
prompt = "one"

[[questions]]
id = 2
prompt = "two"

[[questions]]
id = 3
prompt = "three"

[[questions]]
id = 4
prompt = "four"
"#;

const QUIZ: &str = r#"{
  "id": "stress-knowledge",
  "title": "Understanding Caregiver Stress",
  "kind": "knowledge",
  "questions": [
    { "id": 1, "prompt": "a", "options": ["A", "B", "C", "D"], "correct_index": 1 },
    { "id": 2, "prompt": "b", "options": ["A", "B", "C", "D"], "correct_index": 0 },
    { "id": 3, "prompt": "c", "options": ["A", "B", "C", "D"], "correct_index": 2 },
    { "id": 4, "prompt": "d", "options": ["A", "B", "C", "D"], "correct_index": 3 }
  ]
}"#;

struct Workspace {
    root: TempDir,
    home: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let root = TempDir::new().expect("root temp dir should be created");
        let home = TempDir::new().expect("home temp dir should be created");
        fs::create_dir_all(root.path().join("assessments")).expect("assessments dir should create");
        fs::write(root.path().join("assessments/stress.toml"), STRESS)
            .expect("stress definition should write");
        fs::write(root.path().join("assessments/quiz.json"), QUIZ)
            .expect("quiz definition should write");
        Self { root, home }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn answers(&self, name: &str, json: &str) -> String {
        let path = self.root.path().join(name);
        fs::write(&path, json).expect("answers should write");
        path.display().to_string()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("carescreen").expect("binary should compile");
        cmd.env("HOME", self.home.path())
            .env_remove("RUST_LOG")
            .arg("--root")
            .arg(self.root.path());
        cmd
    }
}

#[test]
fn list_shows_catalog_sorted_by_id() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("caregiver-stress\tstress\t4 question(s)"))
        .stdout(predicate::str::contains("stress-knowledge\tknowledge\t4 question(s)"));
}

#[test]
fn partial_stress_submission_warns_and_uses_answered_ceiling() {
    let ws = Workspace::new();
    let answers = ws.answers("answers.json", r#"{"1": "2", "2": "3", "3": "4"}"#);

    ws.cmd()
        .args(["score", "caregiver-stress", "--answers", &answers])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("- band: LOW"))
        .stdout(predicate::str::contains("- score: 9 / 12"))
        .stderr(predicate::str::contains("3 of 4 questions answered"));
}

#[test]
fn malformed_ratings_score_as_zero() {
    let ws = Workspace::new();
    let answers = ws.answers(
        "answers.json",
        r#"{"1": "4", "2": "often", "3": 4, "4": "4"}"#,
    );

    ws.cmd()
        .args(["score", "caregiver-stress", "--answers", &answers, "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 12"))
        .stdout(predicate::str::contains("\"max_score\": 16"));
}

#[test]
fn knowledge_quiz_reports_percentage_and_band() {
    let ws = Workspace::new();
    let answers = ws.answers(
        "quiz-answers.json",
        r#"{"1": "B", "2": "A", "3": "C", "4": "A"}"#,
    );

    ws.cmd()
        .args(["score", "stress-knowledge", "--answers", &answers, "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"correct\": 3"))
        .stdout(predicate::str::contains("\"percentage\": 75"))
        .stdout(predicate::str::contains("\"band\": \"ADEQUATE\""));
}

#[test]
fn score_accepts_definition_path() {
    let ws = Workspace::new();
    let answers = ws.answers("answers.json", r#"{"1": "0", "2": "0", "3": "0", "4": "0"}"#);
    let definition = ws.path().join("assessments/stress.toml");

    ws.cmd()
        .arg("score")
        .arg(&definition)
        .args(["--answers", &answers])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- score: 0 / 16"));
}

#[test]
fn unknown_question_is_rejected() {
    let ws = Workspace::new();
    let answers = ws.answers("answers.json", r#"{"9": "2"}"#);

    ws.cmd()
        .args(["score", "caregiver-stress", "--answers", &answers])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("question 9 is not part of assessment"));
}

#[test]
fn unknown_assessment_is_runtime_failure() {
    let ws = Workspace::new();
    let answers = ws.answers("answers.json", r#"{"1": "2"}"#);

    ws.cmd()
        .args(["score", "sleep-quality", "--answers", &answers])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("assessment not found: sleep-quality"));
}

#[test]
fn save_requires_login() {
    let ws = Workspace::new();
    let answers = ws.answers("answers.json", r#"{"1": "2", "2": "2", "3": "2", "4": "2"}"#);

    ws.cmd()
        .args(["score", "caregiver-stress", "--answers", &answers, "--save"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no respondent is signed in"));

    assert!(!ws.path().join(".carescreen/history.jsonl").exists());
}

#[test]
fn login_save_and_history_round_trip() {
    let ws = Workspace::new();
    let answers = ws.answers("answers.json", r#"{"1": "4", "2": "4", "3": "4", "4": "3"}"#);

    ws.cmd()
        .args(["login", "morgan"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("signed in as morgan"));

    ws.cmd()
        .args(["score", "caregiver-stress", "--answers", &answers, "--save"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- band: MEDIUM"))
        .stdout(predicate::str::contains("Saved for morgan"));

    let history = fs::read_to_string(ws.path().join(".carescreen/history.jsonl"))
        .expect("history file should exist");
    assert_eq!(history.lines().count(), 1);
    assert!(history.contains("\"band\":\"MEDIUM\""));

    ws.cmd()
        .args(["history", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"respondent\": \"morgan\""))
        .stdout(predicate::str::contains("\"score\": 15"));

    ws.cmd().arg("logout").assert().code(0);
    ws.cmd()
        .arg("whoami")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not signed in"));
}

#[test]
fn history_without_login_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("history")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no respondent is signed in"));
}

#[test]
fn login_falls_back_to_configured_respondent() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("login")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("respondent id must not be empty"));

    fs::write(
        ws.path().join("carescreen.toml"),
        "[respondent]\ndefault = \"riley\"\n",
    )
    .expect("config should write");

    ws.cmd()
        .arg("login")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("signed in as riley"));
    ws.cmd()
        .arg("whoami")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("riley"));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let ws = Workspace::new();
    fs::write(ws.path().join("carescreen.toml"), "[logging]\nlevel = \"loud\"\n")
        .expect("config should write");

    ws.cmd()
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported logging.level"));
}
