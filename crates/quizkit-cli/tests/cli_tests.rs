//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CURRICULUM: &str = r#"{
    "6th": {
        "Mathematics": {
            "Number": { "Fractions": { "key_topics": ["halves", "quarters"] } }
        },
        "Science": {
            "Physics": { "Forces": { "key_topics": ["gravity", "friction"] } }
        }
    },
    "7th": {
        "Mathematics": {
            "Algebra": { "Equations": { "key_topics": ["balancing"] } }
        }
    }
}"#;

const POOL: &str = r#"[
    {"id": 1, "question": "Q1"},
    {"id": 2, "question": "Q2"},
    {"id": 3, "question": "Q3"},
    {"id": 4, "question": "Q4"},
    {"id": 5, "question": "Q5"}
]"#;

fn quizkit() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizkit").unwrap();
    cmd.env_remove("QUIZKIT_BASE_URL");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn sampled_ids(stdout: &[u8]) -> Vec<u64> {
    let questions: Vec<serde_json::Value> = serde_json::from_slice(stdout).unwrap();
    questions.iter().map(|q| q["id"].as_u64().unwrap()).collect()
}

#[test]
fn subjects_from_file() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", CURRICULUM);

    quizkit()
        .arg("subjects")
        .arg("--grade")
        .arg("6th")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Science"));
}

#[test]
fn subjects_for_missing_grade() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", CURRICULUM);

    quizkit()
        .arg("subjects")
        .arg("--grade")
        .arg("9th")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No subjects found for grade 9th"))
        .stderr(predicate::str::contains("No data found for grade: 9th"));
}

#[test]
fn subjects_accepts_bare_grade_number() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", CURRICULUM);

    quizkit()
        .args(["subjects", "--grade", "6", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Subjects for grade 6th:"))
        .stdout(predicate::str::contains("Mathematics"));
}

#[tokio::test]
async fn subjects_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/grade-subjects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CURRICULUM))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "quizkit.toml",
        &format!("base_url = \"{}\"\n", server.uri()),
    );

    quizkit()
        .arg("subjects")
        .arg("--grade")
        .arg("7th")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Science").not());
}

#[tokio::test]
async fn subjects_http_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "quizkit.toml",
        &format!("base_url = \"{}\"\n", server.uri()),
    );

    quizkit()
        .arg("subjects")
        .arg("--grade")
        .arg("6th")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Failed to load curriculum data",
        ));
}

#[test]
fn tree_lists_chapters() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", CURRICULUM);

    quizkit()
        .arg("tree")
        .arg("--grade")
        .arg("6th")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fractions"))
        .stdout(predicate::str::contains("gravity, friction"))
        .stdout(predicate::str::contains("Equations").not())
        .stdout(predicate::str::contains(
            "6th: 2 subjects, 2 strands, 2 chapters, 4 topics",
        ));
}

#[test]
fn tree_unknown_grade_prints_empty_table() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", CURRICULUM);

    quizkit()
        .arg("tree")
        .arg("--grade")
        .arg("12th")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter"))
        .stdout(predicate::str::contains("Fractions").not())
        .stdout(predicate::str::contains("12th:").not())
        .stderr(predicate::str::contains("No data found for grade: 12th"));
}

#[test]
fn tree_accepts_grade_alias() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", CURRICULUM);

    quizkit()
        .args(["tree", "--grade", "seventh", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Equations"))
        .stdout(predicate::str::contains("Fractions").not());
}

#[test]
fn sample_draws_distinct_questions() {
    let dir = TempDir::new().unwrap();
    let pool = write_file(&dir, "pool.json", POOL);

    let output = quizkit()
        .arg("sample")
        .arg("--pool")
        .arg(&pool)
        .arg("--count")
        .arg("3")
        .output()
        .unwrap();
    assert!(output.status.success());

    let mut ids = sampled_ids(&output.stdout);
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| (1..=5).contains(id)));
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn sample_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let pool = write_file(&dir, "pool.json", POOL);

    let run = || {
        quizkit()
            .args(["sample", "--count", "4", "--seed", "11", "--pool"])
            .arg(&pool)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(sampled_ids(&run()), sampled_ids(&run()));
}

#[test]
fn sample_more_than_pool() {
    let dir = TempDir::new().unwrap();
    let pool = write_file(&dir, "pool.json", POOL);

    let output = quizkit()
        .args(["sample", "--count", "50", "--pool"])
        .arg(&pool)
        .output()
        .unwrap();
    assert_eq!(sampled_ids(&output.stdout).len(), 5);
}

#[test]
fn sample_negative_count_fails() {
    let dir = TempDir::new().unwrap();
    let pool = write_file(&dir, "pool.json", POOL);

    quizkit()
        .args(["sample", "--count", "-2", "--pool"])
        .arg(&pool)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn sample_uses_configured_default_count() {
    let dir = TempDir::new().unwrap();
    let pool = write_file(&dir, "pool.json", POOL);
    let config = write_file(&dir, "quizkit.toml", "default_question_count = 2\n");

    let output = quizkit()
        .arg("sample")
        .arg("--pool")
        .arg(&pool)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert_eq!(sampled_ids(&output.stdout).len(), 2);
}

#[test]
fn sample_rejects_non_array_pool() {
    let dir = TempDir::new().unwrap();
    let pool = write_file(&dir, "pool.json", r#"{"questions": []}"#);

    quizkit()
        .args(["sample", "--count", "1", "--pool"])
        .arg(&pool)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON array"));
}

#[test]
fn validate_valid_curriculum() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", CURRICULUM);

    quizkit()
        .arg("validate")
        .arg("--curriculum")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade 6th: 2 subjects"))
        .stdout(predicate::str::contains("Curriculum valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "grade-subjects.json",
        r#"{"6th": {"Mathematics": {"Number": {"Fractions": {"key_topics": []}}}}}"#,
    );

    quizkit()
        .arg("validate")
        .arg("--curriculum")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[6th/Mathematics/Number/Fractions] WARNING: chapter has no key topics",
        ))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_malformed_curriculum() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "grade-subjects.json", "Invalid JSON");

    quizkit()
        .arg("validate")
        .arg("--curriculum")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse curriculum JSON"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizkit.toml"))
        .stdout(predicate::str::contains("Created grade-subjects.json"));

    assert!(dir.path().join("quizkit.toml").exists());
    assert!(dir.path().join("grade-subjects.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_validates() {
    let dir = TempDir::new().unwrap();

    quizkit().current_dir(dir.path()).arg("init").assert().success();

    quizkit()
        .current_dir(dir.path())
        .args(["validate", "--curriculum", "grade-subjects.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Curriculum valid"));
}

#[test]
fn help_output() {
    quizkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Curriculum lookups and question sampling",
        ));
}

#[test]
fn version_output() {
    quizkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizkit"));
}
