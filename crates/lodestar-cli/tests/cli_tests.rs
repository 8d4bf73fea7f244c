use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a Command with --no-color so assertions see plain
/// markdown instead of ANSI sequences.
fn lodestar_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lodestar").expect("Failed to find lodestar binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_generate_default_roadmap() {
    lodestar_cmd()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Product Engineer Pathway"))
        .stdout(predicate::str::contains("Foundation"))
        .stdout(predicate::str::contains("Milestone"));
}

#[test]
fn test_generate_professional_skips_foundation() {
    lodestar_cmd()
        .args([
            "generate",
            "--experience",
            "professional",
            "--math",
            "strong",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foundation").not())
        .stdout(predicate::str::contains("Phase 2"));
}

#[test]
fn test_generate_researcher_math_warning() {
    lodestar_cmd()
        .args([
            "generate",
            "--role",
            "researcher",
            "--experience",
            "none",
            "--math",
            "moderate",
            "--timeline",
            "12-months",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Model Architect Pathway"))
        .stdout(predicate::str::contains("linear algebra and calculus"));
}

#[test]
fn test_generate_with_interests_adds_electives() {
    lodestar_cmd()
        .args([
            "generate",
            "--experience",
            "some-python",
            "--math",
            "strong",
            "--role",
            "builder",
            "--interest",
            "rag",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Areas of Interest"));
}

#[test]
fn test_generate_prior_courses_are_excluded() {
    lodestar_cmd()
        .args(["generate", "--prior-course", "ai-for-everyone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI For Everyone").not())
        .stdout(predicate::str::contains("Python for AI Development"));
}

#[test]
fn test_generate_json_output() {
    lodestar_cmd()
        .args(["generate", "--json", "--role", "builder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pathway\": \"builder\""))
        .stdout(predicate::str::contains("\"totalCourses\""))
        .stdout(predicate::str::contains("\"personalizationFactors\""));
}

#[test]
fn test_generate_tolerates_garbage_answers() {
    lodestar_cmd()
        .args([
            "generate",
            "--experience",
            "omniscient",
            "--math",
            "imaginary",
            "--time",
            "infinite",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pathway"));
}

#[test]
fn test_generate_from_answers_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let answers_path = temp_dir.path().join("answers.json");
    std::fs::write(
        &answers_path,
        r#"{"experience": "professional", "mathBackground": "strong", "targetRole": "enterprise"}"#,
    )
    .expect("Failed to write answers");

    lodestar_cmd()
        .args(["generate", "--answers-file", answers_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enterprise AI Leader Pathway"))
        .stdout(predicate::str::contains("Foundation").not());
}

#[test]
fn test_generate_flags_override_answers_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let answers_path = temp_dir.path().join("answers.json");
    std::fs::write(&answers_path, r#"{"targetRole": "enterprise"}"#)
        .expect("Failed to write answers");

    lodestar_cmd()
        .args([
            "generate",
            "--answers-file",
            answers_path.to_str().unwrap(),
            "--role",
            "researcher",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Model Architect Pathway"));
}

#[test]
fn test_generate_missing_answers_file_fails() {
    lodestar_cmd()
        .args(["generate", "--answers-file", "/nonexistent/answers.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("answers"));
}

#[test]
fn test_courses_listing() {
    lodestar_cmd()
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Courses"))
        .stdout(predicate::str::contains("AI For Everyone"));
}

#[test]
fn test_courses_difficulty_filter() {
    lodestar_cmd()
        .args(["courses", "--difficulty", "beginner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI For Everyone"))
        .stdout(predicate::str::contains("Multi-Agent Systems").not());
}

#[test]
fn test_courses_category_filter() {
    lodestar_cmd()
        .args(["courses", "--category", "rag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Understanding Text Embeddings"))
        .stdout(predicate::str::contains("AI For Everyone").not());
}

#[test]
fn test_courses_invalid_difficulty_fails() {
    lodestar_cmd()
        .args(["courses", "--difficulty", "legendary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid difficulty"));
}

#[test]
fn test_pathways_overview() {
    lodestar_cmd()
        .arg("pathways")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Product Engineer"))
        .stdout(predicate::str::contains("Model Architect"))
        .stdout(predicate::str::contains("Enterprise AI Leader"));
}

#[test]
fn test_default_command_shows_pathways() {
    lodestar_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Role Pathways"));
}

#[test]
fn test_validate_bundled_catalog() {
    lodestar_cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All template ids resolve"));
}

#[test]
fn test_validate_reports_unresolved_ids() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{
            "courses": [
                {"id": "a", "title": "A", "difficulty": "beginner"}
            ],
            "pathways": {
                "trunk": {"name": "T", "milestone": "M", "courses": ["a", "ghost"]},
                "builder": {"name": "B", "phases": []},
                "researcher": {"name": "R", "phases": []},
                "enterprise": {"name": "E", "phases": []}
            }
        }"#,
    )
    .expect("Failed to write catalog");

    lodestar_cmd()
        .args(["--catalog-file", catalog_path.to_str().unwrap(), "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("`ghost`"))
        .stderr(predicate::str::contains("unresolved"));
}

#[test]
fn test_custom_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{
            "courses": [
                {"id": "solo", "title": "The Only Course",
                 "difficulty": "beginner", "estimated_hours": 4}
            ],
            "pathways": {
                "trunk": {"name": "Tiny Trunk", "milestone": "Done",
                          "courses": ["solo"]},
                "builder": {"name": "Tiny Builder", "phases": []},
                "researcher": {"name": "R", "phases": []},
                "enterprise": {"name": "E", "phases": []}
            }
        }"#,
    )
    .expect("Failed to write catalog");

    lodestar_cmd()
        .args([
            "--catalog-file",
            catalog_path.to_str().unwrap(),
            "generate",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tiny Builder Pathway"))
        .stdout(predicate::str::contains("The Only Course"));
}

#[test]
fn test_missing_catalog_file_fails() {
    lodestar_cmd()
        .args(["--catalog-file", "/nonexistent/catalog.json", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog"));
}
