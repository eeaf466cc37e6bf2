//! Integration tests for the svtok CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn svtok() -> Command {
    Command::cargo_bin("svtok").unwrap()
}

#[test]
fn test_process_text_format() {
    svtok()
        .args(["process", "-q", "-f", "text", "-i"])
        .arg(fixture_path("swedish-sample.txt"))
        .assert()
        .success()
        .stdout(
            "Mötet började 2024-01-15 kl 10:30 .\n\
             Vi pratade bl.a. om budgeten , t.ex. lönerna .\n\
             Nästa stycke börjar här !\n\
             Vad tycker du ?\n",
        );
}

#[test]
fn test_tokens_is_default_format() {
    svtok()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("greeting.txt"))
        .assert()
        .success()
        .stdout("Hej\n.\n\nHej\n.\n\n");
}

#[test]
fn test_no_abbreviations() {
    svtok()
        .args(["process", "-q", "-f", "text", "--no-abbreviations", "-i"])
        .arg(fixture_path("swedish-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vi pratade bl.a . om budgeten , t . ex . lönerna .\n",
        ));
}

#[test]
fn test_json_output() {
    let output = svtok()
        .args(["process", "-q", "-f", "json", "-i"])
        .arg(fixture_path("greeting.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sentences = value.as_array().unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1]["index"], 1);
    assert_eq!(sentences[1]["tokens"], serde_json::json!(["Hej", "."]));
    assert!(sentences[0]["source"]
        .as_str()
        .unwrap()
        .ends_with("greeting.txt"));
}

#[test]
fn test_markdown_output() {
    svtok()
        .args(["process", "-q", "-f", "markdown", "-i"])
        .arg(fixture_path("swedish-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Mötet"))
        .stdout(predicate::str::contains("4. Vad tycker du ?"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences: 4*"));
}

#[test]
fn test_glob_processes_files_in_order() {
    svtok()
        .args(["process", "-q", "-f", "text", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hej .\nHej .\nMötet"));
}

#[test]
fn test_blank_file_produces_no_sentences() {
    svtok()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("blank.txt"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    svtok()
        .args(["process", "-q", "-f", "text", "-i"])
        .arg(fixture_path("greeting.txt"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "Hej .\nHej .\n");
}

#[test]
fn test_output_dir_writes_one_file_per_input() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("tok");

    svtok()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("greeting.txt"))
        .arg("-i")
        .arg(fixture_path("swedish-sample.txt"))
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let greeting = fs::read_to_string(out_dir.join("greeting.tok")).unwrap();
    assert_eq!(greeting, "Hej\n.\n\nHej\n.\n\n");

    let sample = fs::read_to_string(out_dir.join("swedish-sample.tok")).unwrap();
    assert!(sample.contains("\nbl.a.\n"));
    assert!(sample.contains("\nt.ex.\n"));
    assert_eq!(sample.matches("\n\n").count(), 4);
}

#[test]
fn test_output_dir_rejects_inputs_with_same_name() {
    let temp_dir = TempDir::new().unwrap();
    for (sub, text) in [("a", "Ett. Två."), ("b", "Tre.")] {
        fs::create_dir(temp_dir.path().join(sub)).unwrap();
        fs::write(temp_dir.path().join(sub).join("x.txt"), text).unwrap();
    }
    let out_dir = temp_dir.path().join("out");

    svtok()
        .args(["process", "-q", "-i"])
        .arg(temp_dir.path().join("a").join("x.txt"))
        .arg("-i")
        .arg(temp_dir.path().join("b").join("x.txt"))
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output conflict"))
        .stderr(predicate::str::contains("x.tok"));

    assert!(!out_dir.join("x.tok").exists());
}

#[test]
fn test_external_abbreviation_table() {
    let temp_dir = TempDir::new().unwrap();
    let table_path = temp_dir.path().join("titles.toml");
    fs::write(
        &table_path,
        r#"
[metadata]
code = "sv"
name = "Titles"

[abbreviations]
entries = [{ tokens = ["Dr", "."], canonical = "Dr." }]
"#,
    )
    .unwrap();
    let input_path = temp_dir.path().join("input.txt");
    fs::write(&input_path, "Dr. Andersson kom. Sedan gick han hem.").unwrap();

    svtok()
        .args(["process", "-q", "-f", "text", "--abbreviations"])
        .arg(&table_path)
        .arg("-i")
        .arg(&input_path)
        .assert()
        .success()
        .stdout("Dr. Andersson kom .\nSedan gick han hem .\n");
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("svtok.toml");
    fs::write(
        &config_path,
        r#"
[processing]
use_abbreviations = false

[output]
default_format = "json"
pretty_json = false

[performance]
worker_threads = 2
"#,
    )
    .unwrap();

    svtok()
        .args(["process", "-q", "-c"])
        .arg(&config_path)
        .arg("-i")
        .arg(fixture_path("greeting.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""tokens":["Hej","."]"#))
        .stdout(predicate::str::contains("\n").count(1));
}

#[test]
fn test_format_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("svtok.toml");
    fs::write(&config_path, "[output]\ndefault_format = \"json\"\n").unwrap();

    svtok()
        .args(["process", "-q", "-f", "text", "-c"])
        .arg(&config_path)
        .arg("-i")
        .arg(fixture_path("greeting.txt"))
        .assert()
        .success()
        .stdout("Hej .\nHej .\n");
}

#[test]
fn test_threads_flag() {
    svtok()
        .args(["process", "-q", "-f", "text", "--threads", "1", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success();

    svtok()
        .args(["process", "-q", "--threads", "0", "-i"])
        .arg(fixture_path("greeting.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("threads must be greater than 0"));
}

#[test]
fn test_nonexistent_file() {
    svtok()
        .args(["process", "-q", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_pattern() {
    svtok()
        .args(["process", "-q", "-i", "[unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file pattern"));
}

#[test]
fn test_list_formats() {
    svtok()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_abbreviations() {
    svtok()
        .args(["list", "abbreviations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swedish (sv)"))
        .stdout(predicate::str::contains("t . ex ."))
        .stdout(predicate::str::contains("-> d.v.s."));
}

#[test]
fn test_help() {
    svtok()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("generate-config"));
}
