// End-to-end tests driving the plurality binary
// WHY: stdout must carry only results so the CLI can sit in shell pipelines

use serde_json::Value;
use std::process::{Command, Output};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plurality"))
        .args(args)
        .output()
        .expect("Failed to run plurality")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "plurality {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

#[test]
fn test_single_word_commands() {
    assert_eq!(stdout_of(&["noun", "loaf"]), "loaves\n");
    assert_eq!(stdout_of(&["noun", "loaf", "--count", "1"]), "loaf\n");
    assert_eq!(stdout_of(&["verb", "parries"]), "parry\n");
    assert_eq!(stdout_of(&["pronoun", "it"]), "them\n");
    assert_eq!(stdout_of(&["number", "-29"]), "minus twenty-nine\n");
}

#[test]
fn test_phrase_command() {
    assert_eq!(
        stdout_of(&["phrase", "a bag of holding", "--count", "11"]),
        "eleven bags of holding\n"
    );
    assert_eq!(stdout_of(&["phrase", "a short sword", "--count", "-1"]), "short swords\n");
}

#[test]
fn test_batch_json_output() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("items.txt", "a short sword\n\none loaf of crusty bread\n");

    let stdout = stdout_of(&["batch", input.to_str().unwrap(), "--count", "3", "--json"]);
    let records: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be JSON"))
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["line"], 1);
    assert_eq!(records[0]["plural"], "three short swords");
    assert_eq!(records[1]["line"], 3);
    assert_eq!(records[1]["singular"], "one loaf of crusty bread");
    assert_eq!(records[1]["plural"], "three loaves of crusty bread");
}

#[test]
fn test_custom_noun_lexicon_flag() {
    let fixture = TestFixture::new();
    let lexicon = fixture.create_lexicon("nouns.txt", &[("hoof", "hooves")]);

    let stdout = stdout_of(&["--noun-lexicon", lexicon.to_str().unwrap(), "noun", "hoof"]);
    assert_eq!(stdout, "hooves\n");
}

#[test]
fn test_missing_batch_input_fails() {
    let fixture = TestFixture::new();
    let missing = fixture.root_path.join("missing.txt");

    let output = run(&["batch", missing.to_str().unwrap(), "--count", "2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}
