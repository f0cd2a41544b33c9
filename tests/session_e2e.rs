use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn flashcards(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flashcards").unwrap();
    cmd.current_dir(home.path())
        .env("FLASHCARDS_HOME", home.path())
        .arg("--no-color")
        .arg("--seed")
        .arg("7");
    cmd
}

#[test]
fn test_exit_immediately() {
    let home = TempDir::new().unwrap();
    flashcards(&home)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Input the action"))
        .stdout(predicate::str::ends_with("Bye bye!\n"));
}

#[test]
fn test_add_ask_and_hardest() {
    let home = TempDir::new().unwrap();
    let input = "add\nFrance\nParis\nask\n1\nLyon\nhardest card\nexit\n";

    flashcards(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The pair (\"France\":\"Paris\") has been added.",
        ))
        .stdout(predicate::str::contains("Print the definition of \"France\":"))
        .stdout(predicate::str::contains("Wrong. The right answer is \"Paris\"."))
        .stdout(predicate::str::contains(
            "The hardest card is \"France\". You have 1 errors answering it.",
        ));
}

#[test]
fn test_export_then_import_in_a_new_session() {
    let home = TempDir::new().unwrap();
    let input = "add\n2+2\n4\nadd\n1+4\nfive\nask\n1\nwrong\nexport\ncards.txt\nexit\n";

    flashcards(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards have been saved."));

    let saved = fs::read_to_string(home.path().join("cards.txt")).unwrap();
    let mut lines: Vec<&str> = saved.lines().collect();
    lines.sort();
    assert_eq!(lines.len(), 2);
    // one of the two cards was missed once
    assert!(lines.contains(&"1+4 : five : 1") || lines.contains(&"2+2 : 4 : 1"));

    flashcards(&home)
        .write_stdin("import\ncards.txt\nhardest card\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards have been loaded."))
        .stdout(predicate::str::contains("You have 1 errors answering it."));
}

#[test]
fn test_import_skips_malformed_lines() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("mixed.txt"),
        "a : 1 : 0\njust two : fields\nb : 2 : 3\n",
    )
    .unwrap();

    flashcards(&home)
        .write_stdin("import\nmixed.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped line 2"))
        .stdout(predicate::str::contains("2 cards have been loaded."));
}

#[test]
fn test_missing_import_file_is_not_fatal() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .write_stdin("import\nnowhere.txt\nadd\na\n1\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found."))
        .stdout(predicate::str::contains("The pair (\"a\":\"1\") has been added."));
}

#[test]
fn test_log_contains_prompts_and_answers() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .write_stdin("add\ncat\nmeow\nnonsense\nlog\nsession.log\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command not valid."))
        .stdout(predicate::str::contains("The log has been saved."));

    let log = fs::read_to_string(home.path().join("session.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines[1], "add");
    assert_eq!(lines[2], "The card:");
    assert_eq!(lines[3], "cat");
    assert!(lines.contains(&"nonsense"));
    assert!(lines.contains(&"Command not valid."));
    assert_eq!(lines.last(), Some(&"session.log"));
}

#[test]
fn test_import_and_export_flags() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("in.txt"), "dog : woof : 3\n").unwrap();

    flashcards(&home)
        .arg("--import-from")
        .arg("in.txt")
        .arg("--export-to")
        .arg("out.txt")
        .write_stdin("reset stats\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 cards have been loaded."))
        .stdout(predicate::str::contains("Card statistics have been reset."))
        .stdout(predicate::str::ends_with("1 cards have been saved.\n"));

    let saved = fs::read_to_string(home.path().join("out.txt")).unwrap();
    assert_eq!(saved, "dog : woof : 0\n");
}

#[test]
fn test_config_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("deck.txt"), "sun : star : 0\n").unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{ "import_from": "deck.txt" }"#,
    )
    .unwrap();

    flashcards(&home)
        .write_stdin("remove\nsun\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards have been loaded."))
        .stdout(predicate::str::contains("The card has been removed."));
}

#[test]
fn test_broken_config_fails_cleanly() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.json"), "{ not json").unwrap();

    flashcards(&home)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error"));
}

#[test]
fn test_invalid_utf8_still_exports_on_exit() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .arg("--export-to")
        .arg("out.txt")
        .write_stdin(&b"add\ncaf\xe9\nmeow\nexit\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been added."))
        .stdout(predicate::str::ends_with("1 cards have been saved.\n"));

    let saved = fs::read_to_string(home.path().join("out.txt")).unwrap();
    assert_eq!(saved, "caf\u{FFFD} : meow : 0\n");
}

#[test]
fn test_tricky_definitions_survive_a_second_session() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .write_stdin("add\nratio\nx :\nadd\npair\nb : c\nexport\nset.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards have been saved."));

    flashcards(&home)
        .write_stdin("import\nset.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards have been loaded."))
        .stdout(predicate::str::contains("Skipped line").not());
}
