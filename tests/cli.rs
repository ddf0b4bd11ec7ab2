//! Command-line tests running the built binary
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordle_eliminator"))
        .args(args)
        .output()
        .expect("run failed")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn rank_sorts_by_letter_variety() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.txt");
    fs::write(&input, "geese\nteach\n\nllama\nsound\nteach\n").unwrap();

    let output = run(&["rank", input.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));

    let ranked: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(ranked, ["teach", "sound", "geese", "llama"]);
}

#[test]
fn rank_against_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.txt");
    let dictionary = dir.path().join("legal.txt");
    fs::write(&input, "llama\nzzzzz\nteach\n").unwrap();
    fs::write(&dictionary, "teach\nllama\n").unwrap();

    let output = run(&[
        "rank",
        input.to_str().unwrap(),
        "--against",
        dictionary.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).lines().collect::<Vec<_>>(), ["teach", "llama"]);
}

#[test]
fn rank_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = run(&["rank", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read"));
}

#[test]
fn solve_opener_in_one_guess() {
    let output = run(&["solve", "teach"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Solved in 1 guesses!"));
}

#[test]
fn solve_verbose_shows_pool_sizes() {
    let output = run(&["solve", "sound", "--verbose"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Feedback:   -t-e-a-c-h"));
    assert!(text.contains("Common:"));
    assert!(text.contains("Legal:"));
}

#[test]
fn solve_with_custom_opener() {
    let output = run(&["--opener", "sound", "solve", "sound"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Solved in 1 guesses!"));
}

#[test]
fn solve_invalid_word_fails() {
    let output = run(&["solve", "toolong"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid target word"));
}

#[test]
fn invalid_opener_fails() {
    let output = run(&["--opener", "abc", "solve", "sound"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid opening word"));
}

#[test]
fn unknown_policy_is_rejected() {
    let output = run(&["--policy", "entropy", "solve", "sound"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("entropy"));
}

#[test]
fn indicator_policy_solves() {
    let output = run(&["--policy", "indicator", "solve", "teach"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Solved in 1 guesses!"));
}

#[test]
fn custom_wordlist_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist = dir.path().join("legal.txt");
    fs::write(&wordlist, "sound\nlemon\nbrawl\n").unwrap();

    // "teach" is still the opener, but the word is outside the custom list
    let output = run(&["--wordlist", wordlist.to_str().unwrap(), "analyze", "teach"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not in word list"));

    let output = run(&["--wordlist", wordlist.to_str().unwrap(), "analyze", "sound"]);
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn analyze_reports_rank() {
    let output = run(&["analyze", "teach"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Distinct letters: 5"));
    assert!(text.contains("Rank:"));
}

#[test]
fn benchmark_small_run() {
    let output = run(&["benchmark", "-n", "3"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Words tested:     3"));
}

#[test]
fn test_all_with_limit() {
    let output = run(&["test-all", "--limit", "5"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Total words tested:  5"));
}

#[test]
fn simple_mode_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordle_eliminator"))
        .arg("simple")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn failed");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"-----\nbogus\nundo\nwin\nno\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("TEACH"));
    assert!(text.contains("Undone!"));
    assert!(text.contains("Thanks for playing"));
}
