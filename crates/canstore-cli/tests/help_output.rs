use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn run_help(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("canstore").unwrap();
    let output = cmd.args(args).arg("--help").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    let help = run_help(&[]);
    assert!(help.contains("browse"));
    assert!(help.contains("list"));
    assert!(help.contains("--catalog"));
    assert!(help.contains("--log-level"));
}

#[test]
fn test_list_help_shows_filters() {
    let help = run_help(&["list"]);
    assert!(predicate::str::contains("--category").eval(&help));
    assert!(predicate::str::contains("--search").eval(&help));
    assert!(predicate::str::contains("--format").eval(&help));
}

#[test]
fn test_browse_help_has_no_format_flag() {
    let help = run_help(&["browse"]);
    assert!(help.contains("--category"));
    assert!(!help.contains("--format"));
}

#[test]
fn test_browse_rejects_stdin_catalog() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("canstore").unwrap();
    cmd.args(["browse", "--catalog", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass the catalog as a file"));
}
