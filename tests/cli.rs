//! End-to-end tests driving the scount binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const JAVA_SOURCE: &str = "package mytest;\n\
                           public class A {\n\
                           \x20   int m() { int x = 0; return x;}\n\
                           }\n";

fn scount() -> Command {
    Command::cargo_bin("scount").unwrap()
}

#[test]
fn reports_metrics_for_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("One.java");
    fs::write(&path, JAVA_SOURCE).unwrap();

    scount()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("File: One.java"))
        .stdout(predicate::str::contains(format!(
            "  Logical Lines of Code (LLC):   {:>8}",
            5
        )))
        .stdout(predicate::str::contains(format!(
            "  Physical Lines        (PHL):   {:>8}",
            4
        )))
        .stdout(predicate::str::contains(format!(
            "  Source Size in Bytes  (SZE):   {:>8}",
            JAVA_SOURCE.len()
        )));
}

#[test]
fn reports_tables_for_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Source.java"), JAVA_SOURCE).unwrap();
    fs::write(dir.path().join("source.c"), "int x;\nint y;\n").unwrap();
    fs::write(dir.path().join("text.txt"), "alpha beta\ngamma\n").unwrap();
    fs::write(dir.path().join("text2.md"), "# title\n\nbody\n").unwrap();

    scount()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned files: 4"))
        .stdout(predicate::str::contains("- File -"))
        .stdout(predicate::str::contains("- LLC -"))
        .stdout(predicate::str::contains("Source.java"))
        .stdout(predicate::str::contains("- Language -"))
        .stdout(predicate::str::contains("Java"))
        .stdout(predicate::str::contains("Plain Text"))
        .stdout(predicate::str::contains("Markdown"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn annotates_a_single_java_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("One.java");
    fs::write(&path, JAVA_SOURCE).unwrap();

    let expected = "package mytest; // +1 (package declaration)\n\
                    public class A { // +1 (class declaration)\n\
                    \x20   int m() { int x = 0; return x;} \
                    // +3 (method declaration, local variable declaration, \
                    return statement)\n\
                    }\n";
    scount()
        .arg("--annotate-counts")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn annotation_of_a_text_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "just text\n").unwrap();

    scount()
        .arg("--annotate-counts")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to annotate source file"));
}

#[test]
fn ineligible_single_file_exits_with_nothing_processed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.py");
    fs::write(&path, "print('hi')\n").unwrap();

    scount()
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot be processed"))
        .stderr(predicate::str::contains("'py'"));
}

#[test]
fn missing_path_exits_with_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    scount()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input path"))
        .stderr(predicate::str::contains("No such file or directory (0x02)"));
}

#[test]
fn unknown_option_exits_with_invalid_argument() {
    scount().arg("--frobnicate").assert().code(1);
}

#[test]
fn no_arguments_exits_with_invalid_argument() {
    scount()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input path specified."));
}

#[test]
fn multiple_paths_exit_with_invalid_argument() {
    scount()
        .args(["a.c", "b.c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Multiple input paths specified."));
}

#[test]
fn bare_version_flag_prints_only_the_version() {
    scount()
        .arg("-#")
        .assert()
        .success()
        .stdout(predicate::eq(format!("{}\n", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn version_flag_prints_the_banner() {
    scount()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scount v"))
        .stdout(predicate::str::contains("Reckon project"));
}

#[test]
fn help_flag_prints_usage() {
    scount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Usage: scount [--verbose] [--annotate-counts] [--stop-on-error] <PATH>",
        ));
}

#[test]
fn verbose_mode_traces_discovered_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "text\n").unwrap();

    scount()
        .arg("--verbose")
        .arg(dir.path())
        .assert()
        .stderr(predicate::str::contains("Processing input path:"))
        .stderr(predicate::str::contains("Found file:"));
}

#[test]
fn large_directories_collapse_middle_rows_into_an_ellipsis() {
    let dir = tempfile::tempdir().unwrap();
    for index in 1..=18 {
        fs::write(dir.path().join(format!("a{index:02}.txt")), "x\n").unwrap();
    }

    let output = scount().arg(dir.path()).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Scanned files: 18"));
    // The first rows and the last row are printed; the middle collapses
    // into exactly one ellipsis row
    assert!(stdout.contains("a01.txt"));
    assert!(stdout.contains("a15.txt"));
    assert!(!stdout.contains("a16.txt"));
    assert!(!stdout.contains("a17.txt"));
    assert!(stdout.contains("a18.txt"));
    let ellipsis_rows = stdout
        .lines()
        .filter(|line| line.starts_with("  |") && line.contains("..") && !line.contains("a"))
        .count();
    assert_eq!(ellipsis_rows, 1);
}

#[test]
fn stop_on_error_aborts_after_the_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.java"), "not java at all {{{\n").unwrap();
    fs::write(dir.path().join("b.java"), JAVA_SOURCE).unwrap();

    scount()
        .arg("--stop-on-error")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("An error has occurred for:"));
}
