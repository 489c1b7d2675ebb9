//! End-to-end tests for the krait CLI binary.
//!
//! These tests run the compiled `krait` executable against scratch files
//! and verify its outputs, output-file handling, stdin support, and exit
//! codes.

mod common;

use common::krait_binary;

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

const EXAMPLE: &str = "pi = 3.14;\nmain () {\n    println(pi);\n    return 0.0;\n}\n";

/// Runs the krait binary on a scratch file containing `source`.
fn run_on_file(source: &str, extra_args: &[&str]) -> Output {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("input.kr");
    std::fs::write(&path, source).expect("failed to write source file");

    Command::new(krait_binary())
        .arg(&path)
        .args(extra_args)
        .output()
        .expect("failed to run krait binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_emit_ir_is_the_default() {
    let output = run_on_file(EXAMPLE, &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("@pi = global double"), "stdout: {stdout}");
    assert!(stdout.contains("define i32 @main()"), "stdout: {stdout}");
}

#[test]
fn test_emit_tokens() {
    let output = run_on_file("pi = 3.14;", &["--emit", "tokens"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["IDENTIFIER{pi}", "ASSIGN", "DOUBLE_LITERAL{3.14}", "SEMICOLON", "END"]
    );
}

#[test]
fn test_emit_ast() {
    let output = run_on_file(EXAMPLE, &["--emit", "ast"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Program\n"), "stdout: {stdout}");
    assert!(stdout.contains("  Variable: pi\n"), "stdout: {stdout}");
    assert!(stdout.contains("  Function: main\n"), "stdout: {stdout}");
    assert!(stdout.contains("    Return\n"), "stdout: {stdout}");
}

#[test]
fn test_output_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let input = dir.path().join("input.kr");
    let output_path = dir.path().join("out.ll");
    std::fs::write(&input, EXAMPLE).expect("failed to write source file");

    let output = Command::new(krait_binary())
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .output()
        .expect("failed to run krait binary");
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());

    let written = std::fs::read_to_string(&output_path).expect("output file missing");
    assert!(written.contains("define double @main_()"));
}

#[test]
fn test_stdin_input() {
    let mut child = Command::new(krait_binary())
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn krait binary");

    child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(EXAMPLE.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait for krait");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("@pi = global double"));
}

#[test]
fn test_lex_error_fails_with_nonzero_exit() {
    let output = run_on_file("a = 3;", &[]);
    assert!(!output.status.success());
}

#[test]
fn test_lex_error_fails_even_when_emitting_tokens() {
    let output = run_on_file("a = 3;", &["--emit", "tokens"]);
    assert!(!output.status.success());
}

#[test]
fn test_parse_error_fails_with_report() {
    let output = run_on_file("f () { return 0.0 }", &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unexpected token"), "stderr: {stderr}");
}

#[test]
fn test_codegen_error_fails_with_report() {
    let output = run_on_file("main () { return nope; }", &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_fails() {
    let output = Command::new(krait_binary())
        .arg("/nonexistent/path/program.kr")
        .output()
        .expect("failed to run krait binary");
    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let output = Command::new(krait_binary())
        .arg("--version")
        .output()
        .expect("failed to run krait binary");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("krait"));
}

#[test]
fn test_help_flag() {
    let output = Command::new(krait_binary())
        .arg("--help")
        .output()
        .expect("failed to run krait binary");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("--emit"), "stdout: {stdout}");
    assert!(stdout.contains("--output"), "stdout: {stdout}");
}
