//! End-to-end tests for the tester binaries.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(bytes).expect("write");
    f.flush().expect("flush");
    f
}

fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

// ==================== baa_lexer_tester ====================

#[test]
fn test_lexer_tester_demo_input() {
    let mut cmd = Command::cargo_bin("baa_lexer_tester").expect("binary");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[000]"))
        .stdout(predicate::str::contains("EOF"));
}

#[test]
fn test_lexer_tester_utf8_file() {
    let f = write_temp("متغير س = ١٢٣.".as_bytes());
    let mut cmd = Command::cargo_bin("baa_lexer_tester").expect("binary");
    cmd.arg(f.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("VAR"))
        .stdout(predicate::str::contains("INT_LIT"))
        .stdout(predicate::str::contains("'١٢٣'"))
        .stdout(predicate::str::contains("DOT"));
}

#[test]
fn test_lexer_tester_utf16_file() {
    let f = write_temp(&utf16le_with_bom("دالة رئيسية() {}"));
    let mut cmd = Command::cargo_bin("baa_lexer_tester").expect("binary");
    cmd.arg(f.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FUNCTION"))
        .stdout(predicate::str::contains("IDENTIFIER"));
}

#[test]
fn test_lexer_tester_missing_file_fails() {
    let mut cmd = Command::cargo_bin("baa_lexer_tester").expect("binary");
    cmd.arg("/nonexistent/input.baa");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_lexer_tester_whitespace_tokens_emitted() {
    let f = write_temp("س ص".as_bytes());
    let mut cmd = Command::cargo_bin("baa_lexer_tester").expect("binary");
    cmd.arg(f.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WHITESPACE"));
}

#[test]
fn test_lexer_tester_reports_lexical_errors() {
    let f = write_temp("\"مفتوح".as_bytes());
    let mut cmd = Command::cargo_bin("baa_lexer_tester").expect("binary");
    cmd.arg(f.path());
    // Lexical errors surface as ERROR tokens and diagnostics, but the
    // tester itself still succeeds.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("unterminated"));
}

// ==================== baa_ast_tester ====================

#[test]
fn test_ast_tester_demo_input() {
    let mut cmd = Command::cargo_bin("baa_ast_tester").expect("binary");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Program"))
        .stdout(predicate::str::contains("FunctionDecl 'مربع'"));
}

#[test]
fn test_ast_tester_utf8_file() {
    let f = write_temp("إذا (س > ٠) { إرجع س. }".as_bytes());
    let mut cmd = Command::cargo_bin("baa_ast_tester").expect("binary");
    cmd.arg(f.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("If"))
        .stdout(predicate::str::contains("Binary '>'"))
        .stdout(predicate::str::contains("Return"));
}

#[test]
fn test_ast_tester_utf16_file() {
    let f = write_temp(&utf16le_with_bom("متغير عداد: عدد_صحيح = ٠."));
    let mut cmd = Command::cargo_bin("baa_ast_tester").expect("binary");
    cmd.arg(f.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("VarDecl 'عداد'"))
        .stdout(predicate::str::contains("Type عدد_صحيح"));
}

#[test]
fn test_ast_tester_syntax_error_fails_with_location() {
    let f = write_temp("متغير = ٥.".as_bytes());
    let mut cmd = Command::cargo_bin("baa_ast_tester").expect("binary");
    cmd.arg(f.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(":1:"))
        .stderr(predicate::str::contains("error["));
}

#[test]
fn test_ast_tester_missing_file_fails() {
    let mut cmd = Command::cargo_bin("baa_ast_tester").expect("binary");
    cmd.arg("/nonexistent/input.baa");
    cmd.assert().failure();
}
