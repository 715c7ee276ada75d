// keymask/tests/cli_integration_tests.rs
//! CLI integration tests for the `keymask` binary.
//!
//! Tests spawn the binary with `assert_cmd`, feed input through stdin or
//! temporary files and assert on stdout, stderr and exit status.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_TEXT: &str = "晓美焰来到北京立方庭参观自然语义科技公司。肖添龙在2025.05.20去好未来公司实习了";
const SAMPLE_KEYWORDS: [&str; 6] = [
    "晓美焰",
    "北京立方庭",
    "自然语义科技公司",
    "肖添龙",
    "2025.05.20",
    "好未来公司",
];

fn keymask_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("keymask"));
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("KEYMASK_ALLOW_DEBUG_PII");
    cmd
}

fn keyword_flags(keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .flat_map(|k| ["-k".to_string(), k.to_string()])
        .collect()
}

fn temp_file_with(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_mask_variable_from_stdin() {
    keymask_cmd()
        .arg("mask")
        .args(keyword_flags(&SAMPLE_KEYWORDS))
        .arg("--no-summary")
        .write_stdin(SAMPLE_TEXT)
        .assert()
        .success()
        .stdout("***来到*****参观********。***在**********去*****实习了");
}

#[test]
fn test_mask_fixed_from_stdin() {
    keymask_cmd()
        .arg("mask")
        .args(keyword_flags(&SAMPLE_KEYWORDS))
        .args(["--fixed", "3", "--no-summary"])
        .write_stdin(SAMPLE_TEXT)
        .assert()
        .success()
        .stdout("***来到***参观***。***在***去***实习了");
}

#[test]
fn test_mask_ignore_case() {
    keymask_cmd()
        .args(["mask", "-k", "hanlp", "--ignore-case", "--no-summary"])
        .write_stdin("HanLP is great, hanlp too")
        .assert()
        .success()
        .stdout("***** is great, ***** too");
}

#[test]
fn test_mask_longest_keyword_wins() {
    keymask_cmd()
        .args(["mask", "-k", "AB", "-k", "ABC", "--no-summary"])
        .write_stdin("XABCY")
        .assert()
        .success()
        .stdout("X***Y");
}

#[test]
fn test_mask_keyword_containing_comma() {
    keymask_cmd()
        .args(["mask", "-k", "Smith, J", "-k", "1,000", "--no-summary"])
        .write_stdin("Paid 1,000 to Smith, J and 1 to Smith")
        .assert()
        .success()
        .stdout("Paid ***** to ******** and 1 to Smith");
}

#[test]
fn test_mask_without_keywords_passes_through() {
    keymask_cmd()
        .args(["mask", "--no-summary"])
        .write_stdin("nothing to hide\n")
        .assert()
        .success()
        .stdout("nothing to hide\n");
}

#[test]
fn test_mask_summary_does_not_leak_keywords() {
    keymask_cmd()
        .args(["mask", "-k", "topsecret"])
        .write_stdin("the topsecret plan, topsecret")
        .assert()
        .success()
        .stdout("the ********* plan, *********")
        .stderr(predicate::str::contains("Mask Summary (2 match(es)):"))
        .stderr(predicate::str::contains("(9 chars): 2 occurrence(s)"))
        .stderr(predicate::str::contains("topsecret").not());
}

#[test]
fn test_quiet_suppresses_summary() {
    keymask_cmd()
        .args(["-q", "mask", "-k", "x"])
        .write_stdin("x y")
        .assert()
        .success()
        .stdout("* y")
        .stderr("");
}

#[test]
fn test_mask_files_and_keywords_file() -> Result<()> {
    let input = temp_file_with("a.b and axb\nrepeat a.b\n")?;
    let keywords = temp_file_with("a.b\r\n\n")?;
    let output = NamedTempFile::new()?;

    keymask_cmd()
        .arg("mask")
        .arg("-i")
        .arg(input.path())
        .arg("--keywords-file")
        .arg(keywords.path())
        .arg("-o")
        .arg(output.path())
        .arg("--no-summary")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(output.path())?, "*** and axb\nrepeat ***\n");
    Ok(())
}

#[test]
fn test_mask_with_yaml_config_and_flag_override() -> Result<()> {
    let config = temp_file_with(
        r#"
keywords: ["secret"]
case_insensitive: true
mode:
  type: fixed
  length: 2
"#,
    )?;

    keymask_cmd()
        .arg("mask")
        .arg("--config")
        .arg(config.path())
        .arg("--no-summary")
        .write_stdin("Secret/SECRET")
        .assert()
        .success()
        .stdout("**/**");

    keymask_cmd()
        .arg("mask")
        .arg("--config")
        .arg(config.path())
        .args(["--fixed", "0", "--no-summary"])
        .write_stdin("Secret/SECRET")
        .assert()
        .success()
        .stdout("/");
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let config = temp_file_with("keywords: [oops")?;
    let input = temp_file_with("text")?;
    keymask_cmd()
        .arg("mask")
        .arg("--config")
        .arg(config.path())
        .arg("-i")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_scan_json_report() -> Result<()> {
    let assert = keymask_cmd()
        .args(["scan", "-k", "北京", "-k", "hanlp", "--json-stdout"])
        .write_stdin("北京 hanlp 北京")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let report: Value = serde_json::from_str(&stdout)?;
    assert_eq!(report["total_matches"], 3);
    assert_eq!(report["keywords"][0]["occurrences"], 2);
    assert_eq!(report["keywords"][0]["char_len"], 2);
    assert!(!stdout.contains("hanlp"));
    Ok(())
}

#[test]
fn test_scan_fail_over_threshold() {
    keymask_cmd()
        .args(["scan", "-k", "x", "--fail-over-threshold", "1"])
        .write_stdin("x x x")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds the configured threshold"));

    keymask_cmd()
        .args(["scan", "-k", "x", "--fail-over-threshold", "3"])
        .write_stdin("x x x")
        .assert()
        .success();
}
