use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const SETTINGS: &str = "\
import os

DEBUG = True # [CB]: True|False
LEVEL = 2 # [CB]: 1|2|3
name = 'app'
";

#[test]
fn test_list_annotations() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    assert_cmd_snapshot!(test.list_command().arg("settings.py"), @r"
success: true
exit_code: 0
----- stdout -----
settings.py
  ☑ DEBUG = True  line 3
      ✓ True
        False
  ② LEVEL = 2  line 4
        1
      ✓ 2
        3

✓ 2 annotations in 1 file

----- stderr -----
");

    Ok(())
}

#[test]
fn test_list_filter() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .list_command()
        .args(["settings.py", "--filter", "lev"])
        .output()?;
    let out = stdout(&output);
    assert!(out.contains("LEVEL = 2"));
    assert!(!out.contains("DEBUG"));

    let output = test
        .list_command()
        .args(["settings.py", "--filter", "lev", "--case-sensitive"])
        .output()?;
    assert_eq!(stdout(&output), "No checkbox annotations found.\n");

    Ok(())
}

#[test]
fn test_list_regex_filter() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .list_command()
        .args(["settings.py", "--filter", "^D"])
        .output()?;
    let out = stdout(&output);
    assert!(out.contains("DEBUG = True"));
    assert!(!out.contains("LEVEL"));

    Ok(())
}

#[test]
fn test_list_invalid_regex_matches_nothing() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .list_command()
        .args(["settings.py", "--filter", "[unclosed"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No checkbox annotations found.\n");
    assert!(stderr(&output).contains("Invalid filter pattern '[unclosed'"));

    Ok(())
}

#[test]
fn test_list_uses_language_comment_token() -> Result<()> {
    let test = CliTest::with_file(
        "main.rs",
        "let retries = 3; // [CB]: 3|5\nlet other = 1; # [CB]: 1|0\n",
    )?;

    let output = test.list_command().arg("main.rs").output()?;
    let out = stdout(&output);
    assert!(out.contains("let retries = 3;  line 1"));
    assert!(!out.contains("let other"));

    Ok(())
}

#[test]
fn test_list_language_override() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "flag = on // [CB]: on|off\n")?;

    let output = test.list_command().arg("notes.txt").output()?;
    assert_eq!(stdout(&output), "No checkbox annotations found.\n");

    let output = test
        .list_command()
        .args(["notes.txt", "--language", "javascript"])
        .output()?;
    assert!(stdout(&output).contains("flag = on  line 1"));

    Ok(())
}

#[test]
fn test_list_config_comment_token() -> Result<()> {
    let test = CliTest::with_file("query.psql", "SET x = 1 ; [CB]: 1|0\n")?;
    test.write_file(
        ".cbtogglerc.json",
        r#"{ "languages": { "psql": "postgres" }, "commentTokens": { "postgres": ";" } }"#,
    )?;

    let output = test.list_command().arg("query.psql").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("SET x = 1  line 1"));

    Ok(())
}

#[test]
fn test_list_json() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .list_command()
        .args(["settings.py", "--json"])
        .output()?;
    assert!(output.status.success());

    let records: Value = serde_json::from_str(&stdout(&output))?;
    let records = records.as_array().expect("array of annotations");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["file"], "settings.py");
    assert_eq!(records[0]["line"], 3);
    assert_eq!(records[0]["name"], "DEBUG");
    assert_eq!(records[0]["kind"], "binary");
    assert_eq!(records[0]["state"], "checked");

    assert_eq!(records[1]["name"], "LEVEL");
    assert_eq!(records[1]["kind"], "carousel");
    assert_eq!(records[1]["position"], 1);
    assert_eq!(records[1]["candidates"], serde_json::json!(["1", "2", "3"]));

    Ok(())
}

#[test]
fn test_list_missing_file() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .list_command()
        .args(["missing.py", "settings.py"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file: missing.py"));
    assert!(stdout(&output).contains("DEBUG = True"));

    Ok(())
}
