use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const SETTINGS: &str = "\
DEBUG = True # [CB]: True|False
LEVEL = 3 # [CB]: 1|2|3
# plain comment
";

#[test]
fn test_toggle_dry_run() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    assert_cmd_snapshot!(test.toggle_command().args(["settings.py", "1"]), @r"
success: true
exit_code: 0
----- stdout -----
settings.py:1
- DEBUG = True # [CB]: True|False
+ DEBUG = False # [CB]: True|False
Run with --apply to write this change.

----- stderr -----
");
    assert_eq!(test.read_file("settings.py")?, SETTINGS);

    Ok(())
}

#[test]
fn test_toggle_apply() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .toggle_command()
        .args(["settings.py", "1", "--apply"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Updated settings.py:1\n  DEBUG = False # [CB]: True|False\n"
    );
    assert_eq!(
        test.read_file("settings.py")?,
        SETTINGS.replace("DEBUG = True", "DEBUG = False")
    );

    Ok(())
}

#[test]
fn test_toggle_carousel_wraps_around() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    test.toggle_command()
        .args(["settings.py", "2", "--apply"])
        .output()?;
    assert!(test.read_file("settings.py")?.contains("LEVEL = 1 # [CB]: 1|2|3"));

    test.toggle_command()
        .args(["settings.py", "2", "--apply"])
        .output()?;
    assert!(test.read_file("settings.py")?.contains("LEVEL = 2 # [CB]: 1|2|3"));

    Ok(())
}

#[test]
fn test_toggle_keeps_crlf() -> Result<()> {
    let test = CliTest::with_file("a.py", "x = 1 # [CB]: 1|0\r\ny = 2\r\n")?;

    test.toggle_command().args(["a.py", "1", "--apply"]).output()?;
    assert_eq!(test.read_file("a.py")?, "x = 0 # [CB]: 1|0\r\ny = 2\r\n");

    Ok(())
}

#[test]
fn test_toggle_line_without_annotation() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    assert_cmd_snapshot!(test.toggle_command().args(["settings.py", "3"]), @r"
success: false
exit_code: 1
----- stdout -----
✘ settings.py:3 has no checkbox annotation

----- stderr -----
");

    Ok(())
}

#[test]
fn test_toggle_annotation_without_assignment() -> Result<()> {
    let test = CliTest::with_file("a.py", "# [CB]: 1|0\n")?;

    let output = test.toggle_command().args(["a.py", "1"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\u{2718} a.py:1 has no assignment to rewrite\n"
    );

    Ok(())
}

#[test]
fn test_toggle_line_out_of_range() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test.toggle_command().args(["settings.py", "9"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Line 9 is out of range: settings.py has 3 line(s)"));

    let output = test.toggle_command().args(["settings.py", "0"]).output()?;
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_toggle_single_candidate_is_up_to_date() -> Result<()> {
    let test = CliTest::with_file("a.py", "mode = fast # [CB]: fast\n")?;

    let output = test.toggle_command().args(["a.py", "1", "--apply"]).output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} a.py:1 is already up to date\n");
    assert_eq!(test.read_file("a.py")?, "mode = fast # [CB]: fast\n");

    Ok(())
}

#[test]
fn test_set_apply() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .set_command()
        .args(["settings.py", "2", "2", "--apply"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("settings.py")?,
        SETTINGS.replace("LEVEL = 3", "LEVEL = 2")
    );

    Ok(())
}

#[test]
fn test_set_rejects_unknown_value() -> Result<()> {
    let test = CliTest::with_file("settings.py", SETTINGS)?;

    let output = test
        .set_command()
        .args(["settings.py", "2", "7", "--apply"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\u{2718} \"7\" is not a value of settings.py:2 (expected one of: 1, 2, 3)\n"
    );
    assert_eq!(test.read_file("settings.py")?, SETTINGS);

    Ok(())
}

#[test]
fn test_set_rust_statement() -> Result<()> {
    let test = CliTest::with_file("main.rs", "let retries = 3; // [CB]: 3;|5;\n")?;

    test.set_command()
        .args(["main.rs", "1", "5;", "--apply"])
        .output()?;
    assert_eq!(test.read_file("main.rs")?, "let retries = 5; // [CB]: 3;|5;\n");

    Ok(())
}
