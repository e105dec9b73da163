use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_check_no_issues() -> Result<()> {
    let test = CliTest::with_file(
        "settings.py",
        "DEBUG = True # [CB]: True|False\nMODE = # [CB]: a|b\n",
    )?;

    assert_cmd_snapshot!(test.check_command().arg("settings.py"), @r"
success: true
exit_code: 0
----- stdout -----
✓ Checked 1 file, 2 annotations - no issues found

----- stderr -----
");

    Ok(())
}

#[test]
fn test_check_invalid_value() -> Result<()> {
    let test = CliTest::with_file(
        "settings.py",
        "DEBUG = True # [CB]: True|False\nLEVEL = 42 # [CB]: 1|2\n",
    )?;

    assert_cmd_snapshot!(test.check_command().arg("settings.py"), @r#"
success: false
exit_code: 1
----- stdout -----
warning: Variable value "42" does not match any carousel value (1, 2)  invalid-value
  --> settings.py:2:9
  |
2 | LEVEL = 42 # [CB]: 1|2
  |         ^^

✘ 1 problem (0 errors, 1 warning)

----- stderr -----
"#);

    Ok(())
}

#[test]
fn test_check_multiple_files_sorted() -> Result<()> {
    let test = CliTest::with_file("b.py", "x = 9 # [CB]: 1|0\n")?;
    test.write_file("a.py", "y = 9 # [CB]: 1|0\n")?;

    let output = test.check_command().args(["b.py", "a.py"]).output()?;
    let out = stdout(&output);
    let a = out.find("--> a.py:1:5").expect("issue for a.py");
    let b = out.find("--> b.py:1:5").expect("issue for b.py");
    assert!(a < b);
    assert!(out.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_check_missing_file() -> Result<()> {
    let test = CliTest::with_file("a.py", "x = 1 # [CB]: 1|0\n")?;

    let output = test.check_command().args(["a.py", "missing.py"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("error: Failed to read file: missing.py"));
    assert!(out.contains("  --> missing.py\n"));
    assert!(out.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}
