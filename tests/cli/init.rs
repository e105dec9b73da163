use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
success: true
exit_code: 0
----- stdout -----
✓ Created .cbtogglerc.json

----- stderr -----
");

    let content = test.read_file(".cbtogglerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["commentTokens"]["lua"], "--");
    assert_eq!(parsed["languages"]["lua"], "lua");
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cbtogglerc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
success: false
exit_code: 1
----- stdout -----

----- stderr -----
Error: .cbtogglerc.json already exists
");
    assert_eq!(test.read_file(".cbtogglerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("init.lua", "local debug = true -- [CB]: true|false\n")?;

    let output = test.list_command().arg("init.lua").output()?;
    assert!(
        output.status.success(),
        "List should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("local debug = true"));

    Ok(())
}
