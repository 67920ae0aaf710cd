use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .siftrc.json\n");

    let content = test.read_file(".siftrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceExtension"], ".go");
    assert_eq!(parsed["templateExtension"], ".html");
    assert_eq!(parsed["factoryModule"], "i18n");
    assert_eq!(parsed["factoryNames"], serde_json::json!(["MustTfunc", "Tfunc"]));
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".siftrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(2));
    assert_eq!(output.stderr, "Error: .siftrc.json already exists\n");
    assert_eq!(test.read_file(".siftrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_picked_up() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;
    assert!(test.root().join(".siftrc.json").exists());

    test.write_file("src/main.go", "package main\n")?;
    test.write_file("strings.json", "[]")?;
    test.write_file("templates/.keep", "")?;

    let output = run(test.sift_command().arg("-v"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("Note: Using config"), "{}", output.stderr);

    Ok(())
}
