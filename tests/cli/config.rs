use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, HEADER};

#[test]
fn test_default_catalog_path() -> Result<()> {
    let test = CliTest::with_file(
        "src/locales/zh-CN/messages.po",
        &format!("{HEADER}\nmsgid \"Settings\"\nmsgstr \"\"\n"),
    )?;

    let output = test.run(&[])?;

    assert_snapshot!(output.stdout, @r#"
Line 9: msgstr ""
  Context: msgid "Settings"
"#);

    Ok(())
}

#[test]
fn test_default_catalog_missing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert!(
        output
            .stdout
            .starts_with("Failed to read catalog file: src/locales/zh-CN/messages.po: ")
    );
    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_config_catalogs_and_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".pocheckrc.json",
        r#"{
         "catalogs": ["locales/*/messages.po"],
         "ignores": ["locales/en/**"]
     }"#,
    )?;
    test.write_file(
        "locales/en/messages.po",
        "msgid \"Hello\"\nmsgstr \"\"\n",
    )?;
    test.write_file(
        "locales/fr/messages.po",
        "msgid \"Hello\"\nmsgstr \"\"\n",
    )?;
    test.write_file(
        "locales/ko/messages.po",
        "msgid \"Hello\"\nmsgstr \"\"\n",
    )?;

    let output = test.run(&[])?;

    assert_snapshot!(output.stdout, @r#"
--> locales/fr/messages.po
Line 2: msgstr ""
  Context: msgid "Hello"
--> locales/ko/messages.po
Line 2: msgstr ""
  Context: msgid "Hello"
"#);

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(".pocheckrc.json", r#"{ "catalogs": ["messages.po"] }"#)?;
    test.write_file("messages.po", "msgid \"Hello\"\nmsgstr \"\"\n")?;
    test.write_file("frontend/src/.keep", "")?;

    let output = test
        .command()
        .current_dir(test.root().join("frontend/src"))
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Line 2: msgstr \"\"\n"));
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_explicit_config_flag() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file("conf/pocheck.json", r#"{ "catalogs": ["../po"] }"#)?;
    test.write_file("po/ja.po", "msgid \"Open\"\nmsgstr \"\"\n")?;

    let output = test.run(&["--config", "conf/pocheck.json"])?;

    assert_snapshot!(output.stdout, @r#"
Line 2: msgstr ""
  Context: msgid "Open"
"#);

    Ok(())
}

#[test]
fn test_paths_override_config() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(".pocheckrc.json", r#"{ "catalogs": ["other.po"] }"#)?;
    test.write_file("messages.po", "msgid \"Hello\"\nmsgstr \"\"\n")?;

    let output = test.run(&["messages.po"])?;

    assert_snapshot!(output.stdout, @r#"
Line 2: msgstr ""
  Context: msgid "Hello"
"#);

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(".pocheckrc.json", "{ not json")?;

    let output = test.run(&[])?;

    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("Error: Failed to parse config file"));
    assert_eq!(output.code, Some(2));

    Ok(())
}

#[test]
fn test_invalid_ignore_pattern_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(".pocheckrc.json", r#"{ "ignores": ["["] }"#)?;

    let output = test.run(&[])?;

    assert!(
        output
            .stderr
            .contains("Invalid glob pattern in 'ignores': \"[\"")
    );
    assert_eq!(output.code, Some(2));

    Ok(())
}
