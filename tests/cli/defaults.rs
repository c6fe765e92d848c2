use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CATALOG, CliTest, run};

#[test]
fn test_defaults_all_languages() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(test.defaults_command(), ["10"])?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        concat!(
            "Default attributes of product 10:\n",
            "  en: {pa_color=red, custom=Blue}\n",
            "  fr: {pa_color=rouge, custom=Blue}\n",
            "  de: {custom=Blue}\n",
        )
    );

    Ok(())
}

#[test]
fn test_defaults_single_language_json() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(
        test.defaults_command(),
        ["10", "--lang", "fr", "--format", "json"],
    )?;

    assert_eq!(code, 0);
    assert_snapshot!(stdout, @r#"
    {
      "fr": {
        "pa_color": "rouge",
        "custom": "Blue"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_defaults_empty_lang_means_all_languages() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(
        test.defaults_command(),
        ["10", "--lang", "", "--format", "json"],
    )?;

    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        parsed,
        json!({
            "en": {"pa_color": "red", "custom": "Blue"},
            "fr": {"pa_color": "rouge", "custom": "Blue"},
            "de": {"custom": "Blue"}
        })
    );

    Ok(())
}

#[test]
fn test_defaults_exclude_default_language() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(
        test.defaults_command(),
        ["10", "--exclude-default", "--format", "json"],
    )?;

    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        parsed,
        json!({
            "fr": {"pa_color": "rouge", "custom": "Blue"},
            "de": {"custom": "Blue"}
        })
    );

    Ok(())
}

#[test]
fn test_defaults_simple_product_is_empty() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(test.defaults_command(), ["30", "--format", "json"])?;
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "{}");

    let (code, stdout, _) = run(test.defaults_command(), ["30"])?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Product 30 has no default attributes to translate\n");

    Ok(())
}

#[test]
fn test_defaults_unknown_product_is_not_an_error() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(test.defaults_command(), ["999"])?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "note: product 999 not found\n");

    Ok(())
}

#[test]
fn test_defaults_config_file() -> Result<()> {
    let test = CliTest::with_file("exports/shop.json", CATALOG)?;
    test.write_file(
        ".polycatrc.json",
        r#"{
         "catalog": "exports/shop.json",
         "excludeDefault": true,
         "format": "json"
     }"#,
    )?;

    let (code, stdout, _) = run(test.defaults_command(), ["10"])?;

    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        parsed,
        json!({
            "fr": {"pa_color": "rouge", "custom": "Blue"},
            "de": {"custom": "Blue"}
        })
    );

    Ok(())
}

#[test]
fn test_defaults_flags_override_config() -> Result<()> {
    let test = CliTest::with_file("other.json", CATALOG)?;
    test.write_file(
        ".polycatrc.json",
        r#"{ "catalog": "missing.json", "format": "json" }"#,
    )?;

    let (code, stdout, _) = run(
        test.defaults_command(),
        ["10", "--lang", "de", "--catalog", "other.json", "--format", "text"],
    )?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "Default attributes of product 10:\n  de: {custom=Blue}\n");

    Ok(())
}

#[test]
fn test_defaults_missing_catalog_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, stderr) = run(test.defaults_command(), ["10"])?;

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to read catalog file"));

    Ok(())
}

#[test]
fn test_defaults_malformed_catalog_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"{"products": [{"id": 1, "type": "variable", "defaultAttributes": {"size": 3}}]}"#,
    )?;

    let (code, _, stderr) = run(test.defaults_command(), ["1"])?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to parse catalog file"));
    assert!(stderr.contains("\"size\" must have a string value"));

    Ok(())
}

#[test]
fn test_defaults_verbose_logs_skipped_attributes() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, stderr) = run(test.defaults_command(), ["10", "--lang", "de", "-v"])?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "Default attributes of product 10:\n  de: {custom=Blue}\n");
    assert!(stderr.contains("skipping default attribute"));
    assert!(stderr.contains("term not translated"));

    Ok(())
}

#[test]
fn test_defaults_verbose_notes_missing_config() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, _, stderr) = run(test.defaults_command(), ["10", "-v"])?;
    assert_eq!(code, 0);
    assert!(stderr.contains("Note: No .polycatrc.json found, using default configuration"));

    let (_, _, stderr) = run(test.defaults_command(), ["10"])?;
    assert!(!stderr.contains("Note:"));

    Ok(())
}
