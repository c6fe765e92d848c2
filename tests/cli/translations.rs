use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

#[test]
fn test_translations_keep_catalog_order() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"{
          "languages": [
            {"slug": "en", "default": true},
            {"slug": "fr"},
            {"slug": "de"}
          ],
          "products": [
            {"id": 10, "type": "variable",
             "translations": {"en": 10, "fr": 20, "de": 30}}
          ]
        }"#,
    )?;

    let (code, stdout, _) = run(test.translations_command(), ["product", "10"])?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Translations of product 10:\n  en: 10\n  fr: 20\n  de: 30\n"
    );

    Ok(())
}

#[test]
fn test_product_translations() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(test.translations_command(), ["product", "10"])?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "Translations of product 10:\n  en: 10\n  fr: 20\n");

    Ok(())
}

#[test]
fn test_term_translations_exclude_default() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(
        test.translations_command(),
        ["term", "1", "--exclude-default", "--format", "json"],
    )?;

    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed, json!({"fr": 2}));

    Ok(())
}

#[test]
fn test_untranslated_product() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let (code, stdout, _) = run(test.translations_command(), ["product", "30"])?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "note: product 30 has no translations\n");

    Ok(())
}
