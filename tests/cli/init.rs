use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.init_command(), [] as [&str; 0])?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .polycatrc.json\n");
    assert!(test.root().join(".polycatrc.json").exists());

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".polycatrc.json")?)?;
    assert_eq!(
        config,
        serde_json::json!({
            "catalog": "./catalog.json",
            "excludeDefault": false,
            "format": "text"
        })
    );

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".polycatrc.json", r#"{ "catalog": "shop.json" }"#)?;

    let (code, _, stderr) = run(test.init_command(), [] as [&str; 0])?;

    assert_eq!(code, 2);
    assert!(stderr.contains(".polycatrc.json already exists"));
    assert_eq!(
        test.read_file(".polycatrc.json")?,
        r#"{ "catalog": "shop.json" }"#
    );

    Ok(())
}
