use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_config_file_layout_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locale-extract.json",
        r#"{
            "sourceRoot": "crates",
            "output": "i18n/base.json",
            "ignores": ["crates/generated/**"]
        }"#,
    )?;
    test.write_file("crates/app/lib.rs", " t!(\"Kept\")\n")?;
    test.write_file("crates/generated/strings.rs", " t!(\"Skipped\")\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @r#"crates/app/lib.rs:1: "Kept""#);
    assert_eq!(
        test.read_file("i18n/base.json")?,
        "{\n  \"Kept\": \"Kept\"\n}"
    );

    Ok(())
}

#[test]
fn test_flags_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locale-extract.json", r#"{ "output": "i18n/base.json" }"#)?;
    test.write_file("src/app.rs", " t!(\"Flag\")\n")?;

    let output = run({
        let mut cmd = test.command();
        cmd.args(["--output", "locale/fr.json"]);
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(test.root().join("locale/fr.json").exists());
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_verbose_notes() -> Result<()> {
    let test = CliTest::with_file("src/app.rs", " t!(\"A\"); t!(\"A\")\n")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("-v");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stderr.trim_end(), @r"
    note: no config file, using defaults
    note: scanning ./src for *.rs files
    ✓ Extracted 1 string from 1 file into locale/en.json
    note: 2 matches, 1 duplicate(s) collapsed, 0 files ignored
    ");

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locale-extract.json", r#"{ "ignores": ["src/["] }"#)?;
    test.write_file("src/app.rs", " t!(\"x\")\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .starts_with("Error: Invalid glob pattern in 'ignores': \"src/[\""),
        "unexpected stderr: {}",
        output.stderr
    );
    assert!(!test.root().join("locale").exists());

    Ok(())
}
