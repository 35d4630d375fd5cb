use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

/// English file already in canonical, consolidated form.
const REFERENCE: &str = r#"{
    "concrete": {
        "byVolume": {
            "concreteByVolume": "Concrete by Volume",
            "unit": "Unit",
            "length_L": "Length - L"
        }
    }
}"#;

fn parsed(test: &CliTest, path: &str) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(path)?)?)
}

#[test]
fn test_consolidates_stray_group_and_injects_labels() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en/calculation.json", REFERENCE)?;
    test.write_file(
        "src/locales/hi/calculation.json",
        r#"{
    "byVolume": {
        "concreteByVolume": "आयतन से कंक्रीट"
    },
    "concrete": {
        "byVolume": {
            "wet": "गीला आयतन"
        }
    }
}"#,
    )?;

    let status = test.consolidate_command().status()?;
    assert_eq!(status.code(), Some(0));

    let hi = parsed(&test, "src/locales/hi/calculation.json")?;
    assert!(hi.get("byVolume").is_none(), "stray removed from root");

    let group = hi["concrete"]["byVolume"].as_object().unwrap();
    let keys: Vec<_> = group.keys().map(String::as_str).collect();
    assert_eq!(keys[0], "concreteByVolume");
    assert_eq!(keys[1], "unit");
    assert_eq!(keys[2], "length_L");
    assert_eq!(*keys.last().unwrap(), "wet", "existing keys keep position");
    assert_eq!(group["concreteByVolume"], "आयतन से कंक्रीट");
    Ok(())
}

#[test]
fn test_moves_root_level_group_under_concrete() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en/calculation.json", REFERENCE)?;
    test.write_file(
        "src/locales/ta/calculation.json",
        r#"{"byVolume": {"wet": "Wet", "dry": "Dry"}}"#,
    )?;

    let output = test.consolidate_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let ta = parsed(&test, "src/locales/ta/calculation.json")?;
    assert!(ta.get("byVolume").is_none());
    assert_eq!(ta["concrete"]["byVolume"]["dry"], "Dry");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("moved group"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_already_consolidated_file_is_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en/calculation.json", REFERENCE)?;
    // length_L present means a previous run already migrated this file
    let original = r#"{"concrete":{"byVolume":{"length_L":"लंबाई"}}}"#;
    test.write_file("src/locales/hi/calculation.json", original)?;

    let status = test.consolidate_command().status()?;
    assert_eq!(status.code(), Some(0));

    assert_eq!(test.read_file("src/locales/hi/calculation.json")?, original);
    Ok(())
}

#[test]
fn test_reference_locale_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    // Unconsolidated shape, but it is the reference locale
    let original = r#"{"byVolume": {"wet": "Wet", "dry": "Dry"}}"#;
    test.write_file("src/locales/en/calculation.json", original)?;

    let status = test.consolidate_command().status()?;
    assert_eq!(status.code(), Some(0));

    assert_eq!(test.read_file("src/locales/en/calculation.json")?, original);
    Ok(())
}

#[test]
fn test_file_without_group_is_reported_and_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en/calculation.json", REFERENCE)?;
    let original = r#"{"labour": {"mason": "Mason"}}"#;
    test.write_file("src/locales/kn/calculation.json", original)?;

    let output = test.consolidate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(test.read_file("src/locales/kn/calculation.json")?, original);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No 'byVolume' block"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_schema_mismatch_is_reported_and_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en/calculation.json", REFERENCE)?;
    let original = r#"{"byVolume": {"wet": "Wet", "dry": "Dry"}, "concrete": "oops"}"#;
    test.write_file("src/locales/mr/calculation.json", original)?;

    let output = test.consolidate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(test.read_file("src/locales/mr/calculation.json")?, original);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Schema mismatch"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_malformed_file_is_skipped_and_batch_continues() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en/calculation.json", REFERENCE)?;
    test.write_file("src/locales/as/calculation.json", "not json at all")?;
    test.write_file(
        "src/locales/bn/calculation.json",
        r#"{"concrete": {"byVolume": {"wet": "Wet"}}}"#,
    )?;

    let output = test.consolidate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    // Healthy file still consolidated
    let bn = parsed(&test, "src/locales/bn/calculation.json")?;
    assert_eq!(bn["concrete"]["byVolume"]["unit"], "Unit");
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en/calculation.json", REFERENCE)?;
    let original = r#"{"concrete": {"byVolume": {"wet": "Wet"}}}"#;
    test.write_file("src/locales/hi/calculation.json", original)?;

    let status = test.consolidate_command().arg("--dry-run").status()?;
    assert_eq!(status.code(), Some(0));

    assert_eq!(test.read_file("src/locales/hi/calculation.json")?, original);
    Ok(())
}

#[test]
fn test_discovers_files_in_deeper_layout() -> Result<()> {
    let test = CliTest::new()?;
    // Layout one directory deeper than the glob pattern expects, so
    // discovery has to fall back to the directory walk.
    test.write_file("src/locales/in/hi/calculation.json", r#"{"concrete": {"byVolume": {}}}"#)?;
    test.write_file("src/locales/in/en/calculation.json", REFERENCE)?;

    let status = test.consolidate_command().status()?;
    assert_eq!(status.code(), Some(0));

    let hi = parsed(&test, "src/locales/in/hi/calculation.json")?;
    assert_eq!(hi["concrete"]["byVolume"]["unit"], "Unit");
    Ok(())
}
