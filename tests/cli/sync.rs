use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_in_sync_exits_zero_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    let reference = r#"{"Save":"Save","Cancel":"Cancel"}"#;
    test.write_file("en_EN.json", reference)?;
    test.write_file("src/app.js", "_t('Save');\n_td(\"Cancel\");\n")?;

    let mut cmd = test.sync_command("en_EN.json", &["src/app.js"]);
    cmd.args(["--auto-add", "--auto-remove"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "\u{2713} Checked 1 source file against 2 reference entries - no changes needed\n"
    );
    assert_eq!(test.read_file("en_EN.json")?, reference);
    Ok(())
}

#[test]
fn test_added_key_without_flag_exits_one() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"Save": "Save"}"#)?;
    test.write_file("src/app.js", "_t('Save');\n_t('Cancel');\n")?;

    let (code, stdout, _) = run(test.sync_command("en_EN.json", &["src/app.js"]))?;

    assert_eq!(code, 1);
    assert_eq!(
        stdout,
        "\
Added keys (1)
==============
  Cancel

hint: run with --auto-add to add them to en_EN.json

\u{2718} en_EN.json is out of sync with source
"
    );
    assert_eq!(test.read_file("en_EN.json")?, r#"{"Save": "Save"}"#);
    Ok(())
}

#[test]
fn test_auto_add_writes_placeholder() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"Save": "Save"}"#)?;
    test.write_file("src/app.js", "_t('Save');\n_t('Cancel');\n")?;

    let mut cmd = test.sync_command("en_EN.json", &["src/app.js"]);
    cmd.arg("--auto-add");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Added 1 key to en_EN.json"));
    assert_snapshot!(test.read_file("en_EN.json")?, @r#"
    {
        "Save": "Save",
        "Cancel": "Cancel"
    }
    "#);
    Ok(())
}

#[test]
fn test_removed_key_without_flag_exits_one() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"Old": "Old"}"#)?;
    test.write_file("src/app.js", "console.log('no translations here');\n")?;

    let (code, stdout, _) = run(test.sync_command("en_EN.json", &["src/app.js"]))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Removed keys (1)\n================\n  Old\n"));
    assert!(stdout.contains("--auto-remove"));
    assert_eq!(test.read_file("en_EN.json")?, r#"{"Old": "Old"}"#);
    Ok(())
}

#[test]
fn test_auto_remove_empties_object() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"Old": "Old"}"#)?;
    test.write_file("src/app.js", "console.log('no translations here');\n")?;

    let mut cmd = test.sync_command("en_EN.json", &["src/app.js"]);
    cmd.arg("--auto-remove");
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("en_EN.json")?, "{}\n");
    Ok(())
}

#[test]
fn test_partial_apply_exits_one() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"Old": "Old"}"#)?;
    test.write_file("src/app.js", "_t('New');\n")?;

    let mut cmd = test.sync_command("en_EN.json", &["src/app.js"]);
    cmd.arg("--auto-add");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Added 1 key to en_EN.json"));
    assert!(stdout.contains("run with --auto-remove"));
    assert_snapshot!(test.read_file("en_EN.json")?, @r#"
    {
        "Old": "Old",
        "New": "New"
    }
    "#);
    Ok(())
}

#[test]
fn test_second_run_is_clean() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "en_EN.json",
        r#"{"Old": "Old", "greeting|one": "Hi", "greeting|other": "Hi all"}"#,
    )?;
    test.write_file(
        "src/app.js",
        "_t('greeting', { count });\n_tJsx(\"Click <a>here</a>\", {}, { a: sub });\n",
    )?;

    let mut first = test.sync_command("en_EN.json", &["src/app.js"]);
    first.args(["--auto-add", "--auto-remove"]);
    assert_eq!(run(first)?.0, 0);
    let after_first = test.read_file("en_EN.json")?;

    let mut second = test.sync_command("en_EN.json", &["src/app.js"]);
    second.args(["--auto-add", "--auto-remove"]);
    let (code, stdout, _) = run(second)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no changes needed"));
    assert_eq!(test.read_file("en_EN.json")?, after_first);
    assert_snapshot!(after_first, @r#"
    {
        "greeting|one": "Hi",
        "greeting|other": "Hi all",
        "Click <a>here</a>": "Click <a>here</a>"
    }
    "#);
    Ok(())
}

#[test]
fn test_concatenated_literal_is_one_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"Hello, World": "Hello, World"}"#)?;
    test.write_file(
        "src/app.js",
        "const a = _t(\"Hello, \"+\"World\");\nconst b = _t('Hello, ' +\n    'World');\n",
    )?;

    let (code, _, _) = run(test.sync_command("en_EN.json", &["src/app.js"]))?;

    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn test_directory_source_is_walked() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"A": "A", "B": "B"}"#)?;
    test.write_file("src/a.js", "_t('A');\n")?;
    test.write_file("src/components/B.tsx", "<p>{_t('B')}</p>\n")?;
    test.write_file("src/node_modules/dep/index.js", "_t('Vendored');\n")?;
    test.write_file("src/readme.md", "_t('Docs');\n")?;

    let (code, stdout, _) = run(test.sync_command("en_EN.json", &["src"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 2 source files"));
    Ok(())
}

#[test]
fn test_missing_reference_exits_one_on_stdout() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "_t('A');\n")?;

    let (code, stdout, _) = run(test.sync_command("missing.json", &["src/app.js"]))?;

    assert_eq!(code, 1);
    assert!(stdout.starts_with("error: Failed to read reference file missing.json"));
    Ok(())
}

#[test]
fn test_invalid_reference_exits_one_on_stdout() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", "{ \"Save\": ")?;
    test.write_file("src/app.js", "_t('Save');\n")?;

    let (code, stdout, _) = run(test.sync_command("en_EN.json", &["src/app.js"]))?;

    assert_eq!(code, 1);
    assert!(stdout.starts_with("error: Failed to parse reference file en_EN.json"));
    Ok(())
}

#[test]
fn test_missing_source_aborts_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en_EN.json", r#"{"Save": "Save"}"#)?;

    let mut cmd = test.sync_command("en_EN.json", &["src/missing.js"]);
    cmd.args(["--auto-add", "--auto-remove"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Failed to read source file src/missing.js"));
    assert_eq!(test.read_file("en_EN.json")?, r#"{"Save": "Save"}"#);
    Ok(())
}

#[test]
fn test_missing_arguments_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.sync_command("en_EN.json", &[]))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Usage"));
    Ok(())
}
