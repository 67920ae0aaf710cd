use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const MAIN_GO: &str = r#"package main

import (
	"fmt"

	"github.com/nicksnyder/go-i18n/i18n"
)

func main() {
	T := i18n.MustTfunc("es")
	fmt.Println(T("Save"))
}
"#;

const FORM_HTML: &str = r#"<form>
  <button>{{L10n "Save"}}</button>
  <button>{{L10n "Cancel"}}</button>
</form>
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("src/main.go", MAIN_GO)?;
    test.write_file("templates/form.html", FORM_HTML)?;
    test.write_file("strings.json", r#"[{"id":"Save","translation":"Guardar"}]"#)?;
    Ok(test)
}

#[test]
fn test_writes_untranslated_catalog() -> Result<()> {
    let test = project()?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2718} 1 untranslated string in 1 source file, 1 template file against 1 catalog entry\n  --> strings.untranslated.json\n"
    );

    assert_snapshot!(test.read_file("strings.untranslated.json")?, @r#"
    [
      {
        "id": "Cancel",
        "translation": ""
      }
    ]
    "#);

    Ok(())
}

#[test]
fn test_all_translated() -> Result<()> {
    let test = project()?;
    test.write_file(
        "strings.json",
        r#"[
  {"id": "Save", "translation": "Guardar"},
  {"id": "Cancel", "translation": "Cancelar"}
]"#,
    )?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no untranslated strings"), "{}", output.stdout);
    assert_eq!(test.read_file("strings.untranslated.json")?, "[]\n");

    Ok(())
}

#[test]
fn test_empty_catalog_file() -> Result<()> {
    let test = project()?;
    test.write_file("strings.json", "")?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(0));

    let written: serde_json::Value =
        serde_json::from_str(&test.read_file("strings.untranslated.json")?)?;
    assert_eq!(
        written,
        serde_json::json!([
            {"id": "Save", "translation": ""},
            {"id": "Cancel", "translation": ""}
        ])
    );

    Ok(())
}

#[test]
fn test_plural_entries_count_as_translated() -> Result<()> {
    let test = CliTest::with_file(
        "src/main.go",
        "package main\n\nfunc main() {\n\tT, _ := i18n.Tfunc(\"es\")\n\tT(\"items\", 2)\n}\n",
    )?;
    test.write_file("templates/empty.html", "<p></p>")?;
    test.write_file(
        "strings.json",
        r#"[{"id": "items", "translation": {"one": "1 elemento", "other": "{{.Count}} elementos"}}]"#,
    )?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file("strings.untranslated.json")?, "[]\n");

    Ok(())
}

#[test]
fn test_fail_on_untranslated() -> Result<()> {
    let test = project()?;

    let output = run(test.sift_command().arg("--fail-on-untranslated"))?;
    assert_eq!(output.code, Some(1));
    assert!(test.root().join("strings.untranslated.json").exists());

    Ok(())
}

#[test]
fn test_output_override() -> Result<()> {
    let test = project()?;

    let output = run(test.sift_command().args(["--output", "out/missing.json"]))?;
    assert_eq!(output.code, Some(0), "{}", output.stderr);
    assert!(test.read_file("out/missing.json")?.contains("\"Cancel\""));
    assert!(!test.root().join("strings.untranslated.json").exists());

    Ok(())
}

#[test]
fn test_alias_not_found_is_a_warning() -> Result<()> {
    let test = CliTest::with_file(
        "src/main.go",
        "package main\n\nfunc main() {\n\tT(\"Save\")\n}\n",
    )?;
    test.write_file("templates/form.html", FORM_HTML)?;
    test.write_file("strings.json", "[]")?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stderr,
        "warning: no translation function found in 1 source file\n"
    );
    assert_eq!(test.read_file("strings.untranslated.json")?, "[]\n");

    Ok(())
}

#[test]
fn test_verbose_lists_discoveries() -> Result<()> {
    let test = project()?;

    let output = run(test.sift_command().arg("--verbose"))?;
    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stderr
            .contains("Note: translation function T bound at src/main.go:10"),
        "{}",
        output.stderr
    );
    assert!(output.stderr.contains("  src/main.go (11): \"Save\"\n"));
    assert!(
        output
            .stderr
            .contains("  templates/form.html (0): \"Cancel\"\n")
    );
    assert!(
        output.stdout.starts_with("  \"Cancel\"\n\u{2718} 1 untranslated string"),
        "{}",
        output.stdout
    );

    Ok(())
}

#[test]
fn test_custom_factory_from_config() -> Result<()> {
    let test = CliTest::with_file(
        "src/main.go",
        "package main\n\nfunc main() {\n\ttr := loc.New(\"es\")\n\ttr(\"Hello\")\n}\n",
    )?;
    test.write_file("templates/form.html", "")?;
    test.write_file("strings.json", "[]")?;
    test.write_file(
        ".siftrc.json",
        r#"{ "factoryModule": "loc", "factoryNames": ["New"] }"#,
    )?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(0), "{}", output.stderr);
    assert!(test.read_file("strings.untranslated.json")?.contains("\"Hello\""));

    Ok(())
}

#[test]
fn test_config_path_from_environment() -> Result<()> {
    let test = CliTest::with_file(
        "src/main.go",
        "package main\n\nfunc main() {\n\ttr := loc.New(\"es\")\n\ttr(\"Hello\")\n}\n",
    )?;
    test.write_file("templates/form.html", "")?;
    test.write_file("strings.json", "[]")?;
    test.write_file(
        "config/sift.json",
        r#"{ "factoryModule": "loc", "factoryNames": ["New"] }"#,
    )?;

    let output = run(test.sift_command().env("SIFT_CONFIG", "config/sift.json"))?;
    assert_eq!(output.code, Some(0), "{}", output.stderr);
    assert!(test.read_file("strings.untranslated.json")?.contains("\"Hello\""));

    Ok(())
}

#[test]
fn test_deeply_nested_source() -> Result<()> {
    let expr = vec!["\"a\""; 50_000].join(" + ");
    let test = CliTest::with_file(
        "src/main.go",
        &format!(
            "package main\n\nfunc main() {{\n\tT := i18n.MustTfunc(\"es\")\n\tx := {}\n\tT(\"Save\", x)\n}}\n",
            expr
        ),
    )?;
    test.write_file("templates/form.html", "")?;
    test.write_file("strings.json", "[]")?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(0), "{}", output.stderr);
    assert!(test.read_file("strings.untranslated.json")?.contains("\"Save\""));

    Ok(())
}

#[test]
fn test_syntax_error_is_fatal() -> Result<()> {
    let test = project()?;
    test.write_file("src/broken.go", "package main\n\nfunc (\n")?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Failed to parse src/broken.go"), "{}", output.stderr);
    assert!(!test.root().join("strings.untranslated.json").exists());

    Ok(())
}

#[test]
fn test_malformed_template_is_fatal() -> Result<()> {
    let test = project()?;
    test.write_file("templates/bad.html", r#"{{L10n "oops}}"#)?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("templates/bad.html"), "{}", output.stderr);

    Ok(())
}

#[test]
fn test_malformed_catalog_is_fatal() -> Result<()> {
    let test = project()?;
    test.write_file("strings.json", r#"[{"id": "Save"}, {"translation": "x"}]"#)?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .contains("unable to parse translation #1 in strings.json"),
        "{}",
        output.stderr
    );

    Ok(())
}

#[test]
fn test_missing_catalog_is_fatal() -> Result<()> {
    let test = project()?;
    std::fs::remove_file(test.root().join("strings.json"))?;

    let output = run(&mut test.sift_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to read catalog file: strings.json"));

    Ok(())
}

#[test]
fn test_missing_arguments_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("src"))?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("<TEMPLATES>"), "{}", output.stderr);

    Ok(())
}
