//! Integration tests for the sfdoc CLI
//!
//! Each test drives the built binary against files in a temp directory,
//! the way a user would run it from a project checkout.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sfdoc_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sfdoc").expect("sfdoc binary should build");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_stamp_inserts_header_into_new_class() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Example.cls");
    fs::write(&path, "public class Example {\n}\n").unwrap();

    sfdoc_cmd(&dir)
        .arg("stamp")
        .arg(&path)
        .args(["--caret", "1:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header inserted"))
        .stdout(predicate::str::contains("caret restored to 12:1"));

    let stamped = fs::read_to_string(&path).unwrap();
    assert!(stamped.starts_with("/**\n"));
    assert!(stamped.contains(" * @File Name          : Example.cls"));
    assert!(stamped.contains(" * @Last Modified By   : phUser@phDomain.com"));
    assert!(stamped.contains("public class Example {"));
}

#[test]
fn test_second_stamp_refreshes_only_last_modified_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Account.cls");
    fs::write(&path, "public class Account {\n}\n").unwrap();

    sfdoc_cmd(&dir).arg("stamp").arg(&path).assert().success();
    let first = fs::read_to_string(&path).unwrap();

    sfdoc_cmd(&dir)
        .arg("stamp")
        .arg(&path)
        .env("SFDOC_DOCUMENTER__USERNAME", "qa@example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("header refreshed"));

    let second = fs::read_to_string(&path).unwrap();
    assert!(second.contains(" * @Last Modified By   : qa@example.com"));
    assert_eq!(first.lines().count(), second.lines().count());
    for (before, after) in first.lines().zip(second.lines()) {
        if before != after {
            assert!(
                before.contains("Last Modified"),
                "unexpected change: {before:?} -> {after:?}"
            );
        }
    }
}

#[test]
fn test_stamp_skips_scripts_outside_component_bundles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("util.js");
    fs::write(&path, "console.log('x');\n").unwrap();

    sfdoc_cmd(&dir)
        .arg("stamp")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "console.log('x');\n");
}

#[test]
fn test_stamp_reaches_bundled_aura_markup() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("aura").join("panel");
    fs::create_dir_all(&folder).unwrap();
    let path = folder.join("panel.cmp");
    fs::write(&path, "<aura:component>\n</aura:component>\n").unwrap();

    sfdoc_cmd(&dir)
        .arg("stamp")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("header inserted"));

    let stamped = fs::read_to_string(&path).unwrap();
    assert!(stamped.starts_with("<!--\n"));
    assert!(stamped.contains("  @File Name          : panel.cmp"));
    assert!(stamped.contains("<aura:component>"));
}

#[test]
fn test_stamp_reads_config_file_from_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("sfdoc.toml"),
        "[documenter]\nusername = \"ops@example.com\"\n",
    )
    .unwrap();
    let path = dir.path().join("Job.cls");
    fs::write(&path, "public class Job {\n}\n").unwrap();

    sfdoc_cmd(&dir).arg("stamp").arg(&path).assert().success();

    let stamped = fs::read_to_string(&path).unwrap();
    assert!(stamped.contains(" * @Last Modified By   : ops@example.com"));
}

#[test]
fn test_stamp_errors_on_missing_file() {
    let dir = TempDir::new().unwrap();

    sfdoc_cmd(&dir)
        .arg("stamp")
        .arg(dir.path().join("Missing.cls"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_insert_header_uses_markup_comments_for_visualforce() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("detail.page");
    fs::write(&path, "<apex:page>\n</apex:page>\n").unwrap();

    sfdoc_cmd(&dir)
        .arg("insert-header")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("header inserted"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("<!--\n"));
    assert!(text.contains("  @File Name          : detail.page"));
}

#[test]
fn test_insert_header_rejects_documents_that_already_have_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Once.cls");
    fs::write(&path, "public class Once {\n}\n").unwrap();

    sfdoc_cmd(&dir).arg("insert-header").arg(&path).assert().success();
    sfdoc_cmd(&dir)
        .arg("insert-header")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Header already present"));
}

#[test]
fn test_insert_header_rejects_unsupported_languages() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("query.soql");
    fs::write(&path, "SELECT Id FROM Account\n").unwrap();

    sfdoc_cmd(&dir)
        .arg("insert-header")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot infer a language"));

    sfdoc_cmd(&dir)
        .arg("insert-header")
        .arg(&path)
        .args(["--language", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn test_method_header_documents_parameters_and_return() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Billing.cls");
    let source = concat!(
        "public class Billing {\n",
        "    public static Decimal total(List<Item> items, Boolean taxed) {\n",
        "        return 0;\n",
        "    }\n",
        "}\n",
    );
    fs::write(&path, source).unwrap();

    sfdoc_cmd(&dir)
        .arg("method-header")
        .arg(&path)
        .args(["--line", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("method header inserted"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains(" * @param List<Item> items"));
    assert!(text.contains(" * @param Boolean taxed"));
    assert!(text.contains(" * @return Decimal"));
    // The block sits above the declaration, indented like it.
    let header_line = text.lines().position(|l| l.ends_with("/**")).unwrap();
    let declaration_line = text.lines().position(|l| l.contains("total(")).unwrap();
    assert!(header_line < declaration_line);
}

#[test]
fn test_method_header_rejects_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Gap.cls");
    fs::write(&path, "public class Gap {\n\n}\n").unwrap();

    sfdoc_cmd(&dir)
        .arg("method-header")
        .arg(&path)
        .args(["--line", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty line"));
}

#[test]
fn test_show_config_prints_effective_settings() {
    let dir = TempDir::new().unwrap();

    sfdoc_cmd(&dir)
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[logging]"))
        .stdout(predicate::str::contains("[documenter]"))
        .stdout(predicate::str::contains("username = \"phUser@phDomain.com\""));
}
