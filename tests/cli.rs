//! End-to-end runs of the sagenote binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const NOTEBOOK: &str = r###"{
  "cells": [
    {"cell_type": "markdown", "metadata": {}, "source": ["# Group Theory\n", "\n", "A *group* is a set with $x \\cdot y_i$."]},
    {"cell_type": "code", "execution_count": null, "metadata": {}, "outputs": [], "source": ["G = SymmetricGroup(3)\n", "G.order()"]},
    {"cell_type": "markdown", "metadata": {}, "source": "## Subgroups"},
    {"cell_type": "code", "execution_count": null, "metadata": {}, "outputs": [], "source": "H = G.subgroups()"}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"###;

fn sagenote_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sagenote"))
}

/// Run in `dir` so that no stray sagenote.toml is picked up.
fn run(dir: &Path, args: &[&Path]) -> Output {
    Command::new(sagenote_bin())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run sagenote")
}

fn notebook_in(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, NOTEBOOK).unwrap();
    path
}

#[test]
fn test_missing_argument_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.ipynb");
    let output = run(dir.path(), &[&input]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
    assert!(!dir.path().join("absent.html").exists());
}

#[test]
fn test_default_output_path_swaps_extension() {
    let dir = TempDir::new().unwrap();
    let input = notebook_in(&dir, "groups.ipynb");
    let output = run(dir.path(), &[&input]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully converted"));
    assert!(stdout.contains("groups.html"));

    let html = fs::read_to_string(dir.path().join("groups.html")).unwrap();
    assert!(html.contains("<title>Group Theory</title>"));
    assert_eq!(html.matches("sagecell.makeSagecell(").count(), 2);
    assert!(html.contains("<p>A <em>group</em> is a set with $x \\cdot y_i$.</p>"));
    assert!(html.contains(
        "<div class=\"sage-cell sage-section-0\">\n<script type=\"text/x-sage\">\nG = SymmetricGroup(3)\nG.order()\n</script>"
    ));
    assert!(html.contains("<div class=\"sage-cell sage-section-1\">"));
}

#[test]
fn test_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let input = notebook_in(&dir, "groups.ipynb");
    let target = dir.path().join("page.html");
    let output = run(dir.path(), &[&input, &target]);

    assert!(output.status.success(), "{output:?}");
    assert!(target.exists());
    assert!(!dir.path().join("groups.html").exists());
}

#[test]
fn test_refuses_to_overwrite_input() {
    let dir = TempDir::new().unwrap();
    let input = notebook_in(&dir, "notes.html");
    let output = run(dir.path(), &[&input]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&input).unwrap(), NOTEBOOK);
}

#[test]
fn test_malformed_notebook_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.ipynb");
    fs::write(&input, "{ not json").unwrap();
    let output = run(dir.path(), &[&input]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("broken.html").exists());
}

#[test]
fn test_config_file_sets_page_furniture() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("sagenote.toml"),
        "back_link_href = \"index.html\"\neval_button_text = \"Evaluate\"\n",
    )
    .unwrap();
    let input = notebook_in(&dir, "groups.ipynb");
    let output = run(dir.path(), &[&input]);

    assert!(output.status.success(), "{output:?}");
    let html = fs::read_to_string(dir.path().join("groups.html")).unwrap();
    assert!(html.contains("href=\"index.html\""));
    assert!(html.contains("evalButtonText: 'Evaluate'"));
}
