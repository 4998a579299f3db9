//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const BOOK: &str = r#"# Persuasion: A Novel

<!-- {"author": "Jane Austen", "year": "1817"} -->

## Kellynch Hall:

<!-- {"description": "The Baronetage", "location": "Kellynch", "status": "Good"} -->

Sir Walter Elliot never took up any book but the Baronetage.

He found occupation for an idle hour in it.

<!-- {"description": "Debts"} -->

The house was let to an admiral.

## Bath:

<!-- {} -->

Anne went to Bath.
"#;

const MANUSCRIPT: &str = "# Emma: A Novel\n\n## Volume I\n\nEmma Woodhouse, handsome, clever, and rich.\n\nShe was the youngest.\n";

/// Write `content` to `name` inside a fresh temp dir.
fn book_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    (tmp, path)
}

fn json_stdout(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BOOKFRAME_FIRST_LINE"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_subcommand_fails() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_is_valid() {
    let json = json_stdout(&["info", "--json"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"].is_object());
}

// =============================================================================
// Outline
// =============================================================================

#[test]
fn outline_lists_chapters_and_scenes() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .args(["--color", "never", "outline"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Persuasion"))
        .stdout(predicate::str::contains("Jane Austen"))
        .stdout(predicate::str::contains("Kellynch Hall"))
        .stdout(predicate::str::contains("The Baronetage"))
        .stdout(predicate::str::contains("Bath"));
}

#[test]
fn outline_json_reports_lines() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    let json = json_stdout(&["outline", path.to_str().unwrap(), "--json"]);

    assert_eq!(json["title"], "Persuasion");
    assert_eq!(json["subtitle"], "A Novel");
    assert_eq!(json["chapters"].as_array().unwrap().len(), 2);
    assert_eq!(json["chapters"][0]["line"], 5);
    assert_eq!(json["chapters"][0]["scenes"][0]["line"], 7);
    assert_eq!(json["chapters"][0]["scenes"][0]["status"], "Good");
    assert_eq!(json["chapters"][0]["scenes"][1]["line"], 13);
    assert_eq!(json["chapters"][1]["line"], 17);
}

#[test]
fn outline_rejects_broken_header() {
    let (_tmp, path) = book_file("broken.md", "# Broken:\n\n<!-- {oops} -->\n");
    cmd()
        .arg("outline")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid book header"));
}

// =============================================================================
// Line
// =============================================================================

#[test]
fn line_finds_chapter() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .args(["line", "--chapter", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));
}

#[test]
fn line_finds_scene() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .args(["line", "--chapter", "1", "--scene", "2"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("13\n"));
}

#[test]
fn line_honors_configured_first_line() {
    let (tmp, path) = book_file("persuasion.md", BOOK);
    fs::write(tmp.path().join(".bookframe.toml"), "first_line = 0\n").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "line", "--chapter", "2"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("16\n"));
}

#[test]
fn line_rejects_missing_chapter() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .args(["line", "--chapter", "9"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no chapter 9"));
}

// =============================================================================
// Format
// =============================================================================

#[test]
fn format_write_is_idempotent() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd().args(["format", "--write"]).arg(&path).assert().success();
    let once = fs::read_to_string(&path).unwrap();

    let json = json_stdout(&["format", "--write", "--json", path.to_str().unwrap()]);
    assert_eq!(json["changed"], false);
    assert_eq!(fs::read_to_string(&path).unwrap(), once);
}

#[test]
fn format_write_keeps_escaped_paragraphs() {
    let escaped = BOOK.replace("Anne went to Bath.", "\\# Not a heading\n\n1986\\. A fine year.");
    let (_tmp, path) = book_file("persuasion.md", &escaped);
    cmd().args(["format", "--write"]).arg(&path).assert().success();

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\n\\# Not a heading\n"));
    assert!(saved.contains("\n1986\\. A fine year."));

    let json = json_stdout(&["outline", "--json", path.to_str().unwrap()]);
    assert_eq!(json["title"], "Persuasion");
    assert_eq!(json["chapters"][1]["scenes"][0]["paragraphs"], 2);
}

#[test]
fn format_prints_without_write() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .arg("format")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Persuasion: A Novel"));
    assert_eq!(fs::read_to_string(&path).unwrap(), BOOK);
}

// =============================================================================
// Import
// =============================================================================

#[test]
fn import_produces_a_book() {
    let (tmp, path) = book_file("emma.md", MANUSCRIPT);
    let out = tmp.path().join("emma.book.md");
    cmd()
        .args(["import", "--author", "Jane Austen", "-o"])
        .arg(&out)
        .arg(&path)
        .assert()
        .success();

    let saved = fs::read_to_string(&out).unwrap();
    assert!(saved.contains("<!--"));
    assert!(saved.contains("Jane Austen"));

    let json = json_stdout(&["outline", "--json", out.to_str().unwrap()]);
    assert_eq!(json["title"], "Emma");
    assert_eq!(json["chapters"][0]["title"], "Volume I");
    assert_eq!(json["chapters"][0]["scenes"][0]["paragraphs"], 2);
}

#[test]
fn import_uses_configured_author() {
    let (tmp, path) = book_file("emma.md", MANUSCRIPT);
    fs::write(tmp.path().join(".bookframe.toml"), "import_author = \"J. Austen\"\n").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "import"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("J. Austen"));
}

// =============================================================================
// Compile
// =============================================================================

#[test]
fn compile_strips_metadata() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .arg("compile")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("©1817, Jane Austen"))
        .stdout(predicate::str::contains("## Chapter 2: Bath"))
        .stdout(predicate::str::contains("***"))
        .stdout(predicate::str::contains("<!--").not());
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_reports_readability() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .args(["--color", "never", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading ease:"))
        .stdout(predicate::str::contains("Passive clauses: 1"))
        .stdout(predicate::str::contains("was let"));
}

#[test]
fn analyze_json_for_one_scene() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    let json = json_stdout(&[
        "analyze",
        "--json",
        "--chapter",
        "2",
        "--scene",
        "1",
        path.to_str().unwrap(),
    ]);
    assert_eq!(json["text"], "Anne went to Bath.");
    assert_eq!(json["readability"]["sentences"], 1);
    assert_eq!(json["pass"], true);
}

#[test]
fn analyze_fails_below_min_ease() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .args(["analyze", "--min-ease", "150"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("min: 150.0"));
}

#[test]
fn analyze_scene_requires_chapter() {
    let (_tmp, path) = book_file("persuasion.md", BOOK);
    cmd()
        .args(["analyze", "--scene", "1"])
        .arg(&path)
        .assert()
        .failure();
}

// =============================================================================
// Input Errors
// =============================================================================

#[test]
fn missing_file_fails() {
    cmd()
        .args(["outline", "/nonexistent/book.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn oversized_input_is_rejected() {
    let (tmp, path) = book_file("persuasion.md", BOOK);
    fs::write(tmp.path().join(".bookframe.toml"), "max_input_bytes = 16\n").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "outline"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_allows_large_files() {
    let (tmp, path) = book_file("persuasion.md", BOOK);
    fs::write(
        tmp.path().join(".bookframe.toml"),
        "max_input_bytes = 16\ndisable_input_limit = true\n",
    )
    .unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "outline"])
        .arg(&path)
        .assert()
        .success();
}
