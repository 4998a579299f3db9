//! Command implementations.

use anyhow::{Context, bail};
use bookframe_core::codec::escape_paragraph;
use bookframe_core::{Book, Selection};
use camino::Utf8Path;

pub mod analyze;
pub mod compile;
pub mod format;
pub mod import;
pub mod info;
pub mod line;
pub mod outline;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read and parse a book, remembering where it came from.
pub fn load_book(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Book> {
    let content = read_input_file(path, max_bytes)?;
    let mut book = Book::from_markdown(&content).with_context(|| format!("failed to parse {path}"))?;
    book.set_source_location(path);
    Ok(book)
}

/// Resolve 1-based chapter and scene numbers to a selection.
///
/// No chapter selects the whole book. A scene without a chapter is an error.
pub fn select(book: &Book, chapter: Option<usize>, scene: Option<usize>) -> anyhow::Result<Selection> {
    let Some(number) = chapter else {
        if scene.is_some() {
            bail!("--scene needs --chapter");
        }
        return Ok(Selection::Book);
    };
    let Some(found) = number.checked_sub(1).and_then(|i| book.chapters().get(i)) else {
        bail!("no chapter {number}: the book has {} chapters", book.chapters().len());
    };
    let Some(scene_number) = scene else {
        return Ok(Selection::Chapter(found.id()));
    };
    let Some(sub) = scene_number
        .checked_sub(1)
        .and_then(|i| found.subchapters.get(i))
    else {
        bail!(
            "no scene {scene_number} in chapter {number}: it has {} scenes",
            found.subchapters.len()
        );
    };
    Ok(Selection::SubChapter(sub.id()))
}

/// Paragraphs under `selection` as Markdown, separated by blank lines.
pub fn selected_text(book: &Book, selection: &Selection) -> String {
    let paragraphs: Vec<&str> = match selection {
        Selection::None => Vec::new(),
        Selection::Book => book
            .chapters()
            .iter()
            .flat_map(|c| &c.subchapters)
            .flat_map(|s| &s.paragraphs)
            .map(String::as_str)
            .collect(),
        Selection::Chapter(id) => book
            .chapter(*id)
            .into_iter()
            .flat_map(|c| &c.subchapters)
            .flat_map(|s| &s.paragraphs)
            .map(String::as_str)
            .collect(),
        Selection::SubChapter(id) => book
            .subchapter(*id)
            .into_iter()
            .flat_map(|s| &s.paragraphs)
            .map(String::as_str)
            .collect(),
    };
    paragraphs
        .into_iter()
        .map(escape_paragraph)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Write `content` to `path`, or to stdout when there is no path.
pub fn write_output(path: Option<&Utf8Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path.as_std_path(), content)
            .with_context(|| format!("failed to write {path}")),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
