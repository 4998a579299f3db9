//! Source line numbers for chapters and scenes.
//!
//! Derived from the serializer layout: every block is one line followed by a
//! blank line. The index is computed on demand and never cached, so it always
//! reflects the current tree.

use crate::model::{Book, Selection};

/// Lines taken by the title and book header blocks.
pub const PREAMBLE_LINES: usize = 4;

/// 1-based line where the selected entity starts in the serialized book.
///
/// [`Selection::Book`] maps to the first line; unknown ids and
/// [`Selection::None`] map to `None`.
pub fn line_for(book: &Book, selection: &Selection) -> Option<usize> {
    line_for_from(book, selection, 1)
}

/// Like [`line_for`], counting from `first_line` instead of 1.
pub fn line_for_from(book: &Book, selection: &Selection, first_line: usize) -> Option<usize> {
    let mut line = first_line + PREAMBLE_LINES;
    match *selection {
        Selection::None => None,
        Selection::Book => Some(first_line),
        Selection::Chapter(id) => {
            for chapter in book.chapters() {
                if chapter.id() == id {
                    return Some(line);
                }
                line += chapter.line_count();
            }
            None
        }
        Selection::SubChapter(id) => {
            for chapter in book.chapters() {
                if let Some(index) = chapter.subchapters.iter().position(|s| s.id() == id) {
                    let before: usize = chapter.subchapters[..index]
                        .iter()
                        .map(|s| s.line_count())
                        .sum();
                    return Some(line + 2 + before);
                }
                line += chapter.line_count();
            }
            None
        }
    }
}
