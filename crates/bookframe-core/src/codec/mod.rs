//! The book document codec.
//!
//! A document is a sequence of Markdown blocks separated by blank lines:
//!
//! ```text
//! # Title:Subtitle
//!
//! <!-- {book header JSON} -->
//!
//! ## Chapter Title:Chapter Subtitle
//!
//! <!-- {scene header JSON} -->
//!
//! Paragraph text, one line each.
//! ```
//!
//! Parsing runs [`walk`] then [`build`]; saving runs [`serialize`]. Once a
//! document has been built, serialize and parse are inverses.

mod block;
mod builder;
mod compile;
mod escape;
mod line_index;
mod serializer;
mod walker;

pub use block::{Block, BlockKind};
pub use builder::build;
pub use compile::{SCENE_BREAK, compile};
pub use escape::{escape_heading, escape_paragraph};
pub use line_index::{PREAMBLE_LINES, line_for, line_for_from};
pub use serializer::{BLOCK_SEPARATOR, serialize, to_blocks};
pub use walker::walk;

use crate::error::DocumentResult;
use crate::model::Book;

/// How the walker treats documents without hidden headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ParseMode {
    /// Take blocks as written.
    Native,
    /// Treat the text as a plain manuscript and synthesize default headers.
    Import,
    /// Import when the document contains no HTML blocks, native otherwise.
    #[default]
    Auto,
}

/// Parse document text into a book.
#[tracing::instrument(skip_all, fields(input_len = text.len(), mode = ?mode))]
pub fn parse(text: &str, mode: ParseMode) -> DocumentResult<Book> {
    build(&walk(text, mode))
}
