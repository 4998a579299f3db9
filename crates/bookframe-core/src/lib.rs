//! Core library for bookframe.
//!
//! Reads and writes book manuscripts in a hybrid Markdown format where
//! metadata rides along in HTML comments holding JSON, and scores the prose
//! inside them.
//!
//! # Modules
//!
//! - [`model`] - Book, chapters, scenes, personas, selection
//! - [`codec`] - Markdown walker, model builder, serializer, line index, compiler
//! - [`analytics`] - Readability, part-of-speech tagging, passive voice
//! - [`dictionaries`] - Word lists behind the analytics
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use bookframe_core::{Book, Selection, codec};
//!
//! let text = "# Persuasion:\n\n## Chapter One:\n\nSir Walter Elliot, of Kellynch-hall.";
//! let book = Book::import_markdown(text).expect("plain Markdown always imports");
//! assert_eq!(book.chapters().len(), 1);
//!
//! let saved = book.to_markdown().expect("headers encode");
//! let chapter = book.chapters()[0].id();
//! assert_eq!(codec::line_for(&book, &Selection::Chapter(chapter)), Some(5));
//! assert_eq!(Book::from_markdown(&saved).unwrap(), book);
//! ```
#![deny(unsafe_code)]

pub mod analytics;
pub mod codec;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod model;

#[cfg(test)]
mod test_fixtures;

pub use codec::ParseMode;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, DocumentError, DocumentResult};
pub use model::{
    Book, BookHeader, Chapter, ChapterId, EditStatus, Genre, Persona, PersonaId, PersonaRole,
    Personas, Selection, SubChapter, SubChapterHeader, SubChapterId,
};

/// Default limit on manuscript size read by the CLI and MCP server: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
