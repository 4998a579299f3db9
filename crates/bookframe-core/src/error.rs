//! Error types for bookframe-core.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::codec::BlockKind;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or saving a book document.
///
/// A failed parse never yields a partial [`Book`](crate::model::Book).
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The JSON header following the book title could not be decoded.
    #[error("invalid book header: {0}")]
    InvalidBookHeader(#[source] serde_json::Error),

    /// A scene header could not be decoded.
    #[error("invalid scene header: {0}")]
    InvalidSubChapterHeader(#[source] serde_json::Error),

    /// The source file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The path that was requested.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The source file is not UTF-8 text.
    #[error("not valid UTF-8: {path}")]
    InvalidEncoding {
        /// The path that was read.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The source file exists but could not be read.
    #[error("cannot read {path}")]
    Unreadable {
        /// The path that was requested.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A header could not be encoded to JSON while saving.
    #[error("cannot encode header: {0}")]
    CannotEncodeHeader(#[source] serde_json::Error),

    /// A block appeared where the document grammar does not allow it.
    #[error("unexpected {kind} block: {context}")]
    UnexpectedBlock {
        /// The kind of the offending block.
        kind: BlockKind,
        /// What was missing when the block was seen.
        context: &'static str,
    },
}

impl DocumentError {
    /// Classify an I/O failure on `path` by its kind.
    pub(crate) fn io(path: &Utf8Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path, source },
            io::ErrorKind::InvalidData => Self::InvalidEncoding { path, source },
            _ => Self::Unreadable { path, source },
        }
    }
}

/// Result type alias using [`DocumentError`].
pub type DocumentResult<T> = Result<T, DocumentError>;
