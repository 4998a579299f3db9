//! Blocks: the flat, typed form of a book document.

use std::fmt;

use serde::Serialize;

/// What a [`Block`] represents in the document grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Book title (`# title:subtitle`).
    Title,
    /// Chapter title (`## title:subtitle`).
    ChapterTitle,
    /// JSON metadata hidden in an HTML comment.
    Header,
    /// One paragraph of inline Markdown.
    Paragraph,
    /// Scene break. Never produced by the walker; ignored by the builder.
    Break,
}

impl BlockKind {
    /// Lower-case name used in messages and JSON output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ChapterTitle => "chapter_title",
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Break => "break",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural unit of a book document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Grammar role.
    pub kind: BlockKind,
    /// Text payload, without surface markup.
    pub content: String,
}

impl Block {
    /// Create a block.
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// An empty header, decoded as all-default metadata.
    pub fn empty_header() -> Self {
        Self::new(BlockKind::Header, "")
    }

    /// The block's Markdown surface form, always a single line for
    /// serializer output.
    pub fn render(&self) -> String {
        match self.kind {
            BlockKind::Title => format!("# {}", self.content),
            BlockKind::ChapterTitle => format!("## {}", self.content),
            BlockKind::Header => format!("<!-- {} -->", self.content),
            BlockKind::Paragraph | BlockKind::Break => self.content.clone(),
        }
    }
}
