//! Scenes: the smallest narrative unit, each with its own header.

use regex::Regex;

use super::{EditStatus, SubChapterHeader, SubChapterId};
use crate::analytics::tokenize;

/// A scene: a header plus an ordered list of paragraphs.
///
/// Each paragraph is one line of inline Markdown (`*em*` and `**strong**`
/// survive). Equality compares header and paragraphs only.
#[derive(Debug, Clone, Default)]
pub struct SubChapter {
    id: SubChapterId,
    /// Scene metadata.
    pub header: SubChapterHeader,
    /// Paragraph texts in order.
    pub paragraphs: Vec<String>,
}

impl PartialEq for SubChapter {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.paragraphs == other.paragraphs
    }
}

impl SubChapter {
    /// A fresh scene holding a single paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: SubChapterId::new(),
            header: SubChapterHeader::default(),
            paragraphs: vec![text.into()],
        }
    }

    /// A fresh scene with the given header and no paragraphs.
    pub fn with_header(header: SubChapterHeader) -> Self {
        Self {
            id: SubChapterId::new(),
            header,
            paragraphs: Vec::new(),
        }
    }

    /// Stable identity of this scene.
    pub const fn id(&self) -> SubChapterId {
        self.id
    }

    /// Editing status from the header.
    pub const fn status(&self) -> EditStatus {
        self.header.status
    }

    /// Number of words across all paragraphs.
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| tokenize::words(p).len())
            .sum()
    }

    /// Whether any paragraph matches `pattern`.
    pub fn matches(&self, pattern: &Regex) -> bool {
        self.paragraphs.iter().any(|p| pattern.is_match(p))
    }

    /// Approximate equality used to find this scene again after a reload.
    ///
    /// True when the scenes are equal, when their headers are equal, or when
    /// at least one and at least half of `other`'s paragraphs also occur in
    /// `self` (counted as a multiset).
    pub fn roughly_equal(&self, other: &Self) -> bool {
        if self == other || self.header == other.header {
            return true;
        }
        let mut remaining: Vec<&String> = self.paragraphs.iter().collect();
        let mut matched = 0usize;
        for para in &other.paragraphs {
            if let Some(pos) = remaining.iter().position(|p| *p == para) {
                remaining.swap_remove(pos);
                matched += 1;
            }
        }
        matched >= 1 && matched * 2 >= other.paragraphs.len()
    }

    /// Number of lines this scene occupies in the serialized document.
    pub(crate) const fn line_count(&self) -> usize {
        2 + 2 * self.paragraphs.len()
    }
}
