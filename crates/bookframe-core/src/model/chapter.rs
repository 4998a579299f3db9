//! Chapters: a titled, numbered run of scenes.

use regex::Regex;

use super::{ChapterId, EditStatus, SubChapter, SubChapterId};

/// A chapter of a book.
///
/// `number` is owned by the enclosing [`Book`](super::Book), which keeps it
/// equal to the chapter's 1-based position. Equality compares title,
/// subtitle, and scenes; id and number are excluded.
#[derive(Debug, Clone)]
pub struct Chapter {
    id: ChapterId,
    number: usize,
    /// Chapter title.
    pub title: String,
    /// Optional subtitle, empty when absent.
    pub subtitle: String,
    /// Scenes in reading order.
    pub subchapters: Vec<SubChapter>,
}

impl Default for Chapter {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl PartialEq for Chapter {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.subtitle == other.subtitle
            && self.subchapters == other.subchapters
    }
}

impl Chapter {
    /// A fresh, empty chapter.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id: ChapterId::new(),
            number: 1,
            title: title.into(),
            subtitle: subtitle.into(),
            subchapters: Vec::new(),
        }
    }

    /// Stable identity of this chapter.
    pub const fn id(&self) -> ChapterId {
        self.id
    }

    /// 1-based position within the book.
    pub const fn number(&self) -> usize {
        self.number
    }

    pub(crate) const fn set_number(&mut self, number: usize) {
        self.number = number;
    }

    /// `"title"`, or `"title: subtitle"` when a subtitle is set.
    pub fn title_subtitle(&self) -> String {
        if self.subtitle.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.subtitle)
        }
    }

    /// Shared status of all scenes, or `Multiple`.
    pub fn status(&self) -> EditStatus {
        EditStatus::aggregate(self.subchapters.iter().map(SubChapter::status))
    }

    /// Number of words across all scenes.
    pub fn word_count(&self) -> usize {
        self.subchapters.iter().map(SubChapter::word_count).sum()
    }

    /// Whether any scene matches `pattern`.
    pub fn matches(&self, pattern: &Regex) -> bool {
        self.subchapters.iter().any(|s| s.matches(pattern))
    }

    /// Scene with the given id.
    pub fn subchapter(&self, id: SubChapterId) -> Option<&SubChapter> {
        self.subchapters.iter().find(|s| s.id() == id)
    }

    /// Mutable scene with the given id.
    pub fn subchapter_mut(&mut self, id: SubChapterId) -> Option<&mut SubChapter> {
        self.subchapters.iter_mut().find(|s| s.id() == id)
    }

    /// Move the scene at `from` to index `to`. Out-of-range indexes are ignored.
    pub fn reorder_subchapter(&mut self, from: usize, to: usize) {
        if from >= self.subchapters.len() || to >= self.subchapters.len() {
            return;
        }
        let sub = self.subchapters.remove(from);
        self.subchapters.insert(to, sub);
    }

    /// Replace the scene sharing `sub`'s id. Returns whether one was found.
    pub fn replace_subchapter(&mut self, sub: SubChapter) -> bool {
        match self.subchapter_mut(sub.id()) {
            Some(slot) => {
                *slot = sub;
                true
            }
            None => false,
        }
    }

    /// Remove and return the scene with the given id.
    pub fn remove_subchapter(&mut self, id: SubChapterId) -> Option<SubChapter> {
        let index = self.subchapters.iter().position(|s| s.id() == id)?;
        Some(self.subchapters.remove(index))
    }

    /// Approximate equality used to find this chapter again after a reload.
    ///
    /// True when the chapters are equal, when title and subtitle match, or
    /// when at least one and at least half of `other`'s scenes are equal to
    /// some scene of `self`.
    pub fn roughly_equal(&self, other: &Self) -> bool {
        if self == other || (self.title == other.title && self.subtitle == other.subtitle) {
            return true;
        }
        let matched = other
            .subchapters
            .iter()
            .filter(|s| self.subchapters.contains(s))
            .count();
        matched >= 1 && matched * 2 >= other.subchapters.len()
    }

    /// Number of lines this chapter occupies in the serialized document.
    pub(crate) fn line_count(&self) -> usize {
        2 + self
            .subchapters
            .iter()
            .map(SubChapter::line_count)
            .sum::<usize>()
    }
}
