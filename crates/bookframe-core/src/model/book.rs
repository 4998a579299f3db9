//! The book aggregate and its structural edits.

use std::collections::BTreeSet;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use regex::RegexBuilder;

use super::{
    BookHeader, Chapter, ChapterId, EditStatus, Persona, PersonaRole, Selection, SubChapter,
    SubChapterId,
};
use crate::codec::{self, ParseMode};
use crate::error::{DocumentError, DocumentResult};

/// A manuscript: title, header metadata, and an ordered list of chapters.
///
/// Chapters are only reachable through methods that keep
/// `chapters()[i].number() == i + 1` after every structural edit. Equality
/// compares title, subtitle, header, and chapters.
#[derive(Debug, Clone)]
pub struct Book {
    /// Book title.
    pub title: String,
    /// Subtitle, empty when absent.
    pub subtitle: String,
    /// Book-level metadata.
    pub header: BookHeader,
    chapters: Vec<Chapter>,
    source_location: Option<Utf8PathBuf>,
    read_at: DateTime<Utc>,
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.subtitle == other.subtitle
            && self.header == other.header
            && self.chapters == other.chapters
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::from_parts(String::new(), String::new(), BookHeader::default(), Vec::new())
    }
}

impl Book {
    /// A new book with one chapter holding one scene with one paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        let mut chapter = Chapter::new("Chapter", "");
        chapter.subchapters.push(SubChapter::new(text));
        Self::from_parts(
            "Title".to_string(),
            "Subtitle".to_string(),
            BookHeader::default(),
            vec![chapter],
        )
    }

    pub(crate) fn from_parts(
        title: String,
        subtitle: String,
        header: BookHeader,
        chapters: Vec<Chapter>,
    ) -> Self {
        let mut book = Self {
            title,
            subtitle,
            header,
            chapters,
            source_location: None,
            read_at: Utc::now(),
        };
        book.renumber();
        book
    }

    /// Parse a book document, importing it when it carries no headers.
    pub fn from_markdown(text: &str) -> DocumentResult<Self> {
        codec::parse(text, ParseMode::Auto)
    }

    /// Parse a plain Markdown manuscript, synthesizing default headers.
    pub fn import_markdown(text: &str) -> DocumentResult<Self> {
        codec::parse(text, ParseMode::Import)
    }

    /// Read and parse the book at `path`, remembering where it came from.
    pub fn from_file(path: impl AsRef<Utf8Path>) -> DocumentResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DocumentError::io(path, e))?;
        let mut book = Self::from_markdown(&text)?;
        book.source_location = Some(path.to_path_buf());
        Ok(book)
    }

    /// Render the book in its canonical document form.
    pub fn to_markdown(&self) -> DocumentResult<String> {
        codec::serialize(self)
    }

    /// File this book was read from, if any.
    pub fn source_location(&self) -> Option<&Utf8Path> {
        self.source_location.as_deref()
    }

    /// Record the file backing this book.
    pub fn set_source_location(&mut self, path: impl Into<Utf8PathBuf>) {
        self.source_location = Some(path.into());
    }

    /// When this book was parsed.
    pub const fn read_at(&self) -> DateTime<Utc> {
        self.read_at
    }

    /// Whether the source file changed on disk after this book was read.
    ///
    /// Always `false` for books without a source file.
    pub fn is_file_updated_since_read(&self) -> DocumentResult<bool> {
        let Some(path) = &self.source_location else {
            return Ok(false);
        };
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| DocumentError::io(path, e))?;
        Ok(DateTime::<Utc>::from(modified) > self.read_at)
    }

    /// Chapters in order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// `"title"`, or `"title: subtitle"` when a subtitle is set.
    pub fn title_subtitle(&self) -> String {
        if self.subtitle.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.subtitle)
        }
    }

    /// Shared status of all chapters, or `Multiple`.
    pub fn status(&self) -> EditStatus {
        EditStatus::aggregate(self.chapters.iter().map(Chapter::status))
    }

    /// Number of words in the whole book.
    pub fn word_count(&self) -> usize {
        self.chapters.iter().map(Chapter::word_count).sum()
    }

    fn renumber(&mut self) {
        for (i, chapter) in self.chapters.iter_mut().enumerate() {
            chapter.set_number(i + 1);
        }
    }

    /// Insert `chapter` at `at`, or append it when `at` is `None`.
    ///
    /// An index outside `0..=len` is ignored.
    pub fn add_chapter(&mut self, chapter: Chapter, at: Option<usize>) {
        match at {
            Some(i) if i <= self.chapters.len() => self.chapters.insert(i, chapter),
            Some(i) => tracing::debug!(index = i, "chapter index out of range, not added"),
            None => self.chapters.push(chapter),
        }
        self.renumber();
    }

    /// Remove and return the chapter at `index`.
    pub fn remove_chapter(&mut self, index: usize) -> Option<Chapter> {
        if index >= self.chapters.len() {
            tracing::debug!(index, "chapter index out of range, not removed");
            return None;
        }
        let removed = self.chapters.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Move the chapter at `from` to `to`. Ignored if either is out of range.
    pub fn reorder_chapter(&mut self, from: usize, to: usize) {
        let len = self.chapters.len();
        if from >= len || to >= len {
            tracing::debug!(from, to, "chapter index out of range, not moved");
            return;
        }
        let chapter = self.chapters.remove(from);
        self.chapters.insert(to, chapter);
        self.renumber();
    }

    /// Replace the chapter sharing `chapter`'s id. Returns whether one was found.
    pub fn replace_chapter(&mut self, chapter: Chapter) -> bool {
        let found = match self.chapters.iter_mut().find(|c| c.id() == chapter.id()) {
            Some(slot) => {
                *slot = chapter;
                true
            }
            None => false,
        };
        self.renumber();
        found
    }

    /// Replace the scene sharing `sub`'s id, wherever it lives.
    pub fn replace_subchapter(&mut self, sub: SubChapter) -> bool {
        let Some(chapter) = self
            .chapters
            .iter_mut()
            .find(|c| c.subchapter(sub.id()).is_some())
        else {
            return false;
        };
        chapter.replace_subchapter(sub)
    }

    /// Replace all chapters.
    pub fn set_chapters(&mut self, chapters: Vec<Chapter>) {
        self.chapters = chapters;
        self.renumber();
    }

    /// Chapter with the given id.
    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id() == id)
    }

    /// Mutable chapter with the given id.
    pub fn chapter_mut(&mut self, id: ChapterId) -> Option<&mut Chapter> {
        self.chapters.iter_mut().find(|c| c.id() == id)
    }

    /// Position of the chapter with the given id.
    pub fn index_of(&self, id: ChapterId) -> Option<usize> {
        self.chapters.iter().position(|c| c.id() == id)
    }

    /// Scene with the given id, searching every chapter.
    pub fn subchapter(&self, id: SubChapterId) -> Option<&SubChapter> {
        self.chapters.iter().find_map(|c| c.subchapter(id))
    }

    /// Mutable scene with the given id.
    pub fn subchapter_mut(&mut self, id: SubChapterId) -> Option<&mut SubChapter> {
        self.chapters.iter_mut().find_map(|c| c.subchapter_mut(id))
    }

    /// Chapter holding the scene with the given id.
    pub fn chapter_containing(&self, id: SubChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.subchapter(id).is_some())
    }

    /// Number of outline entries: every chapter plus every scene.
    pub fn entry_count(&self) -> usize {
        self.chapters.iter().map(|c| 1 + c.subchapters.len()).sum()
    }

    /// Outline entry at `index`, counting each chapter followed by its scenes.
    pub fn entry_at(&self, index: usize) -> Selection {
        let mut remaining = index;
        for chapter in &self.chapters {
            if remaining == 0 {
                return Selection::Chapter(chapter.id());
            }
            remaining -= 1;
            if let Some(sub) = chapter.subchapters.get(remaining) {
                return Selection::SubChapter(sub.id());
            }
            remaining -= chapter.subchapters.len();
        }
        Selection::None
    }

    /// Principal characters.
    pub fn major_personas(&self) -> &[Persona] {
        self.header.personas.get(PersonaRole::Major)
    }

    /// Supporting characters.
    pub fn minor_personas(&self) -> &[Persona] {
        self.header.personas.get(PersonaRole::Minor)
    }

    /// Replace the principal characters.
    pub fn set_major_personas(&mut self, personas: Vec<Persona>) {
        *self.header.personas.get_mut(PersonaRole::Major) = personas;
    }

    /// Replace the supporting characters.
    pub fn set_minor_personas(&mut self, personas: Vec<Persona>) {
        *self.header.personas.get_mut(PersonaRole::Minor) = personas;
    }

    /// Major then minor characters.
    pub fn all_personas(&self) -> impl Iterator<Item = &Persona> {
        self.major_personas().iter().chain(self.minor_personas())
    }

    /// Whether `persona` is one of the principal characters, by id.
    pub fn is_major(&self, persona: &Persona) -> bool {
        self.major_personas().iter().any(|p| p.id() == persona.id())
    }

    /// Look up a persona by name.
    ///
    /// An exact name or alias match wins; otherwise the first persona whose
    /// name contains `name`, or is contained in it.
    pub fn find_persona(&self, name: &str) -> Option<&Persona> {
        if name.trim().is_empty() {
            return None;
        }
        let mut partial = None;
        for persona in self.all_personas() {
            if persona.name == name || persona.aliases.iter().any(|a| a == name) {
                return Some(persona);
            }
            if partial.is_none()
                && !persona.name.is_empty()
                && (name.contains(&persona.name) || persona.name.contains(name))
            {
                partial = Some(persona);
            }
        }
        partial
    }

    /// Every distinct non-empty scene location, sorted.
    pub fn all_locations(&self) -> Vec<String> {
        self.chapters
            .iter()
            .flat_map(|c| &c.subchapters)
            .map(|s| s.header.location.as_str())
            .filter(|loc| !loc.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Chapters and scenes whose paragraphs match `pattern`, ignoring case.
    ///
    /// Each matching chapter is listed before its matching scenes.
    pub fn search(&self, pattern: &str) -> Result<Vec<Selection>, regex::Error> {
        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        let mut hits = Vec::new();
        for chapter in &self.chapters {
            if !chapter.matches(&re) {
                continue;
            }
            hits.push(Selection::Chapter(chapter.id()));
            hits.extend(
                chapter
                    .subchapters
                    .iter()
                    .filter(|s| s.matches(&re))
                    .map(|s| Selection::SubChapter(s.id())),
            );
        }
        Ok(hits)
    }
}
