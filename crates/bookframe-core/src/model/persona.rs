//! Characters appearing in a book.

use serde::{Deserialize, Serialize};

use super::header::split_csv;
use super::{Chapter, PersonaId, SubChapter};

/// A character listed in the book header.
///
/// Equality compares name, description, and aliases; the id is excluded and
/// is never serialized, so every load assigns a fresh one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    #[serde(skip)]
    id: PersonaId,
    /// Display name.
    pub name: String,
    /// Free-form notes.
    pub description: String,
    /// Other names the character goes by.
    pub aliases: Vec<String>,
}

impl PartialEq for Persona {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.aliases == other.aliases
    }
}

impl Persona {
    /// Create a persona with a fresh id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        aliases: Vec<String>,
    ) -> Self {
        Self {
            id: PersonaId::new(),
            name: name.into(),
            description: description.into(),
            aliases,
        }
    }

    /// Stable identity of this persona.
    pub const fn id(&self) -> PersonaId {
        self.id
    }

    /// Aliases as a comma-separated string.
    pub fn joined_aliases(&self) -> String {
        self.aliases.join(", ")
    }

    /// Replace the aliases from a comma-separated string.
    pub fn set_aliases_csv(&mut self, csv: &str) {
        self.aliases = split_csv(csv);
    }

    /// Whether `text` mentions this persona by name or alias.
    ///
    /// Plain case-sensitive substring search: a persona named "Al" is found
    /// inside "Alice".
    pub fn is_in(&self, text: &str) -> bool {
        std::iter::once(&self.name)
            .chain(&self.aliases)
            .filter(|n| !n.is_empty())
            .any(|n| text.contains(n.as_str()))
    }

    /// Whether any paragraph of the scene mentions this persona.
    pub fn is_in_subchapter(&self, subchapter: &SubChapter) -> bool {
        subchapter.paragraphs.iter().any(|p| self.is_in(p))
    }

    /// Whether any scene of the chapter mentions this persona.
    pub fn is_in_chapter(&self, chapter: &Chapter) -> bool {
        chapter.subchapters.iter().any(|s| self.is_in_subchapter(s))
    }
}
