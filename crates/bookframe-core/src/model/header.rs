//! Header metadata stored as JSON inside HTML comments.
//!
//! The book header follows the title block; every scene starts with its own
//! scene header. Both decode leniently: missing keys take their defaults.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::Persona;

/// Editing progress of a scene.
///
/// [`EditStatus::Multiple`] only appears as an aggregate over children with
/// differing status; it is never assigned to a scene by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EditStatus {
    /// First draft.
    #[default]
    Rough,
    /// Being revised.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Revised and acceptable.
    Good,
    /// Done.
    Finished,
    /// Children disagree.
    Multiple,
}

impl EditStatus {
    /// The label used in the file format.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rough => "Rough",
            Self::InProgress => "In Progress",
            Self::Good => "Good",
            Self::Finished => "Finished",
            Self::Multiple => "Multiple",
        }
    }

    /// Summarize a set of statuses: the shared value, or `Multiple`.
    ///
    /// An empty set also summarizes to `Multiple`.
    pub fn aggregate<I: IntoIterator<Item = Self>>(statuses: I) -> Self {
        let mut iter = statuses.into_iter();
        let Some(first) = iter.next() else {
            return Self::Multiple;
        };
        if iter.all(|s| s == first) {
            first
        } else {
            Self::Multiple
        }
    }
}

impl fmt::Display for EditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literary genre of a book.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Biography,
    Detective,
    Dystopia,
    Fantasy,
    Horror,
    Memoir,
    Mystery,
    Romance,
    Satire,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Thriller,
    Western,
    #[serde(rename = "Young Adult")]
    YoungAdult,
}

impl Genre {
    /// Every genre, in menu order.
    pub const ALL: [Self; 13] = [
        Self::Biography,
        Self::Detective,
        Self::Dystopia,
        Self::Fantasy,
        Self::Horror,
        Self::Memoir,
        Self::Mystery,
        Self::Romance,
        Self::Satire,
        Self::ScienceFiction,
        Self::Thriller,
        Self::Western,
        Self::YoungAdult,
    ];

    /// The label used in the file format.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Biography => "Biography",
            Self::Detective => "Detective",
            Self::Dystopia => "Dystopia",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Memoir => "Memoir",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::Satire => "Satire",
            Self::ScienceFiction => "Science Fiction",
            Self::Thriller => "Thriller",
            Self::Western => "Western",
            Self::YoungAdult => "Young Adult",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which cast list a persona belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonaRole {
    /// Principal characters.
    Major,
    /// Supporting characters.
    Minor,
}

impl PersonaRole {
    /// The JSON key for this role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }
}

/// The `characters` object of the book header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personas {
    /// Principal characters.
    pub major: Vec<Persona>,
    /// Supporting characters.
    pub minor: Vec<Persona>,
}

impl Personas {
    /// The cast list for `role`.
    pub fn get(&self, role: PersonaRole) -> &[Persona] {
        match role {
            PersonaRole::Major => &self.major,
            PersonaRole::Minor => &self.minor,
        }
    }

    /// Mutable access to the cast list for `role`.
    pub fn get_mut(&mut self, role: PersonaRole) -> &mut Vec<Persona> {
        match role {
            PersonaRole::Major => &mut self.major,
            PersonaRole::Minor => &mut self.minor,
        }
    }
}

/// Book-level metadata stored after the title block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookHeader {
    /// Author name.
    pub author: String,
    /// Publication year, kept as written.
    pub year: String,
    /// Free-form keywords.
    pub keywords: Vec<String>,
    /// Genres; the first one is "the" genre.
    pub genres: Vec<Genre>,
    /// Major and minor cast.
    #[serde(rename = "characters")]
    pub personas: Personas,
}

impl Default for BookHeader {
    fn default() -> Self {
        Self {
            author: String::new(),
            year: chrono::Local::now().year().to_string(),
            keywords: Vec::new(),
            genres: Vec::new(),
            personas: Personas::default(),
        }
    }
}

impl BookHeader {
    /// The primary genre, `Fantasy` when none is set.
    pub fn genre(&self) -> Genre {
        self.genres.first().copied().unwrap_or(Genre::Fantasy)
    }

    /// Replace all genres with a single one.
    pub fn set_genre(&mut self, genre: Genre) {
        self.genres = vec![genre];
    }

    /// Keywords as a comma-separated string.
    pub fn joined_keywords(&self) -> String {
        self.keywords.join(", ")
    }

    /// Replace the keywords from a comma-separated string.
    pub fn set_keywords_csv(&mut self, csv: &str) {
        self.keywords = split_csv(csv);
    }
}

/// Per-scene metadata stored in the header block that opens each scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubChapterHeader {
    /// One-line synopsis.
    pub description: String,
    /// Where the scene takes place.
    pub location: String,
    /// Point-of-view character.
    pub pov: String,
    /// Editing progress.
    pub status: EditStatus,
    /// Cached per-scene metrics, keyed by metric name.
    pub analytic_info: BTreeMap<String, f64>,
}

/// Split a comma-separated list, dropping spaces after commas and empty items.
pub(crate) fn split_csv(csv: &str) -> Vec<String> {
    csv.split(',')
        .enumerate()
        .map(|(i, item)| if i == 0 { item } else { item.trim_start_matches(' ') })
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
