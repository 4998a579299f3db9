//! The in-memory book tree.
//!
//! A [`Book`] owns its [`Chapter`]s, each chapter owns its [`SubChapter`]s
//! (scenes), and each scene owns its paragraphs. Entities carry opaque ids
//! for selection tracking, but equality is always by content.

mod book;
mod chapter;
mod header;
mod id;
mod persona;
mod selection;
mod subchapter;

pub use book::Book;
pub use chapter::Chapter;
pub use header::{BookHeader, EditStatus, Genre, PersonaRole, Personas, SubChapterHeader};
pub use id::{ChapterId, PersonaId, SubChapterId};
pub use persona::Persona;
pub use selection::Selection;
pub use subchapter::SubChapter;
