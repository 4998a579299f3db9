//! What the user currently has selected in the outline.

use super::{Book, ChapterId, SubChapterId};

/// A selected entity, addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// The book itself.
    Book,
    /// A chapter.
    Chapter(ChapterId),
    /// A scene.
    SubChapter(SubChapterId),
}

impl Selection {
    /// Carry this selection across a reload.
    ///
    /// Ids are not persisted, so the selected entity is looked up in `old`
    /// and the first entity of `new` that is roughly equal to it becomes the
    /// new selection. Falls back to [`Selection::None`] when nothing matches.
    pub fn reselect(&self, old: &Book, new: &Book) -> Self {
        match *self {
            Self::None => Self::None,
            Self::Book => Self::Book,
            Self::Chapter(id) => old
                .chapter(id)
                .and_then(|prev| new.chapters().iter().find(|c| c.roughly_equal(prev)))
                .map_or(Self::None, |c| Self::Chapter(c.id())),
            Self::SubChapter(id) => old
                .subchapter(id)
                .and_then(|prev| {
                    new.chapters()
                        .iter()
                        .flat_map(|c| &c.subchapters)
                        .find(|s| s.roughly_equal(prev))
                })
                .map_or(Self::None, |s| Self::SubChapter(s.id())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SIMPLE_BOOK;

    #[test]
    fn reload_keeps_chapter_and_scene_selection() {
        let old = Book::from_markdown(SIMPLE_BOOK).unwrap();
        let mut new = Book::from_markdown(SIMPLE_BOOK).unwrap();
        let mut edited = new.chapters()[0].subchapters[0].clone();
        edited.paragraphs[0].push_str(" Edited outside.");
        new.replace_subchapter(edited);

        let chapter = Selection::Chapter(old.chapters()[0].id());
        assert_eq!(
            chapter.reselect(&old, &new),
            Selection::Chapter(new.chapters()[0].id())
        );

        let scene = Selection::SubChapter(old.chapters()[0].subchapters[0].id());
        assert_eq!(
            scene.reselect(&old, &new),
            Selection::SubChapter(new.chapters()[0].subchapters[0].id())
        );
    }

    #[test]
    fn unknown_ids_clear_the_selection() {
        let old = Book::new("a");
        let new = Book::new("a");
        let stale = Selection::Chapter(ChapterId::new());
        assert_eq!(stale.reselect(&old, &new), Selection::None);
        assert_eq!(Selection::Book.reselect(&old, &new), Selection::Book);
        assert_eq!(Selection::None.reselect(&old, &new), Selection::None);
    }
}
