//! Print-ready Markdown with metadata stripped.

use super::{escape_heading, escape_paragraph};
use crate::model::{Book, Chapter};

/// Marker between scenes in compiled output.
pub const SCENE_BREAK: &str = "***";

/// Render `book` for a document converter: title page, then one page per
/// chapter, scenes separated by [`SCENE_BREAK`]. Headers are dropped.
#[tracing::instrument(skip_all, fields(chapters = book.chapters().len()))]
pub fn compile(book: &Book) -> String {
    let mut parts = vec![format!("# {}", escape_heading(&book.title))];
    if !book.subtitle.trim().is_empty() {
        parts.push(escape_paragraph(&book.subtitle));
    }
    parts.push(format!("©{}, {}", book.header.year, book.header.author));
    for chapter in book.chapters() {
        compile_chapter(chapter, &mut parts);
    }
    parts.join("\n\n")
}

fn compile_chapter(chapter: &Chapter, parts: &mut Vec<String>) {
    parts.push("\\newpage".to_string());
    parts.push(format!(
        "## Chapter {}: {}",
        chapter.number(),
        escape_heading(&chapter.title)
    ));
    if !chapter.subtitle.trim().is_empty() {
        parts.push(format!("### {}", escape_heading(&chapter.subtitle)));
    }
    for (i, scene) in chapter.subchapters.iter().enumerate() {
        if i > 0 {
            parts.push(SCENE_BREAK.to_string());
        }
        parts.extend(scene.paragraphs.iter().map(String::as_str).map(escape_paragraph));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubChapter;
    use crate::test_fixtures::SIMPLE_BOOK;

    #[test]
    fn compiles_title_page_and_chapters() {
        let mut book = Book::from_markdown(SIMPLE_BOOK).unwrap();
        let mut two = Chapter::new("Netherfield", "A Ball");
        two.subchapters.push(SubChapter::new("First scene."));
        two.subchapters.push(SubChapter::new("Second scene."));
        book.add_chapter(two, None);

        let out = compile(&book);
        let parts: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(parts[0], "# Pride and Prejudice");
        assert_eq!(parts[1], "©1813, Jane Austen");
        assert_eq!(parts[2], "\\newpage");
        assert_eq!(parts[3], "## Chapter 1: Chapter One");
        assert!(parts[5].starts_with("*However*"));
        assert_eq!(
            &parts[6..],
            &[
                "\\newpage",
                "## Chapter 2: Netherfield",
                "### A Ball",
                "First scene.",
                "***",
                "Second scene."
            ]
        );
        assert!(!out.contains("<!--"));
    }

    #[test]
    fn chapter_without_scenes_keeps_its_heading() {
        let mut book = Book::new("x");
        book.set_chapters(vec![Chapter::new("Alone", "")]);
        let out = compile(&book);
        assert!(out.ends_with("\\newpage\n\n## Chapter 1: Alone"));
    }
}
