//! [`Block`] sequence to [`Book`] tree.

use serde::de::DeserializeOwned;

use super::{Block, BlockKind};
use crate::error::{DocumentError, DocumentResult};
use crate::model::{Book, BookHeader, Chapter, SubChapter, SubChapterHeader};

/// Fold blocks into a book.
///
/// A header right after the title is the book header; every other header
/// opens a new scene in the current chapter. Nothing is returned unless the
/// whole sequence builds.
#[tracing::instrument(skip_all, fields(blocks = blocks.len()))]
pub fn build(blocks: &[Block]) -> DocumentResult<Book> {
    let mut title = String::new();
    let mut subtitle = String::new();
    let mut header = BookHeader::default();
    let mut chapters = Vec::new();
    let mut chapter: Option<Chapter> = None;
    let mut scene: Option<SubChapter> = None;
    let mut previous: Option<BlockKind> = None;

    for block in blocks {
        match block.kind {
            BlockKind::Title => {
                (title, subtitle) = split_title(&block.content);
            }
            BlockKind::ChapterTitle => {
                if let Some(mut done) = chapter.take() {
                    done.subchapters.extend(scene.take());
                    chapters.push(done);
                }
                let (name, sub) = split_title(&block.content);
                chapter = Some(Chapter::new(name, sub));
            }
            BlockKind::Header if previous == Some(BlockKind::Title) => {
                header = decode(&block.content).map_err(DocumentError::InvalidBookHeader)?;
            }
            BlockKind::Header => {
                let Some(current) = chapter.as_mut() else {
                    return Err(DocumentError::UnexpectedBlock {
                        kind: block.kind,
                        context: "scene header before any chapter title",
                    });
                };
                current.subchapters.extend(scene.take());
                let scene_header: SubChapterHeader =
                    decode(&block.content).map_err(DocumentError::InvalidSubChapterHeader)?;
                scene = Some(SubChapter::with_header(scene_header));
            }
            BlockKind::Paragraph => {
                let Some(current) = scene.as_mut() else {
                    return Err(DocumentError::UnexpectedBlock {
                        kind: block.kind,
                        context: "paragraph before any scene header",
                    });
                };
                current.paragraphs.push(block.content.clone());
            }
            BlockKind::Break => {
                tracing::warn!(kind = %block.kind, content = %block.content, "ignoring block");
            }
        }
        previous = Some(block.kind);
    }

    if let Some(mut done) = chapter {
        done.subchapters.extend(scene);
        chapters.push(done);
    }

    tracing::debug!(chapters = chapters.len(), "built book");
    Ok(Book::from_parts(title, subtitle, header, chapters))
}

/// Split `title:subtitle` on the first colon. Both halves are trimmed.
fn split_title(content: &str) -> (String, String) {
    let (title, subtitle) = content.split_once(':').unwrap_or((content, ""));
    (title.trim().to_string(), subtitle.trim().to_string())
}

/// Decode header JSON; an empty header means all defaults.
fn decode<T: DeserializeOwned + Default>(content: &str) -> Result<T, serde_json::Error> {
    if content.trim().is_empty() {
        Ok(T::default())
    } else {
        serde_json::from_str(content)
    }
}
