//! [`Book`] tree back to blocks and document text.

use serde::Serialize;

use super::{Block, BlockKind, escape_heading, escape_paragraph};
use crate::error::{DocumentError, DocumentResult};
use crate::model::Book;

/// Separator between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Emit the block sequence for `book`. Heading and paragraph text is escaped
/// so that it parses back to the same strings.
pub fn to_blocks(book: &Book) -> DocumentResult<Vec<Block>> {
    let mut blocks = vec![
        Block::new(
            BlockKind::Title,
            escape_heading(&format!("{}:{}", book.title, book.subtitle)),
        ),
        Block::new(BlockKind::Header, encode(&book.header)?),
    ];
    for chapter in book.chapters() {
        blocks.push(Block::new(
            BlockKind::ChapterTitle,
            escape_heading(&format!("{}:{}", chapter.title, chapter.subtitle)),
        ));
        for sub in &chapter.subchapters {
            blocks.push(Block::new(BlockKind::Header, encode(&sub.header)?));
            blocks.extend(
                sub.paragraphs
                    .iter()
                    .map(|p| Block::new(BlockKind::Paragraph, escape_paragraph(p))),
            );
        }
    }
    Ok(blocks)
}

/// Render `book` as document text: blocks joined by a blank line, with no
/// trailing newline.
#[tracing::instrument(skip_all, fields(chapters = book.chapters().len()))]
pub fn serialize(book: &Book) -> DocumentResult<String> {
    let rendered: Vec<String> = to_blocks(book)?.iter().map(Block::render).collect();
    Ok(rendered.join(BLOCK_SEPARATOR))
}

/// Compact single-line JSON that cannot close the surrounding comment early.
fn encode<T: Serialize>(header: &T) -> DocumentResult<String> {
    let json = serde_json::to_string(header).map_err(DocumentError::CannotEncodeHeader)?;
    Ok(json.replace("-->", "--\\u003e"))
}
