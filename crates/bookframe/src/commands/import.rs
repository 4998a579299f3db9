//! Import command: turn a plain Markdown manuscript into a book.

use anyhow::Context;
use bookframe_core::Book;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, info, instrument};

use super::{read_input_file, write_output};

/// Arguments for the `import` subcommand.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Plain Markdown manuscript with `#` title and `##` chapter headings.
    pub file: Utf8PathBuf,

    /// Where to write the book (default: stdout).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Author for the book header (overrides `import_author`).
    #[arg(long)]
    pub author: Option<String>,
}

/// Import `text` as a book, filling in the author when the header has none.
pub fn import_book(text: &str, author: Option<&str>) -> anyhow::Result<Book> {
    let mut book = Book::import_markdown(text).context("failed to import manuscript")?;
    if book.header.author.is_empty()
        && let Some(author) = author
    {
        book.header.author = author.to_string();
    }
    Ok(book)
}

/// Import a manuscript and print or save it in book format.
#[instrument(name = "cmd_import", skip_all, fields(file = %args.file))]
pub fn cmd_import(
    args: ImportArgs,
    config_author: Option<&str>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, output = ?args.output, "executing import command");
    let text = read_input_file(&args.file, max_input_bytes)?;
    let book = import_book(&text, args.author.as_deref().or(config_author))?;
    let saved = book
        .to_markdown()
        .with_context(|| format!("failed to serialize {}", args.file))?;
    write_output(args.output.as_deref(), &saved)?;
    info!(
        chapters = book.chapters().len(),
        words = book.word_count(),
        "manuscript imported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANUSCRIPT: &str = "# Emma: A Novel\n\n## Volume I\n\nEmma Woodhouse, handsome, clever, and rich.\n\nShe was the youngest.\n";

    #[test]
    fn import_fills_author() {
        let book = import_book(MANUSCRIPT, Some("Jane Austen")).unwrap();
        assert_eq!(book.header.author, "Jane Austen");
        assert_eq!(book.subtitle, "A Novel");
        assert_eq!(book.chapters().len(), 1);
        assert_eq!(book.chapters()[0].subchapters[0].paragraphs.len(), 2);
    }

    #[test]
    fn import_without_author() {
        let book = import_book(MANUSCRIPT, None).unwrap();
        assert!(book.header.author.is_empty());
    }

    #[test]
    fn imported_book_round_trips() {
        let book = import_book(MANUSCRIPT, Some("Jane Austen")).unwrap();
        let saved = book.to_markdown().unwrap();
        assert_eq!(Book::from_markdown(&saved).unwrap(), book);
    }
}
