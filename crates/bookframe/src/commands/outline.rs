//! Outline command: the chapter and scene tree of a book.

use bookframe_core::codec::line_for_from;
use bookframe_core::{Book, Selection};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::load_book;

/// Arguments for the `outline` subcommand.
#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Book to read.
    pub file: Utf8PathBuf,
}

/// Structured outline of a book.
#[derive(Debug, Serialize)]
pub struct BookOutline {
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    subtitle: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    author: String,
    status: &'static str,
    word_count: usize,
    chapters: Vec<ChapterOutline>,
}

#[derive(Debug, Serialize)]
struct ChapterOutline {
    number: usize,
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    subtitle: String,
    status: &'static str,
    word_count: usize,
    line: Option<usize>,
    scenes: Vec<SceneOutline>,
}

#[derive(Debug, Serialize)]
struct SceneOutline {
    description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pov: String,
    status: &'static str,
    paragraphs: usize,
    word_count: usize,
    line: Option<usize>,
}

impl BookOutline {
    /// Outline of `book`, with line numbers counted from `first_line`.
    pub fn new(book: &Book, first_line: usize) -> Self {
        let chapters = book
            .chapters()
            .iter()
            .map(|chapter| ChapterOutline {
                number: chapter.number(),
                title: chapter.title.clone(),
                subtitle: chapter.subtitle.clone(),
                status: chapter.status().as_str(),
                word_count: chapter.word_count(),
                line: line_for_from(book, &Selection::Chapter(chapter.id()), first_line),
                scenes: chapter
                    .subchapters
                    .iter()
                    .map(|sub| SceneOutline {
                        description: sub.header.description.clone(),
                        location: sub.header.location.clone(),
                        pov: sub.header.pov.clone(),
                        status: sub.status().as_str(),
                        paragraphs: sub.paragraphs.len(),
                        word_count: sub.word_count(),
                        line: line_for_from(book, &Selection::SubChapter(sub.id()), first_line),
                    })
                    .collect(),
            })
            .collect();
        Self {
            title: book.title.clone(),
            subtitle: book.subtitle.clone(),
            author: book.header.author.clone(),
            status: book.status().as_str(),
            word_count: book.word_count(),
            chapters,
        }
    }

    fn print(&self) {
        println!("{}", self.title.bold());
        if !self.subtitle.is_empty() {
            println!("{}", self.subtitle);
        }
        if !self.author.is_empty() {
            println!("{} {}", "by".dimmed(), self.author);
        }
        println!("{} words, {}", self.word_count, self.status.dimmed());
        for chapter in &self.chapters {
            println!();
            let title = if chapter.subtitle.is_empty() {
                chapter.title.clone()
            } else {
                format!("{}: {}", chapter.title, chapter.subtitle)
            };
            println!(
                "{:>3}. {}  {} words, {}",
                chapter.number,
                title.bold(),
                chapter.word_count,
                chapter.status.dimmed()
            );
            for (i, scene) in chapter.scenes.iter().enumerate() {
                let label = if scene.description.is_empty() {
                    "(untitled scene)".to_string()
                } else {
                    scene.description.clone()
                };
                let place = if scene.location.is_empty() {
                    String::new()
                } else {
                    format!(" @ {}", scene.location)
                };
                println!(
                    "     {}.{} {}{}  {} words, {}",
                    chapter.number,
                    i + 1,
                    label,
                    place.cyan(),
                    scene.word_count,
                    scene.status.dimmed()
                );
            }
        }
    }
}

/// Print the outline of a book.
#[instrument(name = "cmd_outline", skip_all, fields(file = %args.file))]
pub fn cmd_outline(
    args: OutlineArgs,
    global_json: bool,
    first_line: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, first_line, "executing outline command");
    let book = load_book(&args.file, max_input_bytes)?;
    let outline = BookOutline::new(&book, first_line);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
    } else {
        outline.print();
    }
    Ok(())
}
