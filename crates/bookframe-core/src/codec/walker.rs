//! Markdown to [`Block`] sequence.
//!
//! Uses pulldown-cmark for the CommonMark grammar and keeps only what the
//! book format cares about: headings, paragraphs with top-level emphasis,
//! thematic breaks, and HTML comment headers.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::{Block, BlockKind, ParseMode};

/// Tokenize `text` into blocks.
///
/// In [`ParseMode::Import`] (or [`ParseMode::Auto`] when the document has no
/// HTML blocks at all) an empty header is inserted after every title and
/// chapter title, so plain manuscripts build with default metadata.
#[tracing::instrument(skip_all, fields(input_len = text.len(), mode = ?mode))]
pub fn walk(text: &str, mode: ParseMode) -> Vec<Block> {
    let mut walker = Walker::default();
    for event in Parser::new_ext(text, Options::empty()) {
        walker.event(event);
    }

    let import = match mode {
        ParseMode::Native => false,
        ParseMode::Import => true,
        ParseMode::Auto => !walker.saw_html,
    };
    tracing::debug!(blocks = walker.blocks.len(), import, "walked document");
    if import {
        synthesize_headers(walker.blocks)
    } else {
        walker.blocks
    }
}

fn synthesize_headers(blocks: Vec<Block>) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len() * 2);
    for block in blocks {
        let titled = matches!(block.kind, BlockKind::Title | BlockKind::ChapterTitle);
        out.push(block);
        if titled {
            out.push(Block::empty_header());
        }
    }
    out
}

#[derive(Default)]
struct Walker {
    blocks: Vec<Block>,
    /// Block being collected, if any.
    open: Option<BlockKind>,
    buf: String,
    /// Marker of the outermost emphasis span, closed when `depth` returns to 0.
    marker: Option<&'static str>,
    depth: usize,
    saw_html: bool,
}

impl Walker {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let kind = if level == HeadingLevel::H1 {
                    BlockKind::Title
                } else {
                    BlockKind::ChapterTitle
                };
                self.start(kind);
            }
            Event::Start(Tag::Paragraph) => self.start(BlockKind::Paragraph),
            Event::Start(Tag::HtmlBlock) => {
                self.saw_html = true;
                self.start(BlockKind::Header);
            }
            Event::End(TagEnd::Heading(_) | TagEnd::Paragraph | TagEnd::HtmlBlock) => self.finish(),

            Event::Start(Tag::Emphasis) => self.emphasis_start("*"),
            Event::Start(Tag::Strong) => self.emphasis_start("**"),
            Event::End(TagEnd::Emphasis | TagEnd::Strong) => self.emphasis_end(),

            Event::Text(t) | Event::Code(t) | Event::Html(t) | Event::InlineHtml(t) => {
                self.push(&t);
            }
            Event::SoftBreak | Event::HardBreak => self.push(" "),

            Event::Rule => self.blocks.push(Block::empty_header()),

            Event::Start(Tag::CodeBlock(_)) => tracing::debug!("skipping code block"),
            Event::Start(Tag::List(_)) => tracing::debug!("skipping list items outside paragraphs"),
            _ => {}
        }
    }

    fn start(&mut self, kind: BlockKind) {
        self.open = Some(kind);
        self.buf.clear();
        self.marker = None;
        self.depth = 0;
    }

    fn push(&mut self, text: &str) {
        if self.open.is_some() {
            self.buf.push_str(text);
        }
    }

    fn emphasis_start(&mut self, marker: &'static str) {
        if self.open != Some(BlockKind::Paragraph) {
            return;
        }
        if self.depth == 0 {
            self.buf.push_str(marker);
            self.marker = Some(marker);
        }
        self.depth += 1;
    }

    fn emphasis_end(&mut self) {
        if self.open != Some(BlockKind::Paragraph) || self.depth == 0 {
            return;
        }
        self.depth -= 1;
        if self.depth == 0
            && let Some(marker) = self.marker.take()
        {
            self.buf.push_str(marker);
        }
    }

    fn finish(&mut self) {
        let Some(kind) = self.open.take() else {
            return;
        };
        let text = std::mem::take(&mut self.buf);
        let content = match kind {
            BlockKind::Header => strip_comment(&text),
            _ => text.trim(),
        };
        if kind == BlockKind::Paragraph && content.is_empty() {
            tracing::debug!("dropping empty paragraph");
            return;
        }
        self.blocks.push(Block::new(kind, content));
    }
}

fn strip_comment(html: &str) -> &str {
    let html = html.trim();
    let html = html.strip_prefix("<!--").unwrap_or(html);
    let html = html.strip_suffix("-->").unwrap_or(html);
    html.trim()
}
