//! Backslash escapes for writing model text back out as Markdown.
//!
//! The walker stores text with Markdown escapes already resolved, so anything
//! a Markdown reader would take as structure gets a backslash on the way out.
//! Paragraph `*` is left alone since it is how the model spells emphasis.

use std::sync::LazyLock;

use regex::Regex;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{0,31});")
        .expect("valid regex")
});

/// Escape paragraph text so it reads back as a single paragraph with the same
/// content, rather than a heading, list item, quote, rule, fence or HTML block.
pub fn escape_paragraph(text: &str) -> String {
    escape(text, block_marker(text), |_| false)
}

/// Escape heading text. Headings keep no inline markup, so `*` and `#` are
/// escaped as well.
pub fn escape_heading(text: &str) -> String {
    escape(text, None, |c| matches!(c, '*' | '#'))
}

fn escape(text: &str, marker: Option<usize>, always: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for (i, c) in text.char_indices() {
        let next = text[i + c.len_utf8()..].chars().next();
        let needed = marker == Some(i)
            || always(c)
            || match c {
                '_' | '`' | '[' => true,
                '\\' => next.is_some_and(|n| n.is_ascii_punctuation()),
                '<' => next.is_some_and(|n| n.is_ascii_alphabetic() || matches!(n, '/' | '!' | '?')),
                '&' => ENTITY.is_match(&text[i..]),
                _ => false,
            };
        if needed {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Byte offset of the character that would open a block other than a
/// paragraph at the start of `text`.
fn block_marker(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let spaced = |at: usize| bytes.get(at).is_none_or(|&b| matches!(b, b' ' | b'\t'));
    match *bytes.first()? {
        b'#' | b'>' | b'-' | b'+' | b'~' => Some(0),
        b'*' if spaced(1) || bytes.iter().all(|&b| matches!(b, b'*' | b' ' | b'\t')) => Some(0),
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            let delimited = matches!(bytes.get(digits), Some(b'.' | b')')) && spaced(digits + 1);
            (digits <= 9 && delimited).then_some(digits)
        }
        _ => None,
    }
}
