//! Line command: where a chapter or scene starts, for jumping there in an editor.

use anyhow::Context;
use bookframe_core::codec::line_for_from;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{load_book, select};

/// Arguments for the `line` subcommand.
#[derive(Args, Debug)]
pub struct LineArgs {
    /// Book to read.
    pub file: Utf8PathBuf,

    /// Chapter number, starting at 1.
    #[arg(long)]
    pub chapter: usize,

    /// Scene number within the chapter, starting at 1.
    #[arg(long)]
    pub scene: Option<usize>,
}

#[derive(Serialize)]
struct LineReport {
    chapter: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    scene: Option<usize>,
    line: usize,
}

/// Print the line on which the selected chapter or scene begins.
///
/// Lines are counted in the canonical layout, so run `format` first on a
/// hand-edited file.
#[instrument(name = "cmd_line", skip_all, fields(file = %args.file, chapter = args.chapter))]
pub fn cmd_line(
    args: LineArgs,
    global_json: bool,
    first_line: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, scene = ?args.scene, first_line, "executing line command");
    let book = load_book(&args.file, max_input_bytes)?;
    let selection = select(&book, Some(args.chapter), args.scene)?;
    let line = line_for_from(&book, &selection, first_line)
        .with_context(|| format!("selection not found in {}", args.file))?;

    if global_json {
        let report = LineReport {
            chapter: args.chapter,
            scene: args.scene,
            line,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{line}");
    }
    Ok(())
}
