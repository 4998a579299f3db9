//! Format command: rewrite a book in its canonical layout.

use anyhow::Context;
use bookframe_core::Book;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::read_input_file;

/// Arguments for the `format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Book to format.
    pub file: Utf8PathBuf,

    /// Overwrite the file instead of printing the result.
    #[arg(short, long)]
    pub write: bool,
}

#[derive(Serialize)]
struct FormatReport<'a> {
    file: &'a str,
    changed: bool,
    written: bool,
}

/// Re-serialize a book. Formatting a formatted book changes nothing.
#[instrument(name = "cmd_format", skip_all, fields(file = %args.file, write = args.write))]
pub fn cmd_format(
    args: FormatArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing format command");
    let original = read_input_file(&args.file, max_input_bytes)?;
    let book =
        Book::from_markdown(&original).with_context(|| format!("failed to parse {}", args.file))?;
    let formatted = book
        .to_markdown()
        .with_context(|| format!("failed to serialize {}", args.file))?;
    let changed = formatted.trim_end() != original.trim_end();

    if !args.write {
        println!("{formatted}");
        return Ok(());
    }

    if changed {
        std::fs::write(args.file.as_std_path(), format!("{formatted}\n"))
            .with_context(|| format!("failed to write {}", args.file))?;
        info!(file = %args.file, "book reformatted");
    }

    if global_json {
        let report = FormatReport {
            file: args.file.as_str(),
            changed,
            written: changed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if changed {
        println!("{} {}", "formatted".green(), args.file);
    } else {
        println!("{} {}", "unchanged".dimmed(), args.file);
    }
    Ok(())
}
