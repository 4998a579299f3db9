//! Compile command: print-ready Markdown.

use bookframe_core::codec;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use super::{load_book, write_output};

/// Arguments for the `compile` subcommand.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Book to compile.
    pub file: Utf8PathBuf,

    /// Where to write the result (default: stdout).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Strip metadata and lay the book out for typesetting.
#[instrument(name = "cmd_compile", skip_all, fields(file = %args.file))]
pub fn cmd_compile(args: CompileArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(file = %args.file, output = ?args.output, "executing compile command");
    let book = load_book(&args.file, max_input_bytes)?;
    write_output(args.output.as_deref(), &codec::compile(&book))
}
