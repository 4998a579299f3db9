//! Analyze command: readability, passive voice, and adverbs for a selection.

use anyhow::bail;
use bookframe_core::analytics::{self, Difficulty, ProseReport};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{load_book, select, selected_text};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Book to analyze.
    pub file: Utf8PathBuf,

    /// Only this chapter (1-based).
    #[arg(long)]
    pub chapter: Option<usize>,

    /// Only this scene of the chapter (1-based).
    #[arg(long, requires = "chapter")]
    pub scene: Option<usize>,

    /// Fail when the Flesch Reading Ease falls below this score.
    #[arg(long, value_name = "SCORE")]
    pub min_ease: Option<f64>,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    #[serde(flatten)]
    report: &'a ProseReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_reading_ease: Option<f64>,
    pass: bool,
}

/// Score the prose of the selected part of a book.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_ease: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, chapter = ?args.chapter, scene = ?args.scene, "executing analyze command");

    let book = load_book(&args.file, max_input_bytes)?;
    let selection = select(&book, args.chapter, args.scene)?;
    let report = analytics::annotate(&selected_text(&book, &selection));

    let min_ease = args.min_ease.or(config_min_ease);
    let score = report.readability.reading_ease;
    let pass = min_ease.is_none_or(|min| score >= min);

    if global_json {
        let out = AnalyzeReport {
            report: &report,
            min_reading_ease: min_ease,
            pass,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_report(&args.file, &report);
    }

    if !pass {
        bail!(
            "{} reads at {:.1} (min: {:.1}). Shorten sentences or prefer shorter words.",
            args.file,
            score,
            min_ease.unwrap_or_default(),
        );
    }
    Ok(())
}

fn print_report(file: &Utf8Path, report: &ProseReport) {
    let r = &report.readability;
    let difficulty = match r.difficulty {
        Difficulty::Ok => r.difficulty.as_str().green().to_string(),
        Difficulty::Hard => r.difficulty.as_str().yellow().to_string(),
        Difficulty::VeryHard => r.difficulty.as_str().red().to_string(),
    };

    println!("{}", file.bold());
    println!(
        "\n  {} {:.1} ({}), {} sentences, {} words, {} syllables",
        "Reading ease:".cyan(),
        r.reading_ease,
        difficulty,
        r.sentences,
        r.words,
        r.syllables,
    );
    println!("  {} {:.1}%", "Unique words:".cyan(), r.token_type_ratio);

    let passive: Vec<&str> = report
        .passive_spans()
        .map(|span| span.slice(&report.text))
        .collect();
    println!("  {} {}", "Passive clauses:".cyan(), passive.len());
    for clause in &passive {
        println!("    {}", clause.dimmed());
    }

    println!("  {} {}", "Adverbs:".cyan(), report.adverbs.len());

    let hard: Vec<_> = report
        .sentences_with(Difficulty::VeryHard)
        .map(|s| s.span.slice(&report.text))
        .collect();
    if !hard.is_empty() {
        println!("\n  {}", "Very hard sentences:".yellow());
        for sentence in hard {
            println!("    {sentence}");
        }
    }
}
