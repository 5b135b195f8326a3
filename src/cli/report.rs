//! Status output on stderr.
//!
//! Stdout carries only the `<path>:<line>: <token>` match lines, so everything
//! here goes to stderr.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::{ExtractOptions, ExtractSummary, OutputStatus};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_settings(options: &ExtractOptions, config_file: Option<&Path>) {
    print_settings_to(options, config_file, &mut io::stderr().lock());
}

fn print_settings_to<W: Write>(
    options: &ExtractOptions,
    config_file: Option<&Path>,
    writer: &mut W,
) {
    let note = "note:".bold().cyan();
    match config_file {
        Some(path) => {
            let _ = writeln!(writer, "{} using config {}", note, path.display());
        }
        None => {
            let _ = writeln!(writer, "{} no config file, using defaults", note);
        }
    }
    let _ = writeln!(
        writer,
        "{} scanning {} for *.{} files",
        note,
        options.source_dir.display(),
        options.extension
    );
}

pub fn print_summary(summary: &ExtractSummary, output: &Path, verbose: bool) {
    print_summary_to(summary, output, verbose, &mut io::stderr().lock());
}

fn print_summary_to<W: Write>(
    summary: &ExtractSummary,
    output: &Path,
    verbose: bool,
    writer: &mut W,
) {
    match summary.output {
        OutputStatus::Written => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Extracted {} {} from {} into {}",
                    summary.string_count,
                    plural(summary.string_count, "string", "strings"),
                    files(summary.files_scanned),
                    output.display()
                )
                .green()
            );
        }
        OutputStatus::DryRun => {
            let _ = writeln!(
                writer,
                "{} {} {} from {} to {}.",
                "Would write".yellow().bold(),
                summary.string_count,
                plural(summary.string_count, "string", "strings"),
                files(summary.files_scanned),
                output.display()
            );
            let _ = writeln!(
                writer,
                "Run without {} to write the locale file.",
                "--dry-run".cyan()
            );
        }
        OutputStatus::SkippedEmpty => {
            let _ = writeln!(
                writer,
                "{} no translatable strings found in {}; {} was not written",
                "warning:".bold().yellow(),
                files(summary.files_scanned),
                output.display()
            );
        }
    }

    if verbose {
        let _ = writeln!(
            writer,
            "{} {} {}, {} duplicate(s) collapsed, {} ignored",
            "note:".bold().cyan(),
            summary.match_count,
            plural(summary.match_count, "match", "matches"),
            summary.duplicate_count,
            files(summary.files_ignored)
        );
    }
}

fn files(count: usize) -> String {
    format!("{} {}", count, plural(count, "file", "files"))
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
