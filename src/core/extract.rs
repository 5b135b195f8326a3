//! The extraction run: scan, match, decode, accumulate, write.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

use super::{
    catalog::{Catalog, InsertOutcome},
    literal, matcher,
    scanner::scan_files,
};
use crate::config::Config;

/// Resolved inputs of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Repository root; diagnostics print paths relative to it.
    pub root: PathBuf,
    pub source_dir: PathBuf,
    pub output: PathBuf,
    /// Extension without the leading dot.
    pub extension: String,
    pub ignores: Vec<Pattern>,
    /// Scan and report, but never touch the output file.
    pub dry_run: bool,
}

impl ExtractOptions {
    /// Resolve `config` against `root`.
    pub fn from_config(root: &Path, config: &Config) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            source_dir: root.join(&config.source_root),
            output: root.join(&config.output),
            extension: config.extension().to_string(),
            ignores: config.ignore_patterns()?,
            dry_run: false,
        })
    }
}

/// What happened to the output file at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    Written,
    /// No strings were found; any existing file was left alone.
    SkippedEmpty,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    pub files_ignored: usize,
    pub match_count: usize,
    pub string_count: usize,
    pub duplicate_count: usize,
    pub output: OutputStatus,
}

/// Run with the default layout (`src/**/*.rs` into `locale/en.json`),
/// printing diagnostics to stdout.
pub fn run(root: &Path) -> Result<ExtractSummary> {
    let options = ExtractOptions::from_config(root, &Config::default())?;
    extract(&options, &mut io::stdout().lock())
}

/// Extract every `t!("...")` literal under the source directory.
///
/// Each match is reported to `out` as `<relative-path>:<line>: <token>`.
/// The catalog is written only after every file has been processed, so an
/// error part-way through leaves any previous output untouched.
pub fn extract<W: Write>(options: &ExtractOptions, out: &mut W) -> Result<ExtractSummary> {
    let scan = scan_files(
        &options.root,
        &options.source_dir,
        &options.extension,
        &options.ignores,
    )?;

    let mut catalog = Catalog::new();
    let mut match_count = 0;
    let mut duplicate_count = 0;

    for path in &scan.files {
        let relative = path.strip_prefix(&options.root).unwrap_or(path.as_path());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", relative.display()))?;

        for (index, line) in matcher::source_lines(&content).enumerate() {
            let line_number = index + 1;

            for call in matcher::find_calls(line) {
                writeln!(out, "{}:{}: {}", relative.display(), line_number, call.token)?;
                match_count += 1;

                let text = literal::decode(call.token).with_context(|| {
                    format!(
                        "Invalid string literal {} at {}:{}:{}",
                        call.token,
                        relative.display(),
                        line_number,
                        call.column + 1
                    )
                })?;

                if catalog.insert(text) == InsertOutcome::Duplicate {
                    duplicate_count += 1;
                }
            }
        }
    }

    let output = if catalog.is_empty() {
        OutputStatus::SkippedEmpty
    } else if options.dry_run {
        OutputStatus::DryRun
    } else {
        catalog.save(&options.output)?;
        OutputStatus::Written
    };

    Ok(ExtractSummary {
        files_scanned: scan.files.len(),
        files_ignored: scan.ignored_count,
        match_count,
        string_count: catalog.len(),
        duplicate_count,
        output,
    })
}
