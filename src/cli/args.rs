//! CLI argument definitions using clap.
//!
//! Every flag is optional: running `locale-extract` with no arguments scans
//! `./src` and writes `./locale/en.json`. Flags override values from the
//! configuration file, which override the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Repository root; paths are resolved and reported relative to it
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory to scan, relative to the root (overrides config file)
    #[arg(long)]
    pub source_root: Option<String>,

    /// Locale file to write, relative to the root (overrides config file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Source file extension to scan (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Report matches without writing the locale file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Apply command-line overrides on top of `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(source_root) = &self.source_root {
            config.source_root = source_root.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
    }
}
