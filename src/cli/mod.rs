use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::{ExtractOptions, extract};

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod report;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let verbose = args.verbose;

    let loaded = load_config(&root)?;
    let mut config = loaded.config;
    args.apply_overrides(&mut config);
    config.validate()?;

    let mut options = ExtractOptions::from_config(&root, &config)?;
    options.dry_run = args.dry_run;

    if verbose {
        let config_file = loaded.from_file.then_some(Path::new(CONFIG_FILE_NAME));
        report::print_settings(&options, config_file);
    }

    let summary = extract(&options, &mut std::io::stdout().lock())?;
    let output = options
        .output
        .strip_prefix(&root)
        .unwrap_or(options.output.as_path());
    report::print_summary(&summary, output, verbose);

    Ok(ExitStatus::Success)
}
