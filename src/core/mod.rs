//! Extraction engine.
//!
//! The pipeline runs strictly in order on a single thread:
//!
//! 1. `scanner`: enumerate source files in stable path order
//! 2. `matcher`: find `t!("...")` calls line by line
//! 3. `literal`: decode each quoted token through a fixed escape table
//! 4. `catalog`: collect the identity mapping and write it as JSON
//!
//! `extract` drives the steps for one run.

pub mod catalog;
pub mod extract;
pub mod literal;
pub mod matcher;
pub mod scanner;

pub use catalog::{Catalog, InsertOutcome};
pub use extract::{ExtractOptions, ExtractSummary, OutputStatus, extract, run};
pub use literal::{LiteralError, decode};
pub use matcher::{LineMatch, find_calls};
pub use scanner::{ScanResult, scan_files};
