//! locale-extract - seed a base locale file from `t!()` calls
//!
//! Scans a source tree for `t!("...")` translation macros, decodes each string
//! literal and writes the set of strings to a JSON locale file in which every
//! key maps to itself.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit codes)
//! - `config`: Optional configuration file loading and parsing
//! - `core`: Extraction engine (scan, match, decode, write)

pub mod cli;
pub mod config;
pub mod core;
