//! Command-line argument parsing for the stanza tool
//!
//! Supports:
//! - Opening plain, `.gz`, and `.bz2` files
//! - Explicit decode encoding
//! - Head/tail/find/template queries over the loaded buffer

use clap::Parser;
use std::path::PathBuf;

/// Inspect line-oriented text files, compressed or re-encoded
#[derive(Parser, Debug)]
#[command(name = "stanza", version, about = "Inspect line-oriented text files")]
pub struct CliArgs {
    /// File to open (.gz and .bz2 are decompressed automatically)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Decode with this encoding instead of UTF-8 (e.g. "iso-8859-1")
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Print only the first N lines
    #[arg(long, value_name = "N")]
    pub head: Option<usize>,

    /// Print only the last N lines
    #[arg(long, value_name = "N")]
    pub tail: Option<usize>,

    /// Print the indices of lines containing PATTERN
    #[arg(long, value_name = "PATTERN")]
    pub find: Option<String>,

    /// Print the distinct {name} template placeholders
    #[arg(long)]
    pub templates: bool,

    /// Print the distinct {{name}} constants
    #[arg(long)]
    pub constants: bool,

    /// Drop blank lines before printing
    #[arg(long)]
    pub strip_blank: bool,
}
