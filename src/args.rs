// src/args.rs
use std::path::PathBuf;

use clap::Parser;

use crate::parsers::{CharArg, ReplacePairArg, TabWidthArg};

/// Usage text printed for `-h`/`--help`.
pub const USAGE: &str = "\
Usage: filter [options] [file1 file2 ...]
Options:
 -b  --remove-blank-lines  removes empty lines.
 -d  --delete=X            deletes all occurrences of char X.
 -h  --help                display this information.
 -l  --tolower             convert all characters to lower case.
 -n  --line-numbers        prepend line numbers to each line.
 -r  --replace=XY          replace all char X with char Y.
 -u  --toupper             convert all characters to upper case.
 -x  --expand-tabs[=X]     convert tabs to X spaces (default is 8).
";

/// Top-level CLI arguments parsed via clap.
///
/// The built-in help flag is disabled so `-h`/`--help` can reproduce the
/// fixed usage text above instead of clap's generated help.
#[derive(Parser, Debug)]
#[command(
    name = "filter",
    version = crate::VERSION,
    disable_help_flag = true,
    override_usage = "filter [options] [file1 file2 ...]"
)]
pub struct Args {
    /// Display usage information and exit.
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Collapse consecutive blank lines.
    #[arg(short = 'b', long = "remove-blank-lines")]
    pub remove_blank_lines: bool,

    /// Delete all occurrences of char X.
    #[arg(short = 'd', long = "delete", value_name = "X")]
    pub delete: Option<CharArg>,

    /// Replace all char X with char Y.
    #[arg(short = 'r', long = "replace", value_name = "XY")]
    pub replace: Option<ReplacePairArg>,

    /// Convert all characters to lower case.
    #[arg(short = 'l', long = "tolower")]
    pub tolower: bool,

    /// Convert all characters to upper case.
    #[arg(short = 'u', long = "toupper")]
    pub toupper: bool,

    /// Prepend line numbers to each line.
    #[arg(short = 'n', long = "line-numbers")]
    pub line_numbers: bool,

    /// Expand tabs to X spaces (default 8 when the value is omitted).
    #[arg(
        short = 'x',
        long = "expand-tabs",
        value_name = "X",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "8"
    )]
    pub expand_tabs: Option<TabWidthArg>,

    /// Files to filter; standard input when none are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
