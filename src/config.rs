// src/config.rs
use std::path::PathBuf;

use crate::args::Args;

/// The immutable option set for one run, built once from the parsed
/// arguments. A parameterized filter is enabled iff its value is `Some`,
/// so parameters cannot exist without their flag.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub remove_blank_lines: bool,
    pub delete: Option<u8>,
    pub replace: Option<(u8, u8)>,
    pub lower: bool,
    pub upper: bool,
    pub line_numbers: bool,
    /// Spaces per tab; `None` disables tab expansion entirely.
    pub tab_width: Option<u32>,
    pub files: Vec<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            remove_blank_lines: args.remove_blank_lines,
            delete: args.delete.map(|c| c.0),
            replace: args.replace.map(|p| (p.0, p.1)),
            lower: args.tolower,
            upper: args.toupper,
            line_numbers: args.line_numbers,
            tab_width: args.expand_tabs.map(|w| w.0),
            files: args.files,
        }
    }
}
