// src/stages.rs
//! The seven filter stages and their fixed application order.
//!
//! A character flows through the pipeline as an `Option<u8>` cell:
//! `Some(byte)` is a live character, `None` means it has been suppressed
//! by an earlier stage. Suppression is a distinct marker, so a literal
//! NUL byte in the input is never mistaken for a dropped character.
//! Remaining stages still see a suppressed cell; they simply pass it on.

use std::io::{self, Write};

use crate::config::Config;

/// One enabled transformation, with its parameters baked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Delete(u8),
    Replace(u8, u8),
    Upper,
    Lower,
    LineNumbers,
    BlankLines,
    ExpandTabs(u32),
}

/// The ordered stage chain plus the line-numbering state it carries.
///
/// The stage order is a hard contract: delete and replace run before the
/// case filters, and line numbering runs before blank-line removal so a
/// number is still printed for a line that is then collapsed away. The
/// line counter deliberately keeps running across input files; only the
/// beginning-of-file flag resets per file.
#[derive(Debug)]
pub struct Pipeline {
    stages: Vec<Stage>,
    line_count: u64,
    at_file_start: bool,
}

impl Pipeline {
    /// Builds the chain from the option set, always in the fixed order.
    pub fn from_config(config: &Config) -> Self {
        let mut stages = Vec::new();
        if let Some(target) = config.delete {
            stages.push(Stage::Delete(target));
        }
        if let Some((from, to)) = config.replace {
            stages.push(Stage::Replace(from, to));
        }
        if config.upper {
            stages.push(Stage::Upper);
        }
        if config.lower {
            stages.push(Stage::Lower);
        }
        if config.line_numbers {
            stages.push(Stage::LineNumbers);
        }
        if config.remove_blank_lines {
            stages.push(Stage::BlankLines);
        }
        if let Some(width) = config.tab_width {
            stages.push(Stage::ExpandTabs(width));
        }
        Self {
            stages,
            line_count: 0,
            at_file_start: true,
        }
    }

    /// Marks the start of a new input file. The line counter is left alone.
    pub fn begin_file(&mut self) {
        self.at_file_start = true;
    }

    /// Runs one cell through every stage in order.
    ///
    /// `prev` is the previous *emitted* byte (`None` right after a
    /// suppression, so blank-line and line-start detection see a clean
    /// boundary). Line-number prefixes and expanded tabs are written to
    /// `out` as side effects before the surviving cell itself would be.
    pub fn apply<W: Write>(
        &mut self,
        mut cell: Option<u8>,
        prev: Option<u8>,
        out: &mut W,
    ) -> io::Result<Option<u8>> {
        for i in 0..self.stages.len() {
            cell = match self.stages[i] {
                Stage::Delete(target) => cell.filter(|&c| c != target),
                Stage::Replace(from, to) => cell.map(|c| if c == from { to } else { c }),
                Stage::Upper => cell.map(|c| c.to_ascii_uppercase()),
                Stage::Lower => cell.map(|c| c.to_ascii_lowercase()),
                Stage::LineNumbers => {
                    if cell.is_some() && (self.at_file_start || prev == Some(b'\n')) {
                        self.line_count += 1;
                        write!(out, "{:6}  ", self.line_count)?;
                        self.at_file_start = false;
                    }
                    cell
                }
                Stage::BlankLines => {
                    if cell == Some(b'\n') && prev == Some(b'\n') {
                        None
                    } else {
                        cell
                    }
                }
                Stage::ExpandTabs(width) => {
                    if cell == Some(b'\t') {
                        for _ in 0..width {
                            out.write_all(b" ")?;
                        }
                        None
                    } else {
                        cell
                    }
                }
            };
        }
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(config: &Config) -> Pipeline {
        Pipeline::from_config(config)
    }

    #[test]
    fn stage_order_is_fixed() {
        let config = Config {
            remove_blank_lines: true,
            delete: Some(b'a'),
            replace: Some((b'x', b'y')),
            lower: true,
            upper: true,
            line_numbers: true,
            tab_width: Some(8),
            ..Config::default()
        };
        let p = pipeline(&config);
        assert_eq!(
            p.stages,
            vec![
                Stage::Delete(b'a'),
                Stage::Replace(b'x', b'y'),
                Stage::Upper,
                Stage::Lower,
                Stage::LineNumbers,
                Stage::BlankLines,
                Stage::ExpandTabs(8),
            ]
        );
    }

    #[test]
    fn delete_suppresses_matching_byte() {
        let config = Config {
            delete: Some(b'a'),
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        assert_eq!(p.apply(Some(b'a'), None, &mut out).unwrap(), None);
        assert_eq!(p.apply(Some(b'b'), None, &mut out).unwrap(), Some(b'b'));
        assert!(out.is_empty());
    }

    #[test]
    fn delete_wins_over_replace_on_same_target() {
        let config = Config {
            delete: Some(b'a'),
            replace: Some((b'a', b'b')),
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        // The deleted cell stays suppressed through the replace stage.
        assert_eq!(p.apply(Some(b'a'), None, &mut out).unwrap(), None);
    }

    #[test]
    fn replace_substitutes_target_byte() {
        let config = Config {
            replace: Some((b'a', b'b')),
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        assert_eq!(p.apply(Some(b'a'), None, &mut out).unwrap(), Some(b'b'));
        assert_eq!(p.apply(Some(b'n'), None, &mut out).unwrap(), Some(b'n'));
    }

    #[test]
    fn case_stages_leave_non_letters_alone() {
        let upper = Config {
            upper: true,
            ..Config::default()
        };
        let mut p = pipeline(&upper);
        let mut out = Vec::new();
        assert_eq!(p.apply(Some(b'a'), None, &mut out).unwrap(), Some(b'A'));
        assert_eq!(p.apply(Some(b'3'), None, &mut out).unwrap(), Some(b'3'));
        assert_eq!(p.apply(Some(b'\n'), None, &mut out).unwrap(), Some(b'\n'));
    }

    #[test]
    fn upper_then_lower_ends_lowercase() {
        let config = Config {
            upper: true,
            lower: true,
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        assert_eq!(p.apply(Some(b'A'), None, &mut out).unwrap(), Some(b'a'));
        assert_eq!(p.apply(Some(b'b'), None, &mut out).unwrap(), Some(b'b'));
    }

    #[test]
    fn line_number_fires_at_file_start_and_after_newline() {
        let config = Config {
            line_numbers: true,
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();

        assert_eq!(p.apply(Some(b'a'), None, &mut out).unwrap(), Some(b'a'));
        assert_eq!(out, b"     1  ");

        out.clear();
        assert_eq!(
            p.apply(Some(b'b'), Some(b'a'), &mut out).unwrap(),
            Some(b'b')
        );
        assert!(out.is_empty());

        assert_eq!(
            p.apply(Some(b'c'), Some(b'\n'), &mut out).unwrap(),
            Some(b'c')
        );
        assert_eq!(out, b"     2  ");
    }

    #[test]
    fn line_number_prefix_precedes_a_suppressed_blank_line() {
        let config = Config {
            line_numbers: true,
            remove_blank_lines: true,
            ..Config::default()
        };
        let mut p = pipeline(&config);
        p.at_file_start = false;
        let mut out = Vec::new();

        // Second newline of a blank pair: numbered, then collapsed.
        assert_eq!(p.apply(Some(b'\n'), Some(b'\n'), &mut out).unwrap(), None);
        assert_eq!(out, b"     1  ");
    }

    #[test]
    fn blank_line_stage_collapses_second_newline_only() {
        let config = Config {
            remove_blank_lines: true,
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        assert_eq!(
            p.apply(Some(b'\n'), Some(b'a'), &mut out).unwrap(),
            Some(b'\n')
        );
        assert_eq!(p.apply(Some(b'\n'), Some(b'\n'), &mut out).unwrap(), None);
        // A suppressed previous cell is a clean boundary, not a newline.
        assert_eq!(p.apply(Some(b'\n'), None, &mut out).unwrap(), Some(b'\n'));
    }

    #[test]
    fn tab_expansion_writes_spaces_and_suppresses_the_tab() {
        let config = Config {
            tab_width: Some(4),
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        assert_eq!(p.apply(Some(b'\t'), None, &mut out).unwrap(), None);
        assert_eq!(out, b"    ");

        out.clear();
        assert_eq!(p.apply(Some(b'x'), None, &mut out).unwrap(), Some(b'x'));
        assert!(out.is_empty());
    }

    #[test]
    fn zero_tab_width_drops_tabs_outright() {
        let config = Config {
            tab_width: Some(0),
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        assert_eq!(p.apply(Some(b'\t'), None, &mut out).unwrap(), None);
        assert!(out.is_empty());
    }

    #[test]
    fn nul_byte_is_a_real_character() {
        let config = Config {
            replace: Some((b'a', b'b')),
            ..Config::default()
        };
        let mut p = pipeline(&config);
        let mut out = Vec::new();
        assert_eq!(p.apply(Some(0), None, &mut out).unwrap(), Some(0));
    }
}
