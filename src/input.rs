// src/input.rs
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Opens one input source for filtering.
///
/// Recovery policy: a path that cannot be opened is substituted with
/// standard input, after a warning on stderr. The file closes when the
/// returned reader is dropped.
pub fn open_input(path: &Path) -> Box<dyn Read> {
    match File::open(path) {
        Ok(file) => Box::new(file),
        Err(err) => {
            eprintln!(
                "Warning: cannot open {}: {err}; reading from standard input",
                path.display()
            );
            Box::new(io::stdin())
        }
    }
}
