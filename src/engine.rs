// src/engine.rs
//! The per-file stream loop: drain one source byte by byte, run each byte
//! through the stage chain, and emit whatever survives.

use std::io::{self, BufReader, Read, Write};

use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::stages::Pipeline;

/// Filters every input in the file list (or standard input when the list
/// is empty) to standard output, strictly in order, one at a time.
pub fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut out = io::BufWriter::new(stdout);
    let mut pipeline = Pipeline::from_config(config);

    if config.files.is_empty() {
        filter_stream(&mut pipeline, io::stdin().lock(), &mut out)?;
    } else {
        for path in &config.files {
            let reader = input::open_input(path);
            filter_stream(&mut pipeline, reader, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Drains one source through the pipeline.
///
/// Each byte flows through the stage chain with the previous *emitted*
/// byte as context; a surviving byte is written and becomes the new
/// context, a suppressed one resets the context to a clean boundary.
/// End-of-stream is never fed through the chain.
pub fn filter_stream<R: Read, W: Write>(
    pipeline: &mut Pipeline,
    reader: R,
    out: &mut W,
) -> Result<()> {
    pipeline.begin_file();
    let mut prev: Option<u8> = None;

    for byte in BufReader::new(reader).bytes() {
        match pipeline.apply(Some(byte?), prev, out)? {
            Some(emitted) => {
                out.write_all(&[emitted])?;
                prev = Some(emitted);
            }
            None => prev = None,
        }
    }

    Ok(())
}
