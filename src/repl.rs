//! The interactive prompt. One word per line in, every word sharing its
//! letters out.

use std::io::{BufRead, Write};

use log::trace;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::lossy_lines::LossyLines;

pub const PROMPT: &str = ">> ";
pub const NO_SPACES: &str = "no spaces allowed";
pub const NO_RESULTS: &str = "no results found";

/// Reads queries from `input` until it runs dry, answering each on `output`.
pub fn run<R, W>(dictionary: &Dictionary, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = LossyLines::new(input);

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // got EOF, exit.
            None => break,
        };
        trace!("query {:?}", line);

        if line.chars().any(char::is_whitespace) {
            writeln!(output, "{}", NO_SPACES)?;
            continue;
        }

        let words = dictionary.lookup(&line);
        if words.is_empty() {
            writeln!(output, "{}", NO_RESULTS)?;
            continue;
        }

        for word in words {
            writeln!(output, "{}", word)?;
        }
    }

    writeln!(output)?;
    Ok(())
}
