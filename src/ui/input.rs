//! Line-oriented operator input.

use std::io::{self, BufRead};

/// Source of operator input lines.
pub trait LineSource {
    /// Read one line without its terminator. `Ok(None)` means end-of-input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// `LineSource` over any buffered reader.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_trimmed_line(&mut self.reader)
    }
}

/// Operator input from the process stdin.
///
/// Locks stdin per read only, so the renderer's pause prompt can read from it
/// between menu reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_trimmed_line(&mut io::stdin().lock())
    }
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
