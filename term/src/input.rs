use std::io::{self, BufRead};
use std::str;

use minefield_core::{Command, GameError};

/// Anything that can hand the game loop one player command at a time.
pub trait CommandSource {
    /// `Ok(None)` once input is exhausted. The inner result carries parse failures, which the
    /// loop reports and moves past.
    fn next_command(&mut self) -> io::Result<Option<minefield_core::Result<Command>>>;
}

/// Reads one command per line.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> CommandSource for LineSource<R> {
    fn next_command(&mut self) -> io::Result<Option<minefield_core::Result<Command>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let parsed = str::from_utf8(&self.buf)
            .map_err(|_| GameError::InvalidCommandShape)
            .and_then(|line| line.parse());
        log::trace!("input {:?} -> {:?}", String::from_utf8_lossy(&self.buf), parsed);
        Ok(Some(parsed))
    }
}
