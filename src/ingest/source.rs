use std::io::{BufRead, Read};

use anyhow::{Context, Result};

/// Longest run of bytes held while waiting for a newline. SMDR records are 80
/// columns wide.
pub const MAX_LINE_BYTES: usize = 4096;

/// Supplier of raw switch output, one complete line at a time
pub trait LineSource {
    /// Next complete line without its terminator, `Ok(None)` when no complete
    /// line is available right now. Retrying after `Ok(None)` is the caller's job.
    /// An `Err` means the transport is unusable.
    ///
    /// Implementations may block until input arrives; a source that can tell "no
    /// data yet" apart should return `Ok(None)` instead.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// [`LineSource`] over any buffered reader (an opened serial device, a capture
/// file, standard input)
///
/// Reads block on the underlying reader (a tty or stdin waits for the switch);
/// `Ok(None)` is returned at end of input, e.g. a capture file still being
/// written. Bytes read without a trailing newline are held back until the rest
/// of the line arrives, up to [`MAX_LINE_BYTES`]; a longer run without a newline
/// is line noise and is handed on as one line, which the parser rejects. When
/// `finite` is set, a trailing fragment is returned as the last line since no
/// more input will follow it.
pub struct ReaderLineSource<R> {
    reader: R,
    pending: Vec<u8>,
    finite: bool,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: Vec::new(), finite: false }
    }

    /// Treat end of input as the end of the stream rather than "nothing yet"
    pub fn finite(mut self) -> Self {
        self.finite = true;
        self
    }

    fn take_pending(&mut self) -> String {
        let mut line = std::mem::take(&mut self.pending);
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        String::from_utf8_lossy(&line).into_owned()
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        // pending is always shorter than the cap between calls
        let room = (MAX_LINE_BYTES - self.pending.len()) as u64;
        let read = (&mut self.reader)
            .take(room)
            .read_until(b'\n', &mut self.pending)
            .context("Failed to read from SMDR transport")?;

        if read == 0 {
            return Ok(None);
        }

        // Without a newline the read stopped at end of input or at the cap
        if self.finite
            || self.pending.last() == Some(&b'\n')
            || self.pending.len() >= MAX_LINE_BYTES
        {
            Ok(Some(self.take_pending()))
        } else {
            Ok(None)
        }
    }
}
