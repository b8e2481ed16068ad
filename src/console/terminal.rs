//! Terminal-backed console

use super::Console;
use std::io::{self, BufRead, Write};

/// Console over a buffered reader and a writer, normally stdin and stdout
///
/// Only the line terminator is stripped from input; other whitespace is
/// kept so the game sees exactly what the player typed. Bytes that are not
/// UTF-8 are replaced rather than failing the read. The first end of
/// input is reported as an absent line, every later read as
/// `UnexpectedEof`, so a closed stream cannot keep a game loop spinning.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    eof_seen: bool,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Bind to the process stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Create a console over any reader and writer
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            eof_seen: false,
        }
    }

    /// Consume the console, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.eof_seen {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            self.eof_seen = true;
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        // Invalid UTF-8 becomes U+FFFD, which no code accepts
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        // Prompts must be visible before the blocking read
        self.writer.flush()
    }
}
