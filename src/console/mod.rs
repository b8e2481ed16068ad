//! Line-oriented input/output port
//!
//! The game engine talks to the player only through [`Console`]. The crate
//! ships a terminal-backed implementation and a scripted one for tests and
//! harnesses.

mod scripted;
mod terminal;

pub use scripted::ScriptedConsole;
pub use terminal::TerminalConsole;

use std::io;

/// Capability to read and write lines of text
pub trait Console {
    /// Read one line without its line terminator
    ///
    /// Returns `Ok(None)` when no line is available (end of input).
    ///
    /// # Errors
    /// Returns an I/O error if the underlying source fails. A source that
    /// can never produce input again reports `io::ErrorKind::UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write `text` followed by a newline
    ///
    /// # Errors
    /// Returns an I/O error if the underlying sink fails.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` without a trailing newline
    ///
    /// # Errors
    /// Returns an I/O error if the underlying sink fails.
    fn write(&mut self, text: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }
}
