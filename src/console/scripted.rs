//! Scripted console for tests and automated drivers

use super::Console;
use std::collections::VecDeque;
use std::io;

/// Console that replays a fixed script and records a transcript
///
/// Each script entry is one read: `Some(line)` for a line, `None` for an
/// absent line. Once the script is used up, reads fail with
/// `UnexpectedEof`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<Option<String>>,
    lines: Vec<String>,
    pending: String,
    reads: usize,
}

impl ScriptedConsole {
    /// Create a console that answers reads with `inputs`, in order
    ///
    /// # Examples
    /// ```
    /// use mastermind::console::{Console, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::new(["1234"]);
    /// assert_eq!(console.read_line().unwrap().as_deref(), Some("1234"));
    /// assert!(console.read_line().is_err());
    /// ```
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_script(inputs.into_iter().map(|s| Some(s.into())))
    }

    /// Create a console from reads that may be absent
    pub fn from_script<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            inputs: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Completed output lines, in order
    ///
    /// Partial writes are joined with the line that completes them, so a
    /// prompt followed by a result appears as one line.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Everything written so far, including an unfinished last line
    #[must_use]
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&self.pending);
        out
    }

    /// Number of output lines containing `needle`
    #[must_use]
    pub fn count_lines_containing(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }

    /// Number of reads performed
    #[must_use]
    pub const fn reads(&self) -> usize {
        self.reads
    }

    /// Script entries not yet consumed
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let next = self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })?;
        self.reads += 1;
        Ok(next)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut line = std::mem::take(&mut self.pending);
        line.push_str(text);
        self.lines.push(line);
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.pending.push_str(text);
        Ok(())
    }
}
