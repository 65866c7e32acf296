//! Terminal I/O used by the form engine.
//!
//! [`TerminalIO`] is the seam between the engine and the real terminal.
//! [`RealTerminal`] talks to stdin/stdout; [`MockTerminal`] replays scripted
//! answers and records everything written, for tests.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write a prompt without a trailing newline and flush.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Write a full line (a newline is appended).
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Read one line, including its terminator.
    ///
    /// An empty string means end of input.
    fn read_line(&self) -> io::Result<String>;
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        read_line_lossy(&mut io::stdin().lock())
    }
}

/// Reads one line, replacing invalid UTF-8 with `U+FFFD`.
///
/// An empty string means end of input.
pub fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Mock terminal for testing prompts.
///
/// Answers are returned in order; once they run out every read reports end
/// of input. Everything written is kept in a transcript.
///
/// ```rust
/// use termkit_input::{MockTerminal, TerminalIO};
///
/// let terminal = MockTerminal::with_responses(["first", "second"]);
/// terminal.write_prompt("Name: ").unwrap();
/// assert_eq!(terminal.read_line().unwrap(), "first\n");
/// assert_eq!(terminal.transcript(), "Name: first\n");
/// ```
#[derive(Debug, Default)]
pub struct MockTerminal {
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    output: Mutex<String>,
}

impl MockTerminal {
    /// Create a mock terminal that returns multiple responses in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a mock that simulates EOF (Ctrl+D) on the first read.
    pub fn eof() -> Self {
        Self::default()
    }

    /// Everything written so far, prompts and lines alike.
    pub fn transcript(&self) -> String {
        self.output
            .lock()
            .map(|out| out.clone())
            .unwrap_or_default()
    }

    /// How many lines have been read.
    pub fn reads(&self) -> usize {
        self.response_index
            .load(Ordering::SeqCst)
            .min(self.responses.len() + 1)
    }

    fn record(&self, text: &str) {
        if let Ok(mut out) = self.output.lock() {
            out.push_str(text);
        }
    }
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        self.record(prompt);
        Ok(())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        self.record(line);
        self.record("\n");
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => {
                self.record(response);
                self.record("\n");
                Ok(format!("{}\n", response))
            }
            None => Ok(String::new()),
        }
    }
}
