use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::{
    error::{LexError, RuntimeError},
    interpreter::io::{InputProvider, OutputSink, ScanKind},
};

/// A line-oriented terminal.
///
/// Reads session lines and scan replies from the same reader and writes
/// prompts, printed output and diagnostics to the same writer, so they
/// appear in the order they happen. Diagnostics are coloured when `color` is
/// set.
///
/// The sink methods cannot return errors, so the first write failure is kept
/// and handed out by [`Console::take_error`].
pub struct Console<R, W> {
    reader: R,
    writer: W,
    color:  bool,
    error:  Option<io::Error>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub const fn new(reader: R, writer: W, color: bool) -> Self {
        Self { reader,
               writer,
               color,
               error: None }
    }

    /// Reads one line with its line ending removed, or `None` at the end of
    /// input.
    ///
    /// # Errors
    /// Propagates read failures.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let trimmed = buffer.strip_suffix('\n').unwrap_or(&buffer);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Writes `prompt` without a line break and flushes it.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()
    }

    /// Writes one line of plain text.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Writes a fatal lexical error, highlighted.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn write_lex_error(&mut self, error: &LexError) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", error.to_string().red().bold())
        } else {
            writeln!(self.writer, "{error}")
        }
    }

    /// Returns the first write failure raised inside a sink method, if any.
    pub const fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Unwraps the console into its reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn keep_error(&mut self, result: io::Result<()>) {
        if let Err(e) = result
           && self.error.is_none()
        {
            self.error = Some(e);
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for Console<R, W> {
    fn read_line(&mut self, kind: ScanKind) -> Option<String> {
        let prompt = match kind {
            ScanKind::Integer => "Enter an integer: ",
            ScanKind::Text => "Enter a string: ",
        };
        let prompted = self.prompt(prompt);
        self.keep_error(prompted);

        match self.next_line() {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("failed to read scan input: {e}");
                None
            },
        }
    }
}

impl<R: BufRead, W: Write> OutputSink for Console<R, W> {
    fn print_line(&mut self, text: &str) {
        let written = self.write_line(text);
        self.keep_error(written);
    }

    fn report(&mut self, diagnostic: &RuntimeError) {
        let written = if self.color {
            writeln!(self.writer, "{}", diagnostic.to_string().yellow())
        } else {
            writeln!(self.writer, "{diagnostic}")
        };
        self.keep_error(written);
    }
}
