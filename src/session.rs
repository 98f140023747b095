use std::io::{self, BufRead, Write};

use crate::{console::Console, interpreter::Interpreter};

/// Typing exactly this ends the session.
pub const EXIT_COMMAND: &str = "exit";
/// Printed when the session ends through [`EXIT_COMMAND`].
pub const FAREWELL: &str = "Thank you for using our INTERPRETER :)";
/// The prompt shown before each session line unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "> ";

/// Settings of an interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Text written before every session line.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { prompt: DEFAULT_PROMPT.to_string() }
    }
}

/// Whether the session goes on after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// The line was [`EXIT_COMMAND`].
    Exit,
}

/// Runs an interactive session until `exit` or the end of input.
///
/// Each line is prompted for, read, and executed against `interpreter`, so
/// variables carry over from line to line. A lexical error is reported and
/// the session moves on to the next prompt.
///
/// # Errors
/// Returns the first I/O failure of the console.
pub fn run_session<R, W>(console: &mut Console<R, W>,
                         interpreter: &mut Interpreter,
                         config: &SessionConfig)
                         -> io::Result<()>
    where R: BufRead,
          W: Write
{
    loop {
        console.prompt(&config.prompt)?;
        let Some(line) = console.next_line()? else {
            tracing::debug!("end of input");
            return Ok(());
        };
        if handle_line(console, interpreter, &line)? == Flow::Exit {
            return Ok(());
        }
    }
}

/// Executes every line of `source` in order, without prompts.
///
/// A line reading `exit` stops the script early, as it would a session.
///
/// # Errors
/// Returns the first I/O failure of the console.
pub fn run_script<R, W>(console: &mut Console<R, W>,
                        interpreter: &mut Interpreter,
                        source: &str)
                        -> io::Result<()>
    where R: BufRead,
          W: Write
{
    for line in source.lines() {
        if handle_line(console, interpreter, line)? == Flow::Exit {
            break;
        }
    }
    Ok(())
}

/// Handles one session line: the exit command, or a line of source.
///
/// # Errors
/// Returns the first I/O failure of the console.
pub fn handle_line<R, W>(console: &mut Console<R, W>,
                         interpreter: &mut Interpreter,
                         line: &str)
                         -> io::Result<Flow>
    where R: BufRead,
          W: Write
{
    if line == EXIT_COMMAND {
        console.write_line(FAREWELL)?;
        return Ok(Flow::Exit);
    }

    match interpreter.execute_line(line, console) {
        Ok(diagnostics) => {
            tracing::debug!(line = interpreter.line_count(),
                            diagnostics = diagnostics.len(),
                            "line executed");
        },
        Err(e) => {
            tracing::debug!(line = e.line(), "line abandoned: {e}");
            console.write_lex_error(&e)?;
        },
    }

    console.take_error().map_or(Ok(Flow::Continue), Err)
}
