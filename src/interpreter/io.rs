use std::collections::VecDeque;

use crate::{error::RuntimeError, util::num::parse_integer_prefix};

/// What a scan conversion asks the user for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    /// `%d`
    Integer,
    /// `%s`
    Text,
}

/// Why a `%d` conversion produced no number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerInputError {
    /// The provider has no more input.
    Unavailable,
    /// The reply did not start with a base-10 integer.
    Invalid(String),
}

/// Supplies one line of user input per scan conversion.
///
/// This is the only point where execution of a line waits on the outside
/// world: the statement being executed blocks inside [`read_line`] and
/// resumes once it returns.
///
/// [`read_line`]: InputProvider::read_line
pub trait InputProvider {
    /// Blocks until one line of input is available and returns it without
    /// its line ending, or `None` if the input is exhausted.
    fn read_line(&mut self, kind: ScanKind) -> Option<String>;

    /// Reads a line and converts it to an integer.
    ///
    /// # Errors
    /// Returns [`IntegerInputError::Invalid`] with the raw reply if it is not
    /// numeric, or [`IntegerInputError::Unavailable`] if there is no input.
    fn read_integer(&mut self) -> Result<i64, IntegerInputError> {
        let reply = self.read_line(ScanKind::Integer).ok_or(IntegerInputError::Unavailable)?;
        parse_integer_prefix(&reply).ok_or(IntegerInputError::Invalid(reply))
    }

    /// Reads a line and returns it unmodified.
    fn read_text(&mut self) -> Option<String> {
        self.read_line(ScanKind::Text)
    }
}

/// Receives everything a line produces, in the order it is produced.
pub trait OutputSink {
    /// Called once per completed `printf` with exactly the concatenated text.
    fn print_line(&mut self, text: &str);

    /// Called for every non-fatal diagnostic as it is raised.
    fn report(&mut self, _diagnostic: &RuntimeError) {}
}

/// Both ends of a session's I/O: the statement handlers read scan input from
/// and write printed output to the same host.
pub trait Host: InputProvider + OutputSink {}

impl<T: InputProvider + OutputSink + ?Sized> Host for T {}

/// An input provider that replays a fixed list of replies.
///
/// Once the replies run out every request yields `None`.
///
/// # Example
/// ```
/// use minic::interpreter::io::{InputProvider, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["12", "abc"]);
/// assert_eq!(input.read_integer(), Ok(12));
/// assert_eq!(input.read_text().as_deref(), Some("abc"));
/// assert_eq!(input.read_text(), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    replies:  VecDeque<String>,
    requests: Vec<ScanKind>,
}

impl ScriptedInput {
    /// Creates a provider that answers with `replies` in order.
    pub fn new<I, S>(replies: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { replies:  replies.into_iter().map(Into::into).collect(),
               requests: Vec::new(), }
    }

    /// Every request made so far, in order.
    #[must_use]
    pub fn requests(&self) -> &[ScanKind] {
        &self.requests
    }

    /// Replies not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, kind: ScanKind) -> Option<String> {
        self.requests.push(kind);
        self.replies.pop_front()
    }
}

/// An in-memory host: scripted replies in, printed lines and diagnostics
/// out.
///
/// # Example
/// ```
/// use minic::interpreter::{Interpreter, io::Transcript};
///
/// let mut interpreter = Interpreter::new();
/// let mut transcript = Transcript::with_input(["5"]);
///
/// interpreter.execute_line(r#"scanf("%d", n); printf("n=" + n);"#, &mut transcript)
///            .unwrap();
/// assert_eq!(transcript.output, vec!["n=5".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    /// Replies handed to scan conversions.
    pub input:       ScriptedInput,
    /// Every printed line, in order.
    pub output:      Vec<String>,
    /// Every reported diagnostic, in order.
    pub diagnostics: Vec<RuntimeError>,
}

impl Transcript {
    /// Creates a transcript whose scan conversions receive `replies`.
    pub fn with_input<I, S>(replies: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input: ScriptedInput::new(replies),
               ..Self::default() }
    }
}

impl InputProvider for Transcript {
    fn read_line(&mut self, kind: ScanKind) -> Option<String> {
        self.input.read_line(kind)
    }
}

impl OutputSink for Transcript {
    fn print_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn report(&mut self, diagnostic: &RuntimeError) {
        self.diagnostics.push(diagnostic.clone());
    }
}
