/// The evaluator module reduces arithmetic expressions to numbers.
///
/// Arithmetic arrives as a flat run of numbers and operators whose variables
/// have already been resolved. The evaluator reorders it into postfix form
/// and reduces it on a stack.
///
/// # Responsibilities
/// - Applies `*` and `/` before `+` and `-`, left to right within a tier.
/// - Performs real-valued division with IEEE 754 semantics.
/// - Rejects runs where operands and operators do not alternate.
pub mod evaluator;
/// Input and output seams between the interpreter and its host.
///
/// Scan conversions read through [`io::InputProvider`]; printed lines and
/// diagnostics go to [`io::OutputSink`]. Nothing in the interpreter touches
/// the terminal directly.
pub mod io;
/// The lexer module tokenizes one line of source.
///
/// # Responsibilities
/// - Recognizes keywords, identifiers, numeric and string literals,
///   punctuation and operators.
/// - Reports unterminated strings and unknown characters as fatal errors.
pub mod lexer;
/// The parser module executes statements directly from the token stream.
///
/// There is no syntax tree: each statement handler reads tokens through a
/// cursor and applies its effect to the symbol table as it goes.
pub mod parser;
/// The session-wide variable store.
pub mod symbol_table;
/// Runtime values and variable kinds.
pub mod value;

use crate::{
    error::{LexError, RuntimeError},
    interpreter::{
        io::Host,
        lexer::tokenize_line,
        parser::{
            core::{Context, Cursor},
            statement::execute_statements,
        },
        symbol_table::SymbolTable,
        value::Value,
    },
};

/// An interpreter session.
///
/// Holds the variables declared so far and counts the lines it has been
/// given. Lines are executed one at a time; every variable stays alive until
/// the session is dropped.
#[derive(Debug, Default)]
pub struct Interpreter {
    symbols: SymbolTable,
    line:    usize,
}

impl Interpreter {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes and executes one line of source.
    ///
    /// Printed lines are sent to `host` as each `printf` completes, and scan
    /// conversions block on `host` for input. Non-fatal diagnostics are
    /// reported to `host` as they happen and also returned, in order.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the line cannot be tokenized. Nothing on the
    /// line is executed in that case, so the variables are untouched.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::{Interpreter, io::Transcript};
    ///
    /// let mut interpreter = Interpreter::new();
    /// let mut host = Transcript::default();
    ///
    /// interpreter.execute_line("int x = 2 + 3 * 4;", &mut host).unwrap();
    /// interpreter.execute_line("printf(\"x = \" + x);", &mut host).unwrap();
    /// assert_eq!(host.output, vec!["x = 14".to_string()]);
    /// ```
    pub fn execute_line(&mut self,
                        source: &str,
                        host: &mut dyn Host)
                        -> Result<Vec<RuntimeError>, LexError> {
        self.line += 1;
        let tokens = tokenize_line(source, self.line)?;

        let mut cursor = Cursor::new(&tokens);
        let mut ctx = Context::new(&mut self.symbols, host, self.line);
        execute_statements(&mut cursor, &mut ctx);

        Ok(ctx.diagnostics)
    }

    /// Returns the current value of `name`, following the same first-match
    /// rule as the statements themselves.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.symbols.lookup(name).map(|v| &v.value)
    }

    /// The session's variables.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Number of lines executed so far, including ones that failed to
    /// tokenize.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line
    }
}
