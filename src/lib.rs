//! # minic
//!
//! minic is a line-by-line interpreter for a minimal C-like language written
//! in Rust. It supports `int` and `string` variables, arithmetic with the
//! four basic operators, string concatenation, `printf`, `scanf` and
//! `return`. Every line is tokenized and executed immediately against a
//! symbol table that lives for the whole session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::LexError,
    interpreter::{Interpreter, io::Transcript},
};

/// The terminal front end.
///
/// Implements the interpreter's input and output seams on top of any
/// `BufRead`/`Write` pair, with highlighted diagnostics.
pub mod console;
/// Provides the error types for lexing and execution.
///
/// # Responsibilities
/// - Defines the fatal lexical errors that abandon a line.
/// - Defines the non-fatal diagnostics raised while statements run.
/// - Attaches session line numbers for user feedback.
pub mod error;
/// Orchestrates the execution of source lines.
///
/// This module ties the lexer, the statement handlers and the symbol table
/// together into an [`Interpreter`] session.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and symbol table.
/// - Keeps variable state across lines.
/// - Routes scan input and printed output through the host.
pub mod interpreter;
/// The read-execute loop around an interpreter session.
///
/// Prompts for lines, recognizes the `exit` command, and reports lexical
/// errors without ending the session.
pub mod session;
/// General helpers for numeric parsing and formatting.
pub mod util;

/// Runs every line of `source` in a fresh session and returns the transcript.
///
/// Scan conversions are answered from `replies` in order. Execution stops at
/// the first line that fails to tokenize.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Examples
/// ```
/// use minic::run_source;
///
/// let transcript = run_source("string s = \"a\" + \"b\";\nprintf(s);", Vec::<String>::new()).unwrap();
/// assert_eq!(transcript.output, vec!["ab".to_string()]);
///
/// // An unterminated string literal is fatal.
/// assert!(run_source("printf(\"oops);", Vec::<String>::new()).is_err());
/// ```
pub fn run_source<I, S>(source: &str, replies: I) -> Result<Transcript, LexError>
    where I: IntoIterator<Item = S>,
          S: Into<String>
{
    let mut interpreter = Interpreter::new();
    let mut transcript = Transcript::with_input(replies);

    for line in source.lines() {
        interpreter.execute_line(line, &mut transcript)?;
    }

    Ok(transcript)
}
