/// Lexical errors.
///
/// Defines the errors the tokenizer can raise while splitting a line into
/// tokens. A lexical error is fatal for the line it occurs on: nothing on that
/// line is executed.
pub mod lex_error;
/// Runtime diagnostics.
///
/// Contains every non-fatal problem that can be detected while statements are
/// executed, such as references to undeclared variables, operators that are
/// not defined for strings, or malformed arithmetic. Execution of the line
/// continues after one of these is reported.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
