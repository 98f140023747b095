/// Cursor and execution context shared by every statement handler.
pub mod core;

/// Statement dispatch, assignment and `return`.
///
/// The handler is selected by the token under the cursor; the statement
/// terminator is consumed afterwards.
pub mod statement;

/// `int` and `string` declarations, including comma-separated declarator
/// lists.
pub mod declaration;

/// Arithmetic and string expressions.
///
/// Resolves variables against the symbol table while scanning operands, then
/// hands arithmetic to the evaluator or joins string pieces directly.
pub mod expression;

/// `printf` and `scanf`.
pub mod stdio;
