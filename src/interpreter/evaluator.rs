/// Arithmetic evaluation.
///
/// Converts a flat infix run of operands and operators into postfix order
/// and reduces it on a value stack.
pub mod postfix;

pub use postfix::{ArithOp, EvalResult, ExprItem, evaluate};
