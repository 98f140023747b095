use crate::{error::RuntimeError, interpreter::lexer::Operator};

/// Result type used by the evaluator.
///
/// Evaluation either yields a value of type `T` or a `RuntimeError`
/// describing why the expression could not be reduced.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, real-valued.
    Div,
}

impl ArithOp {
    /// Maps a lexer operator to an arithmetic operator. `=` has no
    /// arithmetic meaning and maps to `None`.
    #[must_use]
    pub const fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Plus => Some(Self::Add),
            Operator::Minus => Some(Self::Sub),
            Operator::Star => Some(Self::Mul),
            Operator::Slash => Some(Self::Div),
            Operator::Assign => None,
        }
    }

    /// Binding strength; `*` and `/` bind tighter than `+` and `-`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator. Division by zero follows IEEE 754 and yields an
    /// infinity or NaN.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
        }
    }
}

/// One element of an arithmetic expression whose variables have already
/// been replaced by their values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprItem {
    /// A number.
    Operand(f64),
    /// A binary operator.
    Operator(ArithOp),
}

/// Reorders an infix run into postfix (shunting-yard).
///
/// A stacked operator is emitted whenever its precedence is at least that of
/// the incoming one, which makes operators of equal precedence associate to
/// the left. Operators left on the stack are flushed at the end. The input
/// is assumed to have passed [`check_infix`]; [`evaluate`] does both.
///
/// # Example
/// ```
/// use minic::interpreter::evaluator::postfix::{ArithOp, ExprItem, to_postfix};
///
/// // 2 + 3 * 4  =>  2 3 4 * +
/// let infix = [ExprItem::Operand(2.0),
///              ExprItem::Operator(ArithOp::Add),
///              ExprItem::Operand(3.0),
///              ExprItem::Operator(ArithOp::Mul),
///              ExprItem::Operand(4.0)];
/// assert_eq!(to_postfix(&infix),
///            vec![ExprItem::Operand(2.0),
///                 ExprItem::Operand(3.0),
///                 ExprItem::Operand(4.0),
///                 ExprItem::Operator(ArithOp::Mul),
///                 ExprItem::Operator(ArithOp::Add)]);
/// ```
#[must_use]
pub fn to_postfix(infix: &[ExprItem]) -> Vec<ExprItem> {
    let mut output = Vec::with_capacity(infix.len());
    let mut operators: Vec<ArithOp> = Vec::new();

    for item in infix {
        match *item {
            ExprItem::Operand(_) => output.push(*item),
            ExprItem::Operator(op) => {
                while let Some(&top) = operators.last()
                      && top.precedence() >= op.precedence()
                {
                    output.push(ExprItem::Operator(top));
                    operators.pop();
                }
                operators.push(op);
            },
        }
    }

    output.extend(operators.into_iter().rev().map(ExprItem::Operator));
    output
}

/// Checks that an infix run is `operand (operator operand)*`.
///
/// Operands and operators must alternate, starting and ending with an
/// operand. Counting stack depth after reordering is not enough on its own:
/// `2 3 +` and `+ 2 3` both reduce to one value.
///
/// # Errors
/// Returns [`RuntimeError::MalformedExpression`] if the run is empty or the
/// items do not alternate.
pub fn check_infix(infix: &[ExprItem], line: usize) -> EvalResult<()> {
    let alternates = infix.iter().enumerate().all(|(i, item)| {
                                                  matches!((i % 2, item),
                                                           (0, ExprItem::Operand(_))
                                                           | (1, ExprItem::Operator(_)))
                                              });

    if infix.len() % 2 == 1 && alternates {
        Ok(())
    } else {
        Err(RuntimeError::MalformedExpression { line })
    }
}

/// Reduces a postfix sequence to a single number.
///
/// Operands are pushed; each operator pops `b`, then `a`, and pushes
/// `a op b`.
///
/// # Errors
/// Returns [`RuntimeError::MalformedExpression`] if an operator finds fewer
/// than two operands, or if anything other than exactly one value remains at
/// the end (including an empty expression).
pub fn evaluate_postfix(postfix: &[ExprItem], line: usize) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for item in postfix {
        match *item {
            ExprItem::Operand(n) => stack.push(n),
            ExprItem::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::MalformedExpression { line });
                };
                stack.push(op.apply(a, b));
            },
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(RuntimeError::MalformedExpression { line }),
    }
}

/// Evaluates an infix run of resolved operands and operators.
///
/// # Errors
/// Returns [`RuntimeError::MalformedExpression`] if the operands and
/// operators do not form a valid expression.
pub fn evaluate(infix: &[ExprItem], line: usize) -> EvalResult<f64> {
    check_infix(infix, line)?;
    let postfix = to_postfix(infix);
    tracing::trace!(line, ?postfix, "postfix");
    evaluate_postfix(&postfix, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: f64) -> ExprItem {
        ExprItem::Operand(v)
    }

    fn op(o: ArithOp) -> ExprItem {
        ExprItem::Operator(o)
    }

    #[test]
    fn multiplication_binds_tighter() {
        let infix = [n(2.0), op(ArithOp::Add), n(3.0), op(ArithOp::Mul), n(4.0)];
        assert_eq!(evaluate(&infix, 1), Ok(14.0));

        let infix = [n(2.0), op(ArithOp::Mul), n(3.0), op(ArithOp::Sub), n(4.0), op(ArithOp::Div), n(8.0)];
        assert_eq!(evaluate(&infix, 1), Ok(5.5));
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        let infix = [n(10.0), op(ArithOp::Sub), n(2.0), op(ArithOp::Sub), n(3.0)];
        assert_eq!(evaluate(&infix, 1), Ok(5.0));

        let infix = [n(64.0), op(ArithOp::Div), n(4.0), op(ArithOp::Div), n(2.0)];
        assert_eq!(evaluate(&infix, 1), Ok(8.0));
    }

    #[test]
    fn division_is_real_valued() {
        assert_eq!(evaluate(&[n(7.0), op(ArithOp::Div), n(2.0)], 1), Ok(3.5));
    }

    #[test]
    fn division_by_zero_does_not_fail() {
        assert_eq!(evaluate(&[n(1.0), op(ArithOp::Div), n(0.0)], 1), Ok(f64::INFINITY));
        assert!(evaluate(&[n(0.0), op(ArithOp::Div), n(0.0)], 1).unwrap().is_nan());
    }

    #[test]
    fn single_operand_is_its_own_value() {
        assert_eq!(evaluate(&[n(9.0)], 1), Ok(9.0));
    }

    #[test]
    fn malformed_expressions_are_rejected() {
        let malformed = RuntimeError::MalformedExpression { line: 4 };

        assert_eq!(evaluate(&[], 4), Err(malformed.clone()));
        assert_eq!(evaluate(&[n(1.0), op(ArithOp::Add)], 4), Err(malformed.clone()));
        assert_eq!(evaluate(&[op(ArithOp::Mul), n(1.0)], 4), Err(malformed.clone()));
        assert_eq!(evaluate(&[n(1.0), n(2.0)], 4), Err(malformed.clone()));

        // Postfix and prefix orderings reduce to one value but are not infix.
        assert_eq!(evaluate(&[n(2.0), n(3.0), op(ArithOp::Add)], 4), Err(malformed.clone()));
        assert_eq!(evaluate(&[op(ArithOp::Add), n(2.0), n(3.0)], 4), Err(malformed.clone()));
        assert_eq!(evaluate(&[n(2.0), op(ArithOp::Mul), op(ArithOp::Add), n(3.0), n(4.0)], 4),
                   Err(malformed.clone()));
        assert_eq!(evaluate(&[n(1.0), op(ArithOp::Add), n(2.0), n(3.0), op(ArithOp::Sub), n(4.0)], 4),
                   Err(malformed));
    }

    #[test]
    fn alternating_runs_pass_the_shape_check() {
        assert_eq!(check_infix(&[n(1.0)], 1), Ok(()));
        assert_eq!(check_infix(&[n(1.0), op(ArithOp::Sub), n(2.0)], 1), Ok(()));
    }
}
