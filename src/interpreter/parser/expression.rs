use crate::{
    error::{RuntimeError, runtime_error::Construct},
    interpreter::{
        evaluator::{ArithOp, ExprItem, evaluate},
        lexer::{Operator, Token},
        parser::core::{Context, Cursor},
        value::Kind,
    },
    util::num::literal_to_f64,
};

/// Returns `true` for tokens that end an initializer or right-hand side.
const fn ends_expression(token: &Token) -> bool {
    matches!(token, Token::Semicolon | Token::Comma)
}

/// Parses and evaluates an arithmetic expression.
///
/// Consumes tokens up to, but not including, the next `;` or `,`. Each
/// identifier is replaced by the current value of its variable as it is
/// scanned; an operand that cannot be resolved is reported and left out. The
/// resolved run is then evaluated with `*` and `/` binding tighter than `+`
/// and `-`.
///
/// # Returns
/// The result, or `None` (after reporting
/// [`RuntimeError::MalformedExpression`]) if the resolved run is not a valid
/// expression.
pub fn parse_arithmetic(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) -> Option<f64> {
    let mut infix = Vec::new();

    while let Some(token) = cursor.peek()
          && !ends_expression(token)
    {
        cursor.advance();
        match token {
            Token::Number(digits) => infix.push(ExprItem::Operand(literal_to_f64(digits))),
            Token::Identifier(name) => {
                if let Some(n) = resolve_operand(name, ctx) {
                    infix.push(ExprItem::Operand(n));
                }
            },
            Token::Operator(op) => match ArithOp::from_operator(*op) {
                Some(arith) => infix.push(ExprItem::Operator(arith)),
                None => unsupported(token, Construct::Arithmetic, ctx),
            },
            _ => unsupported(token, Construct::Arithmetic, ctx),
        }
    }

    match evaluate(&infix, ctx.line) {
        Ok(n) => Some(n),
        Err(e) => {
            ctx.report(e);
            None
        },
    }
}

/// Looks up the numeric value of a variable used as an arithmetic operand.
///
/// A null integer counts as `0`. Undeclared names and string variables
/// contribute nothing.
fn resolve_operand(name: &str, ctx: &mut Context<'_>) -> Option<f64> {
    let line = ctx.line;
    let Some((kind, number)) = ctx.symbols.lookup(name).map(|v| (v.kind(), v.value.as_number()))
    else {
        ctx.report(RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                      line });
        return None;
    };

    match (kind, number) {
        (Kind::Integer, Some(n)) => Some(n),
        (Kind::Integer, None) => {
            ctx.report(RuntimeError::NullOperand { name: name.to_string(),
                                                   line });
            Some(0.0)
        },
        (Kind::Text, _) => {
            ctx.report(RuntimeError::TypeMismatch { name: name.to_string(),
                                                    line });
            None
        },
    }
}

/// Parses a string expression: string literals and variables joined by `+`.
///
/// Consumes tokens up to, but not including, the next `;` or `,`.
pub fn parse_string_expression(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) -> String {
    concatenate(cursor, ctx, Construct::Strings, ends_expression)
}

/// Joins string literals and variable values until `is_end` matches.
///
/// `+` is the only operator allowed and is otherwise ignored; pieces are
/// joined with no separator. Variables contribute their printed form, so an
/// integer variable holding `14` contributes `14`. Anything else is reported
/// as not defined for `construct` and contributes nothing, as does an
/// undeclared variable.
pub fn concatenate(cursor: &mut Cursor<'_>,
                   ctx: &mut Context<'_>,
                   construct: Construct,
                   is_end: impl Fn(&Token) -> bool)
                   -> String {
    let mut text = String::new();

    while let Some(token) = cursor.peek()
          && !is_end(token)
    {
        cursor.advance();
        match token {
            Token::StringLiteral(s) => text.push_str(s),
            Token::Identifier(name) => match ctx.symbols.lookup(name) {
                Some(variable) => text.push_str(&variable.value.to_string()),
                None => ctx.report(RuntimeError::UndeclaredVariable { name: name.clone(),
                                                                      line: ctx.line, }),
            },
            Token::Operator(Operator::Plus) => {},
            _ => unsupported(token, construct, ctx),
        }
    }

    text
}

fn unsupported(token: &Token, construct: Construct, ctx: &mut Context<'_>) {
    ctx.report(RuntimeError::UnsupportedOperation { token: token.to_string(),
                                                    construct,
                                                    line: ctx.line });
}
