use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        lexer::{Operator, Token},
        parser::{
            core::{Context, Cursor},
            declaration::{parse_int_declaration, parse_string_declaration},
            expression::{parse_arithmetic, parse_string_expression},
            stdio::{parse_print, parse_scan},
        },
        symbol_table::Variable,
        value::{Kind, Value},
    },
};

/// Executes every statement on a line, left to right.
///
/// The handler is chosen purely by the token under the cursor:
/// - identifier: assignment
/// - `int` / `string`: declaration
/// - `printf` / `scanf`: output / input
/// - `return`: consumed, no effect
///
/// After each statement one `;` is consumed if present. A token that starts
/// no statement is reported as [`RuntimeError::UnexpectedToken`] and skipped,
/// so every iteration moves the cursor and the loop always ends.
pub fn execute_statements(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) {
    while let Some(token) = cursor.peek() {
        match token {
            Token::Identifier(_) => {
                debug!("parsing assignment");
                parse_assignment(cursor, ctx);
            },
            Token::Int => {
                debug!("parsing integer declaration");
                parse_int_declaration(cursor, ctx);
            },
            Token::String => {
                debug!("parsing string declaration");
                parse_string_declaration(cursor, ctx);
            },
            Token::Printf => {
                debug!("parsing print data");
                parse_print(cursor, ctx);
            },
            Token::Scanf => {
                debug!("parsing scan data");
                parse_scan(cursor, ctx);
            },
            Token::Return => {
                debug!("parsing return statement");
                parse_return(cursor);
            },
            Token::Semicolon => {},
            _ => {
                ctx.report(RuntimeError::UnexpectedToken { token: token.to_string(),
                                                           line:  ctx.line, });
                cursor.advance();
            },
        }

        cursor.eat(&Token::Semicolon);
    }
}

/// Parses and executes an assignment.
///
/// Syntax:
/// ```text
///     <name> = <expression> ;
/// ```
/// A string variable receives a string expression; any other target,
/// including an undeclared one, receives an arithmetic expression. Assigning
/// to an undeclared name is reported and declares nothing.
fn parse_assignment(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) {
    let Some(Token::Identifier(name)) = cursor.next_token() else {
        return;
    };

    if !cursor.expect(&Token::Operator(Operator::Assign), ctx) {
        cursor.skip_statement();
        return;
    }

    let value = match ctx.symbols.lookup(name).map(Variable::kind) {
        Some(Kind::Text) => Value::Text(parse_string_expression(cursor, ctx)),
        _ => Value::Integer(parse_arithmetic(cursor, ctx)),
    };

    if ctx.symbols.assign(name, value).is_err() {
        ctx.report(RuntimeError::UndeclaredVariable { name: name.clone(),
                                                      line: ctx.line, });
    }
}

/// Consumes a `return` statement up to its terminator.
///
/// `return` has no effect on the session: no value is kept and later
/// statements on the same line still run.
fn parse_return(cursor: &mut Cursor<'_>) {
    cursor.advance();
    let discarded = cursor.skip_statement();
    debug!(discarded, "return value ignored");
}
