use crate::interpreter::{
    lexer::{Operator, Token},
    parser::{
        core::{Context, Cursor},
        expression::{parse_arithmetic, parse_string_expression},
    },
    value::{Kind, Value},
};

const ASSIGN: Token = Token::Operator(Operator::Assign);

/// Parses and executes an `int` declaration.
///
/// Syntax:
/// ```text
///     int <name> [= <arithmetic>] {, <name> [= <arithmetic>]} ;
/// ```
/// A declarator without an initializer starts at `0`. Each declarator is
/// declared before the next one is parsed, so `int a = 2, b = a * a;` works.
/// A malformed initializer leaves the variable null.
pub fn parse_int_declaration(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) {
    cursor.advance();

    loop {
        let Some(name) = cursor.expect_identifier(ctx) else {
            cursor.skip_statement();
            return;
        };

        let value = if cursor.eat(&ASSIGN) {
            Value::Integer(parse_arithmetic(cursor, ctx))
        } else {
            Value::zero(Kind::Integer)
        };

        tracing::trace!(name, %value, "declared int");
        ctx.symbols.declare(name, value);

        if !cursor.eat(&Token::Comma) {
            break;
        }
    }
}

/// Parses and executes a `string` declaration.
///
/// Syntax:
/// ```text
///     string <name> [= <string-expression>] {, <name> [= <string-expression>]} ;
/// ```
/// A declarator followed directly by `;`, `,` or the end of the line starts
/// as the empty string. Any other token after the name is read as the start
/// of the initializer, as if the `=` were present.
pub fn parse_string_declaration(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) {
    cursor.advance();

    loop {
        let Some(name) = cursor.expect_identifier(ctx) else {
            cursor.skip_statement();
            return;
        };

        let value = match cursor.peek() {
            None | Some(Token::Semicolon | Token::Comma) => String::new(),
            Some(token) => {
                if *token == ASSIGN {
                    cursor.advance();
                }
                parse_string_expression(cursor, ctx)
            },
        };

        tracing::trace!(name, %value, "declared string");
        ctx.symbols.declare(name, Value::Text(value));

        if !cursor.eat(&Token::Comma) {
            break;
        }
    }
}
