use crate::{
    error::{RuntimeError, runtime_error::Construct},
    interpreter::{
        io::{IntegerInputError, ScanKind},
        lexer::Token,
        parser::{
            core::{Context, Cursor},
            expression::concatenate,
        },
        value::Value,
    },
    util::num::i64_to_f64_checked,
};

/// Parses and executes a `printf` statement.
///
/// Syntax:
/// ```text
///     printf ( <string-expression> ) ;
/// ```
/// The argument list is joined with the same rule as string expressions and
/// emitted as exactly one output line. A missing `)` is reported, but the
/// line is still printed.
pub fn parse_print(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) {
    cursor.advance();

    if !cursor.expect(&Token::LParen, ctx) {
        cursor.skip_statement();
        return;
    }

    let text = concatenate(cursor, ctx, Construct::Printf, |token| {
        matches!(token, Token::RParen | Token::Semicolon)
    });
    ctx.host.print_line(&text);

    cursor.expect(&Token::RParen, ctx);
}

/// Parses and executes a `scanf` statement.
///
/// Syntax:
/// ```text
///     scanf ( "%d" , <name> [, "%s" , <name> ...] ) ;
/// ```
/// Each conversion blocks on the host for one line of input and stores the
/// result immediately: an existing variable is overwritten, otherwise a new
/// one is declared with the kind of the conversion. A `%d` reply that is not
/// an integer stores null.
pub fn parse_scan(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>) {
    cursor.advance();

    if !cursor.expect(&Token::LParen, ctx) {
        cursor.skip_statement();
        return;
    }

    while let Some(token) = cursor.peek()
          && !matches!(token, Token::RParen | Token::Semicolon)
    {
        cursor.advance();
        match token {
            Token::StringLiteral(format) => match format.as_str() {
                "%d" => scan_into(cursor, ctx, ScanKind::Integer),
                "%s" => scan_into(cursor, ctx, ScanKind::Text),
                _ => {
                    ctx.report(RuntimeError::UnsupportedFormat { format: format.clone(),
                                                                 line:   ctx.line, });
                    skip_target(cursor);
                },
            },
            Token::Comma => {},
            _ => ctx.report(RuntimeError::UnsupportedOperation { token:     token.to_string(),
                                                                 construct: Construct::Scanf,
                                                                 line:      ctx.line, }),
        }
    }

    cursor.expect(&Token::RParen, ctx);
}

/// Reads `, <name>` after a format and performs one conversion into it.
fn scan_into(cursor: &mut Cursor<'_>, ctx: &mut Context<'_>, kind: ScanKind) {
    if !cursor.expect(&Token::Comma, ctx) {
        return;
    }
    let Some(name) = cursor.expect_identifier(ctx) else {
        return;
    };

    tracing::debug!(name, ?kind, "waiting for scan input");
    let value = match kind {
        ScanKind::Integer => Value::Integer(read_integer(ctx)),
        ScanKind::Text => Value::Text(read_text(ctx)),
    };

    if ctx.symbols.assign(name, value.clone()).is_err() {
        ctx.symbols.declare(name, value);
    }
}

/// Reads an integer reply, reporting anything that cannot be stored.
///
/// A provider may override [`InputProvider::read_integer`], so the value is
/// range-checked again before it becomes an `f64`.
///
/// [`InputProvider::read_integer`]: crate::interpreter::io::InputProvider::read_integer
fn read_integer(ctx: &mut Context<'_>) -> Option<f64> {
    let line = ctx.line;
    let reply = ctx.host.read_integer().and_then(|n| {
                                           i64_to_f64_checked(n,
                                                              IntegerInputError::Invalid(n.to_string()))
                                       });

    match reply {
        Ok(n) => Some(n),
        Err(IntegerInputError::Invalid(input)) => {
            ctx.report(RuntimeError::InvalidIntegerInput { input, line });
            None
        },
        Err(IntegerInputError::Unavailable) => {
            ctx.report(RuntimeError::InputUnavailable { line });
            None
        },
    }
}

fn read_text(ctx: &mut Context<'_>) -> String {
    if let Some(reply) = ctx.host.read_text() {
        return reply;
    }
    ctx.report(RuntimeError::InputUnavailable { line: ctx.line });
    String::new()
}

/// Skips the `, <name>` that follows a rejected format.
fn skip_target(cursor: &mut Cursor<'_>) {
    if cursor.eat(&Token::Comma)
       && let Some(Token::Identifier(_)) = cursor.peek()
    {
        cursor.advance();
    }
}
