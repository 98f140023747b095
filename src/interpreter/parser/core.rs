use crate::{
    error::RuntimeError,
    interpreter::{io::Host, lexer::Token, symbol_table::SymbolTable},
};

/// A position in the tokens of one line.
///
/// Owned by the pass that executes the line and dropped with it; nothing
/// about the position survives to the next line.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    pos:    usize,
}

impl<'t> Cursor<'t> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the token under the cursor without moving.
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token under the cursor and moves past it.
    pub fn next_token(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Moves past the token under the cursor, if any.
    pub const fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Moves past the token under the cursor if it equals `expected`.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Like [`Cursor::eat`], but reports an [`RuntimeError::ExpectedToken`]
    /// when the token is missing. The cursor does not move in that case.
    pub fn expect(&mut self, expected: &Token, ctx: &mut Context<'_>) -> bool {
        if self.eat(expected) {
            return true;
        }
        ctx.report(RuntimeError::ExpectedToken { expected: format!("'{expected}'"),
                                                 found:    self.peek().map(ToString::to_string),
                                                 line:     ctx.line, });
        false
    }

    /// Consumes an identifier and returns its name, or reports what was found
    /// instead and leaves the cursor where it is.
    pub fn expect_identifier(&mut self, ctx: &mut Context<'_>) -> Option<&'t str> {
        if let Some(Token::Identifier(name)) = self.peek() {
            self.pos += 1;
            return Some(name.as_str());
        }
        ctx.report(RuntimeError::ExpectedToken { expected: "identifier".to_string(),
                                                 found:    self.peek().map(ToString::to_string),
                                                 line:     ctx.line, });
        None
    }

    /// Moves up to, but not past, the next `;`, or to the end of the line.
    /// Returns how many tokens were skipped.
    pub fn skip_statement(&mut self) -> usize {
        let start = self.pos;
        while let Some(token) = self.peek()
              && *token != Token::Semicolon
        {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Index of the token under the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

/// Everything a statement handler may touch while it runs.
pub struct Context<'a> {
    /// The session's variables.
    pub symbols:     &'a mut SymbolTable,
    /// Where scan input comes from and printed output goes.
    pub host:        &'a mut dyn Host,
    /// The session line being executed, for diagnostics.
    pub line:        usize,
    /// Diagnostics raised on this line, in order.
    pub diagnostics: Vec<RuntimeError>,
}

impl<'a> Context<'a> {
    /// Creates the context for executing one line.
    pub fn new(symbols: &'a mut SymbolTable, host: &'a mut dyn Host, line: usize) -> Self {
        Self { symbols,
               host,
               line,
               diagnostics: Vec::new() }
    }

    /// Records a non-fatal diagnostic, logs it, and forwards it to the host.
    pub fn report(&mut self, diagnostic: RuntimeError) {
        tracing::warn!(line = self.line, "{diagnostic}");
        self.host.report(&diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{io::Transcript, lexer::tokenize};

    #[test]
    fn cursor_moves_and_stops_at_end() {
        let tokens = tokenize("a b").unwrap();
        let mut cursor = Cursor::new(&tokens);

        assert_eq!(cursor.next_token(), Some(&Token::Identifier("a".to_string())));
        assert!(!cursor.eat(&Token::Semicolon));
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.next_token(), None);
    }

    #[test]
    fn skip_statement_stops_before_terminator() {
        let tokens = tokenize("1 + 2; x").unwrap();
        let mut cursor = Cursor::new(&tokens);

        assert_eq!(cursor.skip_statement(), 3);
        assert_eq!(cursor.peek(), Some(&Token::Semicolon));
        assert_eq!(cursor.skip_statement(), 0);
    }

    #[test]
    fn expect_reports_missing_tokens() {
        let tokens = tokenize("x )").unwrap();
        let mut cursor = Cursor::new(&tokens);
        let mut symbols = SymbolTable::new();
        let mut host = Transcript::default();
        let mut ctx = Context::new(&mut symbols, &mut host, 7);

        assert!(!cursor.expect(&Token::LParen, &mut ctx));
        assert_eq!(cursor.expect_identifier(&mut ctx), Some("x"));
        assert_eq!(cursor.expect_identifier(&mut ctx), None);
        assert!(cursor.expect(&Token::RParen, &mut ctx));

        assert_eq!(ctx.diagnostics,
                   vec![RuntimeError::ExpectedToken { expected: "'('".to_string(),
                                                      found:    Some("x".to_string()),
                                                      line:     7, },
                        RuntimeError::ExpectedToken { expected: "identifier".to_string(),
                                                      found:    Some(")".to_string()),
                                                      line:     7, }]);
    }
}
