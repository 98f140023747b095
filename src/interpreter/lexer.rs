use logos::{Lexer, Logos};

use crate::error::LexError;

/// Represents a lexical token in a line of source.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// `int`
    #[token("int")]
    Int,
    /// `string`
    #[token("string")]
    String,
    /// `printf`
    #[token("printf")]
    Printf,
    /// `scanf`
    #[token("scanf")]
    Scanf,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; runs of ASCII letters and underscores such as `x`
    /// or `total_sum`. Digits are not part of identifiers.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens, such as `42`. The digits are kept verbatim.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens, such as `"%d"`. Holds the text between the
    /// quotes; there are no escape sequences.
    #[token("\"", lex_string)]
    StringLiteral(String),
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// One of `= + - * /`.
    #[token("=", |_| Operator::Assign)]
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    Operator(Operator),

    /// Carries the line-counting callback for `\n`.
    ///
    /// The callback always skips, so this variant never reaches the token
    /// stream. The newline cannot go in the `skip` pattern because that would
    /// stop it from being counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

/// The single-character operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl Operator {
    /// Returns the operator as it is written in source.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Assign => '=',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::String => write!(f, "string"),
            Self::Printf => write!(f, "printf"),
            Self::Scanf => write!(f, "scanf"),
            Self::Return => write!(f, "return"),
            Self::Identifier(s) | Self::Number(s) => write!(f, "{s}"),
            Self::StringLiteral(s) => write!(f, "\"{s}\""),
            Self::Semicolon => write!(f, ";"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::NewLine => writeln!(f),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current session line for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The line number reported in lexical errors.
    pub line: usize,
}

/// Why the lexer stopped. Turned into a [`LexError`] by [`tokenize_line`]
/// once the span and line are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// No token starts with the current character.
    #[default]
    UnexpectedCharacter,
    /// A `"` was never closed.
    UnterminatedString,
}

/// Scans the body of a string literal after its opening quote.
///
/// Consumes everything up to and including the closing quote. If the line
/// ends first, the rest of the line is consumed and the literal is reported
/// as unterminated.
fn lex_string(lex: &mut Lexer<Token>) -> Result<String, LexFailure> {
    let rest = lex.remainder();
    if let Some(end) = rest.find('"') {
        let body = rest[..end].to_string();
        lex.bump(end + 1);
        Ok(body)
    } else {
        lex.bump(rest.len());
        Err(LexFailure::UnterminatedString)
    }
}

/// Splits one line of source into tokens.
///
/// Equivalent to [`tokenize_line`] with a line number of `1`.
///
/// # Errors
/// Returns a [`LexError`] for an unterminated string literal or an
/// unrecognized character.
///
/// # Example
/// ```
/// use minic::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("int x;").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Int, Token::Identifier("x".to_string()), Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_line(source, 1)
}

/// Splits one line of source into tokens, attributing errors to `line`.
///
/// Tokenization is purely lexical; no grammar is checked here. The first
/// failure aborts the whole line.
///
/// # Errors
/// Returns a [`LexError`] for an unterminated string literal or an
/// unrecognized character.
pub fn tokenize_line(source: &str, line: usize) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(LexFailure::UnterminatedString) => {
                return Err(LexError::UnterminatedString { position: lexer.span().start,
                                                          line:     lexer.extras.line, });
            },
            Err(LexFailure::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character,
                                                           position: lexer.span().start,
                                                           line: lexer.extras.line });
            },
        }
    }

    tracing::trace!(line, ?tokens, "tokenized");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn digit_runs_are_single_numeric_literals() {
        for digits in ["0", "7", "42", "00012", "123456789012345678901234567890"] {
            assert_eq!(tokenize(digits).unwrap(), vec![Token::Number(digits.to_string())]);
        }
    }

    #[test]
    fn keywords_and_identifiers() {
        let tokens = tokenize("int integer string printf scanf return _tmp").unwrap();
        assert_eq!(tokens,
                   vec![Token::Int,
                        ident("integer"),
                        Token::String,
                        Token::Printf,
                        Token::Scanf,
                        Token::Return,
                        ident("_tmp")]);
    }

    #[test]
    fn digits_end_an_identifier() {
        assert_eq!(tokenize("x1").unwrap(), vec![ident("x"), Token::Number("1".to_string())]);
    }

    #[test]
    fn punctuation_and_operators() {
        let tokens = tokenize(";(),{}=+-*/").unwrap();
        assert_eq!(tokens,
                   vec![Token::Semicolon,
                        Token::LParen,
                        Token::RParen,
                        Token::Comma,
                        Token::LBrace,
                        Token::RBrace,
                        Token::Operator(Operator::Assign),
                        Token::Operator(Operator::Plus),
                        Token::Operator(Operator::Minus),
                        Token::Operator(Operator::Star),
                        Token::Operator(Operator::Slash)]);
    }

    #[test]
    fn string_literals_drop_their_quotes() {
        let tokens = tokenize(r#"printf("a b; c" + s);"#).unwrap();
        assert_eq!(tokens,
                   vec![Token::Printf,
                        Token::LParen,
                        Token::StringLiteral("a b; c".to_string()),
                        Token::Operator(Operator::Plus),
                        ident("s"),
                        Token::RParen,
                        Token::Semicolon]);
        assert_eq!(tokenize(r#""""#).unwrap(), vec![Token::StringLiteral(String::new())]);
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(tokenize("  \t x \n ; \r\n").unwrap(), vec![ident("x"), Token::Semicolon]);
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn unterminated_string_fails() {
        assert_eq!(tokenize(r#"string s = "abc;"#),
                   Err(LexError::UnterminatedString { position: 11,
                                                      line:     1, }));
        assert!(tokenize(r#"printf("ok" + ");"#).is_err());
    }

    #[test]
    fn unexpected_character_fails() {
        assert_eq!(tokenize_line("int x = 5 % 2;", 3),
                   Err(LexError::UnexpectedCharacter { character: '%',
                                                       position:  10,
                                                       line:      3, }));
        assert!(matches!(tokenize("x = #;"),
                         Err(LexError::UnexpectedCharacter { character: '#', .. })));
    }

    #[test]
    fn newlines_advance_the_reported_line() {
        assert!(matches!(tokenize_line("int x;\n$", 4),
                         Err(LexError::UnexpectedCharacter { line: 5, .. })));
    }

    #[test]
    fn newlines_never_reach_the_token_stream() {
        let tokens = tokenize("int x;\n\nx = 1;\n").unwrap();
        assert!(!tokens.contains(&Token::NewLine));
        assert_eq!(tokens.len(), 7);
    }
}
