#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// A string literal was opened with `"` but the line ended first.
    UnterminatedString {
        /// Byte offset of the opening quote.
        position: usize,
        /// The session line where the error occurred.
        line:     usize,
    },
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
        /// The session line where the error occurred.
        line:      usize,
    },
}

impl LexError {
    /// Returns the session line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. } | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { position, line } => write!(f,
                                                                  "Error on line {line}: Unclosed string literal starting at position {position}."),
            Self::UnexpectedCharacter { character,
                                        position,
                                        line, } => write!(f,
                                                          "Error on line {line}: Unexpected character \"{character}\" at position {position}."),
        }
    }
}

impl std::error::Error for LexError {}
