/// Names the construct an unsupported token was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// An arithmetic expression (`int` initializer or assignment).
    Arithmetic,
    /// A string expression (`string` initializer or assignment).
    Strings,
    /// The argument list of `printf`.
    Printf,
    /// The argument list of `scanf`.
    Scanf,
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arithmetic => write!(f, "arithmetic"),
            Self::Strings => write!(f, "strings"),
            Self::Printf => write!(f, "printf"),
            Self::Scanf => write!(f, "scanf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all non-fatal problems reported while executing statements.
///
/// None of these stop the line: the statement that raised one continues with
/// a missing contribution, and later statements still run.
pub enum RuntimeError {
    /// Referenced or assigned a variable that was never declared.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The session line where the error occurred.
        line: usize,
    },
    /// A token that has no meaning inside the surrounding construct.
    UnsupportedOperation {
        /// The offending lexeme.
        token:     String,
        /// Where it was found.
        construct: Construct,
        /// The session line where the error occurred.
        line:      usize,
    },
    /// An arithmetic expression was not an alternating run of operands and
    /// operators.
    MalformedExpression {
        /// The session line where the error occurred.
        line: usize,
    },
    /// A statement started with a token that does not begin any statement.
    UnexpectedToken {
        /// The offending lexeme.
        token: String,
        /// The session line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else (or nothing) followed.
    ExpectedToken {
        /// Description of what was expected.
        expected: String,
        /// The lexeme found instead, if any.
        found:    Option<String>,
        /// The session line where the error occurred.
        line:     usize,
    },
    /// `scanf` was given a format other than `%d` or `%s`.
    UnsupportedFormat {
        /// The format string as written.
        format: String,
        /// The session line where the error occurred.
        line:   usize,
    },
    /// A `%d` conversion received text that is not a base-10 integer.
    InvalidIntegerInput {
        /// The raw reply.
        input: String,
        /// The session line where the error occurred.
        line:  usize,
    },
    /// The input provider had no more input for a scan conversion.
    InputUnavailable {
        /// The session line where the error occurred.
        line: usize,
    },
    /// An integer variable with a null payload was used in arithmetic.
    NullOperand {
        /// The name of the variable.
        name: String,
        /// The session line where the error occurred.
        line: usize,
    },
    /// A string variable was used as an arithmetic operand.
    TypeMismatch {
        /// The name of the variable.
        name: String,
        /// The session line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { name, line } => {
                write!(f, "Error on line {line}: Variable {name} not declared.")
            },
            Self::UnsupportedOperation { token,
                                         construct,
                                         line, } => write!(f,
                                                           "Error on line {line}: Operation: {token} not defined for {construct}."),
            Self::MalformedExpression { line } => write!(f,
                                                         "Error on line {line}: Malformed expression; operands and operators do not match."),
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::ExpectedToken { expected,
                                  found: Some(found),
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::ExpectedToken { expected,
                                  found: None,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found end of line.")
            },
            Self::UnsupportedFormat { format, line } => write!(f,
                                                               "Error on line {line}: Format \"{format}\" is not supported by scanf; use %d or %s."),
            Self::InvalidIntegerInput { input, line } => write!(f,
                                                                "Error on line {line}: Invalid input for %d: \"{input}\" is not a valid integer."),
            Self::InputUnavailable { line } => {
                write!(f, "Error on line {line}: No input available for scanf.")
            },
            Self::NullOperand { name, line } => write!(f,
                                                       "Error on line {line}: Variable {name} holds no value; using 0."),
            Self::TypeMismatch { name, line } => write!(f,
                                                        "Error on line {line}: String variable {name} cannot be used in arithmetic."),
        }
    }
}

impl std::error::Error for RuntimeError {}
