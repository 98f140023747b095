use crate::util::num::format_number;

/// The declared kind of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Declared with `int` or scanned with `%d`.
    Integer,
    /// Declared with `string` or scanned with `%s`.
    Text,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "int"),
            Self::Text => write!(f, "string"),
        }
    }
}

/// Represents the current value of a variable.
///
/// The kind of a variable is the variant of its value, so a value can never
/// disagree with the kind it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value. Arithmetic is real-valued (`7 / 2` is `3.5`), so the
    /// payload is an `f64` even for `int` variables. `None` is the null
    /// payload left behind by a failed `%d` scan or a malformed expression.
    Integer(Option<f64>),
    /// A string value.
    Text(String),
}

impl Value {
    /// Returns the kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Text(_) => Kind::Text,
        }
    }

    /// Returns the default value of a kind: `0` or the empty string.
    #[must_use]
    pub const fn zero(kind: Kind) -> Self {
        match kind {
            Kind::Integer => Self::Integer(Some(0.0)),
            Kind::Text => Self::Text(String::new()),
        }
    }

    /// Returns the number held by an integer value, if there is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => *n,
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Integer(Some(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Formats the value the way it appears when printed or concatenated.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(Some(n)) => write!(f, "{}", format_number(*n)),
            Self::Integer(None) => write!(f, "null"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
