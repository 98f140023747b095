use crate::interpreter::value::{Kind, Value};

/// A declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The identifier it was declared under.
    pub name:  String,
    /// Its current value; the variant is its kind.
    pub value: Value,
}

impl Variable {
    /// Returns the kind of the variable.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.value.kind()
    }
}

/// Raised by [`SymbolTable::assign`] when no variable has the given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Undeclared;

/// The session-wide store of declared variables.
///
/// Variables are kept in declaration order and looked up by the first entry
/// with a matching name. Declaring a name twice appends a second entry that
/// every later lookup and assignment ignores, because the first one always
/// matches first.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    variables: Vec<Variable>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a variable without checking for an existing one of the same
    /// name.
    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.variables.push(Variable { name: name.into(),
                                       value });
    }

    /// Returns the earliest-declared variable called `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Overwrites the value of the earliest-declared variable called `name`.
    ///
    /// # Errors
    /// Returns [`Undeclared`] if no such variable exists; the table is left
    /// unchanged.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), Undeclared> {
        let variable = self.variables.iter_mut().find(|v| v.name == name).ok_or(Undeclared)?;
        variable.value = value;
        Ok(())
    }

    /// Returns the number of entries, shadowed duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over every entry in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }
}
