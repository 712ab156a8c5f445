use std::fmt;

use indexmap::IndexMap;

use crate::{value::Value, words};

/// Stable handle to one variable cell in the dictionary's cell table.
///
/// Cells are never deallocated during a session, so a `CellId` stays valid
/// for as long as the dictionary that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellId(usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The executable action bound to a dictionary word.
#[derive(Clone)]
pub enum Behavior {
    /// A native operation, fixed at dictionary construction.
    Builtin(words::Builtin),
    /// Pushes a `VarRef` to the captured cell. Installed by `VAR`.
    Variable(CellId),
    /// Pushes the captured value itself. Installed by `CONST`.
    Constant(Value),
}

/// Case-insensitive word table plus the variable cell arena.
///
/// Keys are uppercased on both insertion and lookup; rebinding a word
/// silently replaces the previous entry.
pub struct Dictionary {
    bindings: IndexMap<String, Behavior>,
    cells: Vec<Value>,
}

impl Dictionary {
    /// A dictionary preloaded with the built-in word library.
    pub fn with_core_words() -> Self {
        let mut dictionary = Self {
            bindings: IndexMap::new(),
            cells: Vec::new(),
        };
        words::install(&mut dictionary);
        dictionary
    }

    pub fn lookup(&self, name: &str) -> Option<&Behavior> {
        self.bindings.get(&name.to_uppercase())
    }

    pub fn bind(&mut self, name: &str, behavior: Behavior) {
        self.bindings.insert(name.to_uppercase(), behavior);
    }

    /// Allocates a fresh zero-initialized cell and binds `name` to push a
    /// reference to it.
    pub fn declare_variable(&mut self, name: &str) -> CellId {
        let id = CellId(self.cells.len());
        self.cells.push(Value::Number(0.0));
        self.bind(name, Behavior::Variable(id));
        id
    }

    /// Binds `name` to push `value` itself. No cell is allocated, which is
    /// what makes a constant immune to `STORE`.
    pub fn declare_constant(&mut self, name: &str, value: Value) {
        self.bind(name, Behavior::Constant(value));
    }

    pub fn cell(&self, id: CellId) -> &Value {
        &self.cells[id.0]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Value {
        &mut self.cells[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut dictionary = Dictionary::with_core_words();
        dictionary.declare_variable("counter");
        assert!(dictionary.lookup("COUNTER").is_some());
        assert!(dictionary.lookup("CoUnTeR").is_some());
        assert!(matches!(
            dictionary.lookup("print"),
            Some(Behavior::Builtin(words::Builtin::Print))
        ));
    }

    #[test]
    fn redeclaring_a_variable_allocates_a_fresh_cell() {
        let mut dictionary = Dictionary::with_core_words();
        let first = dictionary.declare_variable("x");
        *dictionary.cell_mut(first) = Value::Number(9.0);
        let second = dictionary.declare_variable("X");
        assert_ne!(first, second);
        assert_eq!(*dictionary.cell(second), Value::Number(0.0));
        // The old cell is untouched and still addressable by id.
        assert_eq!(*dictionary.cell(first), Value::Number(9.0));
    }

    #[test]
    fn last_binding_wins() {
        let mut dictionary = Dictionary::with_core_words();
        dictionary.declare_constant("answer", Value::Number(41.0));
        dictionary.declare_constant("ANSWER", Value::Number(42.0));
        match dictionary.lookup("answer") {
            Some(Behavior::Constant(Value::Number(n))) => assert_eq!(*n, 42.0),
            _ => panic!("expected constant binding"),
        }
    }
}
