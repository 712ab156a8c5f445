use std::fmt;

use crate::dictionary::CellId;

/// A runtime value on the stack or inside a variable cell.
///
/// `Number` and `Text` travel by value; `VarRef` names a mutable cell owned
/// by the dictionary's cell table, so several stacked references to the same
/// cell all observe a `STORE` through any of them.
#[derive(Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    VarRef(CellId),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::VarRef(_) => "VarRef",
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

/// Rendering used by `PRINT`: text is verbatim, integral numbers drop the
/// fractional part.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write_number(f, *n),
            Value::Text(s) => write!(f, "{s}"),
            Value::VarRef(id) => write!(f, "<var #{id}>"),
        }
    }
}

/// Rendering used by `PSTACK`: text keeps its quotes so the three kinds stay
/// distinguishable inside the stack listing.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write_number(f, *n),
            Value::Text(s) => write!(f, "\"{s}\""),
            Value::VarRef(id) => write!(f, "<var #{id}>"),
        }
    }
}
