use crate::dictionary::{Behavior, Dictionary};

/// The built-in word library. Each variant is a native operation the engine
/// executes directly; the word spelling it is bound under comes from
/// [`Builtin::word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Sqrt,
    Dup,
    Drop,
    Swap,
    Over,
    Rot,
    Print,
    Pstack,
    Var,
    Const,
    Store,
    Fetch,
    StringLit,
    Comment,
}

impl Builtin {
    /// The dictionary spelling of this operation, also used as the `word`
    /// field in error reports.
    pub fn word(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Sqrt => "SQRT",
            Builtin::Dup => "DUP",
            Builtin::Drop => "DROP",
            Builtin::Swap => "SWAP",
            Builtin::Over => "OVER",
            Builtin::Rot => "ROT",
            Builtin::Print => "PRINT",
            Builtin::Pstack => "PSTACK",
            Builtin::Var => "VAR",
            Builtin::Const => "CONST",
            Builtin::Store => "STORE",
            Builtin::Fetch => "FETCH",
            Builtin::StringLit => "\"",
            Builtin::Comment => "/*",
        }
    }
}

const CORE_WORDS: [Builtin; 18] = [
    Builtin::Add,
    Builtin::Sub,
    Builtin::Mul,
    Builtin::Div,
    Builtin::Sqrt,
    Builtin::Dup,
    Builtin::Drop,
    Builtin::Swap,
    Builtin::Over,
    Builtin::Rot,
    Builtin::Print,
    Builtin::Pstack,
    Builtin::Var,
    Builtin::Const,
    Builtin::Store,
    Builtin::Fetch,
    Builtin::StringLit,
    Builtin::Comment,
];

/// Binds every core word into `dictionary`.
pub fn install(dictionary: &mut Dictionary) {
    for op in CORE_WORDS {
        dictionary.bind(op.word(), Behavior::Builtin(op));
    }
}
