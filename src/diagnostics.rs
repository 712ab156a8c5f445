use thiserror::Error;

/// Unified error type for the Scrawl interpreter.
///
/// Every variant that originates inside a built-in word carries the word's
/// name so failures can be diagnosed without source positions.
#[derive(Debug, Error)]
pub enum ScrawlError {
    #[error("stack underflow in `{word}`: needs {required} operand(s), stack holds {actual}")]
    StackUnderflow {
        word: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("unknown word `{0}`")]
    UnknownWord(String),
    #[error("unexpected end of input while reading `{word}`")]
    UnexpectedEndOfInput { word: &'static str },
    #[error("unterminated literal: no closing `{delimiter}` before end of input")]
    UnterminatedLiteral { delimiter: char },
    #[error("type mismatch in `{word}`: expected {expected}, found {found}")]
    TypeMismatch {
        word: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("domain error in `{word}`: {message}")]
    DomainError {
        word: &'static str,
        message: String,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrawlError>;
