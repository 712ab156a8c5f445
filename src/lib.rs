//! Core library for the Scrawl stack language interpreter: a word lexer,
//! a dictionary-driven dispatch loop, and a small built-in word library for
//! arithmetic, stack shuffling, variables, and literals.

pub mod diagnostics;
pub mod dictionary;
pub mod engine;
pub mod lexer;
pub mod repl;
pub mod stack;
pub mod value;
pub mod words;

pub use diagnostics::{Result, ScrawlError};
pub use engine::Engine;
pub use repl::Repl;
pub use value::Value;
