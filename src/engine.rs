use std::io::{self, Write};

use crate::{
    diagnostics::{Result, ScrawlError},
    dictionary::{Behavior, Dictionary},
    lexer::Lexer,
    stack::Stack,
    value::Value,
    words::Builtin,
};

/// One interpreter session: the value stack, the word dictionary, and the
/// output sink written by `PRINT`/`PSTACK`.
///
/// The lexer is constructed per `run` call, so a single engine can evaluate
/// several sources against one persistent dictionary and stack; this is what
/// keeps `VAR`/`CONST` definitions alive across REPL lines.
pub struct Engine<W: Write> {
    stack: Stack,
    dictionary: Dictionary,
    out: W,
}

impl Engine<io::Stdout> {
    /// An engine writing to standard output.
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Engine<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Engine<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            stack: Stack::default(),
            dictionary: Dictionary::with_core_words(),
            out,
        }
    }

    /// The current stack contents, bottom first.
    pub fn stack(&self) -> &[Value] {
        self.stack.values()
    }

    /// Consumes the engine and hands back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates `source` to completion. The first error aborts the run;
    /// exhausting the input is success.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let mut lexer = Lexer::new(source);
        while let Some(word) = lexer.next_word() {
            // Dictionary first, then number literal. A bound word like `5`
            // therefore shadows the literal; last binding wins.
            let behavior = self.dictionary.lookup(&word).cloned();
            if let Some(behavior) = behavior {
                match behavior {
                    Behavior::Builtin(op) => self.execute(op, &mut lexer)?,
                    Behavior::Variable(cell) => self.stack.push(Value::VarRef(cell)),
                    Behavior::Constant(value) => self.stack.push(value),
                }
            } else if let Ok(number) = word.parse::<f64>() {
                self.stack.push(Value::Number(number));
            } else {
                return Err(ScrawlError::UnknownWord(word));
            }
        }
        Ok(())
    }

    fn execute(&mut self, op: Builtin, lexer: &mut Lexer) -> Result<()> {
        match op {
            Builtin::Add => self.binary_numeric(op, |a, b| a + b),
            Builtin::Sub => self.binary_numeric(op, |a, b| a - b),
            Builtin::Mul => self.binary_numeric(op, |a, b| a * b),
            Builtin::Div => {
                let (a, b) = self.numeric_operands(op)?;
                if b == 0.0 {
                    return Err(ScrawlError::DomainError {
                        word: op.word(),
                        message: "division by zero".into(),
                    });
                }
                self.stack.take2(op.word())?;
                self.stack.push(Value::Number(a / b));
                Ok(())
            }
            Builtin::Sqrt => {
                let n = expect_number(op.word(), self.stack.peek1(op.word())?)?;
                if n < 0.0 {
                    return Err(ScrawlError::DomainError {
                        word: op.word(),
                        message: format!("square root of negative number {n}"),
                    });
                }
                self.stack.take1(op.word())?;
                self.stack.push(Value::Number(n.sqrt()));
                Ok(())
            }
            Builtin::Dup => {
                let top = self.stack.take1(op.word())?;
                self.stack.push(top.clone());
                self.stack.push(top);
                Ok(())
            }
            Builtin::Drop => {
                self.stack.take1(op.word())?;
                Ok(())
            }
            Builtin::Swap => {
                let (a, b) = self.stack.take2(op.word())?;
                self.stack.push(b);
                self.stack.push(a);
                Ok(())
            }
            Builtin::Over => {
                let (a, b) = self.stack.take2(op.word())?;
                self.stack.push(a.clone());
                self.stack.push(b);
                self.stack.push(a);
                Ok(())
            }
            Builtin::Rot => {
                let (a, b, c) = self.stack.take3(op.word())?;
                self.stack.push(b);
                self.stack.push(c);
                self.stack.push(a);
                Ok(())
            }
            Builtin::Print => {
                let value = self.stack.take1(op.word())?;
                writeln!(self.out, "{value}")?;
                Ok(())
            }
            Builtin::Pstack => {
                writeln!(self.out, "{:?}", self.stack.values())?;
                Ok(())
            }
            Builtin::Var => {
                let name = self.consume_name(op, lexer)?;
                self.dictionary.declare_variable(&name);
                Ok(())
            }
            Builtin::Const => {
                let name = self.consume_name(op, lexer)?;
                let value = self.stack.take1(op.word())?;
                self.dictionary.declare_constant(&name, value);
                Ok(())
            }
            Builtin::Store => {
                let cell = match self.stack.peek2(op.word())? {
                    (_, Value::VarRef(cell)) => *cell,
                    (_, other) => {
                        return Err(ScrawlError::TypeMismatch {
                            word: op.word(),
                            expected: "VarRef",
                            found: other.type_name(),
                        });
                    }
                };
                let (value, _) = self.stack.take2(op.word())?;
                *self.dictionary.cell_mut(cell) = value;
                // The reference goes back on the stack so stores can chain.
                self.stack.push(Value::VarRef(cell));
                Ok(())
            }
            Builtin::Fetch => {
                let cell = match self.stack.peek1(op.word())? {
                    Value::VarRef(cell) => *cell,
                    other => {
                        return Err(ScrawlError::TypeMismatch {
                            word: op.word(),
                            expected: "VarRef",
                            found: other.type_name(),
                        });
                    }
                };
                self.stack.take1(op.word())?;
                self.stack.push(self.dictionary.cell(cell).clone());
                Ok(())
            }
            Builtin::StringLit => {
                let text = lexer.next_chars_up_to('"')?;
                self.stack.push(Value::Text(text));
                Ok(())
            }
            Builtin::Comment => loop {
                match lexer.next_word() {
                    // Suffix match, not substring: `*/` glued to a longer
                    // token still terminates, matching the scanner's
                    // word-by-word discard policy.
                    Some(word) if word.ends_with("*/") => return Ok(()),
                    Some(_) => {}
                    None => {
                        return Err(ScrawlError::UnexpectedEndOfInput { word: op.word() });
                    }
                }
            },
        }
    }

    /// Consumes the next lexer word as a declaration name.
    fn consume_name(&mut self, op: Builtin, lexer: &mut Lexer) -> Result<String> {
        lexer
            .next_word()
            .ok_or(ScrawlError::UnexpectedEndOfInput { word: op.word() })
    }

    /// Reads the top two numbers without popping, bottom-first, so
    /// `a b OP` computes `a OP b`. The caller pops once every precondition
    /// has passed; a failing operand check leaves the stack untouched.
    fn numeric_operands(&self, op: Builtin) -> Result<(f64, f64)> {
        let (a, b) = self.stack.peek2(op.word())?;
        let a = expect_number(op.word(), a)?;
        let b = expect_number(op.word(), b)?;
        Ok((a, b))
    }

    fn binary_numeric(&mut self, op: Builtin, apply: fn(f64, f64) -> f64) -> Result<()> {
        let (a, b) = self.numeric_operands(op)?;
        self.stack.take2(op.word())?;
        self.stack.push(Value::Number(apply(a, b)));
        Ok(())
    }
}

fn expect_number(word: &'static str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(ScrawlError::TypeMismatch {
            word,
            expected: "Number",
            found: other.type_name(),
        }),
    }
}
