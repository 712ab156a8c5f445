use crate::{
    diagnostics::{Result, ScrawlError},
    value::Value,
};

/// The value stack. LIFO at the tail, unbounded.
///
/// All `take*` accessors check depth before popping anything, so a failing
/// operation leaves the stack untouched.
#[derive(Default)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn require(&self, word: &'static str, required: usize) -> Result<()> {
        if self.values.len() < required {
            Err(ScrawlError::StackUnderflow {
                word,
                required,
                actual: self.values.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Borrows the top of stack without popping, so operand validation can
    /// run before anything is consumed.
    pub fn peek1(&self, word: &'static str) -> Result<&Value> {
        self.require(word, 1)?;
        Ok(self.values.last().unwrap())
    }

    /// Borrows the top two values without popping, bottom-first:
    /// `(second-from-top, top)`.
    pub fn peek2(&self, word: &'static str) -> Result<(&Value, &Value)> {
        self.require(word, 2)?;
        let top = self.values.len() - 1;
        Ok((&self.values[top - 1], &self.values[top]))
    }

    /// Pops the top of stack.
    pub fn take1(&mut self, word: &'static str) -> Result<Value> {
        self.require(word, 1)?;
        Ok(self.values.pop().unwrap())
    }

    /// Pops two values, returned bottom-first: `(second-from-top, top)`.
    pub fn take2(&mut self, word: &'static str) -> Result<(Value, Value)> {
        self.require(word, 2)?;
        let top = self.values.pop().unwrap();
        let second = self.values.pop().unwrap();
        Ok((second, top))
    }

    /// Pops three values, returned bottom-first.
    pub fn take3(&mut self, word: &'static str) -> Result<(Value, Value, Value)> {
        self.require(word, 3)?;
        let top = self.values.pop().unwrap();
        let second = self.values.pop().unwrap();
        let third = self.values.pop().unwrap();
        Ok((third, second, top))
    }
}
