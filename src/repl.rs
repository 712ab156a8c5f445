use std::io;

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    diagnostics::{Result, ScrawlError},
    engine::Engine,
};

/// Interactive session. One engine lives for the whole session, so words
/// declared with `VAR`/`CONST` and values left on the stack carry over from
/// line to line.
pub struct Repl {
    engine: Engine<io::Stdout>,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()
            .map_err(|err| ScrawlError::from(io::Error::new(io::ErrorKind::Other, err)))?;
        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed == ":quit" || trimmed == ":exit" {
                        break;
                    }
                    if trimmed.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(trimmed).ok();
                    if let Err(err) = self.engine.run(trimmed) {
                        eprintln!("error: {err}");
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    return Err(ScrawlError::from(io::Error::new(
                        io::ErrorKind::Other,
                        err,
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
