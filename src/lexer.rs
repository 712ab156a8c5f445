use crate::diagnostics::{Result, ScrawlError};

/// Word-oriented scanner over a fixed source text.
///
/// The cursor is a character offset that only ever moves forward. Built-in
/// words that consume extra input (`VAR`, `CONST`, `"`, `/*`) read through
/// the same cursor as the engine's dispatch loop, so a word consumed by one
/// of them is never seen again by the loop.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
        }
    }

    /// Returns the next maximal run of non-whitespace characters, or `None`
    /// at end of input. Advances past the word and the single whitespace
    /// character that terminated it.
    pub fn next_word(&mut self) -> Option<String> {
        while self.position < self.chars.len() && self.chars[self.position].is_whitespace() {
            self.position += 1;
        }
        if self.position >= self.chars.len() {
            return None;
        }
        let start = self.position;
        while self.position < self.chars.len() && !self.chars[self.position].is_whitespace() {
            self.position += 1;
        }
        let word = self.chars[start..self.position].iter().collect();
        // Step over the delimiting whitespace so a follow-up
        // `next_chars_up_to` starts inside the literal.
        self.position += 1;
        Some(word)
    }

    /// Returns all characters from the cursor up to (excluding) the next
    /// occurrence of `delimiter`, advancing the cursor past the delimiter.
    pub fn next_chars_up_to(&mut self, delimiter: char) -> Result<String> {
        let start = self.position;
        let mut scan = self.position;
        while scan < self.chars.len() {
            if self.chars[scan] == delimiter {
                let text = self.chars[start..scan].iter().collect();
                self.position = scan + 1;
                return Ok(text);
            }
            scan += 1;
        }
        Err(ScrawlError::UnterminatedLiteral { delimiter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_arbitrary_whitespace() {
        let mut lexer = Lexer::new("  one\ttwo\nthree ");
        assert_eq!(lexer.next_word().as_deref(), Some("one"));
        assert_eq!(lexer.next_word().as_deref(), Some("two"));
        assert_eq!(lexer.next_word().as_deref(), Some("three"));
        assert_eq!(lexer.next_word(), None);
    }

    #[test]
    fn exhausted_lexer_stays_exhausted() {
        let mut lexer = Lexer::new("last");
        assert_eq!(lexer.next_word().as_deref(), Some("last"));
        assert_eq!(lexer.next_word(), None);
        assert_eq!(lexer.next_word(), None);
    }

    #[test]
    fn delimited_scan_starts_after_word_separator() {
        let mut lexer = Lexer::new("\" hello there\" PRINT");
        assert_eq!(lexer.next_word().as_deref(), Some("\""));
        let text = lexer.next_chars_up_to('"').expect("closing quote present");
        assert_eq!(text, "hello there");
        assert_eq!(lexer.next_word().as_deref(), Some("PRINT"));
    }

    #[test]
    fn missing_delimiter_is_an_error() {
        let mut lexer = Lexer::new("\" runs off the end");
        assert_eq!(lexer.next_word().as_deref(), Some("\""));
        let err = lexer.next_chars_up_to('"').unwrap_err();
        assert!(matches!(
            err,
            ScrawlError::UnterminatedLiteral { delimiter: '"' }
        ));
    }
}
