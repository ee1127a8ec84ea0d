use crate::ast::Document;
use crate::lexer::{Lexer, Line};
use crate::ConfigError;

mod document;
mod value;

pub use value::parse_value;

pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    peek: Option<Line>,
    peek_line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, ConfigError> {
        if input.is_empty() {
            return Err(ConfigError::EmptyInput {
                hint: Some("Provide at least one line of content".into()),
                code: Some(200),
            });
        }

        let mut lexer = Lexer::new(input);
        let peek = lexer.next_line();
        let peek_line = lexer.line();
        Ok(Self {
            input,
            lexer,
            peek,
            peek_line,
        })
    }

    pub(crate) fn bump(&mut self) -> Option<Line> {
        let curr = self.peek.take();
        self.peek = self.lexer.next_line();
        self.peek_line = self.lexer.line();
        curr
    }

    pub(crate) fn peek(&self) -> Option<&Line> {
        self.peek.as_ref()
    }

    /// 1-based line number of the peeked line.
    pub(crate) fn line(&self) -> usize {
        self.peek_line
    }

    pub(crate) fn is_done(&self) -> bool {
        self.peek.is_none()
    }

    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    /// Parse the whole input. Any malformed line fails the parse and no
    /// document is produced.
    pub fn parse_document(&mut self) -> Result<Document, ConfigError> {
        document::parse_document(self)
    }
}

#[cfg(test)]
mod tests;
