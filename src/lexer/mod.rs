// Author: Dustin Pilgrim
// License: MIT

use std::str::Lines;

use crate::utils::trim_preserving_strings;

/// One source line, already stripped of whitespace outside quoted spans.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Blank,
    Comment(String),
    /// Starts with `[`; bracket balance is checked by the parser.
    Header(String),
    Statement(String),
}

pub struct Lexer<'a> {
    input: Lines<'a>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.lines(),
            line: 0,
        }
    }

    /// 1-based number of the line most recently returned.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_line(&mut self) -> Option<Line> {
        let raw = self.input.next()?;
        self.line += 1;
        Some(classify(raw))
    }
}

fn classify(raw: &str) -> Line {
    let trimmed = trim_preserving_strings(raw);

    if trimmed.is_empty() {
        Line::Blank
    } else if trimmed.starts_with('#') {
        Line::Comment(trimmed)
    } else if trimmed.starts_with('[') {
        Line::Header(trimmed)
    } else {
        Line::Statement(trimmed)
    }
}
