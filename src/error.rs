use std::fmt;

use thiserror::Error;

use crate::ast::ValueKind;

/// Coarse classification of a [`ConfigError`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    MalformedStatement,
    UnterminatedString,
    MalformedList,
    InvalidNumber,
    IoFailure,
    TypeMismatch,
    NotFound,
    ExportError,
}

/// The main error type for parsing, file access and typed mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("[CFG] Empty input: nothing to parse{}", suffix(.hint, .code))]
    EmptyInput {
        hint: Option<String>,
        code: Option<u32>,
    },

    #[error("[CFG] Malformed statement at line {line}: {message}{}", suffix(.hint, .code))]
    MalformedStatement {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },

    /// Raised when a string literal is not closed by the quote that opened it.
    #[error("[CFG] Unterminated string starting with '{quote}' at line {line}{}", suffix(.hint, .code))]
    UnterminatedString {
        quote: char,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },

    #[error("[CFG] Malformed list at line {line}: {message}{}", suffix(.hint, .code))]
    MalformedList {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },

    #[error("[CFG] Invalid number '{token}' at line {line}{}", suffix(.hint, .code))]
    InvalidNumber {
        token: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },

    #[error("[CFG] File Error '{path}': {message}{}", suffix(.hint, .code))]
    IoFailure {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },

    /// A setter was called against a key holding a different variant.
    #[error("[CFG] Type mismatch for '{key}' (declared at line {line}): expected {expected}, found {found}{}", suffix(.hint, .code))]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },

    #[error("[CFG] Not found: {}{}", Target(.table, .key), suffix(.hint, .code))]
    NotFound {
        table: Option<String>,
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },

    #[error("[CFG] Export Error: {message}{}", suffix(.hint, .code))]
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::EmptyInput { .. } => ErrorKind::EmptyInput,
            ConfigError::MalformedStatement { .. } => ErrorKind::MalformedStatement,
            ConfigError::UnterminatedString { .. } => ErrorKind::UnterminatedString,
            ConfigError::MalformedList { .. } => ErrorKind::MalformedList,
            ConfigError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            ConfigError::IoFailure { .. } => ErrorKind::IoFailure,
            ConfigError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ConfigError::NotFound { .. } => ErrorKind::NotFound,
            ConfigError::ExportError { .. } => ErrorKind::ExportError,
        }
    }

    /// Source line the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::MalformedStatement { line, .. }
            | ConfigError::UnterminatedString { line, .. }
            | ConfigError::MalformedList { line, .. }
            | ConfigError::InvalidNumber { line, .. }
            | ConfigError::TypeMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Attach a source line to a parse error raised by the line-agnostic
    /// value parser. Other variants pass through untouched.
    pub(crate) fn at_line(mut self, at: usize) -> Self {
        match &mut self {
            ConfigError::MalformedStatement { line, .. }
            | ConfigError::UnterminatedString { line, .. }
            | ConfigError::MalformedList { line, .. }
            | ConfigError::InvalidNumber { line, .. } => *line = at,
            _ => {}
        }
        self
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

struct Target<'a>(&'a Option<String>, &'a String);

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(table) => write!(f, "key '{}' in table [{}]", self.1, table),
            None => write!(f, "key '{}'", self.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant_name() {
        let export = ConfigError::ExportError {
            message: "boom".into(),
            hint: None,
            code: Some(500),
        };
        assert_eq!(export.kind(), ErrorKind::ExportError);
        assert_eq!(export.to_string(), "[CFG] Export Error: boom Code: 500");

        let missing = ConfigError::NotFound {
            table: Some("t".into()),
            key: "k".into(),
            hint: None,
            code: None,
        };
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(missing.to_string(), "[CFG] Not found: key 'k' in table [t]");
    }
}
