pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod utils;

pub use ast::{Document, EntryStore, Table, Value, ValueKind};
pub use error::{ConfigError, ErrorKind};
pub use parser::parse_value;
