use log::{debug, trace, warn};

use super::*;
use crate::ast::{EntryStore, Table, Value};
use crate::utils::split_statement;

enum State {
    ScanningRoot,
    ScanningTable,
    Done,
}

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, ConfigError> {
    let mut root = EntryStore::new();
    let mut tables = Vec::new();
    let mut state = State::ScanningRoot;

    loop {
        state = match state {
            State::ScanningRoot => {
                parse_block_entries(parser, &mut root, None)?;
                next_state(parser)
            }
            State::ScanningTable => {
                tables.push(parse_table(parser)?);
                next_state(parser)
            }
            State::Done => break,
        };
    }

    debug!(
        "parsed document: {} root entries, {} tables",
        root.len(),
        tables.len()
    );

    Ok(Document::new(root, tables, parser.input().to_string()))
}

fn next_state(parser: &Parser) -> State {
    if parser.is_done() {
        State::Done
    } else {
        State::ScanningTable
    }
}

/// Parse one `[name]` header and the entries below it, stopping before the
/// next header or at end of input.
fn parse_table(parser: &mut Parser) -> Result<Table, ConfigError> {
    while matches!(parser.peek(), Some(Line::Blank | Line::Comment(_))) {
        parser.bump();
    }

    let line = parser.line();
    let header = match parser.bump() {
        Some(Line::Header(header)) => header,
        other => {
            return Err(ConfigError::MalformedStatement {
                message: format!("expected a table header, got {:?}", other),
                line,
                hint: None,
                code: Some(202),
            });
        }
    };

    let mut table = Table::new(parse_table_name(&header, line)?);
    parse_block_entries(parser, &mut table.entries, Some(table.name.as_str()))?;

    debug!(
        "parsed table [{}] with {} entries (header at line {})",
        table.name,
        table.entries.len(),
        line
    );
    Ok(table)
}

fn parse_table_name(header: &str, line: usize) -> Result<String, ConfigError> {
    match header.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        Some(_) => Err(ConfigError::MalformedStatement {
            message: "table name is empty".into(),
            line,
            hint: Some("Write the header as [name]".into()),
            code: Some(203),
        }),
        None => Err(ConfigError::MalformedStatement {
            message: format!("unclosed table header {}", header),
            line,
            hint: Some("Table headers must end with ']'".into()),
            code: Some(203),
        }),
    }
}

/// Consume key/value lines into `store` until a header or end of input.
fn parse_block_entries(
    parser: &mut Parser,
    store: &mut EntryStore,
    table: Option<&str>,
) -> Result<(), ConfigError> {
    while let Some(next) = parser.peek() {
        match next {
            Line::Header(_) => break,
            Line::Blank | Line::Comment(_) => {
                parser.bump();
            }
            Line::Statement(statement) => {
                let line = parser.line();
                let (key, value) = parse_statement(statement, line)?;
                trace!("line {}: {} = {:?}", line, key, value);

                if store.insert(key.clone(), value).is_some() {
                    warn!(
                        "key '{}' redeclared at line {} in {}; last value wins",
                        key,
                        line,
                        table.map_or("root".to_string(), |t| format!("[{}]", t))
                    );
                }
                parser.bump();
            }
        }
    }

    Ok(())
}

fn parse_statement(statement: &str, line: usize) -> Result<(String, Value), ConfigError> {
    let Some((key, literal)) = split_statement(statement) else {
        return Err(ConfigError::MalformedStatement {
            message: format!("expected `key = value`, got {}", statement),
            line,
            hint: Some("Every line outside a table header must contain '='".into()),
            code: Some(201),
        });
    };

    if key.is_empty() || literal.is_empty() {
        return Err(ConfigError::MalformedStatement {
            message: format!("missing {} in {}", if key.is_empty() { "key" } else { "value" }, statement),
            line,
            hint: None,
            code: Some(201),
        });
    }

    let value = parse_value(literal).map_err(|e| e.at_line(line))?;
    Ok((key.to_string(), value))
}
