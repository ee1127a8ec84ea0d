// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use serde_json::json;

use crate::ast::{Document, EntryStore, Value};
use crate::ConfigError;

/// Serialize a document back to config text.
///
/// Root entries come first, then a blank line, then each table as a
/// `[name]` header, its entries and a blank line. Entries and tables are
/// written in declaration order, so parsing the output and writing it again
/// reproduces it byte for byte.
pub fn to_config_string(doc: &Document) -> String {
    let mut out = String::new();

    write_entries(&mut out, doc.root());
    out.push('\n');

    for table in doc.tables() {
        out.push_str(&format!("[{}]\n", table.name));
        write_entries(&mut out, &table.entries);
        out.push('\n');
    }

    out
}

fn write_entries(out: &mut String, entries: &EntryStore) {
    for (key, value) in entries.iter() {
        out.push_str(&format!("{} = {}\n", key, value));
    }
}

impl Document {
    pub fn to_config_string(&self) -> String {
        to_config_string(self)
    }

    /// Human-readable listing for diagnostics. Not meant to be parsed.
    pub fn dump(&self) -> String {
        dump_document(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_config_string(self))
    }
}

/// Diagnostic dump: `key: value` lines for the root, then each table under a
/// `Table: name` line with its entries indented. List values get one
/// numbered line per element.
pub fn dump_document(doc: &Document) -> String {
    let mut out = String::new();

    dump_entries(&mut out, doc.root(), false);
    out.push('\n');

    for table in doc.tables() {
        out.push_str(&format!("Table: {}\n", table.name));
        dump_entries(&mut out, &table.entries, true);
    }

    out
}

fn dump_entries(out: &mut String, entries: &EntryStore, indent: bool) {
    let (pad, item_pad) = if indent { ("    ", "\t") } else { ("", "    ") };

    for (key, value) in entries.iter() {
        match value {
            Value::Number(n) => out.push_str(&format!("{}{}: {:.10}\n", pad, key, n)),
            Value::String(s) => out.push_str(&format!("{}{}: {}\n", pad, key, s)),
            Value::Bool(b) => out.push_str(&format!("{}{}: {}\n", pad, key, b)),
            Value::NumberList(items) => {
                out.push_str(&format!("{}{}:\n", pad, key));
                for (i, n) in items.iter().enumerate() {
                    out.push_str(&format!("{}{} - {:.10}\n", item_pad, i, n));
                }
            }
            Value::StringList(items) => {
                out.push_str(&format!("{}{}:\n", pad, key));
                for (i, s) in items.iter().enumerate() {
                    out.push_str(&format!("{}{} - {}\n", item_pad, i, s));
                }
            }
        }
    }
}

/// Export a document to pretty-printed JSON.
///
/// Layout: `{"root": {key: value, ...}, "tables": [{"name": ..., "entries": {...}}]}`.
/// Numbers map to JSON numbers, lists to arrays.
///
/// # Examples
/// ```
/// use tablecfg::{Document, export};
///
/// let doc = Document::parse("name = \"app\"\n[server]\nport = 80\n")?;
/// let json = export::export_document_to_json(&doc)?;
/// assert!(json.contains("\"port\": 80"));
/// # Ok::<(), tablecfg::ConfigError>(())
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, ConfigError> {
    let root = serde_json::to_value(doc.root()).map_err(export_error)?;
    let tables = serde_json::to_value(doc.tables()).map_err(export_error)?;

    serde_json::to_string_pretty(&json!({
        "root": root,
        "tables": tables,
    }))
    .map_err(export_error)
}

/// Export a config file directly to JSON.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid syntax.
pub fn export_file_to_json(path: &str) -> Result<String, ConfigError> {
    let doc = Document::from_file(path)?;
    export_document_to_json(&doc)
}

fn export_error(e: serde_json::Error) -> ConfigError {
    ConfigError::ExportError {
        message: e.to_string(),
        hint: None,
        code: Some(500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "title = \"demo\"\n[server]\nport = 8080\nhost = \"local\"\nweights = [ 1, 2, 3 ]\n";

    #[test]
    fn test_serialize_sample() {
        let doc = Document::parse(SAMPLE).unwrap();
        let expected = "title = \"demo\"\n\n[server]\nport = 8080\nhost = \"local\"\nweights = [ 1, 2, 3 ]\n\n";
        assert_eq!(to_config_string(&doc), expected);
        assert_eq!(doc.to_string(), expected);
    }

    #[test]
    fn test_serialize_numbers_and_lists() {
        let doc = Document::parse("[t]\nf = 0.5\nneg = -2\ne = []\ns = [ 'a b', \"c\" ]\n").unwrap();
        let out = to_config_string(&doc);
        assert_eq!(
            out,
            "\n[t]\nf = 0.50000\nneg = -2\ne = [ ]\ns = [ \"a b\", \"c\" ]\n\n"
        );
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let input = "# c\nb = 1.25\na = true\n[x]\nk = 'v'\n[y]\nl = [ 0.1, 2 ]\n";
        let once = Document::parse(input).unwrap().to_config_string();
        let twice = Document::parse(&once).unwrap().to_config_string();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dump_layout() {
        let doc = Document::parse("a = 1\n[t]\nl = [ \"x\", \"y\" ]\nflag = false\n").unwrap();
        let expected = "a: 1.0000000000\n\nTable: t\n    l:\n\t0 - x\n\t1 - y\n    flag: false\n";
        assert_eq!(doc.dump(), expected);
    }

    #[test]
    fn test_export_json() {
        let doc = Document::parse(SAMPLE).unwrap();
        let json_output = export_document_to_json(&doc).expect("Failed to export document to JSON");

        println!("--- Exported JSON ---\n{}", json_output);

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["root"]["title"], "demo");
        assert_eq!(v["tables"][0]["name"], "server");
        assert_eq!(v["tables"][0]["entries"]["port"], 8080.0);
        assert_eq!(v["tables"][0]["entries"]["weights"][2], 3.0);
    }
}
