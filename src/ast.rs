use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
    NumberList(Vec<f64>),
    StringList(Vec<String>),
}

/// The variant of a [`Value`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    String,
    Boolean,
    NumberList,
    StringList,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::NumberList => "list of numbers",
            ValueKind::StringList => "list of strings",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Boolean,
            Value::NumberList(_) => ValueKind::NumberList,
            Value::StringList(_) => ValueKind::StringList,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self { Some(*n) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_number_list(&self) -> Option<&[f64]> {
        if let Value::NumberList(items) = self { Some(items) } else { None }
    }

    pub fn as_string_list(&self) -> Option<&[String]> {
        if let Value::StringList(items) = self { Some(items) } else { None }
    }
}

/// Canonical literal form, as written by the serializer.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::NumberList(items) => {
                let parts: Vec<String> = items.iter().map(|n| format_number(*n)).collect();
                write_list(f, &parts)
            }
            Value::StringList(items) => {
                let parts: Vec<String> = items.iter().map(|s| format!("\"{}\"", s)).collect();
                write_list(f, &parts)
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, parts: &[String]) -> fmt::Result {
    if parts.is_empty() {
        return f.write_str("[ ]");
    }
    write!(f, "[ {} ]", parts.join(", "))
}

/// Five fractional digits, with a `.00000` tail dropped so whole values
/// print as integers. Rounding happens before the whole check, which keeps
/// `format(parse(format(x))) == format(x)`.
pub(crate) fn format_number(n: f64) -> String {
    let fixed = format!("{:.5}", n);
    match fixed.strip_suffix(".00000") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}

/// Key/value bindings of the document root or of one table, in declaration
/// order. Keys are unique; redeclaring a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: IndexMap<String, Value>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub entries: EntryStore,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: EntryStore::new(),
        }
    }
}

/// A parsed config file: root entries, tables, and the text it came from.
///
/// Tables are stored in declaration order. Lookups walk them from the most
/// recently declared one backwards, so with duplicate table names the later
/// declaration shadows the earlier one while both stay in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub(crate) root: EntryStore,
    pub(crate) tables: Vec<Table>,
    #[serde(skip)]
    pub(crate) raw_content: String,
}

impl Document {
    pub(crate) fn new(root: EntryStore, tables: Vec<Table>, raw_content: String) -> Self {
        Self { root, tables, raw_content }
    }

    /// Entries declared before the first table header.
    pub fn root(&self) -> &EntryStore {
        &self.root
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Tables in lookup order: most recently declared first.
    pub fn tables_in_lookup_order(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().rev()
    }

    pub(crate) fn tables_in_lookup_order_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.tables.iter_mut().rev()
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}
