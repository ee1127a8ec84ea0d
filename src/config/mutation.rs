use super::*;

impl Document {
    /// Replace the value bound to `key` in place.
    ///
    /// The entry is resolved like [`Document::lookup`]: inside `table_name`
    /// when given, else root first and then tables in lookup order. A key's
    /// variant is fixed by the first parse; a value of another variant is
    /// refused and the stored value stays untouched.
    ///
    /// # Errors
    /// `NotFound` when no entry resolves, `TypeMismatch` when the variants
    /// differ. Values the text format cannot write back are refused too:
    /// `InvalidNumber` for NaN or infinities, `MalformedStatement` for
    /// strings holding `"` or a line break, `MalformedList` for an empty
    /// string list or an element holding `,`.
    pub fn set(&mut self, table_name: Option<&str>, key: &str, value: Value) -> Result<(), ConfigError> {
        let Some((scope, current)) = self.locate(table_name, key) else {
            return Err(access::not_found(table_name, key));
        };

        if current.kind() != value.kind() {
            return Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: value.kind(),
                found: current.kind(),
                line: helpers::find_config_line(scope, key, &self.raw_content),
                hint: Some(format!("'{}' holds a {}; its type cannot change", key, current.kind())),
                code: Some(402),
            });
        }

        check_writable(&value)?;

        if let Some(slot) = self.locate_mut(table_name, key) {
            debug!("set {} = {}", key, value);
            *slot = value;
        }
        Ok(())
    }

    pub fn set_int(&mut self, table_name: Option<&str>, key: &str, value: i64) -> Result<(), ConfigError> {
        self.set(table_name, key, Value::from(value))
    }

    pub fn set_float(&mut self, table_name: Option<&str>, key: &str, value: f64) -> Result<(), ConfigError> {
        self.set(table_name, key, Value::from(value))
    }

    pub fn set_string(
        &mut self,
        table_name: Option<&str>,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.set(table_name, key, Value::String(value.into()))
    }

    pub fn set_bool(&mut self, table_name: Option<&str>, key: &str, value: bool) -> Result<(), ConfigError> {
        self.set(table_name, key, Value::from(value))
    }

    pub fn set_number_list(
        &mut self,
        table_name: Option<&str>,
        key: &str,
        value: Vec<f64>,
    ) -> Result<(), ConfigError> {
        self.set(table_name, key, Value::NumberList(value))
    }

    pub fn set_string_list(
        &mut self,
        table_name: Option<&str>,
        key: &str,
        value: Vec<String>,
    ) -> Result<(), ConfigError> {
        self.set(table_name, key, Value::StringList(value))
    }
}

/// Refuse values whose serialized form would not parse back to the same
/// value.
fn check_writable(value: &Value) -> Result<(), ConfigError> {
    match value {
        Value::Number(n) => check_finite(*n),
        Value::NumberList(items) => items.iter().try_for_each(|n| check_finite(*n)),
        Value::String(s) => check_string(s),
        Value::StringList(items) if items.is_empty() => Err(ConfigError::MalformedList {
            message: "an empty list is read back as a list of numbers".into(),
            line: 0,
            hint: Some("Store at least one string".into()),
            code: Some(405),
        }),
        Value::StringList(items) => items.iter().try_for_each(|s| {
            if s.contains(',') {
                return Err(ConfigError::MalformedList {
                    message: format!("list element {:?} contains ','", s),
                    line: 0,
                    hint: Some("List elements are split on ','".into()),
                    code: Some(405),
                });
            }
            check_string(s)
        }),
        Value::Bool(_) => Ok(()),
    }
}

fn check_finite(n: f64) -> Result<(), ConfigError> {
    if n.is_finite() {
        return Ok(());
    }
    Err(ConfigError::InvalidNumber {
        token: n.to_string(),
        line: 0,
        hint: Some("Only finite numbers can be stored".into()),
        code: Some(403),
    })
}

fn check_string(s: &str) -> Result<(), ConfigError> {
    if !s.contains(['"', '\n', '\r']) {
        return Ok(());
    }
    Err(ConfigError::MalformedStatement {
        message: format!("string {:?} cannot be written as a single-line literal", s),
        line: 0,
        hint: Some("Strings may not contain '\"' or line breaks".into()),
        code: Some(404),
    })
}
