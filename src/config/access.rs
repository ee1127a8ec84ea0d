use super::*;

impl Document {
    /// First table named `name` in lookup order (most recently declared
    /// first).
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables_in_lookup_order().find(|t| t.name == name)
    }

    /// Table names in declaration order. Duplicates are listed each time.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Scoped lookup: `key` inside table `table_name`. Root entries are
    /// never consulted.
    ///
    /// # Examples
    /// ```
    /// # use tablecfg::{Document, Value};
    /// let doc = Document::parse("[server]\nport = 8080\n")?;
    /// assert_eq!(doc.get("server", "port"), Some(&Value::Number(8080.0)));
    /// assert_eq!(doc.get("client", "port"), None);
    /// # Ok::<(), tablecfg::ConfigError>(())
    /// ```
    pub fn get(&self, table_name: &str, key: &str) -> Option<&Value> {
        self.locate(Some(table_name), key).map(|(_, value)| value)
    }

    /// Unscoped lookup: root entries first, then every table in lookup
    /// order. First match wins.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.locate(None, key).map(|(_, value)| value)
    }

    /// `get` when a table is given, `find` otherwise.
    pub fn lookup(&self, table_name: Option<&str>, key: &str) -> Option<&Value> {
        self.locate(table_name, key).map(|(_, value)| value)
    }

    pub fn has(&self, table_name: Option<&str>, key: &str) -> bool {
        self.locate(table_name, key).is_some()
    }

    /// Keys of a table (or of the root with `None`), in declaration order.
    pub fn keys(&self, table_name: Option<&str>) -> Option<Vec<&str>> {
        match table_name {
            Some(name) => self.table(name).map(|t| t.entries.keys().collect()),
            None => Some(self.root.keys().collect()),
        }
    }

    /// Typed lookup; `None` when the key is absent or holds another variant.
    ///
    /// ```
    /// # use tablecfg::Document;
    /// let doc = Document::parse("[net]\nhosts = [ \"a\", \"b\" ]\n")?;
    /// let hosts: Option<&[String]> = doc.get_as(Some("net"), "hosts");
    /// assert_eq!(hosts.map(|h| h.len()), Some(2));
    /// # Ok::<(), tablecfg::ConfigError>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, table_name: Option<&str>, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = ConfigError>,
    {
        self.lookup(table_name, key).and_then(|value| T::try_from(value).ok())
    }

    /// Like [`Document::get_as`], but reports why nothing came back.
    ///
    /// # Errors
    /// `NotFound` when the key is absent, `TypeMismatch` (with the line the
    /// key was declared on) when it holds another variant.
    pub fn require_as<'a, T>(&'a self, table_name: Option<&str>, key: &str) -> Result<T, ConfigError>
    where
        T: TryFrom<&'a Value, Error = ConfigError>,
    {
        let Some((scope, value)) = self.locate(table_name, key) else {
            return Err(not_found(table_name, key));
        };

        T::try_from(value).map_err(|e| match e {
            ConfigError::TypeMismatch { expected, found, hint, code, .. } => ConfigError::TypeMismatch {
                key: key.to_string(),
                expected,
                found,
                line: helpers::find_config_line(scope, key, &self.raw_content),
                hint,
                code,
            },
            other => other,
        })
    }

    pub fn get_int(&self, table_name: &str, key: &str) -> Option<i64> {
        self.get_as(Some(table_name), key)
    }

    pub fn get_float(&self, table_name: &str, key: &str) -> Option<f64> {
        self.get_as(Some(table_name), key)
    }

    pub fn get_string(&self, table_name: &str, key: &str) -> Option<&str> {
        self.get_as(Some(table_name), key)
    }

    pub fn get_bool(&self, table_name: &str, key: &str) -> Option<bool> {
        self.get_as(Some(table_name), key)
    }

    pub fn get_number_list(&self, table_name: &str, key: &str) -> Option<&[f64]> {
        self.get_as(Some(table_name), key)
    }

    pub fn get_string_list(&self, table_name: &str, key: &str) -> Option<&[String]> {
        self.get_as(Some(table_name), key)
    }

    pub fn find_int(&self, key: &str) -> Option<i64> {
        self.get_as(None, key)
    }

    pub fn find_float(&self, key: &str) -> Option<f64> {
        self.get_as(None, key)
    }

    pub fn find_string(&self, key: &str) -> Option<&str> {
        self.get_as(None, key)
    }

    pub fn find_bool(&self, key: &str) -> Option<bool> {
        self.get_as(None, key)
    }

    pub fn find_number_list(&self, key: &str) -> Option<&[f64]> {
        self.get_as(None, key)
    }

    pub fn find_string_list(&self, key: &str) -> Option<&[String]> {
        self.get_as(None, key)
    }

    /// Resolve `key` and report which table it came from (`None` = root).
    pub(crate) fn locate(&self, table_name: Option<&str>, key: &str) -> Option<(Option<&str>, &Value)> {
        let in_tables = |only: Option<&str>| {
            self.tables_in_lookup_order()
                .filter(move |t| only.is_none_or(|name| t.name == name))
                .find_map(|t| t.entries.get(key).map(|v| (Some(t.name.as_str()), v)))
        };

        match table_name {
            Some(name) => in_tables(Some(name)),
            None => self.root.get(key).map(|v| (None, v)).or_else(|| in_tables(None)),
        }
    }

    pub(crate) fn locate_mut(&mut self, table_name: Option<&str>, key: &str) -> Option<&mut Value> {
        if table_name.is_none() && self.root.contains_key(key) {
            return self.root.get_mut(key);
        }

        self.tables_in_lookup_order_mut()
            .filter(|t| table_name.is_none_or(|name| t.name == name))
            .find_map(|t| t.entries.get_mut(key))
    }
}

pub(super) fn not_found(table_name: Option<&str>, key: &str) -> ConfigError {
    ConfigError::NotFound {
        table: table_name.map(str::to_string),
        key: key.to_string(),
        hint: Some(match table_name {
            Some(_) => "Check the table name and that the key is declared inside it".into(),
            None => "Check that the key is declared somewhere in the file".into(),
        }),
        code: Some(304),
    }
}
