// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Value, ValueKind};
use crate::ConfigError;

/// Conversion failure for a value read outside any key context; callers
/// that know the key fill in `key` and `line`.
fn mismatch(expected: ValueKind, value: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        key: String::new(),
        expected,
        found: value.kind(),
        line: 0,
        hint: Some(format!("Use a {} value in your config", expected)),
        code: Some(401),
    }
}

impl<'a> TryFrom<&'a Value> for f64 {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_number().ok_or_else(|| mismatch(ValueKind::Number, value))
    }
}

impl<'a> TryFrom<&'a Value> for f32 {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

/// Truncates toward zero, saturating at the `i64` bounds.
impl<'a> TryFrom<&'a Value> for i64 {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as i64)
    }
}

impl<'a> TryFrom<&'a Value> for i32 {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as i32)
    }
}

impl<'a> TryFrom<&'a Value> for bool {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch(ValueKind::Boolean, value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_str().ok_or_else(|| mismatch(ValueKind::String, value))
    }
}

impl<'a> TryFrom<&'a Value> for String {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        <&str>::try_from(value).map(str::to_string)
    }
}

impl<'a> TryFrom<&'a Value> for &'a [f64] {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_number_list().ok_or_else(|| mismatch(ValueKind::NumberList, value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a [String] {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_string_list().ok_or_else(|| mismatch(ValueKind::StringList, value))
    }
}

impl<'a> TryFrom<&'a Value> for Vec<f64> {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        <&[f64]>::try_from(value).map(<[f64]>::to_vec)
    }
}

impl<'a> TryFrom<&'a Value> for Vec<String> {
    type Error = ConfigError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        <&[String]>::try_from(value).map(<[String]>::to_vec)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Value::NumberList(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::StringList(items)
    }
}
