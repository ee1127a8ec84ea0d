use crate::ast::Value;
use crate::utils::{is_quote, split};
use crate::ConfigError;

/// Parse a single, already trimmed value literal.
///
/// Dispatch order: quoted string, `[...]` list, `true`/`false`, number.
/// Errors carry line 0; the document parser fills in the real line.
pub fn parse_value(literal: &str) -> Result<Value, ConfigError> {
    match literal.chars().next() {
        Some(quote) if is_quote(quote) => parse_string(literal, quote).map(Value::String),
        Some('[') => parse_list(literal),
        _ if literal == "true" => Ok(Value::Bool(true)),
        _ if literal == "false" => Ok(Value::Bool(false)),
        _ => parse_number(literal).map(Value::Number),
    }
}

/// Content between matching quotes, verbatim. No escapes.
fn parse_string(literal: &str, quote: char) -> Result<String, ConfigError> {
    let body = &literal[quote.len_utf8()..];

    let Some(content) = body.strip_suffix(quote) else {
        return Err(ConfigError::UnterminatedString {
            quote,
            line: 0,
            hint: Some(format!("Close the string with {}", quote)),
            code: Some(205),
        });
    };

    if content.contains(quote) {
        return Err(ConfigError::MalformedStatement {
            message: format!("unexpected {} inside string {}", quote, literal),
            line: 0,
            hint: Some("Strings cannot contain the quote character that delimits them".into()),
            code: Some(204),
        });
    }

    Ok(content.to_string())
}

fn parse_list(literal: &str) -> Result<Value, ConfigError> {
    let Some(inner) = literal
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return Err(malformed_list(
            format!("missing closing ']' in {}", literal),
            "Lists must open and close on the same line",
        ));
    };

    let inner = inner.trim();
    // An empty list has no element to infer from; it defaults to numbers.
    if inner.is_empty() {
        return Ok(Value::NumberList(Vec::new()));
    }

    let elements: Vec<&str> = split(inner, ',').into_iter().map(str::trim).collect();
    if elements.iter().any(|e| e.is_empty()) {
        return Err(malformed_list(
            format!("empty element in {}", literal),
            "Remove the stray ','",
        ));
    }

    if elements[0].starts_with(is_quote) {
        elements
            .iter()
            .map(|element| parse_string_element(element))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::StringList)
    } else {
        elements
            .iter()
            .map(|element| parse_number(element))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::NumberList)
    }
}

fn parse_string_element(element: &str) -> Result<String, ConfigError> {
    match element.chars().next() {
        Some(quote) if is_quote(quote) => parse_string(element, quote).map_err(|_| {
            malformed_list(
                format!("badly quoted element {}", element),
                "Each element must open and close with the same quote",
            )
        }),
        _ => Err(malformed_list(
            format!("expected a quoted string, got {}", element),
            "A list starting with a string may only hold strings",
        )),
    }
}

fn parse_number(token: &str) -> Result<f64, ConfigError> {
    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            token: token.to_string(),
            line: 0,
            hint: Some("Values must be a quoted string, a list, true/false, or a number".into()),
            code: Some(209),
        }),
    }
}

fn malformed_list(message: String, hint: &str) -> ConfigError {
    ConfigError::MalformedList {
        message,
        line: 0,
        hint: Some(hint.into()),
        code: Some(206),
    }
}
