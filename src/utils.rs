/// Strip ASCII spaces and tabs that sit outside quoted spans.
///
/// Any `"` or `'` flips the "inside a string" state; the two quote characters
/// are not told apart, so a `'` inside a `"..."` span (or the reverse) ends
/// the span early and whitespace after it is dropped.
pub fn trim_preserving_strings(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_string = false;

    for c in line.chars() {
        if c == '"' || c == '\'' {
            in_string = !in_string;
        }

        if in_string || (c != ' ' && c != '\t') {
            out.push(c);
        }
    }

    out
}

/// Split `text` on every occurrence of `delimiter`. Empty pieces are kept.
pub fn split(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter).collect()
}

/// Split a statement into key and value literal at the first `=`.
///
/// Values containing a further `=` outside a quoted string are not supported;
/// they reach the value parser unchanged and fail there.
pub fn split_statement(statement: &str) -> Option<(&str, &str)> {
    statement.split_once('=')
}

pub(crate) fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}
