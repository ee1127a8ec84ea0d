#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;
#[cfg(test)]
use crate::error::ErrorKind;

fn parse(input: &str) -> Result<Document, ConfigError> {
    Parser::new(input)?.parse_document()
}

#[test]
fn test_parser_mixed_table() {
    let input = "title = \"demo\"\n[server]\nport = 8080\nhost = \"local\"\nweights = [ 1, 2, 3 ]\n";

    let doc = parse(input).expect("Failed to parse document");

    assert_eq!(doc.root().len(), 1);
    assert_eq!(doc.root().get("title"), Some(&Value::String("demo".into())));

    assert_eq!(doc.tables().len(), 1);
    let server = &doc.tables()[0];
    assert_eq!(server.name, "server");
    assert_eq!(server.entries.get("port"), Some(&Value::Number(8080.0)));
    assert_eq!(server.entries.get("host"), Some(&Value::String("local".into())));
    assert_eq!(
        server.entries.get("weights"),
        Some(&Value::NumberList(vec![1.0, 2.0, 3.0]))
    );
}

#[test]
fn test_parser_comments_and_blank_lines() {
    let input = r#"# this is a comment
some-string = "some string"

# also a comment
[stuff]
str1 = "qweqwe"
str2 = "asdasd"

[qwerty]
boolean = true
number = 213
floot = 42.69
stringwithspace = "this string has spaces"
list = [ "this", "is", "a", "list" ]
nums = [ 123, 321 ]
"#;

    let doc = parse(input).expect("Failed to parse document");

    println!("--- Parsed Document ---");
    println!("{:#?}", doc);

    assert_eq!(
        doc.root().get("some-string"),
        Some(&Value::String("some string".into()))
    );
    let names: Vec<&str> = doc.tables().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["stuff", "qwerty"]);

    let qwerty = &doc.tables()[1].entries;
    assert_eq!(qwerty.get("boolean"), Some(&Value::Bool(true)));
    assert_eq!(qwerty.get("floot"), Some(&Value::Number(42.69)));
    assert_eq!(
        qwerty.get("stringwithspace"),
        Some(&Value::String("this string has spaces".into()))
    );
    assert_eq!(
        qwerty.get("list"),
        Some(&Value::StringList(vec![
            "this".into(),
            "is".into(),
            "a".into(),
            "list".into()
        ]))
    );
    assert_eq!(qwerty.get("nums"), Some(&Value::NumberList(vec![123.0, 321.0])));
}

#[test]
fn test_boolean_list_is_invalid_number() {
    let input = "title = \"demo\"\n[server]\nport = 8080\nratio = 0.5\nflags = [ true ]\n";

    let err = parse(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidNumber);
    assert_eq!(err.line(), Some(5));
}

#[test]
fn test_unterminated_string_fails_whole_parse() {
    let err = parse("key = \"oops\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnterminatedString { quote: '"', line: 1, .. }
    ));
}

#[test]
fn test_missing_equals_is_malformed() {
    let input = "a = 1\n[t]\nb = 2\njust_a_word\n";
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedStatement);
    assert_eq!(err.line(), Some(4));
}

#[test]
fn test_missing_key_or_value_is_malformed() {
    assert_eq!(parse("= 3\n").unwrap_err().kind(), ErrorKind::MalformedStatement);
    assert_eq!(parse("a =\n").unwrap_err().kind(), ErrorKind::MalformedStatement);
}

#[test]
fn test_unclosed_table_header() {
    let err = parse("a = 1\n[server\nport = 1\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedStatement);
    assert_eq!(err.line(), Some(2));

    assert_eq!(parse("[]\n").unwrap_err().kind(), ErrorKind::MalformedStatement);
}

#[test]
fn test_empty_input() {
    let err = Parser::new("").err().expect("empty input must fail");
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}

#[test]
fn test_comment_only_input_is_empty_document() {
    let doc = parse("# nothing here\n\n").expect("Failed to parse document");
    assert!(doc.root().is_empty());
    assert!(doc.tables().is_empty());
}

#[test]
fn test_root_only_document() {
    let doc = parse("a = 1\nb = 'two'").expect("Failed to parse document");
    assert_eq!(doc.root().keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(doc.tables().is_empty());
}

#[test]
fn test_duplicate_tables_are_both_kept() {
    let doc = parse("[t]\nx = 1\n[t]\nx = 2\n").expect("Failed to parse document");
    assert_eq!(doc.tables().len(), 2);
    let first = doc.tables_in_lookup_order().next().unwrap();
    assert_eq!(first.entries.get("x"), Some(&Value::Number(2.0)));
}

#[test]
fn test_redeclared_key_last_wins() {
    let doc = parse("a = 1\na = 2\n").expect("Failed to parse document");
    assert_eq!(doc.root().len(), 1);
    assert_eq!(doc.root().get("a"), Some(&Value::Number(2.0)));
}

#[test]
fn test_comment_between_tables() {
    let doc = parse("[a]\nx = 1\n# next one\n[b]\ny = 2\n").expect("Failed to parse document");
    assert_eq!(doc.tables()[0].entries.len(), 1);
    assert_eq!(doc.tables()[1].entries.get("y"), Some(&Value::Number(2.0)));
}

#[test]
fn test_empty_table() {
    let doc = parse("[empty]\n[full]\nk = true\n").expect("Failed to parse document");
    assert!(doc.tables()[0].entries.is_empty());
    assert_eq!(doc.tables()[1].entries.get("k"), Some(&Value::Bool(true)));
}

#[test]
fn test_raw_content_retained() {
    let input = "a = 1\n";
    let doc = parse(input).expect("Failed to parse document");
    assert_eq!(doc.raw_content(), input);
}

#[test]
fn test_malformed_list_line_number() {
    let err = parse("a = 1\nb = [ \"x\", y ]\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedList);
    assert_eq!(err.line(), Some(2));
}

// ===== Value literal tests =====

#[test]
fn test_parse_value_strings() {
    assert_eq!(parse_value("\"hi there\""), Ok(Value::String("hi there".into())));
    assert_eq!(parse_value("'single'"), Ok(Value::String("single".into())));
    assert_eq!(parse_value("\"\""), Ok(Value::String(String::new())));
    assert_eq!(parse_value("\"a=b\""), Ok(Value::String("a=b".into())));
}

#[test]
fn test_parse_value_bad_strings() {
    assert_eq!(parse_value("\"").unwrap_err().kind(), ErrorKind::UnterminatedString);
    assert_eq!(parse_value("\"mixed'").unwrap_err().kind(), ErrorKind::UnterminatedString);
    assert_eq!(parse_value("'open").unwrap_err().kind(), ErrorKind::UnterminatedString);
    assert_eq!(parse_value("\"a\"b\"").unwrap_err().kind(), ErrorKind::MalformedStatement);
}

#[test]
fn test_parse_value_scalars() {
    assert_eq!(parse_value("true"), Ok(Value::Bool(true)));
    assert_eq!(parse_value("false"), Ok(Value::Bool(false)));
    assert_eq!(parse_value("-12.25"), Ok(Value::Number(-12.25)));
    assert_eq!(parse_value("True").unwrap_err().kind(), ErrorKind::InvalidNumber);
    assert_eq!(parse_value("nan").unwrap_err().kind(), ErrorKind::InvalidNumber);
    assert_eq!(parse_value("inf").unwrap_err().kind(), ErrorKind::InvalidNumber);
}

#[test]
fn test_parse_value_lists() {
    assert_eq!(parse_value("[]"), Ok(Value::NumberList(vec![])));
    assert_eq!(parse_value("[1,2.5]"), Ok(Value::NumberList(vec![1.0, 2.5])));
    assert_eq!(
        parse_value("['a',\"b\"]"),
        Ok(Value::StringList(vec!["a".into(), "b".into()]))
    );
    assert_eq!(parse_value("[1,2").unwrap_err().kind(), ErrorKind::MalformedList);
    assert_eq!(parse_value("[1,,2]").unwrap_err().kind(), ErrorKind::MalformedList);
    assert_eq!(parse_value("[\"a\",2]").unwrap_err().kind(), ErrorKind::MalformedList);
    assert_eq!(parse_value("[\"a\",\"b']").unwrap_err().kind(), ErrorKind::MalformedList);
    assert_eq!(parse_value("[1,x]").unwrap_err().kind(), ErrorKind::InvalidNumber);
}
