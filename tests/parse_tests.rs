use minitoml::{
    parse, parse_reader, parse_slice, parse_with_options, DeclKind, Declaration, DiagnosticKind,
    Error, NodeCollection, ParseOptions, Statement, Value, MAX_DEPTH,
};
use serde_json::json;

const SERVICE: &str = r#"
# Service configuration
title = "inventory"
version = 3

[server]
host = "0.0.0.0"
port = 8_080
timeout = 2.5e1
tags = ["api", "internal",]

[database.primary]
url = """postgres://db
  /inventory"""
pool = { min = 1, max = 16 }

[[products]]
name = "Hammer"
sku = 738594937

[[products]]
name = "Nail"
sku = 284758393
color = "gray"
"#;

#[test]
fn test_service_document_shape() {
    let nodes = parse("service.toml", SERVICE).unwrap();

    let shape: Vec<(DeclKind, &str)> = nodes.iter().map(|d| (d.kind(), d.name())).collect();
    assert_eq!(
        shape,
        vec![
            (DeclKind::Stmt, "title"),
            (DeclKind::Stmt, "version"),
            (DeclKind::Table, "server"),
            (DeclKind::Table, "database.primary"),
            (DeclKind::ListItem, "products"),
            (DeclKind::ListItem, "products"),
        ]
    );
}

#[test]
fn test_service_document_values() {
    let nodes = parse("service.toml", SERVICE).unwrap();

    let server = nodes[2].as_table().unwrap();
    assert_eq!(
        server.statements,
        vec![
            Statement::new("host", Value::from("0.0.0.0")),
            Statement::new("port", Value::Int(8080)),
            Statement::new("timeout", Value::Float(25.0)),
            Statement::new(
                "tags",
                Value::Array(vec![Value::from("api"), Value::from("internal")])
            ),
        ]
    );

    let database = nodes[3].statements().unwrap();
    assert_eq!(
        database[0].value,
        Value::from("postgres://db\n  /inventory")
    );
    let pool = database[1].value.as_inline_table().unwrap();
    assert_eq!(pool.get_statement("max").unwrap().value, Value::Int(16));

    let second = nodes[5].as_list_item().unwrap();
    assert_eq!(second.statements.len(), 3);
}

#[test]
fn test_string_escapes() {
    let nodes = parse("esc", r#"s = "tab\there \"q\" \\ \x41\x7e \q \0end""#).unwrap();
    assert_eq!(
        nodes.get_statement("s").unwrap().value,
        Value::from("tab\there \"q\" \\ A~ q \0end")
    );
}

#[test]
fn test_hex_escape_reads_at_most_two_digits() {
    let nodes = parse("esc", r#"s = "\x414""#).unwrap();
    assert_eq!(nodes[0].as_statement().unwrap().value, Value::from("A4"));

    let nodes = parse("esc", r#"s = "\xe9""#).unwrap();
    assert_eq!(nodes[0].as_statement().unwrap().value, Value::from("\u{e9}"));
}

#[test]
fn test_multiline_string_counts_lines() {
    let err = parse("ml", "a = \"\"\"one\r\ntwo\nthree\"\"\"\nb = ?").unwrap_err();
    assert_eq!(err.line(), Some(4));
}

#[test]
fn test_integer_extremes() {
    let nodes = parse(
        "ints",
        "min = -9223372036854775808\nmax = 9223372036854775807\nplus = +5",
    )
    .unwrap();
    assert_eq!(nodes.get_statement("min").unwrap().value, Value::Int(i64::MIN));
    assert_eq!(nodes.get_statement("max").unwrap().value, Value::Int(i64::MAX));
    assert_eq!(nodes.get_statement("plus").unwrap().value, Value::Int(5));
}

#[test]
fn test_float_forms() {
    let nodes = parse("floats", "a = 1.\nb = -0.5\nc = 2E3\nd = 1_0.2_5").unwrap();
    let values: Vec<f64> = nodes
        .iter()
        .filter_map(|d| d.as_statement().and_then(|s| s.value.as_f64()))
        .collect();
    assert_eq!(values, vec![1.0, -0.5, 2000.0, 10.25]);
}

#[test]
fn test_overflow_diagnostics_keep_parsing() {
    let parsed = parse_with_options(
        "nums",
        "a = 99999999999999999999\n\nb = 1e400\nc = 7",
        &ParseOptions::new(),
    )
    .unwrap();

    assert_eq!(parsed.nodes.get_statement("a").unwrap().value, Value::Int(0));
    assert!(parsed.nodes.get_statement("b").unwrap().value.as_f64().unwrap().is_infinite());
    assert_eq!(parsed.nodes.get_statement("c").unwrap().value, Value::Int(7));

    let found: Vec<(DiagnosticKind, usize)> = parsed
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.line))
        .collect();
    assert_eq!(
        found,
        vec![(DiagnosticKind::IntegerOverflow, 1), (DiagnosticKind::FloatOverflow, 3)]
    );
}

#[test]
fn test_plain_parse_drops_diagnostics() {
    let nodes = parse("nums", "a = 99999999999999999999").unwrap();
    assert_eq!(nodes[0], Declaration::stmt("a", Value::Int(0)));
}

#[test]
fn test_strict_parse_denies_first_diagnostic() {
    let err = parse_with_options(
        "nums",
        "a = 1\nb = 99999999999999999999\nc = 1e400",
        &ParseOptions::strict(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "nums(2): integer literal overflow");
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_error_messages() {
    let cases: &[(&str, &str)] = &[
        ("a = @", "t(1): unexpected character '@'"),
        ("a = -x", "t(1): expected digit after sign, found 'x'"),
        ("a = 1e+", "t(1): expected digit after float literal exponent, found end of input"),
        ("a = \"open", "t(1): unexpected end of file within string literal"),
        ("a = \"line\nbreak\"", "t(1): string literal cannot contain newline"),
        ("a = \"\"\"open", "t(1): unexpected end of file within multi-line string literal"),
        ("a = \"\\xg\"", "t(1): \\x needs at least 1 hex digit"),
        ("a = maybe", "t(1): expected value type, found name"),
        ("a = 1\n= 2", "t(2): expected declaration, found ="),
        ("[t\nx = 1", "t(2): expected ], found <NAME>"),
        ("a = { b = 1", "t(1): expected }, found <EOF>"),
        ("a = {}", "t(1): expected <NAME>, found }"),
        ("a = [1 2]", "t(1): expected ], found <INT>"),
    ];

    for (input, expected) in cases {
        let err = parse("t", input).unwrap_err();
        assert_eq!(err.to_string(), *expected, "input: {:?}", input);
    }
}

#[test]
fn test_first_error_wins() {
    let err = parse("t", "a = \nb = @").unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.to_string(), "t(2): expected value type, found name");
}

#[test]
fn test_reader_and_slice_entry_points() {
    let from_reader = parse_reader("r", std::io::Cursor::new(SERVICE)).unwrap();
    let from_slice = parse_slice("s", SERVICE.as_bytes()).unwrap();
    assert_eq!(from_reader, parse("service.toml", SERVICE).unwrap());
    assert_eq!(from_slice.len(), 6);

    let err = parse_slice("s", b"a = \"\xff\"").unwrap_err();
    assert!(matches!(err, Error::Custom(_)));
}

#[test]
fn test_display_reparses_to_same_tree() {
    let nodes = parse("service.toml", SERVICE).unwrap();
    let text = nodes.to_string();
    let again = parse("display", &text).unwrap();
    assert_eq!(nodes, again);
}

#[test]
fn test_json_rendering() {
    let nodes = parse("svc", "title = \"x\"\n[server]\nport = 1\nopts = { a = [true, 1.5] }")
        .unwrap();
    let rendered = serde_json::to_value(&nodes).unwrap();
    assert_eq!(
        rendered,
        json!([
            { "kind": "stmt", "name": "title", "value": "x" },
            {
                "kind": "table",
                "name": "server",
                "statements": [
                    { "name": "port", "value": 1 },
                    { "name": "opts", "value": { "a": [true, 1.5] } }
                ]
            }
        ])
    );
}

#[test]
fn test_collection_builds_like_parse() {
    let built: NodeCollection = vec![
        Declaration::stmt("a", Value::Int(1)),
        Declaration::list_item("l", vec![Statement::new("b", Value::Bool(false))]),
    ]
    .into();
    assert_eq!(parse("t", "a = 1\n[[l]]\nb = false").unwrap(), built);
}

#[test]
fn test_deeply_nested_input_is_rejected() {
    let depth = 20_000;
    let text = format!("ok = 1\n\nx = {}1{}", "[".repeat(depth), "]".repeat(depth));

    let result = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || parse("deep", &text))
        .unwrap()
        .join()
        .unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "deep(3): nesting too deep");
}

#[test]
fn test_nesting_up_to_limit_parses() {
    let text = format!("x = {}\"s\"{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
    let nodes = parse("limit", &text).unwrap();

    let mut value = &nodes[0].as_statement().unwrap().value;
    for _ in 0..MAX_DEPTH {
        value = &value.as_array().unwrap()[0];
    }
    assert_eq!(value, &Value::from("s"));
}
