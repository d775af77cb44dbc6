use minitoml::{parse, value, Value};

#[test]
fn test_macro_matches_parsed_values() {
    let nodes = parse(
        "inline",
        r#"point = { x = 1, y = -2.5, label = "origin", tags = [true, false] }"#,
    )
    .unwrap();
    let parsed = &nodes.get_statement("point").unwrap().value;

    let built = value!({
        "x": 1,
        "y": (-2.5),
        "label": "origin",
        "tags": [true, false],
    });
    assert_eq!(*parsed, built);
}

#[test]
fn test_macro_nested_structures() {
    let built = value!([[1, 2], { "k": "v" }, "s"]);
    assert_eq!(built.to_string(), r#"[[1, 2], { k = "v" }, "s"]"#);
}

#[test]
fn test_macro_expression_fallback() {
    let port: i64 = 8080;
    let host = String::from("localhost");
    assert_eq!(value!(port), Value::Int(8080));
    assert_eq!(value!(host.clone()), Value::Str(host));
    assert_eq!(value!(vec![value!(1)]), Value::Array(vec![Value::Int(1)]));
}

#[test]
fn test_macro_output_reparses() {
    let built = value!({ "name": "demo", "ports": [80, 443] });
    let text = format!("cfg = {}", built);
    let nodes = parse("macro", &text).unwrap();
    assert_eq!(nodes.get_statement("cfg").unwrap().value, built);
}
