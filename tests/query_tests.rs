use minitoml::{find, find_with_options, parse, DeclKind, NodeRef, QueryOptions, Value};
use serde_json::json;

const CONFIG: &str = r#"
name = "shop"
int = 10

[server]
host = "localhost"
port = 8080

[server.tls]
cert = "cert.pem"

[[worker]]
id = 1
threads = 4

[[worker]]
id = 2

[a.b]
c = true
"#;

fn values<'a>(found: &[NodeRef<'a>]) -> Vec<&'a Value> {
    found.iter().filter_map(NodeRef::value).collect()
}

#[test]
fn test_top_level_statement() {
    let nodes = parse("config", CONFIG).unwrap();
    let found = find(&nodes, "name");
    assert_eq!(values(&found), vec![&Value::from("shop")]);
}

#[test]
fn test_statement_inside_table() {
    let nodes = parse("config", CONFIG).unwrap();
    assert_eq!(values(&find(&nodes, "server.port")), vec![&Value::Int(8080)]);
    assert_eq!(
        values(&find(&nodes, "server.tls.cert")),
        vec![&Value::from("cert.pem")]
    );
}

#[test]
fn test_table_by_name_and_by_ancestor() {
    let nodes = parse("config", CONFIG).unwrap();

    // "server" names one table exactly and is an ancestor of "server.tls".
    let found = find(&nodes, "server");
    let names: Vec<_> = found.iter().map(|n| (n.kind(), n.name())).collect();
    assert_eq!(
        names,
        vec![(DeclKind::Table, "server"), (DeclKind::Table, "server.tls")]
    );

    let tls = find(&nodes, "server.tls");
    assert_eq!(tls.len(), 1);
    assert_eq!(tls[0].name(), "server.tls");
}

#[test]
fn test_list_items() {
    let nodes = parse("config", CONFIG).unwrap();

    let workers = find(&nodes, "worker");
    assert_eq!(workers.len(), 2);
    assert!(workers.iter().all(|n| n.kind() == DeclKind::ListItem));
    assert_eq!(workers[0].statements().map(<[_]>::len), Some(2));

    // One answer for the whole list, from the first item that has the key.
    assert_eq!(values(&find(&nodes, "worker.id")), vec![&Value::Int(1)]);
    assert_eq!(values(&find(&nodes, "worker.threads")), vec![&Value::Int(4)]);

    let every = QueryOptions::new().with_each_list_item(true);
    assert_eq!(
        values(&find_with_options(&nodes, "worker.id", &every)),
        vec![&Value::Int(1), &Value::Int(2)]
    );
}

#[test]
fn test_service_scenario() {
    let nodes = parse(
        "demo",
        "title = \"demo\"\n[server]\nhost = \"localhost\"\nport = 8080\n\
         [[worker]]\nid = 1\n[[worker]]\nid = 2\n",
    )
    .unwrap();

    let port = find(&nodes, "server.port");
    assert_eq!(port.len(), 1);
    assert_eq!(port[0].kind(), DeclKind::Stmt);
    assert_eq!(port[0].value(), Some(&Value::Int(8080)));

    let workers = find(&nodes, "worker");
    assert_eq!(workers.len(), 2);
    assert!(workers.iter().all(|n| n.kind() == DeclKind::ListItem));

    let ids = find(&nodes, "worker.id");
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].value(), Some(&Value::Int(1)));
}

#[test]
fn test_narrowing_path_never_adds_matches() {
    let nodes = parse("config", CONFIG).unwrap();
    let a = find(&nodes, "a").len();
    let ab = find(&nodes, "a.b").len();
    let abc = find(&nodes, "a.b.c").len();
    assert_eq!((a, ab, abc), (1, 1, 1));
    assert_eq!(values(&find(&nodes, "a.b.c")), vec![&Value::Bool(true)]);
}

#[test]
fn test_statement_prefix_matching() {
    let nodes = parse("config", CONFIG).unwrap();

    let loose = find(&nodes, "integer");
    assert_eq!(values(&loose), vec![&Value::Int(10)]);

    let strict = QueryOptions::new().with_statement_boundary(true);
    assert!(find_with_options(&nodes, "integer", &strict).is_empty());
    assert_eq!(find_with_options(&nodes, "int", &strict).len(), 1);
    assert_eq!(nodes.find_with_options("server.port", &strict).len(), 1);
}

#[test]
fn test_unknown_paths() {
    let nodes = parse("config", CONFIG).unwrap();
    for path in ["", "missing", "server.missing", "workers", "worker.name"] {
        assert!(find(&nodes, path).is_empty(), "path {:?}", path);
    }
}

#[test]
fn test_results_follow_input_order() {
    let nodes = parse("order", "[[x]]\nv = 1\n[x]\nv = 2\n[[x]]\nv = 3").unwrap();
    let kinds: Vec<_> = nodes.find("x").iter().map(NodeRef::kind).collect();
    assert_eq!(
        kinds,
        vec![DeclKind::ListItem, DeclKind::Table, DeclKind::ListItem]
    );
    // The table answers on its own; the list answers once.
    assert_eq!(
        values(&nodes.find("x.v")),
        vec![&Value::Int(1), &Value::Int(2)]
    );
}

#[test]
fn test_query_results_serialize() {
    let nodes = parse("config", CONFIG).unwrap();
    let found = find(&nodes, "worker");
    let rendered = serde_json::to_value(&found[1]).unwrap();
    assert_eq!(
        rendered,
        json!({
            "kind": "list_item",
            "name": "worker",
            "statements": [{ "name": "id", "value": 2 }]
        })
    );
}

#[test]
fn test_owned_copy_outlives_query() {
    let owned = {
        let nodes = parse("config", CONFIG).unwrap();
        let found = find(&nodes, "server.port");
        found[0].to_owned_decl()
    };
    assert_eq!(owned.to_string(), "port = 8080");
}

#[test]
fn test_dotted_list_items_match_by_ancestor() {
    let nodes = parse(
        "catalog",
        "[[products.item]]\nname = \"Hammer\"\n[[products.item]]\nname = \"Nail\"\n\
         [products.meta]\ncount = 2",
    )
    .unwrap();

    let found = find(&nodes, "products");
    let shape: Vec<_> = found.iter().map(|n| (n.kind(), n.name())).collect();
    assert_eq!(
        shape,
        vec![
            (DeclKind::ListItem, "products.item"),
            (DeclKind::ListItem, "products.item"),
            (DeclKind::Table, "products.meta"),
        ]
    );

    let items = find(&nodes, "products.item");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|n| n.kind() == DeclKind::ListItem));

    assert_eq!(
        values(&find(&nodes, "products.item.name")),
        vec![&Value::from("Hammer")]
    );
    assert!(find(&nodes, "prod").is_empty());
}

#[test]
fn test_member_lookup_prefix_gap() {
    let nodes = parse("config", CONFIG).unwrap();

    // `port` is a character prefix of `portable`.
    assert_eq!(values(&find(&nodes, "server.portable")), vec![&Value::Int(8080)]);
    assert_eq!(values(&find(&nodes, "worker.identity")), vec![&Value::Int(1)]);

    let strict = QueryOptions::new().with_statement_boundary(true);
    assert!(find_with_options(&nodes, "server.portable", &strict).is_empty());
    assert!(find_with_options(&nodes, "worker.identity", &strict).is_empty());
    assert_eq!(
        values(&find_with_options(&nodes, "server.port", &strict)),
        vec![&Value::Int(8080)]
    );
}
