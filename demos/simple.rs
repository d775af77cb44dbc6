//! Parse a small document and read values out of it.
//!
//! Run with: cargo run --example simple

use minitoml::{parse, Value};
use std::error::Error;

const CONFIG: &str = r#"
title = "inventory"

[server]
host = "localhost"
port = 8080
tags = ["api", "internal"]
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let nodes = parse("inventory.toml", CONFIG)?;
    println!("Parsed {} top-level declarations:\n{}\n", nodes.len(), nodes);

    let title = nodes
        .get_statement("title")
        .and_then(|stmt| stmt.value.as_str())
        .unwrap_or("untitled");
    println!("title: {}", title);

    for stmt in nodes[1].statements().unwrap_or_default() {
        println!("server.{} = {} ({})", stmt.name, stmt.value, stmt.value.type_name());
    }

    let port = nodes.find("server.port");
    assert_eq!(port[0].value(), Some(&Value::Int(8080)));
    println!("✓ server.port found");

    // Errors carry the source name and line.
    match parse("broken.toml", "[server]\nport = ") {
        Ok(_) => println!("unexpectedly parsed"),
        Err(err) => println!("error: {}", err),
    }

    Ok(())
}
