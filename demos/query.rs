//! Dotted-path queries over tables and list items.
//!
//! Run with: cargo run --example query

use minitoml::{find, find_with_options, parse, QueryOptions};
use std::error::Error;

const CONFIG: &str = r#"
int = 1

[database.primary]
url = "postgres://localhost/app"
pool = { min = 1, max = 16 }

[[worker]]
id = 1
queue = "mail"

[[worker]]
id = 2
queue = "reports"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let nodes = parse("app.toml", CONFIG)?;

    for path in ["worker", "worker.queue", "database", "database.primary.url", "integer"] {
        let found = find(&nodes, path);
        println!("{} -> {} match(es)", path, found.len());
        for node in &found {
            println!("  {:?} {}", node.kind(), node.to_owned_decl());
        }
    }

    // Statement names can match a longer path unless boundaries are enforced.
    let strict = QueryOptions::new().with_statement_boundary(true);
    println!(
        "integer with boundaries -> {} match(es)",
        find_with_options(&nodes, "integer", &strict).len()
    );

    Ok(())
}
