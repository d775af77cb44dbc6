//! Parse a file and print it back, with any diagnostics.
//!
//! Run with: cargo run --example dump -- path/to/file.toml [--json]

use minitoml::{parse_with_options, ParseOptions};
use std::error::Error;
use std::{env, fs, process};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: dump <file> [--json]");
        process::exit(2);
    };
    let json = args.any(|arg| arg == "--json");

    let text = fs::read_to_string(&path)?;
    let parsed = parse_with_options(&path, &text, &ParseOptions::new())?;

    for diagnostic in &parsed.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed.nodes)?);
    } else {
        println!("{}", parsed.nodes);
    }

    Ok(())
}
