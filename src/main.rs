//! A binary executable that demonstrates how to use the `rill-lua` library.
//!
//! This is not part of the library itself, but provides a simple
//! example of parsing Lua literals and walking the resulting tree.
//!
//! You can run this example with: `cargo run`
//! Set `RUST_LOG=rill_lua=trace` to watch the tokenizer and parser at work.

use rill_lua::{parse, parse_with_options, Node, ParserOptions};
use tracing_subscriber::EnvFilter;

/// Prints `node` as an indented outline.
fn print_outline(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Nil => println!("{}nil", indent),
        Node::Number(n) => println!("{}number {}", indent, n),
        Node::String(s) => println!("{}string {:?}", indent, s),
        Node::Table(entries) => {
            println!("{}table ({} entries)", indent, entries.len());
            for entry in entries {
                match entry.key() {
                    Some(key) => {
                        println!("{}  key:", indent);
                        print_outline(key, depth + 2);
                        println!("{}  value:", indent);
                        print_outline(entry.value(), depth + 2);
                    }
                    None => print_outline(entry.value(), depth + 1),
                }
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let samples = [
        r#""foo""#,
        "1337",
        "nil",
        r#"["test"]"#,
        r#"{ foo = "bar" }"#,
        r#"{ foo = { ["test"] = { 1337, "bar" } } }"#,
        "{ test[bar }",
    ];

    println!("--- Running Parser ---");
    for input in samples {
        println!("\nParsing: {}", input);
        match parse(input) {
            Ok(node) => print_outline(&node, 1),
            Err(e) => println!("{}", e),
        }
    }

    println!("\n--- Running Strict Mode Demo ---");
    let input = "{ 1, 2 } { 3 }";
    println!("Parsing: {}", input);
    match parse_with_options(input, ParserOptions::default().strict()) {
        Ok(node) => println!("Parsed Value: {:#?}", node),
        Err(e) => println!("{}", e),
    }
}
