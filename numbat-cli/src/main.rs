//! Numbat CLI
//!
//! Headless front end for the parsing and cascade pipeline: reads a markup
//! file and a stylesheet file, builds the styled tree, and prints it.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use numbat_css::{build_styled_tree, parse_stylesheet};
use numbat_dom::Node;
use numbat_html::parse_document;
use owo_colors::OwoColorize;

/// Numbat CLI: parse markup and a stylesheet, resolve the cascade
#[derive(Parser, Debug)]
#[command(name = "numbat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print a summary plus the styled tree
    numbat page.html page.css

    # Machine-readable output only
    numbat page.html page.css --json
"#)]
struct Cli {
    /// Path to the markup file
    #[arg(value_name = "MARKUP")]
    markup: PathBuf,

    /// Path to the stylesheet file
    #[arg(value_name = "STYLESHEET")]
    stylesheet: PathBuf,

    /// Print only the styled tree as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let markup = fs::read_to_string(&cli.markup)
        .with_context(|| format!("failed to read markup file {}", cli.markup.display()))?;
    let source = fs::read_to_string(&cli.stylesheet)
        .with_context(|| format!("failed to read stylesheet file {}", cli.stylesheet.display()))?;

    let tree = parse_document(&markup)
        .with_context(|| format!("failed to parse {}", cli.markup.display()))?;
    let stylesheet = parse_stylesheet(&source)
        .with_context(|| format!("failed to parse {}", cli.stylesheet.display()))?;
    let styled = build_styled_tree(&tree, &stylesheet);

    let rendered = serde_json::to_string_pretty(&styled)?;

    if cli.json {
        println!("{rendered}");
        return Ok(());
    }

    println!("{}", "=== Document ===".green());
    println!("{} nodes", count_nodes(&tree));

    println!("\n{}", "=== Stylesheet ===".green());
    println!("{} rules", stylesheet.rules.len());

    println!("\n{}", "=== Styled Tree ===".green());
    println!("{rendered}");

    Ok(())
}

fn count_nodes(node: &Node) -> usize {
    1 + node.children().iter().map(count_nodes).sum::<usize>()
}
