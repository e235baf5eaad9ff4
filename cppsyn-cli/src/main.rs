//! Command-line interface for cppsyn
//! Highlights a C or C++ file and prints the classification as tagged text, JSON,
//! or ANSI-coloured terminal output.
//!
//! Usage:
//!   cppsyn `<path>` [--format `<format>`] [--config `<file>`] [--line-numbers]
//!   cppsyn `<path>` --complete `<prefix>`     - Print completion candidates
//!   cppsyn --list-categories                - List categories and their styles

mod render;

use clap::{Arg, ArgAction, Command};
use cppsyn_config::{ConfigError, CppsynConfig, Loader};
use cppsyn_highlight::completion::{complete, completion_candidates};
use cppsyn_highlight::{HighlightedDocument, StyleRegistry};
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = Command::new("cppsyn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Syntax classification for C and C++ source files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the C/C++ file")
                .required_unless_present("list-categories")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format, overriding the configuration")
                .value_parser(["tag", "json", "ansi"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("line-numbers")
                .long("line-numbers")
                .short('n')
                .help("Prefix every line with its number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("complete")
                .long("complete")
                .value_name("PREFIX")
                .help("Print completion candidates for PREFIX instead of highlighting"),
        )
        .arg(
            Arg::new("list-categories")
                .long("list-categories")
                .help("List the categories and their styles")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_one::<String>("format").map(String::as_str),
        matches.get_flag("line-numbers"),
    );
    let registry = config.style_registry().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("list-categories") {
        handle_list_categories_command(&registry);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing categories");
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    if let Some(prefix) = matches.get_one::<String>("complete") {
        handle_complete_command(&source, prefix);
        return;
    }
    handle_highlight_command(&source, &config, &registry);
}

/// Diagnostics go to stderr so stdout only carries output. `CPPSYN_LOG` takes
/// the usual filter directives.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CPPSYN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>, format: Option<&str>, line_numbers: bool) -> CppsynConfig {
    build_config(path, format, line_numbers).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Defaults, then the `--config` file, then command-line flags.
fn build_config(
    path: Option<&str>,
    format: Option<&str>,
    line_numbers: bool,
) -> Result<CppsynConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format)?;
    }
    if line_numbers {
        loader = loader.set_override("output.line_numbers", true)?;
    }
    loader.build()
}

/// Handle the default command: classify and print the whole file
fn handle_highlight_command(source: &str, config: &CppsynConfig, registry: &StyleRegistry) {
    let doc = HighlightedDocument::new(source);
    debug!(lines = doc.len(), format = ?config.output.format, "highlighting");
    let output = render::render(&doc, &config.output, registry).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

/// Handle --complete
fn handle_complete_command(source: &str, prefix: &str) {
    let candidates = completion_candidates(source);
    for candidate in complete(prefix, &candidates) {
        println!("{}", candidate);
    }
}

/// Handle --list-categories
fn handle_list_categories_command(registry: &StyleRegistry) {
    println!("Available categories:\n");
    for (category, style) in registry.iter() {
        let mut flags = Vec::new();
        if style.bold {
            flags.push("bold");
        }
        if style.italic {
            flags.push("italic");
        }
        println!("  {:<22} {} {}", category.as_str(), style.color, flags.join(" "));
    }
}
