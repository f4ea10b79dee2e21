//! Command-line interface for ebnf
//! This binary parses EBNF grammar files and renders their syntax tree in different formats.
//!
//! Usage:
//!   ebnf render `<path>` [--format `<format>`] [--config `<file>`] [--indent `<n>`]  - Render the syntax tree
//!   ebnf tokens `<path>`                                                      - Dump the token stream as JSON
//!   ebnf compare `<path>` `<other>`                                           - Report structural differences
//!   ebnf list-formats                                                         - List available output formats
//!
//! Exit codes: 0 ok, 1 read error, 2 usage error (no syntax file given, unknown format),
//! 3 syntax error, 4 grammars differ.

use clap::{Arg, ArgAction, ArgMatches, Command};
use ebnf_parser::ebnf::ast::Ast;
use ebnf_parser::ebnf::config::{EbnfConfig, Loader};
use ebnf_parser::ebnf::equivalence::probe_equivalence;
use ebnf_parser::ebnf::lexing::tokenize;
use ebnf_parser::ebnf::parsing::parse_syntax;
use log::{debug, LevelFilter};
use std::fs;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Ok = 0,
    ReadError = 1,
    /// No syntax file given or an unknown output format
    Usage = 2,
    SyntaxError = 3,
    NotEquivalent = 4,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    let matches = Command::new("ebnf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing EBNF grammars and inspecting their syntax tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Log parser decisions (same as RUST_LOG=debug)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Parse a grammar and render its syntax tree")
                .arg(syntax_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'text', 'xml', 'treeviz'); defaults to the configured one"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .help("Spaces per level in the text format")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token stream of a grammar as JSON")
                .arg(syntax_arg()),
        )
        .subcommand(
            Command::new("compare")
                .about("Compare the syntax trees of two grammars")
                .arg(syntax_arg())
                .arg(
                    Arg::new("other")
                        .help("Path to the grammar to compare against")
                        .index(2),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_flag("debug"));

    let exit = match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("compare", compare_matches)) => handle_compare_command(compare_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => Exit::Usage,
    };
    exit.into()
}

fn syntax_arg() -> Arg {
    Arg::new("path").help("Path to the EBNF grammar").index(1)
}

fn init_logging(debug: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    // A second initialisation (e.g. in tests) is harmless
    let _ = builder.try_init();
}

/// Read the file named by `arg`
fn read_syntax(matches: &ArgMatches, arg: &str) -> Result<String, Exit> {
    let path = matches.get_one::<String>(arg).ok_or_else(|| {
        println!("No syntax file given!");
        Exit::Usage
    })?;
    debug!("reading {}", path);
    fs::read_to_string(path).map_err(|err| {
        println!("Can not read syntax file '{}'!", path);
        debug!("{}", err);
        Exit::ReadError
    })
}

fn parse_file(matches: &ArgMatches, arg: &str) -> Result<Ast, Exit> {
    let source = read_syntax(matches, arg)?;
    parse_syntax(&source).map_err(|err| {
        println!("Syntax error: {}", err);
        Exit::SyntaxError
    })
}

fn load_config(matches: &ArgMatches) -> Result<EbnfConfig, Exit> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(indent) = matches.get_one::<u32>("indent") {
        loader = loader
            .set_override("text.indentation", i64::from(*indent))
            .map_err(config_error)?;
    }
    loader.build().map_err(config_error)
}

fn config_error(err: config::ConfigError) -> Exit {
    println!("Can not load configuration: {}", err);
    Exit::ReadError
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> Exit {
    let run = || -> Result<Exit, Exit> {
        let config = load_config(matches)?;
        let registry = config.registry();
        let format = matches
            .get_one::<String>("format")
            .cloned()
            .unwrap_or_else(|| config.output.format.clone());
        if !registry.has(&format) {
            println!(
                "Unknown format '{}'! Available formats: {}",
                format,
                registry.list_formats().join(", ")
            );
            return Err(Exit::Usage);
        }

        let ast = parse_file(matches, "path")?;
        let output = registry.serialize(&ast, &format).map_err(|err| {
            println!("{}", err);
            Exit::ReadError
        })?;
        print!("{}", output);
        Ok(Exit::Ok)
    };
    run().unwrap_or_else(|exit| exit)
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Exit {
    let source = match read_syntax(matches, "path") {
        Ok(source) => source,
        Err(exit) => return exit,
    };
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            println!("Syntax error: {}", err);
            return Exit::SyntaxError;
        }
    };
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => {
            println!("{}", json);
            Exit::Ok
        }
        Err(err) => {
            println!("Error formatting tokens: {}", err);
            Exit::ReadError
        }
    }
}

/// Handle the compare command
fn handle_compare_command(matches: &ArgMatches) -> Exit {
    let trees = parse_file(matches, "path").and_then(|a| Ok((a, parse_file(matches, "other")?)));
    let (a, b) = match trees {
        Ok(trees) => trees,
        Err(exit) => return exit,
    };

    let result = probe_equivalence(a.root(), b.root());
    if result.is_empty() {
        println!("Grammars are equivalent.");
        Exit::Ok
    } else {
        println!("{} difference(s):\n{}", result.len(), result);
        Exit::NotEquivalent
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() -> Exit {
    let registry = ebnf_parser::ebnf::formats::FormatRegistry::global();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {:<10} {}", name, description);
    }
    Exit::Ok
}
