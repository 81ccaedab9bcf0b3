use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use message_print::formatting::{self, Identity, Terminal};
use message_print::parsing;
use message_print::plurals::{self, RuleTable};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("message-print")
        .version(VERSION)
        .propagate_version(true)
        .about("Format and check ICU-style message patterns.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("format")
                .about("Print the given message pattern in canonical form")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the message pattern you want to format, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check the plural keywords of the given message pattern against a locale")
                .arg(
                    Arg::new("locale")
                        .short('l')
                        .long("locale")
                        .default_value("en")
                        .help("The locale whose plural rules the selectors must match."),
                )
                .arg(
                    Arg::new("rules")
                        .long("rules")
                        .help("A JSON file of plural rules by locale, used instead of the built-in table."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the message pattern you want to check, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parsed structure of the given message pattern as JSON")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the message pattern you want to inspect, or - for standard input."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            let raw_output = submatches.get_flag("raw-control-chars");
            let filename = required_filename(submatches);

            debug!(filename = %filename.display(), raw_output);

            let content = load_or_exit(filename);
            let message = parse_or_exit(filename, &content);

            let result = if raw_output || std::io::stdout().is_terminal() {
                formatting::render(&Terminal, &message)
            } else {
                formatting::render(&Identity, &message)
            };

            println!("{}", result);
        }
        Some(("check", submatches)) => {
            let filename = required_filename(submatches);
            let locale = submatches
                .get_one::<String>("locale")
                .map(String::as_str)
                .unwrap_or("en");

            let table = match submatches.get_one::<String>("rules") {
                Some(rules) => match RuleTable::load(Path::new(rules)) {
                    Ok(table) => table,
                    Err(error) => {
                        eprintln!("{}", problem::concise_rules_error(&error));
                        std::process::exit(1);
                    }
                },
                None => RuleTable::builtin(),
            };

            debug!(filename = %filename.display(), locale, locales = table.len());

            let content = load_or_exit(filename);
            let message = parse_or_exit(filename, &content);

            let problems = plurals::check(&message, locale, &table);
            if problems.is_empty() {
                debug!("No plural keyword problems");
                return;
            }

            for problem in &problems {
                eprintln!(
                    "{}: {}: {}",
                    "warning".bright_yellow(),
                    filename.to_string_lossy(),
                    problem
                );
            }
            std::process::exit(1);
        }
        Some(("inspect", submatches)) => {
            let filename = required_filename(submatches);

            let content = load_or_exit(filename);
            let message = parse_or_exit(filename, &content);

            match serde_json::to_string_pretty(&message) {
                Ok(json) => println!("{}", json),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: message-print [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn required_filename(submatches: &clap::ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("{}: no filename given", "error".bright_red());
            std::process::exit(1);
        }
    }
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(filename: &Path, content: &str) -> message_print::language::Message {
    // a pattern file conventionally ends with a newline that is not part of
    // the message itself
    let pattern = content
        .strip_suffix('\n')
        .unwrap_or(content);

    match parsing::parse(pattern) {
        Ok(message) => message,
        Err(error) => {
            let report = if std::io::stderr().is_terminal() {
                problem::full_parsing_error(&error, filename, pattern, &Terminal)
            } else {
                problem::full_parsing_error(&error, filename, pattern, &Identity)
            };
            eprintln!("{}", report);
            std::process::exit(1);
        }
    }
}
