//! parser for ICU-style message patterns

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Message, Node, Placeholder, Style};

pub mod parser;

pub use parser::ParsingError;

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that error reporting can refer to the source text. A
/// filename of "-" reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse pattern text into a Message, or return the error encountered.
pub fn parse(content: &str) -> Result<Message, ParsingError> {
    let result = parser::parse_via_taking(content);

    match result {
        Ok(message) => {
            let placeholders = count_placeholders(&message);
            debug!(
                "Found {} node{} with {} placeholder{}",
                message
                    .nodes()
                    .len(),
                if message
                    .nodes()
                    .len()
                    == 1
                {
                    ""
                } else {
                    "s"
                },
                placeholders,
                if placeholders == 1 { "" } else { "s" }
            );
            Ok(message)
        }
        Err(error) => {
            debug!("error: {}", error);
            Err(error)
        }
    }
}

fn count_placeholders(message: &Message) -> usize {
    message
        .nodes()
        .iter()
        .map(|node| match node {
            Node::Text(_) => 0,
            Node::Placeholder(Placeholder::Plural { children, .. }) => {
                1 + children
                    .values()
                    .map(count_placeholders)
                    .sum::<usize>()
            }
            Node::Placeholder(Placeholder::Styled {
                style: Some(Style::Cases(cases)),
                ..
            }) => {
                1 + cases
                    .values()
                    .map(count_placeholders)
                    .sum::<usize>()
            }
            Node::Placeholder(_) => 1,
        })
        .sum()
}
