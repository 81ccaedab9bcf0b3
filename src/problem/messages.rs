use message_print::formatting::{render, Render, Syntax};
use message_print::language::*;
use message_print::parsing::ParsingError;

fn branches(entries: &[(&str, Vec<Node>)]) -> SubMessages {
    entries
        .iter()
        .map(|(key, nodes)| (key.to_string(), Message(nodes.clone())))
        .collect()
}

fn example_plural() -> Message {
    Message(vec![
        Node::text("You have "),
        Node::Placeholder(Placeholder::Plural {
            key: "count".to_string(),
            kind: PluralKind::Cardinal,
            offset: 0,
            children: branches(&[
                ("=0", vec![Node::text("no messages")]),
                ("one", vec![Node::text("one message")]),
                (
                    "other",
                    vec![
                        Node::Placeholder(Placeholder::ArgNumRef),
                        Node::text(" messages"),
                    ],
                ),
            ]),
        }),
        Node::text("."),
    ])
}

fn example_select() -> Message {
    Message(vec![Node::Placeholder(Placeholder::Styled {
        key: "gender".to_string(),
        kind: "select".to_string(),
        style: Some(Style::Cases(branches(&[
            ("female", vec![Node::text("her")]),
            ("male", vec![Node::text("his")]),
            ("other", vec![Node::text("their")]),
        ]))),
    })])
}

fn example_placeholders() -> Vec<Message> {
    vec![
        Message(vec![Node::Placeholder(Placeholder::Argument {
            key: "name".to_string(),
        })]),
        Message(vec![Node::Placeholder(Placeholder::Styled {
            key: "total".to_string(),
            kind: "number".to_string(),
            style: None,
        })]),
        Message(vec![Node::Placeholder(Placeholder::Styled {
            key: "due".to_string(),
            kind: "date".to_string(),
            style: Some(Style::Text("short".to_string())),
        })]),
    ]
}

/// Generate problem and detail messages for parsing errors, rendering any
/// example patterns with the given renderer.
pub fn generate_error_message(error: &ParsingError, renderer: &impl Render) -> (String, String) {
    match error {
        ParsingError::UnexpectedEndOfInput(_) => (
            "Unexpected end of input".to_string(),
            "The pattern ended before a placeholder was closed. Every '{' must have a matching '}'."
                .to_string(),
        ),
        ParsingError::UnterminatedQuote(_) => (
            "Unterminated quoted text".to_string(),
            format!(
                r#"
An apostrophe before a syntax character starts quoted literal text, which
continues until the next single apostrophe. To write a literal apostrophe use
two of them, as in {}.
                "#,
                renderer.style(Syntax::Text, "it''s")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::Expected(_, value) => (
            format!("Expected {}", value),
            format!(
                "The parser was looking for {} but found something else.",
                value
            ),
        ),
        ParsingError::InvalidCharacter(_, c) => (
            format!("Invalid character '{}'", c),
            "This character is not allowed here.".to_string(),
        ),
        ParsingError::EmptyKey(_) | ParsingError::UnmatchedClosingBrace(_) => {
            let examples = example_placeholders();

            (
                error.message(),
                format!(
                    r#"
Placeholders are enclosed in braces and start with the name of an argument,
optionally followed by a type and a style:

    {}
    {}
    {}

To use a brace as literal text, quote it with apostrophes: {}
                    "#,
                    render(renderer, &examples[0]),
                    render(renderer, &examples[1]),
                    render(renderer, &examples[2]),
                    renderer.style(Syntax::Quote, "'{'")
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::InvalidOffset(_) => (
            "Invalid plural offset".to_string(),
            format!(
                "An offset is a whole number following {}, as in {}.",
                renderer.style(Syntax::Offset, "offset:"),
                renderer.style(Syntax::Offset, "offset:1")
            ),
        ),
        ParsingError::DuplicateSelector(_, key) => (
            format!("Duplicate selector \"{}\"", key),
            "Each selector may only label one branch of a plural or select.".to_string(),
        ),
        ParsingError::MissingSubmessages(_) => (
            "Missing sub-messages".to_string(),
            format!(
                r#"
Plural, selectordinal and select placeholders need one or more branches, each
a selector followed by a message in braces:

{}

{}
                "#,
                render(renderer, &example_plural()),
                render(renderer, &example_select())
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}
