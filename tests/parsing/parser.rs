#[cfg(test)]
mod verify {
    use message_print::language::*;
    use message_print::parsing::parser::{self, Parser, ParsingError};
    use message_print::parsing;

    fn argument(key: &str) -> Node {
        Node::Placeholder(Placeholder::Argument {
            key: key.to_string(),
        })
    }

    #[test]
    fn bananas() {
        let result = parsing::parse(
            "You have { numBananas, plural,\n     =0 {no bananas}\n    one {a banana}\n  other {# bananas}\n} for sale.",
        );

        let mut children = SubMessages::new();
        children.insert("=0".to_string(), Message(vec![Node::text("no bananas")]));
        children.insert("one".to_string(), Message(vec![Node::text("a banana")]));
        children.insert(
            "other".to_string(),
            Message(vec![
                Node::Placeholder(Placeholder::ArgNumRef),
                Node::text(" bananas"),
            ]),
        );

        assert_eq!(
            result,
            Ok(Message(vec![
                Node::text("You have "),
                Node::Placeholder(Placeholder::Plural {
                    key: "numBananas".to_string(),
                    kind: PluralKind::Cardinal,
                    offset: 0,
                    children,
                }),
                Node::text(" for sale."),
            ]))
        );
    }

    #[test]
    fn compact_source() {
        // whitespace inside placeholders is optional
        let result = parser::parse_via_taking("{a}{b,number}{c,plural,offset:1 one{x}other{#}}");

        let message = result.unwrap();
        let nodes = message.nodes();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], argument("a"));
        assert_eq!(
            nodes[1],
            Node::Placeholder(Placeholder::Styled {
                key: "b".to_string(),
                kind: "number".to_string(),
                style: None,
            })
        );
        match &nodes[2] {
            Node::Placeholder(Placeholder::Plural {
                key,
                kind,
                offset,
                children,
            }) => {
                assert_eq!(key, "c");
                assert_eq!(*kind, PluralKind::Cardinal);
                assert_eq!(*offset, 1);
                assert_eq!(
                    children["other"],
                    Message(vec![Node::Placeholder(Placeholder::ArgNumRef)])
                );
            }
            _ => panic!("Expected plural placeholder"),
        }
    }

    #[test]
    fn hash_is_text_outside_plurals() {
        let message = parsing::parse("# {g, select, other {#}}").unwrap();

        let mut cases = SubMessages::new();
        cases.insert("other".to_string(), Message(vec![Node::text("#")]));

        assert_eq!(
            message,
            Message(vec![
                Node::text("# "),
                Node::Placeholder(Placeholder::Styled {
                    key: "g".to_string(),
                    kind: "select".to_string(),
                    style: Some(Style::Cases(cases)),
                }),
            ])
        );
    }

    #[test]
    fn selectordinal() {
        let message = parsing::parse("{ n, selectordinal, one {#st} other {#th} }").unwrap();

        match &message.nodes()[0] {
            Node::Placeholder(Placeholder::Plural { kind, children, .. }) => {
                assert_eq!(*kind, PluralKind::Ordinal);
                assert_eq!(
                    children["one"],
                    Message(vec![
                        Node::Placeholder(Placeholder::ArgNumRef),
                        Node::text("st")
                    ])
                );
            }
            _ => panic!("Expected selectordinal placeholder"),
        }
    }

    #[test]
    fn reading_text_directly() {
        let mut input = Parser::new();

        input.initialize("it''s a '{test}'");
        assert_eq!(input.read_text(false), Ok("it's a {test}".to_string()));

        input.initialize("one '#' two");
        assert_eq!(input.read_text(true), Ok("one # two".to_string()));
    }

    #[test]
    fn errors_carry_offsets() {
        assert_eq!(
            parsing::parse("Hello { name"),
            Err(ParsingError::UnexpectedEndOfInput(12))
        );
        assert_eq!(
            parsing::parse("oops } here"),
            Err(ParsingError::UnmatchedClosingBrace(5))
        );
        assert_eq!(
            parsing::parse("{ n, select, }"),
            Err(ParsingError::MissingSubmessages(13))
        );
        assert_eq!(
            parsing::parse("{ n, plural, one {a} one {b} }"),
            Err(ParsingError::DuplicateSelector(21, "one".to_string()))
        );
        assert_eq!(
            parsing::parse("'{ never"),
            Err(ParsingError::UnterminatedQuote(0))
        );
        assert_eq!(
            parsing::parse("{ n, plural, other x }"),
            Err(ParsingError::Expected(19, "an opening brace"))
        );
    }
}
