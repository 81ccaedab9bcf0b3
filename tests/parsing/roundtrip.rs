#[cfg(test)]
mod roundtrip {
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    use message_print::formatting::print;
    use message_print::language::*;
    use message_print::parsing;

    type SmallRng = Xoshiro256StarStar;

    const SEED: u64 = 0x1C0_2024;
    const ROUNDS: usize = 500;

    const ALPHABET: &[&str] = &["a", "b", "z", " ", "\n", "'", "{", "}", "#", "ü", "é"];
    const PLURAL_KEYS: &[&str] = &["=0", "=1", "zero", "one", "two", "few", "many", "other"];
    const SELECT_KEYS: &[&str] = &["male", "female", "other", "a_1", "x"];
    const STYLED_KINDS: &[&str] = &["number", "date", "time", "spellout"];

    /// Builds messages in the shape the parser produces: text nodes are
    /// never empty nor adjacent, and `#` markers only appear directly
    /// beneath a plural.
    struct Generator {
        rng: SmallRng,
    }

    impl Generator {
        fn new(seed: u64) -> Generator {
            Generator {
                rng: SmallRng::seed_from_u64(seed),
            }
        }

        fn text(&mut self, alphabet: &[&str]) -> String {
            let length = self
                .rng
                .gen_range(1..8);
            (0..length)
                .map(|_| {
                    *alphabet
                        .choose(&mut self.rng)
                        .unwrap()
                })
                .collect()
        }

        fn identifier(&mut self) -> String {
            const LETTERS: &[&str] = &["a", "b", "n", "x", "_"];
            format!("k{}", self.text(LETTERS))
        }

        fn message(&mut self, parent: Option<&str>, depth: usize) -> Message {
            let count = self
                .rng
                .gen_range(0..5);
            let mut nodes: Vec<Node> = Vec::new();

            for _ in 0..count {
                let node = match self
                    .rng
                    .gen_range(0..10)
                {
                    0..=4 => Node::Text(self.text(ALPHABET)),
                    5 if parent.map_or(false, is_plural_type) => {
                        Node::Placeholder(Placeholder::ArgNumRef)
                    }
                    6 | 7 if depth > 0 => Node::Placeholder(self.nested(depth - 1)),
                    _ => Node::Placeholder(self.simple()),
                };

                // merge adjacent text the way the parser would read it
                if let Node::Text(more) = &node {
                    if let Some(Node::Text(previous)) = nodes.last_mut() {
                        previous.push_str(more);
                        continue;
                    }
                }
                nodes.push(node);
            }

            Message(nodes)
        }

        fn simple(&mut self) -> Placeholder {
            let key = self.identifier();

            if self
                .rng
                .gen_bool(0.4)
            {
                return Placeholder::Argument { key };
            }

            let kind = STYLED_KINDS
                .choose(&mut self.rng)
                .unwrap()
                .to_string();

            let style = if self
                .rng
                .gen_bool(0.5)
            {
                Some(Style::Text(self.text(ALPHABET)))
            } else {
                None
            };

            Placeholder::Styled { key, kind, style }
        }

        fn nested(&mut self, depth: usize) -> Placeholder {
            let key = self.identifier();

            if self
                .rng
                .gen_bool(0.5)
            {
                let cases = self.children(SELECT_KEYS, "select", depth);
                Placeholder::Styled {
                    key,
                    kind: "select".to_string(),
                    style: Some(Style::Cases(cases)),
                }
            } else {
                let kind = if self
                    .rng
                    .gen_bool(0.7)
                {
                    PluralKind::Cardinal
                } else {
                    PluralKind::Ordinal
                };
                let offset = if self
                    .rng
                    .gen_bool(0.3)
                {
                    self.rng
                        .gen_range(1..20)
                } else {
                    0
                };
                let children = self.children(PLURAL_KEYS, kind.as_str(), depth);
                Placeholder::Plural {
                    key,
                    kind,
                    offset,
                    children,
                }
            }
        }

        fn children(&mut self, keys: &[&str], parent: &str, depth: usize) -> SubMessages {
            let count = self
                .rng
                .gen_range(1..=keys.len());

            let mut children = SubMessages::new();
            for key in keys.choose_multiple(&mut self.rng, count) {
                let message = self.message(Some(parent), depth);
                children.insert(key.to_string(), message);
            }
            children
        }
    }

    #[test]
    fn parse_inverts_print() {
        let mut generator = Generator::new(SEED);

        for round in 0..ROUNDS {
            let message = generator.message(None, 2);
            let printed = print(&message);

            match parsing::parse(&printed) {
                Ok(reparsed) => assert_eq!(
                    reparsed, message,
                    "round {} did not survive printing as:\n{}",
                    round, printed
                ),
                Err(e) => panic!("round {} printed unparseable {:?}: {}", round, printed, e),
            }
        }
    }

    #[test]
    fn printing_reaches_a_fixpoint() {
        let mut generator = Generator::new(SEED + 1);

        for _ in 0..ROUNDS {
            let message = generator.message(None, 2);
            let once = print(&message);
            let twice = print(&parsing::parse(&once).unwrap());

            assert_eq!(once, twice);
        }
    }

    #[test]
    fn printing_is_deterministic() {
        let mut generator = Generator::new(SEED + 2);

        for _ in 0..50 {
            let message = generator.message(None, 2);
            assert_eq!(print(&message), print(&message.clone()));
        }
    }

    #[test]
    fn plain_text_only_doubles_apostrophes() {
        const PLAIN: &[&str] = &["a", "'", " ", "#", "é"];
        let mut generator = Generator::new(SEED + 3);

        for _ in 0..ROUNDS {
            let text = generator.text(PLAIN);
            let message = Message(vec![Node::Text(text.clone())]);

            assert_eq!(print(&message), text.replace('\'', "''"));
        }
    }
}
