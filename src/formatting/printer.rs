//! Printer turning a message AST back into pattern source text

use crate::formatting::*;
use crate::language::*;

/// Apostrophe, the character that starts and ends quoted literal text.
const ESC: &str = "'";
const DBL_ESC: &str = "''";
const ARG_NUM: &str = "#";

/// Convert a message into tagged fragments. This is the first of the two
/// passes done by render(); it starts with no enclosing placeholder.
pub fn print_with_renderer(message: &Message) -> Vec<(Syntax, String)> {
    let mut output = Printer::new();

    output.append_message(message, None);

    output.fragments
}

struct Printer {
    fragments: Vec<(Syntax, String)>,
}

impl Printer {
    fn new() -> Printer {
        Printer {
            fragments: Vec::new(),
        }
    }

    #[cfg(test)]
    fn reset(&mut self) {
        self.fragments
            .clear();
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        if content.is_empty() {
            return;
        }
        self.fragments
            .push((syntax, content.to_string()));
    }

    /// Emit each node in order. The parent type is that of the nearest
    /// enclosing plural or styled placeholder and only affects escaping.
    fn append_message(&mut self, message: &Message, parent: Option<&str>) {
        for node in message.nodes() {
            match node {
                Node::Text(text) => self.append_text(text, parent),
                Node::Placeholder(placeholder) => self.append_placeholder(placeholder, parent),
            }
        }
    }

    fn append_text(&mut self, text: &str, parent: Option<&str>) {
        // apostrophes must be doubled before syntax characters are quoted,
        // otherwise the quotes we add would be doubled as well.
        let doubled = text.replace(ESC, DBL_ESC);

        // Runs separated only by doubled apostrophes are quoted together;
        // quoted separately the apostrophes would merge with the quotes.
        let special = match parent {
            Some(kind) if is_plural_type(kind) => regex!(r"[{}#]+(?:(?:'')+[{}#]+)*"),
            _ => regex!(r"[{}]+(?:(?:'')+[{}]+)*"),
        };

        let mut last = 0;
        for run in special.find_iter(&doubled) {
            self.append(Syntax::Text, &doubled[last..run.start()]);
            self.append(Syntax::Quote, &format!("{}{}{}", ESC, run.as_str(), ESC));
            last = run.end();
        }
        self.append(Syntax::Text, &doubled[last..]);
    }

    fn append_placeholder(&mut self, placeholder: &Placeholder, _parent: Option<&str>) {
        match placeholder {
            Placeholder::ArgNumRef => self.append(Syntax::Marker, ARG_NUM),
            Placeholder::Plural {
                key,
                kind,
                offset,
                children,
            } => self.append_plural(key, *kind, *offset, children),
            Placeholder::Argument { key } => self.append_argument(key),
            Placeholder::Styled { key, kind, style } => {
                self.append_styled(key, kind, style.as_ref())
            }
        }
    }

    fn append_argument(&mut self, key: &str) {
        self.append(Syntax::Structure, "{ ");
        self.append(Syntax::Argument, key);
        self.append(Syntax::Structure, " }");
    }

    fn append_styled(&mut self, key: &str, kind: &str, style: Option<&Style>) {
        self.append(Syntax::Structure, "{ ");
        self.append(Syntax::Argument, key);
        self.append(Syntax::Structure, ", ");
        self.append(Syntax::Kind, kind);

        match style {
            Some(Style::Cases(cases)) => {
                self.append(Syntax::Structure, ",");
                self.append_children(cases, Some(kind));
                self.append(Syntax::Newline, "\n");
                self.append(Syntax::Structure, "}");
            }
            Some(Style::Text(style)) if !style.is_empty() => {
                self.append(Syntax::Structure, ", ");
                self.append(Syntax::Style, &quote_style(style));
                self.append(Syntax::Structure, " }");
            }
            _ => {
                self.append(Syntax::Structure, " }");
            }
        }
    }

    fn append_plural(&mut self, key: &str, kind: PluralKind, offset: u32, children: &SubMessages) {
        self.append(Syntax::Structure, "{ ");
        self.append(Syntax::Argument, key);
        self.append(Syntax::Structure, ", ");
        self.append(Syntax::Kind, kind.as_str());
        self.append(Syntax::Structure, ",");

        if offset > 0 {
            self.append(Syntax::Neutral, " ");
            self.append(Syntax::Offset, &format!("offset:{}", offset));
        }

        self.append_children(children, Some(kind.as_str()));
        self.append(Syntax::Newline, "\n");
        self.append(Syntax::Structure, "}");
    }

    /// Each branch goes on its own line with the selector keys right aligned
    /// against the longest of its siblings.
    fn append_children(&mut self, children: &SubMessages, parent: Option<&str>) {
        let width = children
            .keys()
            .map(|key| {
                key.chars()
                    .count()
            })
            .max()
            .unwrap_or(0);

        for (key, message) in children {
            let padding = width - key
                .chars()
                .count();

            self.append(Syntax::Newline, "\n");
            self.append(Syntax::Indent, &" ".repeat(2 + padding));
            self.append(Syntax::Selector, key);
            self.append(Syntax::Structure, " {");
            self.append_message(message, parent);
            self.append(Syntax::Structure, "}");
        }
    }
}

impl ToString for Printer {
    fn to_string(&self) -> String {
        let mut result = String::new();
        for (_, text) in &self.fragments {
            result.push_str(text);
        }
        result
    }
}

/// Format styles are left bare when they are a single token without braces,
/// and quoted as a whole otherwise. This is deliberately stricter than the
/// test used for ordinary text: whitespace alone is enough to force quoting.
fn quote_style(style: &str) -> String {
    let doubled = style.replace(ESC, DBL_ESC);

    if regex!(r"[{}\s]").is_match(style) {
        format!("{}{}{}", ESC, doubled, ESC)
    } else {
        doubled
    }
}
