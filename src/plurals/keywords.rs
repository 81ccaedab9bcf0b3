use indexmap::IndexSet;

use crate::language::*;

/// The selector keys used by a message, split by which set of plural rules
/// governs them. Keys are kept in the order first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    pub cardinal: IndexSet<String>,
    pub ordinal: IndexSet<String>,
}

impl Keywords {
    pub fn get(&self, kind: PluralKind) -> &IndexSet<String> {
        match kind {
            PluralKind::Cardinal => &self.cardinal,
            PluralKind::Ordinal => &self.ordinal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cardinal
            .is_empty()
            && self
                .ordinal
                .is_empty()
    }
}

/// Collect the selector keys of every plural and selectordinal construct in
/// the message, including those nested inside other sub-messages.
pub fn keywords(message: &Message) -> Keywords {
    let mut keywords = Keywords::default();
    search(message, &mut keywords);
    keywords
}

fn search(message: &Message, keywords: &mut Keywords) {
    for node in message.nodes() {
        match node {
            Node::Placeholder(Placeholder::Plural { kind, children, .. }) => {
                for (key, child) in children {
                    match kind {
                        PluralKind::Cardinal => keywords
                            .cardinal
                            .insert(key.clone()),
                        PluralKind::Ordinal => keywords
                            .ordinal
                            .insert(key.clone()),
                    };
                    search(child, keywords);
                }
            }
            Node::Placeholder(Placeholder::Styled {
                style: Some(Style::Cases(cases)),
                ..
            }) => {
                for child in cases.values() {
                    search(child, keywords);
                }
            }
            _ => {}
        }
    }
}
