//! Types representing an Abstract Syntax Tree for ICU-style message patterns

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A message is an ordered sequence of nodes; output is their concatenation
/// in order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Message(pub Vec<Node>);

impl Message {
    pub fn new(nodes: Vec<Node>) -> Message {
        Message(nodes)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0
            .is_empty()
    }
}

impl From<Vec<Node>> for Message {
    fn from(nodes: Vec<Node>) -> Self {
        Message(nodes)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Text(String),
    Placeholder(Placeholder),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Node {
        Node::Text(value.into())
    }
}

impl From<Placeholder> for Node {
    fn from(placeholder: Placeholder) -> Self {
        Node::Placeholder(placeholder)
    }
}

/// The kinds of placeholder that can appear between braces (or, for the
/// `#` marker, bare inside a plural branch).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Placeholder {
    // { key }
    Argument {
        key: String,
    },
    // the # marker, only valid inside a plural or selectordinal branch
    ArgNumRef,
    // { key, type } or { key, type, style }
    Styled {
        key: String,
        kind: String,
        style: Option<Style>,
    },
    // { key, plural, offset:N ... } or { key, selectordinal, ... }
    Plural {
        key: String,
        kind: PluralKind,
        offset: u32,
        children: SubMessages,
    },
}

impl Placeholder {
    /// The argument name, if this placeholder has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Placeholder::Argument { key } => Some(key),
            Placeholder::ArgNumRef => None,
            Placeholder::Styled { key, .. } => Some(key),
            Placeholder::Plural { key, .. } => Some(key),
        }
    }
}

/// The third part of a styled argument: either a format style such as a date
/// pattern, or a set of sub-messages as for `select`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Style {
    Text(String),
    Cases(SubMessages),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PluralKind {
    Cardinal,
    Ordinal,
}

impl PluralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralKind::Cardinal => "plural",
            PluralKind::Ordinal => "selectordinal",
        }
    }

    pub fn from_type(kind: &str) -> Option<PluralKind> {
        match kind {
            "plural" => Some(PluralKind::Cardinal),
            "selectordinal" => Some(PluralKind::Ordinal),
            _ => None,
        }
    }
}

/// Selector key to sub-message. Iteration order is insertion order, which is
/// also the order branches are printed in.
pub type SubMessages = IndexMap<String, Message>;

/// Returns true if the given placeholder type makes `#` significant within
/// its branches.
pub fn is_plural_type(kind: &str) -> bool {
    PluralKind::from_type(kind).is_some()
}
