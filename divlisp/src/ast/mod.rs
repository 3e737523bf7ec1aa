//! Generic parse tree handed from the parser to the reader
//!
//! Nodes carry a `|`-separated tag naming the grammar rules that produced
//! them (`expr|number|regex`, `expr|sexpr|>`, ...), the literal text they
//! matched, and their children in source order. The reader only ever looks
//! at these three fields.

mod span;

pub use span::*;

use serde::Serialize;

/// Tag of the tree root
pub const ROOT_TAG: &str = ">";
/// Tag of the start/end-of-input markers wrapping the root's children
pub const REGEX_TAG: &str = "regex";
/// Tag of delimiter tokens inside a list node
pub const CHAR_TAG: &str = "char";

pub const NUMBER_TAG: &str = "expr|number|regex";
pub const SYMBOL_TAG: &str = "expr|symbol|regex";
pub const SEXPR_TAG: &str = "expr|sexpr|>";
pub const QEXPR_TAG: &str = "expr|qexpr|>";

/// A node of the parse tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contents: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// A node with literal text and no children
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        ParseNode {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// A node with children and no literal text
    pub fn branch(tag: impl Into<String>, children: Vec<ParseNode>) -> Self {
        ParseNode {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    /// Whether any `|`-separated part of the tag contains `rule`
    pub fn has_tag(&self, rule: &str) -> bool {
        self.tag.contains(rule)
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    /// Delimiters and input markers carry no value of their own
    pub fn is_punctuation(&self) -> bool {
        matches!(self.contents.as_str(), "(" | ")" | "{" | "}") || self.tag == REGEX_TAG
    }
}
