//! Structural pattern matching over syntax nodes.
//!
//! Patterns are composable predicate values: each [`Pattern`] tests one
//! aspect of a node (tag, name, receiver, children) and combinators nest them
//! into tree shapes. Matching either succeeds with a set of named
//! [`Captures`] or fails with nothing; a failure anywhere discards all
//! partial captures, so rules never observe bindings from a half-matched
//! shape.
//!
//! # Example
//!
//! ```
//! use coplint::ast::{Node, NodeKind};
//! use coplint::pattern::Pattern;
//! use coplint::span::SourceRange;
//!
//! // A receiverless call named `sleep`, capturing the node itself.
//! let pattern = Pattern::capture(
//!     "call",
//!     Pattern::all(vec![
//!         Pattern::kind(NodeKind::Send),
//!         Pattern::no_receiver(),
//!         Pattern::name("sleep"),
//!     ]),
//! );
//!
//! let node = Node::new(NodeKind::Send, SourceRange::new(0, 8)).with_name("sleep");
//! let captures = pattern.matches(&node).unwrap();
//! assert_eq!(captures.get("call").unwrap().name(), Some("sleep"));
//! ```

use std::collections::HashMap;

use crate::ast::{Node, NodeKind};

/// A declarative predicate over a syntax node.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches any node.
    Any,
    /// Node tag equals the given kind.
    Kind(NodeKind),
    /// Symbolic name equals the given string.
    Name(String),
    /// Symbolic name is one of the given strings.
    NameIn(Vec<String>),
    /// All subpatterns match the node.
    All(Vec<Pattern>),
    /// At least one subpattern matches the node.
    AnyOf(Vec<Pattern>),
    /// The node has no receiver.
    NoReceiver,
    /// The node has a receiver matching the subpattern.
    Receiver(Box<Pattern>),
    /// Children match the subpatterns in order, with exact arity.
    Children(Vec<Pattern>),
    /// Some child matches the subpattern; other children are unconstrained.
    HasChild(Box<Pattern>),
    /// The child at the given index exists and matches.
    Child(usize, Box<Pattern>),
    /// The node has exactly this many children.
    ChildCount(usize),
    /// Bind the node under a name, then match the subpattern.
    Capture(&'static str, Box<Pattern>),
}

/// Nodes bound by [`Pattern::Capture`] during a successful match.
#[derive(Debug, Default, Clone)]
pub struct Captures<'a> {
    bindings: HashMap<&'static str, &'a Node>,
}

impl<'a> Captures<'a> {
    /// Look up a captured node by name.
    pub fn get(&self, name: &str) -> Option<&'a Node> {
        self.bindings.get(name).copied()
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Pattern {
    pub fn any() -> Self {
        Pattern::Any
    }

    pub fn kind(kind: NodeKind) -> Self {
        Pattern::Kind(kind)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Pattern::Name(name.into())
    }

    pub fn name_in<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pattern::NameIn(names.into_iter().map(Into::into).collect())
    }

    pub fn all(patterns: Vec<Pattern>) -> Self {
        Pattern::All(patterns)
    }

    pub fn any_of(patterns: Vec<Pattern>) -> Self {
        Pattern::AnyOf(patterns)
    }

    pub fn no_receiver() -> Self {
        Pattern::NoReceiver
    }

    pub fn receiver(pattern: Pattern) -> Self {
        Pattern::Receiver(Box::new(pattern))
    }

    pub fn children(patterns: Vec<Pattern>) -> Self {
        Pattern::Children(patterns)
    }

    pub fn has_child(pattern: Pattern) -> Self {
        Pattern::HasChild(Box::new(pattern))
    }

    pub fn nth_child(index: usize, pattern: Pattern) -> Self {
        Pattern::Child(index, Box::new(pattern))
    }

    pub fn child_count(count: usize) -> Self {
        Pattern::ChildCount(count)
    }

    pub fn capture(name: &'static str, pattern: Pattern) -> Self {
        Pattern::Capture(name, Box::new(pattern))
    }

    /// Test this pattern against a node.
    ///
    /// Returns the captures on success, `None` on any mismatch. Never fails
    /// loudly: unexpected shapes simply do not match.
    pub fn matches<'a>(&self, node: &'a Node) -> Option<Captures<'a>> {
        let mut captures = Captures::default();
        if self.eval(node, &mut captures) {
            Some(captures)
        } else {
            None
        }
    }

    fn eval<'a>(&self, node: &'a Node, captures: &mut Captures<'a>) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Kind(kind) => node.kind() == *kind,
            Pattern::Name(name) => node.name() == Some(name.as_str()),
            Pattern::NameIn(names) => node
                .name()
                .is_some_and(|n| names.iter().any(|candidate| candidate == n)),
            Pattern::All(patterns) => patterns.iter().all(|p| p.eval(node, captures)),
            Pattern::AnyOf(patterns) => {
                for pattern in patterns {
                    // Evaluate against a scratch copy so a failed branch
                    // cannot leak partial captures.
                    let mut trial = captures.clone();
                    if pattern.eval(node, &mut trial) {
                        *captures = trial;
                        return true;
                    }
                }
                false
            }
            Pattern::NoReceiver => node.receiver().is_none(),
            Pattern::Receiver(pattern) => match node.receiver() {
                Some(receiver) => pattern.eval(receiver, captures),
                None => false,
            },
            Pattern::Children(patterns) => {
                node.children().len() == patterns.len()
                    && patterns
                        .iter()
                        .zip(node.children())
                        .all(|(p, child)| p.eval(child, captures))
            }
            Pattern::HasChild(pattern) => {
                for child in node.children() {
                    let mut trial = captures.clone();
                    if pattern.eval(child, &mut trial) {
                        *captures = trial;
                        return true;
                    }
                }
                false
            }
            Pattern::Child(index, pattern) => match node.children().get(*index) {
                Some(child) => pattern.eval(child, captures),
                None => false,
            },
            Pattern::ChildCount(count) => node.children().len() == *count,
            Pattern::Capture(name, pattern) => {
                if pattern.eval(node, captures) {
                    captures.bindings.insert(name, node);
                    true
                } else {
                    false
                }
            }
        }
    }
}
