//! Syntax tree model.
//!
//! The host parser owns parsing; coplint only consumes finished trees. This
//! module provides the immutable [`Node`] type the host builds and hands to
//! the linter, along with [`NodeKind`] tags and the [`NodeLoc`] location
//! metadata the range calculator reads.
//!
//! Nodes are built once through a consuming builder and never mutated
//! afterwards; rules only ever hold shared references.
//!
//! # Child layout conventions
//!
//! - `Send`: `name` is the method selector, `receiver` the optional call
//!   receiver, `children` the arguments in order.
//! - `Block`: `children[0]` is the call the block attaches to, followed by an
//!   optional `BlockArgs` node and the body nodes; `loc.end` is the closing
//!   `end` / `}` token.
//! - `Class`: `name` is the class name, `loc.name` its token, `children` the
//!   body.
//! - `Hash`: `children` are `Pair` and `Kwsplat` nodes in source order.
//! - `Pair`: `children` are `[key, value]`; a value-less shorthand binding
//!   (`success:`) has only the key child.
//! - `Const`: `name` is the constant name; a qualified constant
//!   (`Foo::Bar`) carries its scope as a single child, a bare constant has
//!   none.
//! - `Sym` / `Lvar`: `name` is the symbol or variable name.
//! - `Int` / `Float` / `Str`: leaf literals; their text is recovered from the
//!   source buffer via the expression range.

use crate::span::SourceRange;

/// Node tag identifying the syntactic construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Class definition.
    Class,
    /// Constant reference.
    Const,
    /// Method call.
    Send,
    /// Block attached to a call.
    Block,
    /// Block parameter list.
    BlockArgs,
    /// Expression sequence.
    Begin,
    /// Hash literal or bare keyword-argument list.
    Hash,
    /// Key-value pair inside a hash.
    Pair,
    /// Symbol literal.
    Sym,
    /// String literal.
    Str,
    /// Integer literal.
    Int,
    /// Float literal.
    Float,
    /// `true` literal.
    True,
    /// `false` literal.
    False,
    /// `nil` literal.
    Nil,
    /// Local variable read.
    Lvar,
    /// `**splat` inside a hash.
    Kwsplat,
    /// `...` argument forwarding placeholder.
    ForwardedArgs,
}

/// Source location metadata for a node.
///
/// `expression` always covers the whole construct; the token ranges are only
/// present where the construct has that token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLoc {
    /// Range of the entire expression.
    pub expression: SourceRange,
    /// Method-name token of a call.
    pub selector: Option<SourceRange>,
    /// Name token of a definition (e.g. the class name).
    pub name: Option<SourceRange>,
    /// Closing token of a compound expression (`end`, `}`).
    pub end: Option<SourceRange>,
}

impl NodeLoc {
    fn new(expression: SourceRange) -> Self {
        Self {
            expression,
            selector: None,
            name: None,
            end: None,
        }
    }
}

/// An immutable node in a host-supplied syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    name: Option<String>,
    receiver: Option<Box<Node>>,
    children: Vec<Node>,
    loc: NodeLoc,
}

impl Node {
    /// Create a node covering the given source range.
    pub fn new(kind: NodeKind, expression: SourceRange) -> Self {
        Self {
            kind,
            name: None,
            receiver: None,
            children: Vec::new(),
            loc: NodeLoc::new(expression),
        }
    }

    /// Set the symbolic name (method selector, constant name, symbol value).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the call receiver.
    pub fn with_receiver(mut self, receiver: Node) -> Self {
        self.receiver = Some(Box::new(receiver));
        self
    }

    /// Set the ordered children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Set the method-name token range.
    pub fn with_selector_loc(mut self, range: SourceRange) -> Self {
        self.loc.selector = Some(range);
        self
    }

    /// Set the definition-name token range.
    pub fn with_name_loc(mut self, range: SourceRange) -> Self {
        self.loc.name = Some(range);
        self
    }

    /// Set the closing-token range.
    pub fn with_end_loc(mut self, range: SourceRange) -> Self {
        self.loc.end = Some(range);
        self
    }

    /// The node tag.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether this node has the given tag.
    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// The symbolic name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The call receiver, if any.
    pub fn receiver(&self) -> Option<&Node> {
        self.receiver.as_deref()
    }

    /// The ordered children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Location metadata.
    pub fn loc(&self) -> &NodeLoc {
        &self.loc
    }

    /// Range of the entire expression.
    pub fn range(&self) -> SourceRange {
        self.loc.expression
    }

    /// Whether this is an `Int` or `Float` literal.
    pub fn is_numeric_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Int | NodeKind::Float)
    }

    /// Whether this is a `true` or `false` literal.
    pub fn is_boolean_literal(&self) -> bool {
        matches!(self.kind, NodeKind::True | NodeKind::False)
    }
}
