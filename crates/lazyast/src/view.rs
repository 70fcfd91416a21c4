use alloc::rc::Rc;

use crate::{
    Ast, AstNode, Result, Span,
    kind::{KindSet, NodeKind},
    layout::{Decode, DecodeCx},
    strings::{Str, source_slice},
    value::Value,
};

/// A lazily decoded struct in the buffer: a position, the session, and one
/// memo slot per field.
///
/// At most one view of a given type is alive per position; decoding the same
/// field twice, or reaching the same position by another path, yields the
/// same `Rc`.
pub trait View: Decode<Output = Rc<Self>> + Sized {
    #[doc(hidden)]
    fn construct_at(pos: u32, cx: &DecodeCx<'_>) -> Self;

    /// Offset of this view in the buffer.
    fn pos(&self) -> u32;

    /// The session this view belongs to.
    fn ast(&self) -> &Rc<Ast>;

    /// Eagerly decodes this view and everything below it.
    ///
    /// # Errors
    ///
    /// Any decode error hit on the way down, or
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) if the
    /// tree is deeper than the session allows.
    fn to_plain(&self) -> Result<Value>;
}

/// A view with a node kind and a source span.
pub trait Node: View {
    /// The kind tag of this node type.
    const KIND: NodeKind;

    /// Plain-object keys of the child fields, in traversal order.
    const VISIT_KEYS: &'static [&'static str];

    /// The source range of this node.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) on a truncated buffer.
    fn span(&self) -> Result<Span> {
        Span::read(self.pos(), self.ast())
    }

    /// Start offset of [`span`](Node::span).
    ///
    /// # Errors
    ///
    /// As for [`span`](Node::span).
    fn start(&self) -> Result<u32> {
        self.span().map(|span| span.start)
    }

    /// End offset of [`span`](Node::span).
    ///
    /// # Errors
    ///
    /// As for [`span`](Node::span).
    fn end(&self) -> Result<u32> {
        self.span().map(|span| span.end)
    }

    /// The source text this node was parsed from.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the span does not
    /// fall on character boundaries inside the source text.
    fn source_text(&self) -> Result<Str> {
        let span = self.span()?;
        source_slice(self.ast(), span.start, span.end)
    }

    /// Same as [`KIND`](Node::KIND), callable on a value.
    fn node_kind(&self) -> NodeKind {
        Self::KIND
    }

    /// Wraps this view in the closed [`AstNode`] sum.
    fn into_node(self: Rc<Self>) -> AstNode;

    #[doc(hidden)]
    fn reach_children(kinds: &mut KindSet);
}

/// Eagerly decodes `view` and everything below it.
///
/// Calling this twice on the same view yields deep-equal values.
///
/// # Errors
///
/// As for [`View::to_plain`].
pub fn to_plain<T: View>(view: &T) -> Result<Value> {
    view.to_plain()
}
