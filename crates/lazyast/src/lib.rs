//! Zero-copy lazy views over an abstract syntax tree laid out in a single
//! binary buffer, and a compiled visitor that walks them.
//!
//! A producer writes the tree into one contiguous buffer: nodes are structs
//! at fixed offsets, unions are a tag byte followed by a pointer, sequences
//! are `(pointer, length)` headers. [`decode`] wraps that buffer in a session
//! ([`Ast`]) and hands back a view of the root record. Nothing else is read
//! until a field accessor asks for it.
//!
//! ```rust
//! use lazyast::{CompiledVisitor, NodeKind, Visitor, builder::BufferBuilder};
//!
//! let mut b = BufferBuilder::new(";");
//! let empty = b.node(8, 0, 1);
//! let root = b.program(0, 1, &[(5, empty)]);
//! let (buffer, source) = b.finish();
//! let data = lazyast::decode(buffer, source, true, 1, root).unwrap();
//!
//! let mut seen = Vec::new();
//! let mut visitor = Visitor::new()
//!     .on("EmptyStatement", |node| seen.push(node.kind()))
//!     .compile()
//!     .unwrap();
//! visitor.run(&*data).unwrap();
//! drop(visitor);
//! assert_eq!(seen, [NodeKind::EmptyStatement]);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Value`], [`Span`], [`NodeKind`]
//!   and the fieldless enums.
//! - `tracing`: session, construction and visitor events through `tracing`.

#![no_std]
#![warn(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use {debug, trace};

mod ast;
mod error;
mod kind;
mod layout;
mod macros;
mod nodes;
mod options;
mod sequence;
mod strings;
mod value;
mod view;
mod visit;

pub mod builder;

#[cfg(test)]
mod tests;

pub use ast::{Ast, Token, decode, decode_from_metadata, decode_with_options};
pub use error::{Error, Result, SequenceMutation};
pub use kind::{AstNode, KindSet, NodeKind};
pub use layout::{Boxed, Decode, DecodeCx, Memo, Seq, Sentinel, Span, Unmemoized};
pub use nodes::*;
pub use options::DecodeOptions;
pub use sequence::{NodeVec, PropertyDescriptor, SeqKey};
pub use strings::Str;
pub use value::{Array, Map, Value};
pub use view::{Node, View, to_plain};
pub use visit::{Callback, CompiledVisitor, NodeRef, Visitor, Walker};
