use alloc::string::String;
use core::fmt;

/// An in-place mutation attempted on a [`NodeVec`](crate::NodeVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceMutation {
    /// Assignment to an index that already holds an element.
    Set(usize),
    /// Assignment to `length`.
    SetLen,
    /// Appending an element.
    Push,
    /// Removing the last element.
    Pop,
    /// Inserting before an existing element.
    Insert,
    /// Removing an element.
    Remove,
    /// Reversing in place.
    Reverse,
    /// Sorting in place.
    Sort,
}

impl fmt::Display for SequenceMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(index) => write!(f, "set index {index}"),
            Self::SetLen => f.write_str("set length"),
            Self::Push => f.write_str("push"),
            Self::Pop => f.write_str("pop"),
            Self::Insert => f.write_str("insert"),
            Self::Remove => f.write_str("remove"),
            Self::Reverse => f.write_str("reverse"),
            Self::Sort => f.write_str("sort"),
        }
    }
}

/// Everything that can go wrong while decoding or walking a buffer.
///
/// Schema mismatches ([`UnexpectedDiscriminant`], [`OutOfBounds`],
/// [`OptionConvention`]) and session mixups ([`ForeignContext`]) surface at
/// the field access that hit them. Visitor registration errors surface from
/// [`CompiledVisitor::new`](crate::CompiledVisitor::new) before any node is
/// visited.
///
/// [`UnexpectedDiscriminant`]: Error::UnexpectedDiscriminant
/// [`OutOfBounds`]: Error::OutOfBounds
/// [`OptionConvention`]: Error::OptionConvention
/// [`ForeignContext`]: Error::ForeignContext
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A token or sequence from one decode session was used with another.
    #[error("object belongs to a different decode session")]
    ForeignContext,

    /// The tag byte of a union did not name any known variant.
    #[error("unexpected discriminant {value} for {union}")]
    UnexpectedDiscriminant {
        /// The union being decoded.
        union: &'static str,
        /// The tag byte found.
        value: u8,
    },

    /// Sequences are read-only views over the buffer.
    #[error("cannot {op} on a node sequence")]
    ImmutableSequenceMutation {
        /// The attempted mutation.
        op: SequenceMutation,
    },

    /// A visitor key named a node kind that does not exist.
    #[error("unknown node kind `{name}` in visitor")]
    UnknownVisitorKind {
        /// The kind name as given.
        name: String,
    },

    /// A visitor key had a phase suffix other than `:exit`.
    #[error("malformed visitor key `{name}`, expected `Kind` or `Kind:exit`")]
    MalformedVisitorPhase {
        /// The whole key as given.
        name: String,
    },

    /// A read reached past the end of the buffer or the source text.
    #[error("{len} bytes at offset {offset} lie outside a region of {size} bytes")]
    OutOfBounds {
        /// Start of the read.
        offset: u64,
        /// Length of the read.
        len: u64,
        /// Size of the region read from.
        size: usize,
    },

    /// An optional field was declared over a type with no absent-value
    /// encoding.
    #[error("field `{field}` is optional but `{ty}` has no encoding for an absent value")]
    OptionConvention {
        /// The field being decoded.
        field: &'static str,
        /// The field's type.
        ty: &'static str,
    },

    /// Nesting went past [`DecodeOptions::max_depth`](crate::DecodeOptions::max_depth).
    #[error("tree nests deeper than {limit} levels")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
