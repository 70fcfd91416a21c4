//! The decode session: the raw buffer, the source text it points into, and the
//! identity cache that keeps one live view per `(type, offset)`.

use alloc::{boxed::Box, collections::BTreeMap, rc::Rc, rc::Weak};
use core::{
    any::{Any, TypeId},
    cell::{Cell, RefCell},
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

use crate::{
    DecodeOptions, Error, Result,
    layout::{Decode, DecodeCx},
    nodes::RawTransferData,
    view::View,
};
#[allow(unused_imports)]
use crate::{debug, trace};

static NEXT_SESSION: AtomicU32 = AtomicU32::new(1);

/// Offset of the root pointer, counted back from the end of the buffer.
const METADATA_ROOT_FROM_END: usize = 16;

/// Identifies the decode session that produced a view.
///
/// Tokens are only handed out by [`Ast::token`], so holding one proves access
/// to the session it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u32);

/// One decode session.
///
/// Owns the buffer and the source text for as long as any view produced from
/// it is alive. Views hold an `Rc<Ast>`; the identity cache only holds weak
/// references back to them.
pub struct Ast {
    buffer: Box<[u8]>,
    source_text: Rc<str>,
    source_is_ascii: bool,
    source_len: u32,
    options: DecodeOptions,
    token: Token,
    nodes: RefCell<BTreeMap<(u32, TypeId), Weak<dyn Any>>>,
    constructed: Cell<usize>,
    plain_depth: Cell<usize>,
}

impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ast")
            .field("buffer_len", &self.buffer.len())
            .field("source_len", &self.source_len)
            .field("source_is_ascii", &self.source_is_ascii)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl Ast {
    /// Starts a session over `buffer`.
    pub fn new(
        buffer: impl Into<Box<[u8]>>,
        source_text: impl Into<Rc<str>>,
        source_is_ascii: bool,
        source_byte_length: u32,
        options: DecodeOptions,
    ) -> Rc<Self> {
        let buffer = buffer.into();
        let token = Token(NEXT_SESSION.fetch_add(1, Ordering::Relaxed));
        debug!(
            session = token.0,
            buffer_len = buffer.len(),
            source_len = source_byte_length,
            source_is_ascii,
            "starting decode session"
        );
        Rc::new(Self {
            buffer,
            source_text: source_text.into(),
            source_is_ascii,
            source_len: source_byte_length,
            options,
            token,
            nodes: RefCell::new(BTreeMap::new()),
            constructed: Cell::new(0),
            plain_depth: Cell::new(0),
        })
    }

    /// The capability token of this session.
    #[must_use]
    pub fn token(&self) -> Token {
        self.token
    }

    /// Options this session was opened with.
    #[must_use]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// The raw buffer.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The source text the buffer's strings point into.
    #[must_use]
    pub fn source_text(&self) -> &Rc<str> {
        &self.source_text
    }

    /// Whether the producer reported the source as pure ASCII.
    #[must_use]
    pub fn source_is_ascii(&self) -> bool {
        self.source_is_ascii
    }

    /// Byte length of the source region at the start of the buffer.
    #[must_use]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Re-enters the session at `pos`, returning the view of type `T` there.
    ///
    /// Returns the same `Rc` as any live view of `T` already at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::ForeignContext`] if `token` was issued by another session, and
    /// [`Error::OutOfBounds`] if the view would not fit in the buffer.
    pub fn view_at<T: View>(self: &Rc<Self>, token: Token, pos: u32) -> Result<Rc<T>> {
        self.check(token)?;
        self.construct::<T>(pos)
    }

    /// Number of cached views still alive.
    #[must_use]
    pub fn live_views(&self) -> usize {
        self.nodes
            .borrow()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Number of views this session has constructed, including ones since
    /// dropped.
    #[must_use]
    pub fn views_constructed(&self) -> usize {
        self.constructed.get()
    }

    pub(crate) fn check(&self, token: Token) -> Result<()> {
        if token == self.token {
            Ok(())
        } else {
            Err(Error::ForeignContext)
        }
    }

    pub(crate) fn bytes(&self, pos: u32, len: u32) -> Result<&[u8]> {
        let out_of_bounds = || Error::OutOfBounds {
            offset: u64::from(pos),
            len: u64::from(len),
            size: self.buffer.len(),
        };
        let start = pos as usize;
        let end = start.checked_add(len as usize).ok_or_else(out_of_bounds)?;
        self.buffer.get(start..end).ok_or_else(out_of_bounds)
    }

    /// Checks that `count` elements of `stride` bytes starting at `pos` lie
    /// inside the buffer.
    pub(crate) fn check_run(&self, pos: u32, count: u32, stride: u32) -> Result<()> {
        let len = u64::from(count) * u64::from(stride);
        if u64::from(pos) + len <= self.buffer.len() as u64 {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                offset: u64::from(pos),
                len,
                size: self.buffer.len(),
            })
        }
    }

    fn array<const N: usize>(&self, pos: u32) -> Result<[u8; N]> {
        let mut out = [0; N];
        #[allow(clippy::cast_possible_truncation)]
        out.copy_from_slice(self.bytes(pos, N as u32)?);
        Ok(out)
    }

    pub(crate) fn read_u8(&self, pos: u32) -> Result<u8> {
        Ok(self.array::<1>(pos)?[0])
    }

    pub(crate) fn read_u32(&self, pos: u32) -> Result<u32> {
        self.array(pos).map(u32::from_le_bytes)
    }

    pub(crate) fn read_u64(&self, pos: u32) -> Result<u64> {
        self.array(pos).map(u64::from_le_bytes)
    }

    pub(crate) fn read_f64(&self, pos: u32) -> Result<f64> {
        self.array(pos).map(f64::from_le_bytes)
    }

    /// Returns the live `V` cached at `pos`, or builds, registers and returns
    /// a new one.
    pub(crate) fn intern<V: Any>(
        &self,
        pos: u32,
        make: impl FnOnce() -> Result<V>,
    ) -> Result<Rc<V>> {
        let key = (pos, TypeId::of::<V>());
        let hit = self.nodes.borrow().get(&key).and_then(Weak::upgrade);
        if let Some(view) = hit.and_then(|hit| hit.downcast::<V>().ok()) {
            return Ok(view);
        }
        let view = Rc::new(make()?);
        let erased: Rc<dyn Any> = view.clone();
        self.nodes.borrow_mut().insert(key, Rc::downgrade(&erased));
        self.constructed.set(self.constructed.get() + 1);
        Ok(view)
    }

    pub(crate) fn construct<T: View>(self: &Rc<Self>, pos: u32) -> Result<Rc<T>> {
        self.intern(pos, || {
            self.bytes(pos, T::SIZE)?;
            trace!(ty = T::NAME, pos, "constructing view");
            Ok(T::construct_at(pos, &DecodeCx::new(self, T::NAME)))
        })
    }

    /// Tracks `to_plain` recursion, failing once it passes `max_depth`.
    pub(crate) fn descend(self: &Rc<Self>) -> Result<DepthGuard> {
        let depth = self.plain_depth.get() + 1;
        if depth > self.options.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }
        self.plain_depth.set(depth);
        Ok(DepthGuard(Rc::clone(self)))
    }
}

pub(crate) struct DepthGuard(Rc<Ast>);

impl Drop for DepthGuard {
    fn drop(&mut self) {
        self.0.plain_depth.set(self.0.plain_depth.get().saturating_sub(1));
    }
}

/// Decodes the root record of `buffer`.
///
/// `root_offset` is the position of the [`RawTransferData`] record. Nothing
/// below the root is read until it is asked for.
///
/// # Errors
///
/// [`Error::OutOfBounds`] if the root record does not fit in the buffer.
///
/// # Examples
///
/// ```rust
/// use lazyast::builder::BufferBuilder;
///
/// let mut b = BufferBuilder::new("let x = 1;");
/// let root = b.empty_root();
/// let (buffer, source) = b.finish();
/// let data = lazyast::decode(buffer, source, true, 10, root).unwrap();
/// assert!(data.program().unwrap().body().unwrap().is_empty());
/// ```
pub fn decode(
    buffer: impl Into<Box<[u8]>>,
    source_text: impl Into<Rc<str>>,
    source_is_ascii: bool,
    source_byte_length: u32,
    root_offset: u32,
) -> Result<Rc<RawTransferData>> {
    decode_with_options(
        buffer,
        source_text,
        source_is_ascii,
        source_byte_length,
        root_offset,
        DecodeOptions::default(),
    )
}

/// [`decode`] with explicit [`DecodeOptions`].
///
/// # Errors
///
/// As for [`decode`].
pub fn decode_with_options(
    buffer: impl Into<Box<[u8]>>,
    source_text: impl Into<Rc<str>>,
    source_is_ascii: bool,
    source_byte_length: u32,
    root_offset: u32,
    options: DecodeOptions,
) -> Result<Rc<RawTransferData>> {
    let ast = Ast::new(
        buffer,
        source_text,
        source_is_ascii,
        source_byte_length,
        options,
    );
    RawTransferData::decode(root_offset, &DecodeCx::new(&ast, "root"))
}

/// [`decode_with_options`], taking the root offset from the metadata trailer
/// at the end of the buffer.
///
/// The trailer stores the root offset as a little-endian `u32` sixteen bytes
/// before the end of the buffer.
///
/// # Errors
///
/// [`Error::OutOfBounds`] if the buffer is too short to hold the trailer or
/// the root record.
pub fn decode_from_metadata(
    buffer: impl Into<Box<[u8]>>,
    source_text: impl Into<Rc<str>>,
    source_is_ascii: bool,
    source_byte_length: u32,
    options: DecodeOptions,
) -> Result<Rc<RawTransferData>> {
    let buffer = buffer.into();
    let size = buffer.len();
    let root_offset = size
        .checked_sub(METADATA_ROOT_FROM_END)
        .and_then(|at| buffer.get(at..at + 4))
        .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
        .map(u32::from_le_bytes)
        .ok_or(Error::OutOfBounds {
            offset: size.saturating_sub(METADATA_ROOT_FROM_END) as u64,
            len: 4,
            size,
        })?;
    decode_with_options(
        buffer,
        source_text,
        source_is_ascii,
        source_byte_length,
        root_offset,
        options,
    )
}
