//! Hand assembly of buffers in the producer's layout.
//!
//! The source text sits at offset 0. Every allocation after it is 8-byte
//! aligned and zero-filled. Pointers are written as 64-bit words whose high
//! half is a fixed non-zero base, so a pointer to offset 0 is still distinct
//! from a null pointer; readers only use the low half.
//!
//! ```rust
//! use lazyast::builder::BufferBuilder;
//!
//! let mut b = BufferBuilder::new("a;");
//! let ident = b.node(24, 0, 1);
//! b.source_str(ident + 8, 0, 1);
//! let stmt = b.node(24, 0, 2);
//! b.union(stmt + 8, 7, ident); // Expression::IdentifierReference
//! let root = b.program(0, 2, &[(6, stmt)]); // Statement::ExpressionStatement
//! let (buffer, source) = b.finish();
//!
//! let data = lazyast::decode(buffer, source, true, 2, root).unwrap();
//! let body = data.program().unwrap().body().unwrap();
//! assert_eq!(body.len(), 1);
//! ```

use alloc::{string::String, vec::Vec};

/// High half of every pointer word.
const POINTER_BASE: u64 = 1 << 32;

const ALIGN: usize = 8;

/// Size of the trailer [`finish`](BufferBuilder::finish) appends.
pub const METADATA_SIZE: u32 = 16;

/// Size of the root record.
pub const ROOT_SIZE: u32 = 280;

/// Assembles a buffer.
#[derive(Debug, Clone)]
pub struct BufferBuilder {
    buf: Vec<u8>,
    source: String,
    root: Option<u32>,
}

impl BufferBuilder {
    /// Starts a buffer holding `source` at offset 0.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut buf = Vec::with_capacity(source.len() + 512);
        buf.extend_from_slice(source.as_bytes());
        let mut builder = Self {
            buf,
            source: String::from(source),
            root: None,
        };
        builder.pad();
        builder
    }

    /// Byte length of the source text.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Current length of the buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn len(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Whether nothing has been written, not even source text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn pad(&mut self) {
        let padded = self.buf.len().next_multiple_of(ALIGN);
        self.buf.resize(padded, 0);
    }

    /// Reserves `size` zeroed bytes and returns their offset.
    pub fn alloc(&mut self, size: u32) -> u32 {
        self.pad();
        let at = self.len();
        self.buf.resize(self.buf.len() + size as usize, 0);
        at
    }

    /// Reserves a node of `size` bytes and writes its span.
    pub fn node(&mut self, size: u32, start: u32, end: u32) -> u32 {
        let at = self.alloc(size);
        self.span(at, start, end);
        at
    }

    /// Writes `bytes` at `pos`, growing the buffer if needed.
    pub fn bytes(&mut self, pos: u32, bytes: &[u8]) {
        let start = pos as usize;
        let end = start + bytes.len();
        if self.buf.len() < end {
            self.buf.resize(end, 0);
        }
        self.buf[start..end].copy_from_slice(bytes);
    }

    /// Writes a byte.
    pub fn u8(&mut self, pos: u32, value: u8) {
        self.bytes(pos, &[value]);
    }

    /// Writes a little-endian `u32`.
    pub fn u32(&mut self, pos: u32, value: u32) {
        self.bytes(pos, &value.to_le_bytes());
    }

    /// Writes a little-endian `u64`.
    pub fn u64(&mut self, pos: u32, value: u64) {
        self.bytes(pos, &value.to_le_bytes());
    }

    /// Writes a little-endian `f64`.
    pub fn f64(&mut self, pos: u32, value: f64) {
        self.bytes(pos, &value.to_le_bytes());
    }

    /// Writes a boolean as `0` or `1`.
    pub fn bool(&mut self, pos: u32, value: bool) {
        self.u8(pos, u8::from(value));
    }

    /// Writes a span: `start` at `pos`, `end` at `pos + 4`.
    pub fn span(&mut self, pos: u32, start: u32, end: u32) {
        self.u32(pos, start);
        self.u32(pos + 4, end);
    }

    /// Writes a pointer to `target`.
    pub fn pointer(&mut self, pos: u32, target: u32) {
        self.u64(pos, POINTER_BASE | u64::from(target));
    }

    /// Writes a union: the tag byte at `pos` and a pointer to `target` at
    /// `pos + 8`.
    pub fn union(&mut self, pos: u32, tag: u8, target: u32) {
        self.u8(pos, tag);
        self.pointer(pos + 8, target);
    }

    /// Writes a sequence header for `len` elements at `ptr`.
    pub fn vec(&mut self, pos: u32, ptr: u32, len: u32) {
        self.pointer(pos, ptr);
        self.u32(pos + 8, len);
        self.u32(pos + 16, len);
    }

    /// Allocates `len` elements of `stride` bytes, writes the sequence header
    /// at `pos`, and returns the offset of the first element.
    pub fn seq(&mut self, pos: u32, stride: u32, len: u32) -> u32 {
        let ptr = self.alloc(stride * len);
        self.vec(pos, ptr, len);
        ptr
    }

    /// Allocates a run of unions and fills it with `(tag, target)` pairs.
    pub fn union_seq(&mut self, pos: u32, items: &[(u8, u32)]) {
        #[allow(clippy::cast_possible_truncation)]
        let ptr = self.seq(pos, 16, items.len() as u32);
        for (index, (tag, target)) in (0u32..).zip(items) {
            self.union(ptr + index * 16, *tag, *target);
        }
    }

    /// Writes a string header pointing at `start..end` of the source text.
    pub fn source_str(&mut self, pos: u32, start: u32, end: u32) {
        self.pointer(pos, start);
        self.u32(pos + 8, end - start);
    }

    /// Appends `bytes` after everything written so far and writes a string
    /// header for them. Empty strings point at the source.
    pub fn raw_str(&mut self, pos: u32, bytes: &[u8]) {
        if bytes.is_empty() {
            self.pointer(pos, 0);
            self.u32(pos + 8, 0);
            return;
        }
        #[allow(clippy::cast_possible_truncation)]
        let at = self.alloc(bytes.len() as u32);
        self.bytes(at, bytes);
        self.pointer(pos, at);
        #[allow(clippy::cast_possible_truncation)]
        self.u32(pos + 8, bytes.len() as u32);
    }

    /// [`raw_str`](Self::raw_str) for UTF-8 text.
    pub fn str(&mut self, pos: u32, text: &str) {
        self.raw_str(pos, text.as_bytes());
    }

    /// Writes the root record with a program spanning `start..end` whose body
    /// holds the given `(tag, statement)` pairs, and returns the root offset.
    pub fn program(&mut self, start: u32, end: u32, body: &[(u8, u32)]) -> u32 {
        let root = self.alloc(ROOT_SIZE);
        self.span(root, start, end);
        self.u8(root + 124 + 1, 1);
        self.union_seq(root + 96, body);
        self.root = Some(root);
        root
    }

    /// A root record with an empty program spanning the whole source.
    pub fn empty_root(&mut self) -> u32 {
        let end = self.source_len();
        self.program(0, end, &[])
    }

    /// The source text and the buffer with the metadata trailer appended.
    ///
    /// The trailer holds the offset of the last root written, if any.
    #[must_use]
    pub fn finish(mut self) -> (Vec<u8>, String) {
        let trailer = self.alloc(METADATA_SIZE);
        if let Some(root) = self.root {
            self.u32(trailer, root);
        }
        (self.buf, self.source)
    }
}
