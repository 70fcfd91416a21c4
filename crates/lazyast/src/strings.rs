//! String fields: a `(pointer, length)` pair that usually points into the
//! source text.

use alloc::{rc::Rc, string::String};
use core::{borrow::Borrow, cell::OnceCell, fmt, hash, ops::Deref};

use bstr::ByteSlice;

use crate::{
    Ast, Error, Result,
    layout::{Decode, DecodeCx, Sentinel},
    value::Value,
};

/// An immutable string decoded from the buffer.
///
/// When the source text is ASCII and the string lies inside it, a `Str` is a
/// window onto the shared source text and decoding copies nothing.
#[derive(Clone)]
pub struct Str {
    text: Rc<str>,
    start: u32,
    end: u32,
}

impl Str {
    /// A window onto `text`, or `None` if the range is out of bounds or
    /// splits a character.
    pub(crate) fn slice(text: &Rc<str>, start: u32, len: u32) -> Option<Self> {
        let end = start.checked_add(len)?;
        text.get(start as usize..end as usize)?;
        Some(Self {
            text: Rc::clone(text),
            start,
            end,
        })
    }

    /// The string as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }

    /// Whether this string shares its storage with `other`'s source text.
    #[must_use]
    pub fn shares_source(&self, source: &Rc<str>) -> bool {
        Rc::ptr_eq(&self.text, source)
    }
}

impl Default for Str {
    fn default() -> Self {
        Self::from("")
    }
}

impl From<&str> for Str {
    fn from(value: &str) -> Self {
        Self::from(Rc::<str>::from(value))
    }
}

impl From<String> for Str {
    fn from(value: String) -> Self {
        Self::from(Rc::<str>::from(value))
    }
}

impl From<Rc<str>> for Str {
    fn from(text: Rc<str>) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let end = text.len() as u32;
        Self {
            text,
            start: 0,
            end,
        }
    }
}

impl Deref for Str {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Str {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Str {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Str {}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for Str {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Str {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl hash::Hash for Str {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the string header at `pos`.
///
/// 1. ASCII source and a pointer inside it: a window onto the source text.
/// 2. Longer than the short-string threshold: bulk lossy UTF-8 decode.
/// 3. Otherwise byte by byte, handing the rest to the bulk decoder at the
///    first non-ASCII byte.
pub(crate) fn decode_str(pos: u32, ast: &Ast) -> Result<Str> {
    let len = ast.read_u32(pos.saturating_add(8))?;
    if len == 0 {
        return Ok(Str::default());
    }
    let ptr = ast.read_u32(pos)?;
    let options = ast.options();

    if ast.source_is_ascii() && options.ascii_fast_path && ptr < ast.source_len() {
        if let Some(window) = Str::slice(ast.source_text(), ptr, len) {
            return Ok(window);
        }
    }

    let bytes = ast.bytes(ptr, len)?;
    if bytes.len() > options.short_string_threshold {
        return Ok(Str::from(bytes.to_str_lossy().as_ref()));
    }

    let mut out = String::with_capacity(bytes.len());
    for (index, &byte) in bytes.iter().enumerate() {
        if byte < 0x80 {
            out.push(char::from(byte));
        } else {
            out.push_str(&bytes[index..].to_str_lossy());
            break;
        }
    }
    Ok(Str::from(out))
}

impl Decode for Str {
    type Output = Str;
    type Memo = OnceCell<Str>;
    const NAME: &'static str = "Str";
    const SIZE: u32 = 16;
    const NONE: Sentinel = Sentinel::EmptyStr;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<Str> {
        decode_str(pos, cx.ast())
    }

    fn plain(value: &Str) -> Result<Value> {
        Ok(Value::String(String::from(value.as_str())))
    }
}

/// The slice of `ast`'s source text covered by `start..end`.
pub(crate) fn source_slice(ast: &Ast, start: u32, end: u32) -> Result<Str> {
    let len = end.saturating_sub(start);
    Str::slice(ast.source_text(), start, len).ok_or(Error::OutOfBounds {
        offset: u64::from(start),
        len: u64::from(len),
        size: ast.source_text().len(),
    })
}
