//! Field decoders: how each Rust type maps onto bytes at a position in the
//! buffer, and how an absent optional value of that type is encoded.

use alloc::{rc::Rc, string::String};
use core::{cell::OnceCell, marker::PhantomData};

use crate::{
    Ast, Error, NodeVec, Result,
    kind::KindSet,
    value::{Map, Value},
    visit::Walker,
};

/// Everything a decoder needs besides the position: the session and the name
/// of the field being decoded, for error messages.
///
/// Only this crate can create one, which keeps view construction internal.
#[derive(Clone, Copy)]
pub struct DecodeCx<'a> {
    ast: &'a Rc<Ast>,
    field: &'static str,
}

impl<'a> DecodeCx<'a> {
    pub(crate) fn new(ast: &'a Rc<Ast>, field: &'static str) -> Self {
        Self { ast, field }
    }

    pub(crate) fn ast(&self) -> &'a Rc<Ast> {
        self.ast
    }

    pub(crate) fn field(&self) -> &'static str {
        self.field
    }
}

/// How an absent value of a type is encoded when it appears behind an
/// `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// Eight zero bytes at `offset`.
    NullPointer {
        /// Offset of the pointer word from the value's position.
        offset: u32,
    },
    /// The byte at `offset` holds `value`, which no real value uses there.
    Discriminant {
        /// Offset of the tag byte from the value's position.
        offset: u32,
        /// The reserved tag.
        value: u8,
    },
    /// A string with a null pointer word and a zero length.
    EmptyStr,
    /// The type cannot be optional.
    Unsupported,
}

/// A type that can be read out of the buffer.
///
/// Implemented by every view, union and fieldless enum, by the scalar types,
/// and by the [`Boxed`], [`Seq`] and `Option` wrappers that describe how a
/// field refers to its value.
pub trait Decode: 'static {
    /// What decoding produces.
    type Output: Clone;
    /// Per-view storage for a decoded field of this type.
    type Memo: Memo<Self::Output>;
    /// Type name, used in errors and logs.
    const NAME: &'static str;
    /// Bytes the value occupies inline.
    const SIZE: u32;
    /// Encoding of an absent value.
    const NONE: Sentinel = Sentinel::Unsupported;

    /// Reads the value at `pos`.
    ///
    /// # Errors
    ///
    /// Any decode error hit while reading.
    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<Self::Output>;

    /// Projects a decoded value into a plain [`Value`].
    ///
    /// # Errors
    ///
    /// Any decode error hit while reading descendants.
    fn plain(value: &Self::Output) -> Result<Value>;

    #[doc(hidden)]
    fn walk(_pos: u32, _walker: &mut Walker<'_, '_>) -> Result<()> {
        Ok(())
    }

    #[doc(hidden)]
    fn reach(_kinds: &mut KindSet) {}
}

/// Storage for a field that has been decoded once.
pub trait Memo<T>: Default {
    /// Returns the stored value, running `decode` and storing its result the
    /// first time.
    ///
    /// # Errors
    ///
    /// Whatever `decode` returns. Nothing is stored on error.
    fn get_or_try(&self, decode: impl FnOnce() -> Result<T>) -> Result<T>;
}

/// Fields that are cheaper to reread than to store.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unmemoized;

impl<T> Memo<T> for Unmemoized {
    fn get_or_try(&self, decode: impl FnOnce() -> Result<T>) -> Result<T> {
        decode()
    }
}

impl<T: Clone> Memo<T> for OnceCell<T> {
    fn get_or_try(&self, decode: impl FnOnce() -> Result<T>) -> Result<T> {
        if let Some(value) = self.get() {
            return Ok(value.clone());
        }
        let value = decode()?;
        Ok(self.get_or_init(|| value).clone())
    }
}

/// Whether the `T` at `pos` encodes an absent value.
pub(crate) fn is_absent<T: Decode>(pos: u32, ast: &Ast, field: &'static str) -> Result<bool> {
    match T::NONE {
        Sentinel::NullPointer { offset } => Ok(ast.read_u64(pos.saturating_add(offset))? == 0),
        Sentinel::Discriminant { offset, value } => Ok(ast.read_u8(pos.saturating_add(offset))? == value),
        Sentinel::EmptyStr => Ok(ast.read_u64(pos)? == 0 && ast.read_u32(pos.saturating_add(8))? == 0),
        Sentinel::Unsupported => Err(Error::OptionConvention {
            field,
            ty: T::NAME,
        }),
    }
}

impl Decode for u8 {
    type Output = u8;
    type Memo = Unmemoized;
    const NAME: &'static str = "u8";
    const SIZE: u32 = 1;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<u8> {
        cx.ast().read_u8(pos)
    }

    fn plain(value: &u8) -> Result<Value> {
        Ok(Value::Number(f64::from(*value)))
    }
}

impl Decode for u32 {
    type Output = u32;
    type Memo = Unmemoized;
    const NAME: &'static str = "u32";
    const SIZE: u32 = 4;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<u32> {
        cx.ast().read_u32(pos)
    }

    fn plain(value: &u32) -> Result<Value> {
        Ok(Value::Number(f64::from(*value)))
    }
}

impl Decode for f64 {
    type Output = f64;
    type Memo = Unmemoized;
    const NAME: &'static str = "f64";
    const SIZE: u32 = 8;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<f64> {
        cx.ast().read_f64(pos)
    }

    fn plain(value: &f64) -> Result<Value> {
        Ok(Value::Number(*value))
    }
}

impl Decode for bool {
    type Output = bool;
    type Memo = Unmemoized;
    const NAME: &'static str = "bool";
    const SIZE: u32 = 1;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<bool> {
        Ok(cx.ast().read_u8(pos)? == 1)
    }

    fn plain(value: &bool) -> Result<Value> {
        Ok(Value::Boolean(*value))
    }
}

/// A source range in bytes.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Offset of the first byte.
    pub start: u32,
    /// Offset one past the last byte.
    pub end: u32,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length in bytes, zero for an inverted span.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub(crate) fn read(pos: u32, ast: &Ast) -> Result<Self> {
        Ok(Self {
            start: ast.read_u32(pos)?,
            end: ast.read_u32(pos.saturating_add(4))?,
        })
    }

    pub(crate) fn insert_into(self, map: &mut Map) {
        map.insert(String::from("start"), Value::Number(f64::from(self.start)));
        map.insert(String::from("end"), Value::Number(f64::from(self.end)));
    }
}

impl Decode for Span {
    type Output = Span;
    type Memo = Unmemoized;
    const NAME: &'static str = "Span";
    const SIZE: u32 = 8;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<Span> {
        Span::read(pos, cx.ast())
    }

    fn plain(value: &Span) -> Result<Value> {
        let mut map = Map::new();
        value.insert_into(&mut map);
        Ok(Value::Object(map))
    }
}

/// A field holding a 32-bit pointer to a `T` stored elsewhere in the buffer.
#[derive(Debug)]
pub struct Boxed<T>(PhantomData<T>);

impl<T: Decode> Decode for Boxed<T> {
    type Output = T::Output;
    type Memo = OnceCell<T::Output>;
    const NAME: &'static str = T::NAME;
    const SIZE: u32 = 8;
    const NONE: Sentinel = Sentinel::NullPointer { offset: 0 };

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<T::Output> {
        T::decode(cx.ast().read_u32(pos)?, cx)
    }

    fn plain(value: &T::Output) -> Result<Value> {
        T::plain(value)
    }

    fn walk(pos: u32, walker: &mut Walker<'_, '_>) -> Result<()> {
        if !walker.reaches::<T>() {
            return Ok(());
        }
        let target = walker.ast().read_u32(pos)?;
        T::walk(target, walker)
    }

    fn reach(kinds: &mut KindSet) {
        T::reach(kinds);
    }
}

/// A field holding a `(pointer, length)` header for a run of `T`s.
#[derive(Debug)]
pub struct Seq<T>(PhantomData<T>);

impl<T: Decode> Decode for Seq<T> {
    type Output = Rc<NodeVec<T>>;
    type Memo = OnceCell<Rc<NodeVec<T>>>;
    const NAME: &'static str = "Vec";
    const SIZE: u32 = 24;
    const NONE: Sentinel = Sentinel::NullPointer { offset: 0 };

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<Rc<NodeVec<T>>> {
        NodeVec::construct(pos, cx)
    }

    fn plain(value: &Rc<NodeVec<T>>) -> Result<Value> {
        value.to_plain()
    }

    fn walk(pos: u32, walker: &mut Walker<'_, '_>) -> Result<()> {
        if !walker.reaches::<T>() {
            return Ok(());
        }
        let ast = walker.ast();
        let ptr = ast.read_u32(pos)?;
        let len = ast.read_u32(pos.saturating_add(8))?;
        ast.check_run(ptr, len, T::SIZE)?;
        for index in 0..len {
            T::walk(ptr.saturating_add(index * T::SIZE), walker)?;
        }
        Ok(())
    }

    fn reach(kinds: &mut KindSet) {
        T::reach(kinds);
    }
}

impl<T: Decode> Decode for Option<T> {
    type Output = Option<T::Output>;
    type Memo = OnceCell<Option<T::Output>>;
    const NAME: &'static str = T::NAME;
    const SIZE: u32 = T::SIZE;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<Option<T::Output>> {
        if is_absent::<T>(pos, cx.ast(), cx.field())? {
            Ok(None)
        } else {
            T::decode(pos, cx).map(Some)
        }
    }

    fn plain(value: &Option<T::Output>) -> Result<Value> {
        value.as_ref().map_or(Ok(Value::Null), T::plain)
    }

    fn walk(pos: u32, walker: &mut Walker<'_, '_>) -> Result<()> {
        if !walker.reaches::<T>() || is_absent::<T>(pos, walker.ast(), T::NAME)? {
            return Ok(());
        }
        T::walk(pos, walker)
    }

    fn reach(kinds: &mut KindSet) {
        T::reach(kinds);
    }
}
