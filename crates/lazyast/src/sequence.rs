//! Read-only views over `(pointer, length)` runs in the buffer.

use alloc::{
    boxed::Box,
    collections::BTreeMap,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};
use core::{
    cell::{OnceCell, RefCell},
    cmp::Ordering,
    fmt,
    ops::{Bound, RangeBounds},
};

use crate::{
    Ast, Error, Result, SequenceMutation,
    layout::{Decode, DecodeCx, Memo},
    value::Value,
};
#[allow(unused_imports)]
use crate::trace;

/// A key of a [`NodeVec`], as reported by [`NodeVec::keys`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeqKey {
    /// An element slot, or an annotation stored past the end.
    Index(usize),
    /// The length.
    Length,
    /// A named annotation.
    Named(String),
}

impl fmt::Display for SeqKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Length => f.write_str("length"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// What a key of a [`NodeVec`] allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Whether the slot can be assigned.
    pub writable: bool,
    /// Whether the slot is listed when iterating keys.
    pub enumerable: bool,
    /// Whether the slot can be removed or redefined.
    pub configurable: bool,
}

impl PropertyDescriptor {
    const ELEMENT: Self = Self {
        writable: false,
        enumerable: true,
        configurable: false,
    };
    const LENGTH: Self = Self {
        writable: false,
        enumerable: false,
        configurable: false,
    };
    const ANNOTATION: Self = Self {
        writable: true,
        enumerable: true,
        configurable: true,
    };
}

/// A fixed-length sequence of `T`s laid out back to back in the buffer.
///
/// Elements are decoded on first access and kept, so reading an index twice
/// yields the same value (the same `Rc` for views). Operations that copy
/// return plain `Vec`s; the sequence itself never changes length.
///
/// Assigning past the end or to a named key stores an annotation on the
/// side. Every other mutation fails with
/// [`Error::ImmutableSequenceMutation`].
pub struct NodeVec<T: Decode> {
    ast: Rc<Ast>,
    pos: u32,
    ptr: u32,
    elements: Box<[OnceCell<T::Output>]>,
    aux: RefCell<BTreeMap<SeqKey, Value>>,
}

impl<T: Decode> fmt::Debug for NodeVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeVec")
            .field("element", &T::NAME)
            .field("pos", &self.pos)
            .field("ptr", &self.ptr)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T: Decode> NodeVec<T> {
    /// The sequence whose header is at `pos`, shared with any live view of
    /// the same header.
    pub(crate) fn construct(pos: u32, cx: &DecodeCx<'_>) -> Result<Rc<Self>> {
        let ast = cx.ast();
        ast.intern(pos, || {
            let ptr = ast.read_u32(pos)?;
            let len = ast.read_u32(pos.saturating_add(8))?;
            ast.check_run(ptr, len, T::SIZE)?;
            trace!(element = T::NAME, pos, ptr, len, "constructing sequence");
            Ok(Self {
                ast: Rc::clone(ast),
                pos,
                ptr,
                elements: (0..len).map(|_| OnceCell::new()).collect(),
                aux: RefCell::new(BTreeMap::new()),
            })
        })
    }

    /// The session this sequence belongs to.
    #[must_use]
    pub fn ast(&self) -> &Rc<Ast> {
        &self.ast
    }

    /// Offset of the `(pointer, length)` header in the buffer.
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`, or `None` past the end.
    ///
    /// # Errors
    ///
    /// Fails if the buffer does not hold a valid `T` at that slot.
    pub fn get(&self, index: usize) -> Result<Option<T::Output>> {
        let Some(slot) = self.elements.get(index) else {
            return Ok(None);
        };
        slot.get_or_try(|| {
            #[allow(clippy::cast_possible_truncation)]
            let offset = (index as u32).saturating_mul(T::SIZE);
            T::decode(
                self.ptr.saturating_add(offset),
                &DecodeCx::new(&self.ast, T::NAME),
            )
        })
        .map(Some)
    }

    /// The element at `index`, counting from the end when negative.
    ///
    /// # Errors
    ///
    /// As for [`get`](Self::get).
    pub fn at(&self, index: isize) -> Result<Option<T::Output>> {
        let resolved = if index < 0 {
            self.len().checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        match resolved {
            Some(index) => self.get(index),
            None => Ok(None),
        }
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// As for [`get`](Self::get).
    pub fn first(&self) -> Result<Option<T::Output>> {
        self.get(0)
    }

    /// The last element.
    ///
    /// # Errors
    ///
    /// As for [`get`](Self::get).
    pub fn last(&self) -> Result<Option<T::Output>> {
        match self.len().checked_sub(1) {
            Some(index) => self.get(index),
            None => Ok(None),
        }
    }

    /// Decodes the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<T::Output>> + '_ {
        (0..self.len()).filter_map(|index| self.get(index).transpose())
    }

    /// All elements, in order.
    ///
    /// # Errors
    ///
    /// The first element that fails to decode.
    pub fn to_vec(&self) -> Result<Vec<T::Output>> {
        self.iter().collect()
    }

    /// Applies `f` to every element.
    ///
    /// # Errors
    ///
    /// As for [`to_vec`](Self::to_vec).
    pub fn map<U>(&self, mut f: impl FnMut(T::Output) -> U) -> Result<Vec<U>> {
        self.iter().map(|element| element.map(&mut f)).collect()
    }

    /// The elements `predicate` accepts.
    ///
    /// # Errors
    ///
    /// As for [`to_vec`](Self::to_vec).
    pub fn filter(&self, mut predicate: impl FnMut(&T::Output) -> bool) -> Result<Vec<T::Output>> {
        let mut out = Vec::new();
        for element in self.iter() {
            let element = element?;
            if predicate(&element) {
                out.push(element);
            }
        }
        Ok(out)
    }

    /// The first element `predicate` accepts. Stops decoding at the match.
    ///
    /// # Errors
    ///
    /// As for [`get`](Self::get), for any element up to the match.
    pub fn find(&self, mut predicate: impl FnMut(&T::Output) -> bool) -> Result<Option<T::Output>> {
        for element in self.iter() {
            let element = element?;
            if predicate(&element) {
                return Ok(Some(element));
            }
        }
        Ok(None)
    }

    /// Index of the first element `predicate` accepts.
    ///
    /// # Errors
    ///
    /// As for [`find`](Self::find).
    pub fn position(&self, mut predicate: impl FnMut(&T::Output) -> bool) -> Result<Option<usize>> {
        for (index, element) in self.iter().enumerate() {
            if predicate(&element?) {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Folds the elements into an accumulator, left to right.
    ///
    /// # Errors
    ///
    /// As for [`to_vec`](Self::to_vec).
    pub fn fold<B>(&self, init: B, mut f: impl FnMut(B, T::Output) -> B) -> Result<B> {
        let mut acc = init;
        for element in self.iter() {
            acc = f(acc, element?);
        }
        Ok(acc)
    }

    /// The elements in `range`, clamped to the sequence.
    ///
    /// # Errors
    ///
    /// As for [`get`](Self::get), for elements inside the range.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Vec<T::Output>> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);
        (start..end.max(start))
            .filter_map(|index| self.get(index).transpose())
            .collect()
    }

    /// The elements of `self` followed by those of `other`.
    ///
    /// # Errors
    ///
    /// [`Error::ForeignContext`] if `other` comes from another session, or
    /// any decode error.
    pub fn concat(&self, other: &NodeVec<T>) -> Result<Vec<T::Output>> {
        self.ast.check(other.ast.token())?;
        let mut out = self.to_vec()?;
        out.extend(other.to_vec()?);
        Ok(out)
    }

    /// The elements in reverse order.
    ///
    /// # Errors
    ///
    /// As for [`to_vec`](Self::to_vec).
    pub fn to_reversed(&self) -> Result<Vec<T::Output>> {
        let mut out = self.to_vec()?;
        out.reverse();
        Ok(out)
    }

    /// The elements, stably sorted by `compare`.
    ///
    /// # Errors
    ///
    /// As for [`to_vec`](Self::to_vec).
    pub fn to_sorted_by(
        &self,
        compare: impl FnMut(&T::Output, &T::Output) -> Ordering,
    ) -> Result<Vec<T::Output>> {
        let mut out = self.to_vec()?;
        out.sort_by(compare);
        Ok(out)
    }

    /// Eagerly decodes every element into a plain array.
    ///
    /// # Errors
    ///
    /// As for [`View::to_plain`](crate::View::to_plain).
    pub fn to_plain(&self) -> Result<Value> {
        self.iter()
            .map(|element| element.and_then(|element| T::plain(&element)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    /// Assigns to slot `index`.
    ///
    /// Past the end this stores an annotation and leaves the length alone.
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`] if `index` holds an element.
    pub fn set(&self, index: usize, value: Value) -> Result<()> {
        if index < self.len() {
            return Err(immutable(SequenceMutation::Set(index)));
        }
        self.aux.borrow_mut().insert(SeqKey::Index(index), value);
        Ok(())
    }

    /// Assigns to a key given by name: `"length"`, a decimal index, or
    /// anything else, which stores a named annotation.
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`] for `"length"` and for the index
    /// of an element.
    pub fn set_property(&self, name: &str, value: Value) -> Result<()> {
        if name == "length" {
            return Err(immutable(SequenceMutation::SetLen));
        }
        match parse_index(name) {
            Some(index) => self.set(index, value),
            None => {
                self.aux
                    .borrow_mut()
                    .insert(SeqKey::Named(name.to_string()), value);
                Ok(())
            }
        }
    }

    /// The annotation stored under `key`, if any.
    #[must_use]
    pub fn auxiliary(&self, key: &SeqKey) -> Option<Value> {
        self.aux.borrow().get(key).cloned()
    }

    /// Always fails: the length is fixed.
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`].
    pub fn set_len(&self, _len: usize) -> Result<()> {
        Err(immutable(SequenceMutation::SetLen))
    }

    /// Always fails: the length is fixed.
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`].
    pub fn push(&self, _value: Value) -> Result<()> {
        Err(immutable(SequenceMutation::Push))
    }

    /// Always fails: the length is fixed.
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`].
    pub fn pop(&self) -> Result<T::Output> {
        Err(immutable(SequenceMutation::Pop))
    }

    /// Always fails: the length is fixed.
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`].
    pub fn insert(&self, _index: usize, _value: Value) -> Result<()> {
        Err(immutable(SequenceMutation::Insert))
    }

    /// Always fails: the length is fixed.
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`].
    pub fn remove(&self, _index: usize) -> Result<T::Output> {
        Err(immutable(SequenceMutation::Remove))
    }

    /// Always fails: elements cannot move. See
    /// [`to_reversed`](Self::to_reversed).
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`].
    pub fn reverse(&self) -> Result<()> {
        Err(immutable(SequenceMutation::Reverse))
    }

    /// Always fails: elements cannot move. See
    /// [`to_sorted_by`](Self::to_sorted_by).
    ///
    /// # Errors
    ///
    /// [`Error::ImmutableSequenceMutation`].
    pub fn sort(&self) -> Result<()> {
        Err(immutable(SequenceMutation::Sort))
    }

    /// Element indices, then annotated indices, then `length`, then named
    /// annotations.
    #[must_use]
    pub fn keys(&self) -> Vec<SeqKey> {
        let aux = self.aux.borrow();
        let mut keys: Vec<SeqKey> = (0..self.len()).map(SeqKey::Index).collect();
        keys.extend(
            aux.keys()
                .filter(|key| matches!(key, SeqKey::Index(_)))
                .cloned(),
        );
        keys.push(SeqKey::Length);
        keys.extend(
            aux.keys()
                .filter(|key| matches!(key, SeqKey::Named(_)))
                .cloned(),
        );
        keys
    }

    /// What `key` allows, or `None` if the sequence has no such key.
    ///
    /// Element slots and the length are neither writable nor configurable.
    #[must_use]
    pub fn descriptor(&self, key: &SeqKey) -> Option<PropertyDescriptor> {
        match key {
            SeqKey::Index(index) if *index < self.len() => Some(PropertyDescriptor::ELEMENT),
            SeqKey::Length => Some(PropertyDescriptor::LENGTH),
            _ => self
                .aux
                .borrow()
                .contains_key(key)
                .then_some(PropertyDescriptor::ANNOTATION),
        }
    }
}

fn immutable(op: SequenceMutation) -> Error {
    Error::ImmutableSequenceMutation { op }
}

/// A canonical decimal index: no sign, no leading zeros.
fn parse_index(name: &str) -> Option<usize> {
    if name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}
