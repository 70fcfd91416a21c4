//! Declaration macros for the buffer schema.
//!
//! Every node type is declared once as a list of `role name @ offset: Layout =
//! "key"` lines. `child` fields are walked by the visitor in declaration
//! order; `field` fields are only decoded on request. The layout type says how
//! the bytes at the offset are read (`Boxed<T>` follows a pointer, `Seq<T>` is
//! a `(pointer, length)` run, `Option<T>` checks `T`'s absent encoding).

use crate::Error;
#[allow(unused_imports)]
use crate::debug;

pub(crate) fn unexpected(union: &'static str, value: u8) -> Error {
    debug!(union, value, "unexpected discriminant");
    Error::UnexpectedDiscriminant { union, value }
}

macro_rules! sentinel {
    () => {
        $crate::layout::Sentinel::Unsupported
    };
    (null_pointer($offset:literal)) => {
        $crate::layout::Sentinel::NullPointer { offset: $offset }
    };
    (discriminant($offset:literal, $value:literal)) => {
        $crate::layout::Sentinel::Discriminant {
            offset: $offset,
            value: $value,
        }
    };
}

macro_rules! walk_child {
    (child, $ty:ty, $pos:expr, $walker:expr) => {
        <$ty as $crate::layout::Decode>::walk($pos, $walker)?;
    };
    (field, $ty:ty, $pos:expr, $walker:expr) => {};
}

macro_rules! reach_child {
    (child, $ty:ty, $kinds:expr) => {
        <$ty as $crate::layout::Decode>::reach($kinds);
    };
    (field, $ty:ty, $kinds:expr) => {};
}

macro_rules! visit_keys {
    ([$($out:literal),*]) => {
        &[$($out),*]
    };
    ([$($out:literal),*] child $key:literal $(, $($rest:tt)*)?) => {
        $crate::macros::visit_keys!([$($out,)* $key] $($($rest)*)?)
    };
    ([$($out:literal),*] field $key:literal $(, $($rest:tt)*)?) => {
        $crate::macros::visit_keys!([$($out),*] $($($rest)*)?)
    };
}

macro_rules! plain_tag {
    (node, $view:expr, $map:expr) => {
        if !$map.contains_key("type") {
            $map.insert(
                ::alloc::string::String::from("type"),
                $crate::value::Value::String(::alloc::string::String::from(
                    <Self as $crate::layout::Decode>::NAME,
                )),
            );
        }
        $crate::view::Node::span($view)?.insert_into(&mut $map);
    };
    (record, $view:expr, $map:expr) => {};
}

macro_rules! walk_view {
    (node, $pos:expr, $walker:expr, $($role:ident $offset:literal $ty:ty),*) => {
        $walker.node::<Self>($pos, |walker| {
            $($crate::macros::walk_child!($role, $ty, $pos.saturating_add($offset), walker);)*
            Ok(())
        })
    };
    (record, $pos:expr, $walker:expr, $($role:ident $offset:literal $ty:ty),*) => {{
        if !$walker.reaches::<Self>() {
            return Ok(());
        }
        $walker.ast().bytes($pos, <Self as $crate::layout::Decode>::SIZE)?;
        $($crate::macros::walk_child!($role, $ty, $pos.saturating_add($offset), $walker);)*
        Ok(())
    }};
}

macro_rules! reach_view {
    (node, $kinds:expr, $($role:ident $ty:ty),*) => {
        $kinds.insert(<Self as $crate::view::Node>::KIND);
    };
    (record, $kinds:expr, $($role:ident $ty:ty),*) => {
        $($crate::macros::reach_child!($role, $ty, $kinds);)*
    };
}

/// Shared expansion of [`node!`] and [`record!`].
macro_rules! view_struct {
    (
        $class:ident;
        $(#[$meta:meta])*
        pub struct $name:ident($size:literal $(, none = $none:ident($($arg:literal),*))?) {
            $($role:ident $field:ident @ $offset:literal : $ty:ty = $key:literal,)*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            pos: u32,
            ast: ::alloc::rc::Rc<$crate::Ast>,
            $($field: <$ty as $crate::layout::Decode>::Memo,)*
        }

        impl $name {
            $(
                #[doc = concat!("Decodes the `", $key, "` field.")]
                ///
                /// # Errors
                ///
                /// Fails if the buffer does not hold a valid value here.
                pub fn $field(&self) -> $crate::Result<<$ty as $crate::layout::Decode>::Output> {
                    $crate::layout::Memo::get_or_try(&self.$field, || {
                        <$ty as $crate::layout::Decode>::decode(
                            self.pos.saturating_add($offset),
                            &$crate::layout::DecodeCx::new(&self.ast, $key),
                        )
                    })
                }
            )*

            #[allow(unused_variables, clippy::unnecessary_wraps)]
            fn plain_fields(&self, map: &mut $crate::value::Map) -> $crate::Result<()> {
                $(
                    map.insert(
                        ::alloc::string::String::from($key),
                        <$ty as $crate::layout::Decode>::plain(&self.$field()?)?,
                    );
                )*
                Ok(())
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("pos", &self.pos)
                    .finish_non_exhaustive()
            }
        }

        impl $crate::view::View for $name {
            fn construct_at(pos: u32, cx: &$crate::layout::DecodeCx<'_>) -> Self {
                Self {
                    pos,
                    ast: ::alloc::rc::Rc::clone(cx.ast()),
                    $($field: ::core::default::Default::default(),)*
                }
            }

            fn pos(&self) -> u32 {
                self.pos
            }

            fn ast(&self) -> &::alloc::rc::Rc<$crate::Ast> {
                &self.ast
            }

            fn to_plain(&self) -> $crate::Result<$crate::value::Value> {
                let _depth = self.ast.descend()?;
                let mut map = $crate::value::Map::new();
                self.plain_fields(&mut map)?;
                $crate::macros::plain_tag!($class, self, map);
                Ok($crate::value::Value::Object(map))
            }
        }

        impl $crate::layout::Decode for $name {
            type Output = ::alloc::rc::Rc<Self>;
            type Memo = ::core::cell::OnceCell<::alloc::rc::Rc<Self>>;
            const NAME: &'static str = stringify!($name);
            const SIZE: u32 = $size;
            const NONE: $crate::layout::Sentinel = $crate::macros::sentinel!($($none($($arg),*))?);

            fn decode(
                pos: u32,
                cx: &$crate::layout::DecodeCx<'_>,
            ) -> $crate::Result<::alloc::rc::Rc<Self>> {
                cx.ast().construct::<Self>(pos)
            }

            fn plain(value: &::alloc::rc::Rc<Self>) -> $crate::Result<$crate::value::Value> {
                $crate::view::View::to_plain(&**value)
            }

            #[allow(unused_variables)]
            fn walk(pos: u32, walker: &mut $crate::visit::Walker<'_, '_>) -> $crate::Result<()> {
                $crate::macros::walk_view!($class, pos, walker, $($role $offset $ty),*)
            }

            #[allow(unused_variables)]
            fn reach(kinds: &mut $crate::kind::KindSet) {
                $crate::macros::reach_view!($class, kinds, $($role $ty),*);
            }
        }
    };
}

/// Declares a node: a view with a kind tag and a span at offsets 0 and 4.
macro_rules! node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($($head:tt)*) {
            $($role:ident $field:ident @ $offset:literal : $ty:ty = $key:literal,)*
        }
    ) => {
        $crate::macros::view_struct! {
            node;
            $(#[$meta])*
            pub struct $name($($head)*) {
                $($role $field @ $offset: $ty = $key,)*
            }
        }

        impl $crate::view::Node for $name {
            const KIND: $crate::kind::NodeKind = $crate::kind::NodeKind::$name;
            const VISIT_KEYS: &'static [&'static str] =
                $crate::macros::visit_keys!([] $($role $key),*);

            fn into_node(self: ::alloc::rc::Rc<Self>) -> $crate::kind::AstNode {
                $crate::kind::AstNode::$name(self)
            }

            #[allow(unused_variables)]
            fn reach_children(kinds: &mut $crate::kind::KindSet) {
                $($crate::macros::reach_child!($role, $ty, kinds);)*
            }
        }
    };
}

/// Declares a record: a view with no kind tag of its own.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($($head:tt)*) {
            $($role:ident $field:ident @ $offset:literal : $ty:ty = $key:literal,)*
        }
    ) => {
        $crate::macros::view_struct! {
            record;
            $(#[$meta])*
            pub struct $name($($head)*) {
                $($role $field @ $offset: $ty = $key,)*
            }
        }
    };
}

/// Declares a union: a tag byte at offset 0 and the payload at offset 8.
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident $((none = $none:ident($($arg:literal),*)))? {
            $($variant:ident($ty:ty) = $disc:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub enum $name {
            $(
                #[doc = concat!("Tag ", stringify!($disc), ": [`", stringify!($variant), "`].")]
                $variant(<$ty as $crate::layout::Decode>::Output),
            )*
        }

        impl $name {
            #[cfg(test)]
            pub(crate) const TAGS: &'static [u8] = &[$($disc),*];

            /// The payload as an [`AstNode`](crate::AstNode).
            #[must_use]
            pub fn node(&self) -> $crate::kind::AstNode {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::view::Node::into_node(::alloc::rc::Rc::clone(inner))
                    })*
                }
            }

            /// Kind of the payload.
            #[must_use]
            pub fn node_kind(&self) -> $crate::kind::NodeKind {
                self.node().kind()
            }

            /// Eagerly decodes the payload and everything below it.
            ///
            /// # Errors
            ///
            /// As for [`View::to_plain`](crate::View::to_plain).
            pub fn to_plain(&self) -> $crate::Result<$crate::value::Value> {
                <Self as $crate::layout::Decode>::plain(self)
            }
        }

        impl $crate::layout::Decode for $name {
            type Output = Self;
            type Memo = ::core::cell::OnceCell<Self>;
            const NAME: &'static str = stringify!($name);
            const SIZE: u32 = {
                let mut payload = 0;
                $(
                    if <$ty as $crate::layout::Decode>::SIZE > payload {
                        payload = <$ty as $crate::layout::Decode>::SIZE;
                    }
                )*
                8 + payload
            };
            const NONE: $crate::layout::Sentinel = $crate::macros::sentinel!($($none($($arg),*))?);

            fn decode(pos: u32, cx: &$crate::layout::DecodeCx<'_>) -> $crate::Result<Self> {
                match cx.ast().read_u8(pos)? {
                    $($disc => <$ty as $crate::layout::Decode>::decode(pos.saturating_add(8), cx)
                        .map(Self::$variant),)*
                    value => Err($crate::macros::unexpected(Self::NAME, value)),
                }
            }

            fn plain(value: &Self) -> $crate::Result<$crate::value::Value> {
                match value {
                    $(Self::$variant(inner) => <$ty as $crate::layout::Decode>::plain(inner),)*
                }
            }

            fn walk(pos: u32, walker: &mut $crate::visit::Walker<'_, '_>) -> $crate::Result<()> {
                if !walker.reaches::<Self>() {
                    return Ok(());
                }
                match walker.ast().read_u8(pos)? {
                    $($disc => <$ty as $crate::layout::Decode>::walk(pos.saturating_add(8), walker),)*
                    value => Err($crate::macros::unexpected(Self::NAME, value)),
                }
            }

            fn reach(kinds: &mut $crate::kind::KindSet) {
                $(<$ty as $crate::layout::Decode>::reach(kinds);)*
            }
        }
    };
}

/// Declares a one-byte enum with no payload, and its source spelling.
macro_rules! fieldless {
    (
        $(#[$meta:meta])*
        pub enum $name:ident $((none = $none:ident($($arg:literal),*)))? {
            $($variant:ident = $disc:literal => $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant = $disc,
            )*
        }

        impl $name {
            /// The spelling used in plain values.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::layout::Decode for $name {
            type Output = Self;
            type Memo = $crate::layout::Unmemoized;
            const NAME: &'static str = stringify!($name);
            const SIZE: u32 = 1;
            const NONE: $crate::layout::Sentinel = $crate::macros::sentinel!($($none($($arg),*))?);

            fn decode(pos: u32, cx: &$crate::layout::DecodeCx<'_>) -> $crate::Result<Self> {
                match cx.ast().read_u8(pos)? {
                    $($disc => Ok(Self::$variant),)*
                    value => Err($crate::macros::unexpected(Self::NAME, value)),
                }
            }

            fn plain(value: &Self) -> $crate::Result<$crate::value::Value> {
                Ok($crate::value::Value::String(::alloc::string::String::from(value.as_str())))
            }
        }
    };
}

pub(crate) use {
    fieldless, node, plain_tag, reach_child, reach_view, record, sentinel, tagged_union,
    view_struct, visit_keys, walk_child, walk_view,
};
