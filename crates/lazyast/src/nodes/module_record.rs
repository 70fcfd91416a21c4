//! Module record: the import and export facts the parser collects alongside the tree.

use alloc::rc::Rc;
use core::cell::OnceCell;

use super::*;
use crate::{
    Result,
    layout::{Decode, DecodeCx},
    macros::unexpected,
    value::{Map, Value},
};

record! {
    /// Module-level import and export facts collected by the parser.
    pub struct EcmaScriptModule(104) {
        field has_module_syntax @ 96: bool = "hasModuleSyntax",
        field static_imports @ 0: Seq<StaticImport> = "staticImports",
        field static_exports @ 24: Seq<StaticExport> = "staticExports",
        field dynamic_imports @ 48: Seq<DynamicImport> = "dynamicImports",
        field import_metas @ 72: Seq<Span> = "importMetas",
    }
}

record! {
    /// One `import` declaration, as recorded in the module record.
    pub struct StaticImport(56) {
        field start @ 0: u32 = "start",
        field end @ 4: u32 = "end",
        field module_request @ 8: NameSpan = "moduleRequest",
        field entries @ 32: Seq<ImportEntry> = "entries",
    }
}

record! {
    /// One `export` declaration, as recorded in the module record.
    pub struct StaticExport(32) {
        field start @ 0: u32 = "start",
        field end @ 4: u32 = "end",
        field entries @ 8: Seq<ExportEntry> = "entries",
    }
}

record! {
    /// One binding imported by a [`StaticImport`].
    pub struct ImportEntry(96) {
        field import_name @ 32: ImportImportName = "importName",
        field local_name @ 64: NameSpan = "localName",
        field is_type @ 88: bool = "isType",
    }
}

record! {
    /// One name exported by a [`StaticExport`].
    pub struct ExportEntry(144) {
        field start @ 0: u32 = "start",
        field end @ 4: u32 = "end",
        field module_request @ 16: Option<NameSpan> = "moduleRequest",
        field import_name @ 40: ExportImportName = "importName",
        field export_name @ 72: ExportExportName = "exportName",
        field local_name @ 104: ExportLocalName = "localName",
        field is_type @ 136: bool = "isType",
    }
}

record! {
    /// An `import()` call site.
    pub struct DynamicImport(16) {
        field start @ 0: u32 = "start",
        field end @ 4: u32 = "end",
        field module_request @ 8: Span = "moduleRequest",
    }
}

record! {
    /// A name together with the source range it was read from.
    pub struct NameSpan(24, none = null_pointer(8)) {
        field value @ 8: Str = "value",
        field start @ 0: u32 = "start",
        field end @ 4: u32 = "end",
    }
}

/// Payloads a module-record name slot can carry.
trait NamePayload {
    fn parts(&self) -> Result<(Option<Str>, Span)>;
}

impl NamePayload for Rc<NameSpan> {
    fn parts(&self) -> Result<(Option<Str>, Span)> {
        Ok((Some(self.value()?), Span::new(self.start()?, self.end()?)))
    }
}

impl NamePayload for Span {
    fn parts(&self) -> Result<(Option<Str>, Span)> {
        Ok((None, *self))
    }
}

/// `{kind, name, start, end}`, with `null` for whatever the slot lacks.
fn slot_plain(kind: &str, name: Option<&Str>, span: Option<Span>) -> Value {
    let mut map = Map::new();
    map.insert("kind".into(), Value::from(kind));
    map.insert(
        "name".into(),
        name.map_or(Value::Null, |name| Value::from(name.as_str())),
    );
    map.insert("start".into(), span.map_or(Value::Null, |s| Value::from(s.start)));
    map.insert("end".into(), span.map_or(Value::Null, |s| Value::from(s.end)));
    Value::Object(map)
}

/// Declares a name slot: a tag byte at offset 0 and an optional name at
/// offset 8.
macro_rules! name_slot {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident($payload:ty) = $disc:literal => $kind:literal,)*
            ;
            $($unit:ident = $unit_disc:literal => $unit_kind:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub enum $name {
            $(
                #[doc = concat!("`", $kind, "`, with its source range.")]
                $variant(<$payload as Decode>::Output),
            )*
            $(
                #[doc = concat!("`", $unit_kind, "`.")]
                $unit,
            )*
        }

        impl $name {
            #[cfg(test)]
            pub(crate) const TAGS: &'static [u8] = &[$($disc,)* $($unit_disc,)*];

            /// The `kind` string of the plain form.
            #[must_use]
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $kind,)*
                    $(Self::$unit => $unit_kind,)*
                }
            }

            /// The name, when the slot holds one.
            ///
            /// # Errors
            ///
            /// Fails if the buffer does not hold a valid string here.
            pub fn name(&self) -> Result<Option<Str>> {
                match self {
                    $(Self::$variant(payload) => payload.parts().map(|(name, _)| name),)*
                    $(Self::$unit => Ok(None),)*
                }
            }

            /// The source range, when the slot has one.
            ///
            /// # Errors
            ///
            /// Fails on a truncated buffer.
            pub fn span(&self) -> Result<Option<Span>> {
                match self {
                    $(Self::$variant(payload) => payload.parts().map(|(_, span)| Some(span)),)*
                    $(Self::$unit => Ok(None),)*
                }
            }
        }

        impl Decode for $name {
            type Output = Self;
            type Memo = OnceCell<Self>;
            const NAME: &'static str = stringify!($name);
            const SIZE: u32 = 32;

            fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<Self> {
                match cx.ast().read_u8(pos)? {
                    $($disc => <$payload as Decode>::decode(pos.saturating_add(8), cx).map(Self::$variant),)*
                    $($unit_disc => Ok(Self::$unit),)*
                    value => Err(unexpected(Self::NAME, value)),
                }
            }

            fn plain(value: &Self) -> Result<Value> {
                match value {
                    $(Self::$variant(payload) => {
                        let (name, span) = payload.parts()?;
                        Ok(slot_plain($kind, name.as_ref(), Some(span)))
                    })*
                    $(Self::$unit => Ok(slot_plain($unit_kind, None, None)),)*
                }
            }
        }
    };
}

name_slot! {
    /// What an import entry takes from the imported module.
    pub enum ImportImportName {
        Name(NameSpan) = 0 => "Name",
        Default(Span) = 2 => "Default",
        ;
        NamespaceObject = 1 => "NamespaceObject",
    }
}

name_slot! {
    /// What an export entry takes from the module it re-exports.
    pub enum ExportImportName {
        Name(NameSpan) = 0 => "Name",
        ;
        All = 1 => "All",
        AllButDefault = 2 => "AllButDefault",
        Null = 3 => "None",
    }
}

name_slot! {
    /// The name an export entry is exported under.
    pub enum ExportExportName {
        Name(NameSpan) = 0 => "Name",
        Default(Span) = 1 => "Default",
        ;
        Null = 2 => "None",
    }
}

name_slot! {
    /// The local binding an export entry exports.
    pub enum ExportLocalName {
        Name(NameSpan) = 0 => "Name",
        Default(NameSpan) = 1 => "Default",
        ;
        Null = 2 => "None",
    }
}
