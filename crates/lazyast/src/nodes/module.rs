//! Import and export declarations.

use super::*;

node! {
    /// `import specifiers from source with attributes`
    pub struct ImportDeclaration(96) {
        child specifiers @ 8: Option<Seq<ImportDeclarationSpecifier>> = "specifiers",
        child source @ 32: StringLiteral = "source",
        field phase @ 88: Option<ImportPhase> = "phase",
        child attributes @ 80: Option<Boxed<WithClause>> = "attributes",
        field import_kind @ 89: ImportOrExportKind = "importKind",
    }
}

node! {
    /// `imported as local`
    pub struct ImportSpecifier(104) {
        child imported @ 8: ModuleExportName = "imported",
        child local @ 64: BindingIdentifier = "local",
        field import_kind @ 96: ImportOrExportKind = "importKind",
    }
}

node! {
    /// `local` in `import local from "source"`.
    pub struct ImportDefaultSpecifier(32) {
        child local @ 8: BindingIdentifier = "local",
    }
}

node! {
    /// `* as local`
    pub struct ImportNamespaceSpecifier(32) {
        child local @ 8: BindingIdentifier = "local",
    }
}

record! {
    /// `with { attributes }` on an import or export.
    pub struct WithClause(56) {
        child attributes @ 32: Seq<ImportAttribute> = "attributes",
    }
}

node! {
    /// `key: value` inside a [`WithClause`].
    pub struct ImportAttribute(112) {
        child key @ 8: ImportAttributeKey = "key",
        child value @ 64: StringLiteral = "value",
    }
}

node! {
    /// `export declaration` or `export { specifiers } from source`.
    pub struct ExportNamedDeclaration(112) {
        child declaration @ 8: Option<Declaration> = "declaration",
        child specifiers @ 24: Seq<ExportSpecifier> = "specifiers",
        child source @ 48: Option<StringLiteral> = "source",
        field export_kind @ 104: ImportOrExportKind = "exportKind",
        child attributes @ 96: Option<Boxed<WithClause>> = "attributes",
    }
}

node! {
    /// `export default declaration`
    pub struct ExportDefaultDeclaration(80) {
        child declaration @ 64: ExportDefaultDeclarationKind = "declaration",
    }
}

node! {
    /// `export * as exported from source`
    pub struct ExportAllDeclaration(128) {
        child exported @ 8: Option<ModuleExportName> = "exported",
        child source @ 64: StringLiteral = "source",
        child attributes @ 112: Option<Boxed<WithClause>> = "attributes",
        field export_kind @ 120: ImportOrExportKind = "exportKind",
    }
}

node! {
    /// `local as exported`
    pub struct ExportSpecifier(128) {
        child local @ 8: ModuleExportName = "local",
        child exported @ 64: ModuleExportName = "exported",
        field export_kind @ 120: ImportOrExportKind = "exportKind",
    }
}

tagged_union! {
    /// A specifier of an [`ImportDeclaration`].
    pub enum ImportDeclarationSpecifier {
        ImportSpecifier(Boxed<ImportSpecifier>) = 0,
        ImportDefaultSpecifier(Boxed<ImportDefaultSpecifier>) = 1,
        ImportNamespaceSpecifier(Boxed<ImportNamespaceSpecifier>) = 2,
    }
}

tagged_union! {
    /// The key of an [`ImportAttribute`].
    pub enum ImportAttributeKey {
        IdentifierName(IdentifierName) = 0,
        StringLiteral(StringLiteral) = 1,
    }
}

tagged_union! {
    /// What follows `export default`.
    pub enum ExportDefaultDeclarationKind {
        BooleanLiteral(Boxed<BooleanLiteral>) = 0,
        NullLiteral(Boxed<NullLiteral>) = 1,
        NumericLiteral(Boxed<NumericLiteral>) = 2,
        BigIntLiteral(Boxed<BigIntLiteral>) = 3,
        RegExpLiteral(Boxed<RegExpLiteral>) = 4,
        StringLiteral(Boxed<StringLiteral>) = 5,
        TemplateLiteral(Boxed<TemplateLiteral>) = 6,
        IdentifierReference(Boxed<IdentifierReference>) = 7,
        MetaProperty(Boxed<MetaProperty>) = 8,
        Super(Boxed<Super>) = 9,
        ArrayExpression(Boxed<ArrayExpression>) = 10,
        ArrowFunctionExpression(Boxed<ArrowFunctionExpression>) = 11,
        AssignmentExpression(Boxed<AssignmentExpression>) = 12,
        AwaitExpression(Boxed<AwaitExpression>) = 13,
        BinaryExpression(Boxed<BinaryExpression>) = 14,
        CallExpression(Boxed<CallExpression>) = 15,
        ChainExpression(Boxed<ChainExpression>) = 16,
        Class(Boxed<Class>) = 17,
        ConditionalExpression(Boxed<ConditionalExpression>) = 18,
        Function(Boxed<Function>) = 19,
        ImportExpression(Boxed<ImportExpression>) = 20,
        LogicalExpression(Boxed<LogicalExpression>) = 21,
        NewExpression(Boxed<NewExpression>) = 22,
        ObjectExpression(Boxed<ObjectExpression>) = 23,
        ParenthesizedExpression(Boxed<ParenthesizedExpression>) = 24,
        SequenceExpression(Boxed<SequenceExpression>) = 25,
        TaggedTemplateExpression(Boxed<TaggedTemplateExpression>) = 26,
        ThisExpression(Boxed<ThisExpression>) = 27,
        UnaryExpression(Boxed<UnaryExpression>) = 28,
        UpdateExpression(Boxed<UpdateExpression>) = 29,
        YieldExpression(Boxed<YieldExpression>) = 30,
        PrivateInExpression(Boxed<PrivateInExpression>) = 31,
        JSXElement(Boxed<JSXElement>) = 32,
        JSXFragment(Boxed<JSXFragment>) = 33,
        V8IntrinsicExpression(Boxed<V8IntrinsicExpression>) = 39,
        ComputedMemberExpression(Boxed<ComputedMemberExpression>) = 48,
        StaticMemberExpression(Boxed<StaticMemberExpression>) = 49,
        PrivateFieldExpression(Boxed<PrivateFieldExpression>) = 50,
        FunctionDeclaration(Boxed<Function>) = 64,
        ClassDeclaration(Boxed<Class>) = 65,
    }
}

tagged_union! {
    /// A name in an import or export specifier. String names are allowed.
    pub enum ModuleExportName(none = discriminant(0, 3)) {
        IdentifierName(IdentifierName) = 0,
        IdentifierReference(IdentifierReference) = 1,
        StringLiteral(StringLiteral) = 2,
    }
}

fieldless! {
    /// Phase modifier of an import, `import source x` or `import defer x`.
    pub enum ImportPhase(none = discriminant(0, 2)) {
        Source = 0 => "source",
        Defer = 1 => "defer",
    }
}

fieldless! {
    /// Whether an import or export is type-only.
    pub enum ImportOrExportKind {
        Value = 0 => "value",
        Type = 1 => "type",
    }
}
