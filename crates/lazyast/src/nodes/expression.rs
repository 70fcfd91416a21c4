//! Expression nodes and the unions that select between them.

use super::*;

node! {
    /// An identifier in a non-binding, non-reference position (`a` in `x.a`).
    pub struct IdentifierName(24) {
        field name @ 8: Str = "name",
    }
}

node! {
    /// An identifier that refers to a binding.
    pub struct IdentifierReference(24) {
        field name @ 8: Str = "name",
    }
}

node! {
    /// An identifier that introduces a binding.
    pub struct BindingIdentifier(24, none = null_pointer(8)) {
        field name @ 8: Str = "name",
    }
}

node! {
    /// The label in `foo:`, `break foo` and `continue foo`.
    pub struct LabelIdentifier(24, none = null_pointer(8)) {
        field name @ 8: Str = "name",
    }
}

node! {
    /// `#name`
    pub struct PrivateIdentifier(24) {
        field name @ 8: Str = "name",
    }
}

node! {
    /// `this`
    pub struct ThisExpression(8) {
    }
}

node! {
    /// `super`
    pub struct Super(8) {
    }
}

node! {
    /// `[a, , ...b]`
    pub struct ArrayExpression(32) {
        child elements @ 8: Seq<ArrayExpressionElement> = "elements",
    }
}

node! {
    /// A hole in an array literal or array pattern.
    pub struct Elision(8) {
    }
}

node! {
    /// `{ a, b: c, ...d }`
    pub struct ObjectExpression(32) {
        child properties @ 8: Seq<ObjectPropertyKind> = "properties",
    }
}

node! {
    /// A property of an object literal, including methods and accessors.
    pub struct ObjectProperty(48) {
        field kind @ 40: PropertyKind = "kind",
        child key @ 8: PropertyKey = "key",
        child value @ 24: Expression = "value",
        field method @ 41: bool = "method",
        field shorthand @ 42: bool = "shorthand",
        field computed @ 43: bool = "computed",
    }
}

node! {
    /// `object[property]`
    pub struct ComputedMemberExpression(48) {
        child object @ 8: Expression = "object",
        child property @ 24: Expression = "property",
        field optional @ 40: bool = "optional",
    }
}

node! {
    /// `object.property`
    pub struct StaticMemberExpression(56) {
        child object @ 8: Expression = "object",
        child property @ 24: IdentifierName = "property",
        field optional @ 48: bool = "optional",
    }
}

node! {
    /// `object.#property`
    pub struct PrivateFieldExpression(56) {
        child object @ 8: Expression = "object",
        child property @ 24: PrivateIdentifier = "property",
        field optional @ 48: bool = "optional",
    }
}

node! {
    /// `callee(...arguments)`, optionally `callee?.()`.
    pub struct CallExpression(64) {
        child callee @ 8: Expression = "callee",
        child arguments @ 32: Seq<Argument> = "arguments",
        field optional @ 56: bool = "optional",
    }
}

node! {
    /// `new callee(...arguments)`
    pub struct NewExpression(56) {
        child callee @ 8: Expression = "callee",
        child arguments @ 32: Seq<Argument> = "arguments",
    }
}

node! {
    /// `new.target` or `import.meta`.
    pub struct MetaProperty(56) {
        child meta @ 8: IdentifierName = "meta",
        child property @ 32: IdentifierName = "property",
    }
}

node! {
    /// `...argument`
    pub struct SpreadElement(24) {
        child argument @ 8: Expression = "argument",
    }
}

node! {
    /// `++argument`, `argument--` and friends.
    pub struct UpdateExpression(32) {
        field operator @ 24: UpdateOperator = "operator",
        field prefix @ 25: bool = "prefix",
        child argument @ 8: SimpleAssignmentTarget = "argument",
    }
}

node! {
    /// `typeof argument`, `!argument` and friends.
    pub struct UnaryExpression(32) {
        field operator @ 24: UnaryOperator = "operator",
        child argument @ 8: Expression = "argument",
    }
}

node! {
    /// `left operator right` for arithmetic, comparison and bitwise operators.
    pub struct BinaryExpression(48) {
        child left @ 8: Expression = "left",
        field operator @ 40: BinaryOperator = "operator",
        child right @ 24: Expression = "right",
    }
}

node! {
    /// `#field in object`
    pub struct PrivateInExpression(48) {
        child left @ 8: PrivateIdentifier = "left",
        child right @ 32: Expression = "right",
    }
}

node! {
    /// `left || right`, `left && right` and `left ?? right`.
    pub struct LogicalExpression(48) {
        child left @ 8: Expression = "left",
        field operator @ 40: LogicalOperator = "operator",
        child right @ 24: Expression = "right",
    }
}

node! {
    /// `test ? consequent : alternate`
    pub struct ConditionalExpression(56) {
        child test @ 8: Expression = "test",
        child consequent @ 24: Expression = "consequent",
        child alternate @ 40: Expression = "alternate",
    }
}

node! {
    /// `left operator right` for `=` and the compound assignment operators.
    pub struct AssignmentExpression(48) {
        field operator @ 40: AssignmentOperator = "operator",
        child left @ 8: AssignmentTarget = "left",
        child right @ 24: Expression = "right",
    }
}

node! {
    /// `[a, b] = value`
    pub struct ArrayAssignmentTarget(32) {
        child elements @ 8: Seq<Option<AssignmentTargetMaybeDefault>> = "elements",
    }
}

node! {
    /// `({ a, b } = value)`
    pub struct ObjectAssignmentTarget(32) {
        child properties @ 8: Seq<AssignmentTargetProperty> = "properties",
    }
}

node! {
    /// `a = 1` inside an assignment target pattern.
    pub struct AssignmentTargetWithDefault(40) {
        child left @ 8: AssignmentTarget = "left",
        child right @ 24: Expression = "right",
    }
}

node! {
    /// `{ key = value }` shorthand in an object assignment target.
    pub struct AssignmentTargetPropertyIdentifier(56) {
        child key @ 8: IdentifierReference = "key",
        child value @ 40: Option<Expression> = "value",
    }
}

node! {
    /// `{ key: value }` in an object assignment target.
    pub struct AssignmentTargetPropertyProperty(48) {
        child key @ 8: PropertyKey = "key",
        child value @ 24: AssignmentTargetMaybeDefault = "value",
        field computed @ 40: bool = "computed",
    }
}

node! {
    /// `a, b, c`
    pub struct SequenceExpression(32) {
        child expressions @ 8: Seq<Expression> = "expressions",
    }
}

node! {
    /// `await argument`
    pub struct AwaitExpression(24) {
        child argument @ 8: Expression = "argument",
    }
}

node! {
    /// `yield argument` or `yield* argument`.
    pub struct YieldExpression(32) {
        field delegate @ 24: bool = "delegate",
        child argument @ 8: Option<Expression> = "argument",
    }
}

node! {
    /// The root of an optional chain, `a?.b.c`.
    pub struct ChainExpression(24) {
        child expression @ 8: ChainElement = "expression",
    }
}

node! {
    /// `(expression)`
    pub struct ParenthesizedExpression(24) {
        child expression @ 8: Expression = "expression",
    }
}

node! {
    /// `import(source, options)`
    pub struct ImportExpression(48) {
        child source @ 8: Expression = "source",
        child options @ 24: Option<Expression> = "options",
        field phase @ 40: Option<ImportPhase> = "phase",
    }
}

node! {
    /// `%Name(...arguments)`
    pub struct V8IntrinsicExpression(56) {
        child name @ 8: IdentifierName = "name",
        child arguments @ 32: Seq<Argument> = "arguments",
    }
}

tagged_union! {
    /// Any expression.
    pub enum Expression(none = discriminant(0, 51)) {
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
    }
}

tagged_union! {
    /// An element of an [`ArrayExpression`].
    pub enum ArrayExpressionElement {
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
        SpreadElement(Boxed<SpreadElement>) = 64,
        Elision(Elision) = 65,
    }
}

tagged_union! {
    /// A property of an [`ObjectExpression`].
    pub enum ObjectPropertyKind {
        ObjectProperty(Boxed<ObjectProperty>) = 0,
        SpreadElement(Boxed<SpreadElement>) = 1,
    }
}

tagged_union! {
    /// The key of a property, method or field.
    pub enum PropertyKey {
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
        IdentifierName(Boxed<IdentifierName>) = 64,
        PrivateIdentifier(Boxed<PrivateIdentifier>) = 65,
    }
}

tagged_union! {
    /// An argument of a call or `new` expression.
    pub enum Argument {
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
        SpreadElement(Boxed<SpreadElement>) = 64,
    }
}

tagged_union! {
    /// The left-hand side of an [`AssignmentExpression`].
    pub enum AssignmentTarget {
        IdentifierReference(Boxed<IdentifierReference>) = 0,
        ArrayAssignmentTarget(Boxed<ArrayAssignmentTarget>) = 8,
        ObjectAssignmentTarget(Boxed<ObjectAssignmentTarget>) = 9,
        ComputedMemberExpression(Boxed<ComputedMemberExpression>) = 48,
        StaticMemberExpression(Boxed<StaticMemberExpression>) = 49,
        PrivateFieldExpression(Boxed<PrivateFieldExpression>) = 50,
    }
}

tagged_union! {
    /// The operand of an [`UpdateExpression`].
    pub enum SimpleAssignmentTarget {
        IdentifierReference(Boxed<IdentifierReference>) = 0,
        ComputedMemberExpression(Boxed<ComputedMemberExpression>) = 48,
        StaticMemberExpression(Boxed<StaticMemberExpression>) = 49,
        PrivateFieldExpression(Boxed<PrivateFieldExpression>) = 50,
    }
}

tagged_union! {
    /// An element of an [`ArrayAssignmentTarget`].
    pub enum AssignmentTargetMaybeDefault(none = discriminant(0, 51)) {
        IdentifierReference(Boxed<IdentifierReference>) = 0,
        ArrayAssignmentTarget(Boxed<ArrayAssignmentTarget>) = 8,
        ObjectAssignmentTarget(Boxed<ObjectAssignmentTarget>) = 9,
        AssignmentTargetWithDefault(Boxed<AssignmentTargetWithDefault>) = 16,
        ComputedMemberExpression(Boxed<ComputedMemberExpression>) = 48,
        StaticMemberExpression(Boxed<StaticMemberExpression>) = 49,
        PrivateFieldExpression(Boxed<PrivateFieldExpression>) = 50,
    }
}

tagged_union! {
    /// A property of an [`ObjectAssignmentTarget`].
    pub enum AssignmentTargetProperty {
        AssignmentTargetPropertyIdentifier(Boxed<AssignmentTargetPropertyIdentifier>) = 0,
        AssignmentTargetPropertyProperty(Boxed<AssignmentTargetPropertyProperty>) = 1,
    }
}

tagged_union! {
    /// The expression wrapped by a [`ChainExpression`].
    pub enum ChainElement {
        CallExpression(Boxed<CallExpression>) = 0,
        ComputedMemberExpression(Boxed<ComputedMemberExpression>) = 48,
        StaticMemberExpression(Boxed<StaticMemberExpression>) = 49,
        PrivateFieldExpression(Boxed<PrivateFieldExpression>) = 50,
    }
}

fieldless! {
    /// How an [`ObjectProperty`] was written.
    pub enum PropertyKind {
        Init = 0 => "init",
        Get = 1 => "get",
        Set = 2 => "set",
    }
}
