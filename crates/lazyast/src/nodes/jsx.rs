//! JSX elements, fragments and attributes.

use super::*;

node! {
    /// `<name ...attributes>children</name>`
    pub struct JSXElement(48) {
        child opening_element @ 8: Boxed<JSXOpeningElement> = "openingElement",
        child children @ 16: Seq<JSXChild> = "children",
        child closing_element @ 40: Option<Boxed<JSXClosingElement>> = "closingElement",
    }
}

node! {
    /// `<name ...attributes>`
    pub struct JSXOpeningElement(56) {
        child name @ 8: JSXElementName = "name",
        child attributes @ 32: Seq<JSXAttributeItem> = "attributes",
    }
}

node! {
    /// `</name>`
    pub struct JSXClosingElement(24) {
        child name @ 8: JSXElementName = "name",
    }
}

node! {
    /// `<>children</>`
    pub struct JSXFragment(48) {
        child opening_fragment @ 8: JSXOpeningFragment = "openingFragment",
        child children @ 16: Seq<JSXChild> = "children",
        child closing_fragment @ 40: JSXClosingFragment = "closingFragment",
    }
}

node! {
    /// `<>`
    pub struct JSXOpeningFragment(8) {
    }
}

node! {
    /// `</>`
    pub struct JSXClosingFragment(8) {
    }
}

node! {
    /// `namespace:name`
    pub struct JSXNamespacedName(56) {
        child namespace @ 8: JSXIdentifier = "namespace",
        child name @ 32: JSXIdentifier = "name",
    }
}

node! {
    /// `object.property` in an element name.
    pub struct JSXMemberExpression(48) {
        child object @ 8: JSXMemberExpressionObject = "object",
        child property @ 24: JSXIdentifier = "property",
    }
}

node! {
    /// `{expression}`
    pub struct JSXExpressionContainer(24) {
        child expression @ 8: JSXExpression = "expression",
    }
}

node! {
    /// The empty expression in `{}` or `{/* comment */}`.
    pub struct JSXEmptyExpression(8) {
    }
}

node! {
    /// `name="value"`
    pub struct JSXAttribute(40) {
        child name @ 8: JSXAttributeName = "name",
        child value @ 24: Option<JSXAttributeValue> = "value",
    }
}

node! {
    /// `{...argument}` in an attribute list.
    pub struct JSXSpreadAttribute(24) {
        child argument @ 8: Expression = "argument",
    }
}

node! {
    /// An identifier in an element or attribute name.
    pub struct JSXIdentifier(24) {
        field name @ 8: Str = "name",
    }
}

node! {
    /// `{...expression}` as a child.
    pub struct JSXSpreadChild(24) {
        child expression @ 8: Expression = "expression",
    }
}

node! {
    /// Text between tags.
    pub struct JSXText(40) {
        field value @ 8: Str = "value",
        field raw @ 24: Option<Str> = "raw",
    }
}

tagged_union! {
    /// The name of a JSX element.
    pub enum JSXElementName {
        JSXIdentifier(Boxed<JSXIdentifier>) = 0,
        IdentifierReference(Boxed<IdentifierReference>) = 1,
        JSXNamespacedName(Boxed<JSXNamespacedName>) = 2,
        JSXMemberExpression(Boxed<JSXMemberExpression>) = 3,
        ThisExpression(Boxed<ThisExpression>) = 4,
    }
}

tagged_union! {
    /// The object of a [`JSXMemberExpression`].
    pub enum JSXMemberExpressionObject {
        IdentifierReference(Boxed<IdentifierReference>) = 0,
        JSXMemberExpression(Boxed<JSXMemberExpression>) = 1,
        ThisExpression(Boxed<ThisExpression>) = 2,
    }
}

tagged_union! {
    /// The content of a [`JSXExpressionContainer`].
    pub enum JSXExpression {
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
        JSXEmptyExpression(JSXEmptyExpression) = 64,
    }
}

tagged_union! {
    /// An attribute of a [`JSXOpeningElement`].
    pub enum JSXAttributeItem {
        JSXAttribute(Boxed<JSXAttribute>) = 0,
        JSXSpreadAttribute(Boxed<JSXSpreadAttribute>) = 1,
    }
}

tagged_union! {
    /// The name of a [`JSXAttribute`].
    pub enum JSXAttributeName {
        JSXIdentifier(Boxed<JSXIdentifier>) = 0,
        JSXNamespacedName(Boxed<JSXNamespacedName>) = 1,
    }
}

tagged_union! {
    /// The value of a [`JSXAttribute`].
    pub enum JSXAttributeValue(none = discriminant(0, 4)) {
        StringLiteral(Boxed<StringLiteral>) = 0,
        JSXExpressionContainer(Boxed<JSXExpressionContainer>) = 1,
        JSXElement(Boxed<JSXElement>) = 2,
        JSXFragment(Boxed<JSXFragment>) = 3,
    }
}

tagged_union! {
    /// A child of a JSX element or fragment.
    pub enum JSXChild {
        JSXText(Boxed<JSXText>) = 0,
        JSXElement(Boxed<JSXElement>) = 1,
        JSXFragment(Boxed<JSXFragment>) = 2,
        JSXExpressionContainer(Boxed<JSXExpressionContainer>) = 3,
        JSXSpreadChild(Boxed<JSXSpreadChild>) = 4,
    }
}
