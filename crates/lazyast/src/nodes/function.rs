//! Binding patterns, functions and classes.

use super::*;

record! {
    /// A binding target: an identifier, an object or array pattern, or a pattern with a default.
    pub struct BindingPattern(32, none = discriminant(24, 2)) {
        child kind @ 0: BindingPatternKind = "kind",
        field optional @ 24: bool = "optional",
    }
}

node! {
    /// `left = right` in a binding position.
    pub struct AssignmentPattern(56) {
        child left @ 8: BindingPattern = "left",
        child right @ 40: Expression = "right",
    }
}

node! {
    /// `{ a, b: c }` in a binding position.
    pub struct ObjectPattern(32) {
        child properties @ 8: Seq<BindingProperty> = "properties",
    }
}

node! {
    /// `key: value` inside an [`ObjectPattern`].
    pub struct BindingProperty(64) {
        child key @ 8: PropertyKey = "key",
        child value @ 24: BindingPattern = "value",
        field shorthand @ 56: bool = "shorthand",
        field computed @ 57: bool = "computed",
    }
}

node! {
    /// `[a, , b]` in a binding position.
    pub struct ArrayPattern(32) {
        child elements @ 8: Seq<Option<BindingPattern>> = "elements",
    }
}

node! {
    /// A function declaration or expression.
    ///
    /// Which of the two is recorded in [`Function::function_type`].
    pub struct Function(88) {
        field function_type @ 84: FunctionType = "type",
        child id @ 8: Option<BindingIdentifier> = "id",
        field generator @ 85: bool = "generator",
        field is_async @ 86: bool = "async",
        field declare @ 87: bool = "declare",
        child params @ 56: Boxed<FormalParameters> = "params",
        child body @ 72: Option<Boxed<FunctionBody>> = "body",
    }
}

node! {
    /// The parameter list of a function.
    pub struct FormalParameters(48) {
        field kind @ 40: FormalParameterKind = "kind",
        child items @ 8: Seq<FormalParameter> = "items",
    }
}

record! {
    /// One parameter, with its decorators.
    pub struct FormalParameter(72) {
        child decorators @ 8: Seq<Decorator> = "decorators",
        child pattern @ 32: BindingPattern = "pattern",
    }
}

node! {
    /// `{ body }` of a function.
    pub struct FunctionBody(56) {
        child body @ 32: Seq<Statement> = "body",
    }
}

node! {
    /// `(params) => body`
    ///
    /// When `expression` is set the body holds a single expression statement.
    pub struct ArrowFunctionExpression(48) {
        field expression @ 44: bool = "expression",
        field is_async @ 45: bool = "async",
        child params @ 16: Boxed<FormalParameters> = "params",
        child body @ 32: Boxed<FunctionBody> = "body",
    }
}

node! {
    /// A class declaration or expression.
    pub struct Class(136) {
        field class_type @ 132: ClassType = "type",
        child decorators @ 8: Seq<Decorator> = "decorators",
        child id @ 32: Option<BindingIdentifier> = "id",
        child super_class @ 72: Option<Expression> = "superClass",
        child body @ 120: Boxed<ClassBody> = "body",
        field is_abstract @ 133: bool = "abstract",
        field declare @ 134: bool = "declare",
    }
}

node! {
    /// `{ body }` of a class.
    pub struct ClassBody(32) {
        child body @ 8: Seq<ClassElement> = "body",
    }
}

node! {
    /// A method, getter, setter or constructor in a class body.
    pub struct MethodDefinition(64) {
        field definition_type @ 56: MethodDefinitionType = "type",
        child decorators @ 8: Seq<Decorator> = "decorators",
        child key @ 32: PropertyKey = "key",
        child value @ 48: Boxed<Function> = "value",
        field kind @ 57: MethodDefinitionKind = "kind",
        field computed @ 58: bool = "computed",
        field is_static @ 59: bool = "static",
        field is_override @ 60: bool = "override",
        field optional @ 61: bool = "optional",
    }
}

node! {
    /// A class field.
    pub struct PropertyDefinition(88) {
        field definition_type @ 72: PropertyDefinitionType = "type",
        child decorators @ 8: Seq<Decorator> = "decorators",
        child key @ 32: PropertyKey = "key",
        child value @ 56: Option<Expression> = "value",
        field computed @ 73: bool = "computed",
        field is_static @ 74: bool = "static",
        field declare @ 75: bool = "declare",
        field is_override @ 76: bool = "override",
        field optional @ 77: bool = "optional",
        field definite @ 78: bool = "definite",
        field readonly @ 79: bool = "readonly",
    }
}

node! {
    /// `static { body }`
    pub struct StaticBlock(32) {
        child body @ 8: Seq<Statement> = "body",
    }
}

node! {
    /// `accessor key = value`
    pub struct AccessorProperty(80) {
        field definition_type @ 72: AccessorPropertyType = "type",
        child decorators @ 8: Seq<Decorator> = "decorators",
        child key @ 32: PropertyKey = "key",
        child value @ 56: Option<Expression> = "value",
        field computed @ 73: bool = "computed",
        field is_static @ 74: bool = "static",
        field is_override @ 75: bool = "override",
        field definite @ 76: bool = "definite",
    }
}

node! {
    /// `@expression`
    pub struct Decorator(24) {
        child expression @ 8: Expression = "expression",
    }
}

tagged_union! {
    /// The shape of a [`BindingPattern`].
    pub enum BindingPatternKind {
        BindingIdentifier(Boxed<BindingIdentifier>) = 0,
        ObjectPattern(Boxed<ObjectPattern>) = 1,
        ArrayPattern(Boxed<ArrayPattern>) = 2,
        AssignmentPattern(Boxed<AssignmentPattern>) = 3,
    }
}

tagged_union! {
    /// A member of a [`ClassBody`].
    pub enum ClassElement {
        StaticBlock(Boxed<StaticBlock>) = 0,
        MethodDefinition(Boxed<MethodDefinition>) = 1,
        PropertyDefinition(Boxed<PropertyDefinition>) = 2,
        AccessorProperty(Boxed<AccessorProperty>) = 3,
    }
}

fieldless! {
    /// Syntactic form of a [`Function`].
    pub enum FunctionType {
        FunctionDeclaration = 0 => "FunctionDeclaration",
        FunctionExpression = 1 => "FunctionExpression",
        TSDeclareFunction = 2 => "TSDeclareFunction",
        TSEmptyBodyFunctionExpression = 3 => "TSEmptyBodyFunctionExpression",
    }
}

fieldless! {
    /// Where a [`FormalParameters`] list appears.
    pub enum FormalParameterKind {
        FormalParameter = 0 => "FormalParameter",
        UniqueFormalParameters = 1 => "UniqueFormalParameters",
        ArrowFormalParameters = 2 => "ArrowFormalParameters",
        Signature = 3 => "Signature",
    }
}

fieldless! {
    /// Syntactic form of a [`Class`].
    pub enum ClassType {
        ClassDeclaration = 0 => "ClassDeclaration",
        ClassExpression = 1 => "ClassExpression",
    }
}

fieldless! {
    /// Whether a [`MethodDefinition`] is abstract.
    pub enum MethodDefinitionType {
        MethodDefinition = 0 => "MethodDefinition",
        TSAbstractMethodDefinition = 1 => "TSAbstractMethodDefinition",
    }
}

fieldless! {
    /// Whether a [`PropertyDefinition`] is abstract.
    pub enum PropertyDefinitionType {
        PropertyDefinition = 0 => "PropertyDefinition",
        TSAbstractPropertyDefinition = 1 => "TSAbstractPropertyDefinition",
    }
}

fieldless! {
    /// Role of a [`MethodDefinition`].
    pub enum MethodDefinitionKind {
        Constructor = 0 => "constructor",
        Method = 1 => "method",
        Get = 2 => "get",
        Set = 3 => "set",
    }
}

fieldless! {
    /// Whether an [`AccessorProperty`] is abstract.
    pub enum AccessorPropertyType {
        AccessorProperty = 0 => "AccessorProperty",
        TSAbstractAccessorProperty = 1 => "TSAbstractAccessorProperty",
    }
}
