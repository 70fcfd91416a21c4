//! Statements and the program root.

use super::*;

node! {
    /// The root node of a parsed source file.
    pub struct Program(128) {
        field source_type @ 124: SourceType = "sourceType",
        child hashbang @ 48: Option<Hashbang> = "hashbang",
        child body @ 96: Seq<Statement> = "body",
    }
}

node! {
    /// `#!/usr/bin/env node` at the very start of a file.
    pub struct Hashbang(24, none = null_pointer(8)) {
        field value @ 8: Str = "value",
    }
}

node! {
    /// `{ body }`
    pub struct BlockStatement(32) {
        child body @ 8: Seq<Statement> = "body",
    }
}

node! {
    /// `var`, `let`, `const`, `using` or `await using` declarations.
    pub struct VariableDeclaration(40) {
        field kind @ 32: VariableDeclarationKind = "kind",
        child declarations @ 8: Seq<VariableDeclarator> = "declarations",
        field declare @ 33: bool = "declare",
    }
}

node! {
    /// `id = init` inside a [`VariableDeclaration`].
    pub struct VariableDeclarator(64) {
        child id @ 8: BindingPattern = "id",
        child init @ 40: Option<Expression> = "init",
        field definite @ 57: bool = "definite",
    }
}

node! {
    /// `;`
    pub struct EmptyStatement(8) {
    }
}

node! {
    /// An expression followed by `;`.
    pub struct ExpressionStatement(24) {
        child expression @ 8: Expression = "expression",
    }
}

node! {
    /// `if (test) consequent else alternate`
    pub struct IfStatement(56) {
        child test @ 8: Expression = "test",
        child consequent @ 24: Statement = "consequent",
        child alternate @ 40: Option<Statement> = "alternate",
    }
}

node! {
    /// `do body while (test)`
    pub struct DoWhileStatement(40) {
        child body @ 8: Statement = "body",
        child test @ 24: Expression = "test",
    }
}

node! {
    /// `while (test) body`
    pub struct WhileStatement(40) {
        child test @ 8: Expression = "test",
        child body @ 24: Statement = "body",
    }
}

node! {
    /// `for (init; test; update) body`
    pub struct ForStatement(72) {
        child init @ 8: Option<ForStatementInit> = "init",
        child test @ 24: Option<Expression> = "test",
        child update @ 40: Option<Expression> = "update",
        child body @ 56: Statement = "body",
    }
}

node! {
    /// `for (left in right) body`
    pub struct ForInStatement(56) {
        child left @ 8: ForStatementLeft = "left",
        child right @ 24: Expression = "right",
        child body @ 40: Statement = "body",
    }
}

node! {
    /// `for (left of right) body`, or `for await` when `await` is set.
    pub struct ForOfStatement(64) {
        field is_await @ 60: bool = "await",
        child left @ 8: ForStatementLeft = "left",
        child right @ 24: Expression = "right",
        child body @ 40: Statement = "body",
    }
}

node! {
    /// `continue label`
    pub struct ContinueStatement(32) {
        child label @ 8: Option<LabelIdentifier> = "label",
    }
}

node! {
    /// `break label`
    pub struct BreakStatement(32) {
        child label @ 8: Option<LabelIdentifier> = "label",
    }
}

node! {
    /// `return argument`
    pub struct ReturnStatement(24) {
        child argument @ 8: Option<Expression> = "argument",
    }
}

node! {
    /// `with (object) body`
    pub struct WithStatement(40) {
        child object @ 8: Expression = "object",
        child body @ 24: Statement = "body",
    }
}

node! {
    /// `switch (discriminant) { cases }`
    pub struct SwitchStatement(48) {
        child discriminant @ 8: Expression = "discriminant",
        child cases @ 24: Seq<SwitchCase> = "cases",
    }
}

node! {
    /// `case test: consequent`, or `default:` when `test` is absent.
    pub struct SwitchCase(48) {
        child test @ 8: Option<Expression> = "test",
        child consequent @ 24: Seq<Statement> = "consequent",
    }
}

node! {
    /// `label: body`
    pub struct LabeledStatement(48) {
        child label @ 8: LabelIdentifier = "label",
        child body @ 32: Statement = "body",
    }
}

node! {
    /// `throw argument`
    pub struct ThrowStatement(24) {
        child argument @ 8: Expression = "argument",
    }
}

node! {
    /// `try block catch handler finally finalizer`
    pub struct TryStatement(32) {
        child block @ 8: Boxed<BlockStatement> = "block",
        child handler @ 16: Option<Boxed<CatchClause>> = "handler",
        child finalizer @ 24: Option<Boxed<BlockStatement>> = "finalizer",
    }
}

node! {
    /// `catch (param) body`
    pub struct CatchClause(56) {
        child param @ 8: Option<CatchParameter> = "param",
        child body @ 48: Boxed<BlockStatement> = "body",
    }
}

record! {
    /// The bound pattern of a [`CatchClause`].
    pub struct CatchParameter(40, none = discriminant(32, 2)) {
        child pattern @ 8: BindingPattern = "pattern",
    }
}

node! {
    /// `debugger`
    pub struct DebuggerStatement(8) {
    }
}

tagged_union! {
    /// Any statement, including declarations and module declarations.
    pub enum Statement(none = discriminant(0, 70)) {
        BlockStatement(Boxed<BlockStatement>) = 0,
        BreakStatement(Boxed<BreakStatement>) = 1,
        ContinueStatement(Boxed<ContinueStatement>) = 2,
        DebuggerStatement(Boxed<DebuggerStatement>) = 3,
        DoWhileStatement(Boxed<DoWhileStatement>) = 4,
        EmptyStatement(Boxed<EmptyStatement>) = 5,
        ExpressionStatement(Boxed<ExpressionStatement>) = 6,
        ForInStatement(Boxed<ForInStatement>) = 7,
        ForOfStatement(Boxed<ForOfStatement>) = 8,
        ForStatement(Boxed<ForStatement>) = 9,
        IfStatement(Boxed<IfStatement>) = 10,
        LabeledStatement(Boxed<LabeledStatement>) = 11,
        ReturnStatement(Boxed<ReturnStatement>) = 12,
        SwitchStatement(Boxed<SwitchStatement>) = 13,
        ThrowStatement(Boxed<ThrowStatement>) = 14,
        TryStatement(Boxed<TryStatement>) = 15,
        WhileStatement(Boxed<WhileStatement>) = 16,
        WithStatement(Boxed<WithStatement>) = 17,
        VariableDeclaration(Boxed<VariableDeclaration>) = 32,
        Function(Boxed<Function>) = 33,
        Class(Boxed<Class>) = 34,
        ImportDeclaration(Boxed<ImportDeclaration>) = 64,
        ExportAllDeclaration(Boxed<ExportAllDeclaration>) = 65,
        ExportDefaultDeclaration(Boxed<ExportDefaultDeclaration>) = 66,
        ExportNamedDeclaration(Boxed<ExportNamedDeclaration>) = 67,
    }
}

tagged_union! {
    /// A declaration that may follow `export`.
    pub enum Declaration(none = discriminant(0, 31)) {
        VariableDeclaration(Boxed<VariableDeclaration>) = 32,
        Function(Boxed<Function>) = 33,
        Class(Boxed<Class>) = 34,
    }
}

tagged_union! {
    /// The `init` clause of a [`ForStatement`].
    pub enum ForStatementInit(none = discriminant(0, 65)) {
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
        VariableDeclaration(Boxed<VariableDeclaration>) = 64,
    }
}

tagged_union! {
    /// The left-hand side of `for...in` and `for...of`.
    pub enum ForStatementLeft {
        IdentifierReference(Boxed<IdentifierReference>) = 0,
        ArrayAssignmentTarget(Boxed<ArrayAssignmentTarget>) = 8,
        ObjectAssignmentTarget(Boxed<ObjectAssignmentTarget>) = 9,
        VariableDeclaration(Boxed<VariableDeclaration>) = 16,
        ComputedMemberExpression(Boxed<ComputedMemberExpression>) = 48,
        StaticMemberExpression(Boxed<StaticMemberExpression>) = 49,
        PrivateFieldExpression(Boxed<PrivateFieldExpression>) = 50,
    }
}

fieldless! {
    /// The keyword of a [`VariableDeclaration`].
    pub enum VariableDeclarationKind {
        Var = 0 => "var",
        Let = 1 => "let",
        Const = 2 => "const",
        Using = 3 => "using",
        AwaitUsing = 4 => "await using",
    }
}
