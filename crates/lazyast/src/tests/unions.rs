use rstest::rstest;

use crate::{
    Argument, ArrayExpressionElement, AssignmentTarget, AssignmentTargetMaybeDefault,
    AssignmentTargetProperty, BindingPatternKind, ChainElement, ClassElement, Declaration,
    DecodeOptions, Error, ExportDefaultDeclarationKind, ExportExportName, ExportImportName,
    ExportLocalName, Expression, ForStatementInit, ForStatementLeft, ImportAttributeKey,
    ImportDeclarationSpecifier, ImportImportName, JSXAttributeItem, JSXAttributeName,
    JSXAttributeValue, JSXChild, JSXElementName, JSXExpression, JSXMemberExpressionObject,
    ModuleExportName, NodeKind, ObjectPropertyKind, PropertyKey, RegExpFlags,
    SimpleAssignmentTarget, Statement, Value, VariableDeclarationKind, View,
    builder::BufferBuilder,
    layout::{Decode, DecodeCx, is_absent},
    tests::support::{build, if_else_builder},
};

/// Decodes the first statement of a program whose body holds a single
/// zero-filled node behind `tag`.
fn statement_with_tag(tag: u8) -> Result<Statement, Error> {
    let mut b = BufferBuilder::new("x");
    let node = b.node(160, 0, 1);
    let root = b.program(0, 1, &[(tag, node)]);
    let data = build(b, root, DecodeOptions::default());
    let body = data.program()?.body()?;
    Ok(body.get(0)?.expect("one statement"))
}

#[rstest]
#[case(0, NodeKind::BlockStatement)]
#[case(1, NodeKind::BreakStatement)]
#[case(2, NodeKind::ContinueStatement)]
#[case(3, NodeKind::DebuggerStatement)]
#[case(4, NodeKind::DoWhileStatement)]
#[case(5, NodeKind::EmptyStatement)]
#[case(6, NodeKind::ExpressionStatement)]
#[case(7, NodeKind::ForInStatement)]
#[case(8, NodeKind::ForOfStatement)]
#[case(9, NodeKind::ForStatement)]
#[case(10, NodeKind::IfStatement)]
#[case(11, NodeKind::LabeledStatement)]
#[case(12, NodeKind::ReturnStatement)]
#[case(13, NodeKind::SwitchStatement)]
#[case(14, NodeKind::ThrowStatement)]
#[case(15, NodeKind::TryStatement)]
#[case(16, NodeKind::WhileStatement)]
#[case(17, NodeKind::WithStatement)]
#[case(32, NodeKind::VariableDeclaration)]
#[case(33, NodeKind::Function)]
#[case(34, NodeKind::Class)]
#[case(64, NodeKind::ImportDeclaration)]
#[case(65, NodeKind::ExportAllDeclaration)]
#[case(66, NodeKind::ExportDefaultDeclaration)]
#[case(67, NodeKind::ExportNamedDeclaration)]
fn statement_discriminants(#[case] tag: u8, #[case] kind: NodeKind) {
    let stmt = statement_with_tag(tag).unwrap();
    assert_eq!(stmt.node_kind(), kind);
    assert_eq!(stmt.node().span().unwrap(), crate::Span::new(0, 1));
}

#[rstest]
#[case::gap(18)]
#[case::typescript_declaration(35)]
#[case::reserved_for_absent(70)]
#[case::out_of_range(255)]
fn unmapped_statement_discriminants(#[case] tag: u8) {
    assert_eq!(
        statement_with_tag(tag).unwrap_err(),
        Error::UnexpectedDiscriminant {
            union: "Statement",
            value: tag,
        }
    );
}

#[test]
fn unmapped_expression_discriminant() {
    let (mut b, root) = if_else_builder();
    // written right before the root
    let if_stmt = root - 56;
    b.u8(if_stmt + 8, 40);
    let data = build(b, root, DecodeOptions::default());
    let Statement::IfStatement(stmt) = data.program().unwrap().body().unwrap().get(0).unwrap().unwrap()
    else {
        panic!("expected an if statement");
    };
    assert_eq!(
        stmt.test().unwrap_err(),
        Error::UnexpectedDiscriminant {
            union: "Expression",
            value: 40,
        }
    );
    // siblings still decode
    assert_eq!(stmt.consequent().unwrap().node_kind(), NodeKind::BlockStatement);
}

#[test]
fn reserved_discriminant_reads_as_absent() {
    let (mut b, root) = if_else_builder();
    let if_stmt = root - 56;
    b.u8(if_stmt + 40, 70);
    let data = build(b, root, DecodeOptions::default());
    let Statement::IfStatement(stmt) = data.program().unwrap().body().unwrap().get(0).unwrap().unwrap()
    else {
        panic!("expected an if statement");
    };
    assert!(stmt.alternate().unwrap().is_none());
    assert_eq!(stmt.consequent().unwrap().node_kind(), NodeKind::BlockStatement);
    let plain = crate::View::to_plain(&*stmt).unwrap();
    assert_eq!(plain.get("alternate"), Some(&Value::Null));
}

#[test]
fn fieldless_enums_reject_unknown_values() {
    let mut b = BufferBuilder::new("let x;");
    let declaration = b.node(40, 0, 6);
    let root = b.program(0, 6, &[(32, declaration)]);
    b.u8(declaration + 32, 9);
    let data = build(b, root, DecodeOptions::default());
    let Statement::VariableDeclaration(decl) =
        data.program().unwrap().body().unwrap().get(0).unwrap().unwrap()
    else {
        panic!("expected a declaration");
    };
    assert_eq!(
        decl.kind().unwrap_err(),
        Error::UnexpectedDiscriminant {
            union: "VariableDeclarationKind",
            value: 9,
        }
    );
    assert_eq!(VariableDeclarationKind::AwaitUsing.as_str(), "await using");
}

#[test]
fn options_over_types_without_an_absent_encoding_fail() {
    let (b, root) = if_else_builder();
    let data = build(b, root, DecodeOptions::default());
    let ast = crate::View::ast(&*data);
    assert_eq!(
        is_absent::<u32>(root, ast, "count"),
        Err(Error::OptionConvention {
            field: "count",
            ty: "u32",
        })
    );
    assert_eq!(
        <Option<u32> as Decode>::decode(root, &DecodeCx::new(ast, "count")).unwrap_err(),
        Error::OptionConvention {
            field: "count",
            ty: "u32",
        }
    );
    let consequent = root - 56 + 24;
    assert_eq!(is_absent::<Statement>(consequent, ast, "consequent"), Ok(false));
}

#[rstest]
#[case(0, "")]
#[case(1, "g")]
#[case(1 | 2 | 4, "gim")]
#[case(64 | 1, "dg")]
#[case(255, "dgimsuvy")]
#[case(128 | 32 | 16, "uvy")]
fn regexp_flags_print_alphabetically(#[case] bits: u8, #[case] expected: &str) {
    let flags = RegExpFlags::from_bits(bits);
    assert_eq!(alloc::string::ToString::to_string(&flags), expected);
    assert_eq!(
        <RegExpFlags as Decode>::plain(&flags),
        Ok(Value::from(expected))
    );
    assert_eq!(flags.bits(), bits);
    for letter in expected.chars() {
        assert!(flags.contains(letter));
    }
}

/// Decodes a `U` written with every possible tag byte in front of a pointer
/// to a zero-filled node, and checks that exactly `tags` are accepted.
fn only_declared_tags_decode<U: Decode>(tags: &[u8]) {
    assert!(!tags.is_empty(), "{} declares no tags", U::NAME);
    for tag in 0..=u8::MAX {
        let mut b = BufferBuilder::new("x");
        let target = b.node(1024, 0, 1);
        let slot = b.alloc(1024);
        b.union(slot, tag, target);
        let root = b.empty_root();
        let data = build(b, root, DecodeOptions::default());
        let decoded = U::decode(slot, &DecodeCx::new(View::ast(&*data), "slot"));
        if tags.contains(&tag) {
            assert!(decoded.is_ok(), "{} rejected tag {tag}", U::NAME);
        } else {
            assert_eq!(
                decoded.err(),
                Some(Error::UnexpectedDiscriminant {
                    union: U::NAME,
                    value: tag,
                }),
                "{} accepted tag {tag}",
                U::NAME
            );
        }
    }
}

#[test]
fn every_declared_tag_decodes() {
    only_declared_tags_decode::<Statement>(Statement::TAGS);
    only_declared_tags_decode::<Declaration>(Declaration::TAGS);
    only_declared_tags_decode::<ForStatementInit>(ForStatementInit::TAGS);
    only_declared_tags_decode::<ForStatementLeft>(ForStatementLeft::TAGS);
    only_declared_tags_decode::<Expression>(Expression::TAGS);
    only_declared_tags_decode::<ArrayExpressionElement>(ArrayExpressionElement::TAGS);
    only_declared_tags_decode::<ObjectPropertyKind>(ObjectPropertyKind::TAGS);
    only_declared_tags_decode::<PropertyKey>(PropertyKey::TAGS);
    only_declared_tags_decode::<Argument>(Argument::TAGS);
    only_declared_tags_decode::<AssignmentTarget>(AssignmentTarget::TAGS);
    only_declared_tags_decode::<SimpleAssignmentTarget>(SimpleAssignmentTarget::TAGS);
    only_declared_tags_decode::<AssignmentTargetMaybeDefault>(AssignmentTargetMaybeDefault::TAGS);
    only_declared_tags_decode::<AssignmentTargetProperty>(AssignmentTargetProperty::TAGS);
    only_declared_tags_decode::<ChainElement>(ChainElement::TAGS);
    only_declared_tags_decode::<BindingPatternKind>(BindingPatternKind::TAGS);
    only_declared_tags_decode::<ClassElement>(ClassElement::TAGS);
    only_declared_tags_decode::<ImportDeclarationSpecifier>(ImportDeclarationSpecifier::TAGS);
    only_declared_tags_decode::<ImportAttributeKey>(ImportAttributeKey::TAGS);
    only_declared_tags_decode::<ExportDefaultDeclarationKind>(ExportDefaultDeclarationKind::TAGS);
    only_declared_tags_decode::<ModuleExportName>(ModuleExportName::TAGS);
    only_declared_tags_decode::<JSXElementName>(JSXElementName::TAGS);
    only_declared_tags_decode::<JSXMemberExpressionObject>(JSXMemberExpressionObject::TAGS);
    only_declared_tags_decode::<JSXExpression>(JSXExpression::TAGS);
    only_declared_tags_decode::<JSXAttributeItem>(JSXAttributeItem::TAGS);
    only_declared_tags_decode::<JSXAttributeName>(JSXAttributeName::TAGS);
    only_declared_tags_decode::<JSXAttributeValue>(JSXAttributeValue::TAGS);
    only_declared_tags_decode::<JSXChild>(JSXChild::TAGS);
    only_declared_tags_decode::<ImportImportName>(ImportImportName::TAGS);
    only_declared_tags_decode::<ExportImportName>(ExportImportName::TAGS);
    only_declared_tags_decode::<ExportExportName>(ExportExportName::TAGS);
    only_declared_tags_decode::<ExportLocalName>(ExportLocalName::TAGS);
}

#[rstest]
#[case::class_expression(17, NodeKind::Class)]
#[case::function_expression(19, NodeKind::Function)]
#[case::function_declaration(64, NodeKind::Function)]
#[case::class_declaration(65, NodeKind::Class)]
fn export_default_declarations(#[case] tag: u8, #[case] kind: NodeKind) {
    let mut b = BufferBuilder::new("export default x");
    let declaration = b.node(160, 15, 16);
    let export = b.node(80, 0, 16);
    b.union(export + 64, tag, declaration);
    let root = b.program(0, 16, &[(66, export)]);
    let data = build(b, root, DecodeOptions::default());

    let Statement::ExportDefaultDeclaration(export) =
        data.program().unwrap().body().unwrap().get(0).unwrap().unwrap()
    else {
        panic!("expected an export default declaration");
    };
    let declaration = export.declaration().unwrap();
    assert_eq!(declaration.node_kind(), kind);
    assert_eq!(declaration.node().span().unwrap(), crate::Span::new(15, 16));
    match tag {
        64 => assert!(matches!(declaration, ExportDefaultDeclarationKind::FunctionDeclaration(_))),
        65 => assert!(matches!(declaration, ExportDefaultDeclarationKind::ClassDeclaration(_))),
        19 => assert!(matches!(declaration, ExportDefaultDeclarationKind::Function(_))),
        _ => assert!(matches!(declaration, ExportDefaultDeclarationKind::Class(_))),
    }
}
