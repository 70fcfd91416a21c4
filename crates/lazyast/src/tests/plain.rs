use alloc::{string::ToString, vec};

use crate::{
    DecodeOptions, ExportExportName, ImportImportName, Map, Statement, Value, View,
    builder::BufferBuilder,
    tests::support::{build, if_else},
};

fn slot(kind: &str, name: Option<&str>, span: Option<(u32, u32)>) -> Value {
    let mut map = Map::new();
    map.insert("kind".into(), Value::from(kind));
    map.insert("name".into(), name.map_or(Value::Null, Value::from));
    map.insert("start".into(), span.map_or(Value::Null, |(start, _)| Value::from(start)));
    map.insert("end".into(), span.map_or(Value::Null, |(_, end)| Value::from(end)));
    Value::Object(map)
}

#[test]
fn plain_values_are_stable() {
    let data = if_else();
    let first = data.to_plain().unwrap();
    let second = data.to_plain().unwrap();
    assert_eq!(first, second);

    let program = first.get("program").unwrap();
    assert_eq!(program.type_tag(), Some("Program"));
    assert_eq!(program.get("start"), Some(&Value::from(0u32)));
    assert_eq!(program.get("end"), Some(&Value::from(25u32)));
    assert_eq!(program.get("hashbang"), Some(&Value::Null));
    assert_eq!(
        program.get("sourceType").and_then(|s| s.get("sourceType")),
        Some(&Value::from("module"))
    );

    let stmt = &program.get("body").and_then(Value::as_array).unwrap()[0];
    assert_eq!(stmt.type_tag(), Some("IfStatement"));
    let test = stmt.get("test").unwrap();
    assert_eq!(test.type_tag(), Some("IdentifierReference"));
    assert_eq!(test.get("name"), Some(&Value::from("a")));
    assert_eq!(
        stmt.get("alternate").and_then(|alt| alt.get("start")),
        Some(&Value::from(19u32))
    );

    assert_eq!(first.get("comments"), Some(&Value::Array(vec![])));
    assert_eq!(first.get("errors"), Some(&Value::Array(vec![])));
}

#[test]
fn plain_values_print_as_json() {
    let data = if_else();
    let Statement::IfStatement(stmt) = data.program().unwrap().body().unwrap().get(0).unwrap().unwrap()
    else {
        panic!("expected an if statement");
    };
    let Statement::BlockStatement(block) = stmt.consequent().unwrap() else {
        panic!("expected a block");
    };
    assert_eq!(
        block.to_plain().unwrap().to_string(),
        r#"{"body":[{"end":11,"expression":{"end":10,"name":"b","start":9,"type":"IdentifierReference"},"start":9,"type":"ExpressionStatement"}],"end":13,"start":7,"type":"BlockStatement"}"#
    );
}

#[test]
fn regexp_literals() {
    let source = "/a+/gi;";
    let mut b = BufferBuilder::new(source);
    let literal = b.node(56, 0, 6);
    b.source_str(literal + 8, 1, 3);
    b.u8(literal + 32, 1 | 2);
    b.source_str(literal + 40, 0, 6);
    let stmt = b.node(24, 0, 7);
    b.union(stmt + 8, 4, literal);
    let root = b.program(0, 7, &[(6, stmt)]);
    let data = build(b, root, DecodeOptions::default());

    let plain = data.program().unwrap().to_plain().unwrap();
    let expression = plain.get("body").and_then(Value::as_array).unwrap()[0]
        .get("expression")
        .unwrap();
    assert_eq!(expression.type_tag(), Some("RegExpLiteral"));
    let regex = expression.get("regex").unwrap();
    assert_eq!(regex.get("flags"), Some(&Value::from("gi")));
    assert_eq!(
        regex.get("pattern").and_then(|p| p.get("pattern")),
        Some(&Value::from("a+"))
    );
    assert_eq!(expression.get("raw"), Some(&Value::from(source.trim_end_matches(';'))));
}

#[test]
fn module_record_name_slots() {
    let source = "import { a as b } from \"m\";";
    let mut b = BufferBuilder::new(source);
    let root = b.empty_root();
    let module = root + 152;
    b.bool(module + 96, true);

    let import = b.seq(module, 56, 1);
    b.span(import, 0, 27);
    b.span(import + 8, 23, 26);
    b.source_str(import + 16, 24, 25);
    let entry = b.seq(import + 32, 96, 1);
    b.u8(entry + 32, 0);
    b.span(entry + 40, 9, 10);
    b.source_str(entry + 48, 9, 10);
    b.span(entry + 64, 14, 15);
    b.source_str(entry + 72, 14, 15);

    let data = build(b, root, DecodeOptions::default());
    let record = data.module().unwrap();
    assert!(record.has_module_syntax().unwrap());

    let imports = record.static_imports().unwrap();
    let import = imports.get(0).unwrap().unwrap();
    assert_eq!(import.module_request().unwrap().value().unwrap(), "m");
    let entry = import.entries().unwrap().get(0).unwrap().unwrap();
    let name = entry.import_name().unwrap();
    assert!(matches!(name, ImportImportName::Name(_)));
    assert_eq!(name.kind(), "Name");
    assert_eq!(name.name().unwrap().as_deref(), Some("a"));
    assert_eq!(name.span().unwrap(), Some(crate::Span::new(9, 10)));

    let plain = entry.to_plain().unwrap();
    assert_eq!(plain.get("importName"), Some(&slot("Name", Some("a"), Some((9, 10)))));
    assert_eq!(
        plain.get("localName").and_then(|n| n.get("value")),
        Some(&Value::from("b"))
    );
    assert_eq!(plain.get("isType"), Some(&Value::from(false)));
}

#[test]
fn export_slots_without_names() {
    let source = "export default x;";
    let mut b = BufferBuilder::new(source);
    let root = b.empty_root();
    let module = root + 152;

    let export = b.seq(module + 24, 32, 1);
    b.span(export, 0, 17);
    let entry = b.seq(export + 8, 144, 1);
    b.span(entry, 0, 17);
    b.u8(entry + 40, 3);
    b.u8(entry + 72, 1);
    b.span(entry + 80, 7, 14);
    b.u8(entry + 104, 0);
    b.span(entry + 112, 15, 16);
    b.source_str(entry + 120, 15, 16);

    let data = build(b, root, DecodeOptions::default());
    let exports = data.module().unwrap().static_exports().unwrap();
    let entry = exports.get(0).unwrap().unwrap().entries().unwrap().get(0).unwrap().unwrap();

    assert!(entry.module_request().unwrap().is_none());
    let export_name = entry.export_name().unwrap();
    assert!(matches!(export_name, ExportExportName::Default(_)));
    assert_eq!(export_name.name().unwrap(), None);

    let plain = entry.to_plain().unwrap();
    assert_eq!(plain.get("moduleRequest"), Some(&Value::Null));
    assert_eq!(plain.get("importName"), Some(&slot("None", None, None)));
    assert_eq!(plain.get("exportName"), Some(&slot("Default", None, Some((7, 14)))));
    assert_eq!(plain.get("localName"), Some(&slot("Name", Some("x"), Some((15, 16)))));
}

#[test]
fn unknown_slot_tags_fail() {
    let mut b = BufferBuilder::new("export * from \"m\";");
    let root = b.empty_root();
    let export = b.seq(root + 152 + 24, 32, 1);
    let entry = b.seq(export + 8, 144, 1);
    b.u8(entry + 40, 4);
    let data = build(b, root, DecodeOptions::default());
    let exports = data.module().unwrap().static_exports().unwrap();
    let entry = exports.get(0).unwrap().unwrap().entries().unwrap().get(0).unwrap().unwrap();
    assert_eq!(
        entry.import_name().unwrap_err(),
        crate::Error::UnexpectedDiscriminant {
            union: "ExportImportName",
            value: 4,
        }
    );
    assert_eq!(
        entry.to_plain().unwrap_err().to_string(),
        entry.import_name().unwrap_err().to_string()
    );
}

#[test]
fn json_text_parses_back_to_the_same_value() {
    let data = if_else();
    let plain = data.to_plain().unwrap();
    let parsed: Value = serde_json::from_str(&plain.to_string()).unwrap();
    assert_eq!(parsed, plain);

    let through_serde = serde_json::to_string(&plain).unwrap();
    let reparsed: Value = serde_json::from_str(&through_serde).unwrap();
    assert_eq!(reparsed, plain);
}
