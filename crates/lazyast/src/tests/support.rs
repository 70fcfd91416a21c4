//! Buffers shared by the unit tests.

use alloc::{boxed::Box, format, rc::Rc, string::String, vec::Vec};
use core::cell::RefCell;

use crate::{
    Callback, DecodeOptions, NodeRef, RawTransferData, Value, builder::BufferBuilder,
    decode_with_options,
};

pub(crate) const EXPR_IDENT: u8 = 7;
pub(crate) const STMT_BLOCK: u8 = 0;
pub(crate) const STMT_EMPTY: u8 = 5;
pub(crate) const STMT_EXPRESSION: u8 = 6;
pub(crate) const STMT_IF: u8 = 10;

pub(crate) const IF_ELSE: &str = "if (a) { b; } else { c; }";

pub(crate) fn ident(b: &mut BufferBuilder, start: u32, end: u32) -> u32 {
    let node = b.node(24, start, end);
    b.source_str(node + 8, start, end);
    node
}

pub(crate) fn expression_statement(b: &mut BufferBuilder, start: u32, end: u32, ident: u32) -> u32 {
    let node = b.node(24, start, end);
    b.union(node + 8, EXPR_IDENT, ident);
    node
}

pub(crate) fn block(b: &mut BufferBuilder, start: u32, end: u32, body: &[(u8, u32)]) -> u32 {
    let node = b.node(32, start, end);
    b.union_seq(node + 8, body);
    node
}

pub(crate) fn build(b: BufferBuilder, root: u32, options: DecodeOptions) -> Rc<RawTransferData> {
    let len = b.source_len();
    let (buffer, source) = b.finish();
    let ascii = source.is_ascii();
    decode_with_options(buffer, source, ascii, len, root, options).unwrap()
}

/// `if (a) { b; } else { c; }`
pub(crate) fn if_else_builder() -> (BufferBuilder, u32) {
    let mut b = BufferBuilder::new(IF_ELSE);
    let a = ident(&mut b, 4, 5);

    let b_ident = ident(&mut b, 9, 10);
    let b_stmt = expression_statement(&mut b, 9, 11, b_ident);
    let consequent = block(&mut b, 7, 13, &[(STMT_EXPRESSION, b_stmt)]);

    let c_ident = ident(&mut b, 21, 22);
    let c_stmt = expression_statement(&mut b, 21, 23, c_ident);
    let alternate = block(&mut b, 19, 25, &[(STMT_EXPRESSION, c_stmt)]);

    let if_stmt = b.node(56, 0, 25);
    b.union(if_stmt + 8, EXPR_IDENT, a);
    b.union(if_stmt + 24, STMT_BLOCK, consequent);
    b.union(if_stmt + 40, STMT_BLOCK, alternate);

    let root = b.program(0, 25, &[(STMT_IF, if_stmt)]);
    (b, root)
}

pub(crate) fn if_else() -> Rc<RawTransferData> {
    let (b, root) = if_else_builder();
    build(b, root, DecodeOptions::default())
}

/// A program of `count` empty statements, `;;;...`.
pub(crate) fn empty_statements(count: u32) -> Rc<RawTransferData> {
    let source: String = core::iter::repeat_n(';', count as usize).collect();
    let mut b = BufferBuilder::new(&source);
    let body: Vec<(u8, u32)> = (0..count)
        .map(|i| (STMT_EMPTY, b.node(8, i, i + 1)))
        .collect();
    let root = b.program(0, count, &body);
    build(b, root, DecodeOptions::default())
}

/// A program whose hashbang value is written by `write` at the given offset.
pub(crate) fn with_hashbang(
    source: &str,
    options: DecodeOptions,
    write: impl FnOnce(&mut BufferBuilder, u32),
) -> Rc<RawTransferData> {
    let mut b = BufferBuilder::new(source);
    let root = b.empty_root();
    b.span(root + 48, 0, b.source_len());
    write(&mut b, root + 56);
    build(b, root, options)
}

/// Start offset of a visited node, lazy or plain.
pub(crate) fn start_of(node: NodeRef<'_>) -> u32 {
    match node {
        NodeRef::Lazy(node) => node.span().unwrap().start,
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        NodeRef::Plain(_, value) => value.get("start").and_then(Value::as_f64).unwrap() as u32,
    }
}

/// Callbacks that append `"Kind@start"` or `"Kind:exit@start"` to a shared
/// log.
pub(crate) fn logging<'a>(
    log: &'a RefCell<Vec<String>>,
    keys: &[&str],
) -> Vec<(String, Callback<'a>)> {
    keys.iter()
        .map(|key| {
            let key = String::from(*key);
            let entry = key.clone();
            let callback: Callback<'a> = Box::new(move |node: NodeRef<'_>| {
                log.borrow_mut().push(format!("{entry}@{}", start_of(node)));
            });
            (key, callback)
        })
        .collect()
}
