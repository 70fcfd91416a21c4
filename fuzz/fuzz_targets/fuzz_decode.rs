#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use lazyast::{
    Callback, CompiledVisitor, DecodeOptions, NodeKind, NodeRef, View, decode_with_options,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    source: String,
    buffer: Vec<u8>,
    root: u16,
    ascii_fast_path: bool,
    short_string_threshold: u8,
    /// `None` keeps the default limit.
    max_depth: Option<u8>,
}

/// Walks with every kind registered, logging kinds in call order.
fn full_walk(run: impl FnOnce(&mut CompiledVisitor<'_>) -> lazyast::Result<()>) -> Option<Vec<String>> {
    let log = &RefCell::new(Vec::new());
    let entries = NodeKind::ALL.iter().flat_map(move |kind| {
        let enter: Callback<'_> =
            Box::new(move |node: NodeRef<'_>| log.borrow_mut().push(node.kind().to_string()));
        let exit: Callback<'_> =
            Box::new(move |node: NodeRef<'_>| log.borrow_mut().push(format!("{}:exit", node.kind())));
        [(kind.name().to_string(), enter), (format!("{}:exit", kind.name()), exit)]
    });
    let mut visitor = CompiledVisitor::new(entries).expect("every kind name is valid");
    let walked = run(&mut visitor);
    drop(visitor);
    walked.ok().map(|()| log.take())
}

fuzz_target!(|input: Input| {
    let mut buffer = input.source.as_bytes().to_vec();
    buffer.extend_from_slice(&input.buffer);
    let options = DecodeOptions {
        ascii_fast_path: input.ascii_fast_path,
        short_string_threshold: usize::from(input.short_string_threshold),
        max_depth: input
            .max_depth
            .map_or(DecodeOptions::default().max_depth, |depth| usize::from(depth) + 1),
    };
    let source_len = input.source.len() as u32;
    let is_ascii = input.source.is_ascii();
    let Ok(data) = decode_with_options(
        buffer,
        input.source,
        is_ascii,
        source_len,
        u32::from(input.root),
        options,
    ) else {
        return;
    };

    let lazy = full_walk(|visitor| visitor.run(&*data));
    let Ok(plain) = data.to_plain() else {
        return;
    };
    assert_eq!(data.to_plain().as_ref(), Ok(&plain), "to_plain is deterministic");

    let from_plain = full_walk(|visitor| visitor.run_plain(&plain));
    assert_eq!(lazy, from_plain, "lazy and plain walks disagree");
});
