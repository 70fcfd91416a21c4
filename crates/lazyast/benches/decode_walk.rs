//! Benchmark – decoding and walking a buffer of `if`/`else` statements
#![allow(missing_docs)]

use std::{cell::Cell, time::Duration};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lazyast::{
    Callback, CompiledVisitor, DecodeOptions, NodeKind, NodeRef, RawTransferData, View,
    builder::BufferBuilder, decode_from_metadata,
};

const STATEMENT: &str = "if (a) { b; } else { c; }\n";

/// A buffer holding `count` copies of [`STATEMENT`].
fn make_buffer(count: u32) -> (Vec<u8>, String) {
    let source = STATEMENT.repeat(count as usize);
    let mut b = BufferBuilder::new(&source);
    let stride = STATEMENT.len() as u32;

    let ident = |b: &mut BufferBuilder, at: u32| {
        let node = b.node(24, at, at + 1);
        b.source_str(node + 8, at, at + 1);
        node
    };
    let block = |b: &mut BufferBuilder, at: u32| {
        let name = ident(b, at + 2);
        let stmt = b.node(24, at + 2, at + 4);
        b.union(stmt + 8, 7, name);
        let block = b.node(32, at, at + 6);
        b.union_seq(block + 8, &[(6, stmt)]);
        block
    };

    let body: Vec<(u8, u32)> = (0..count)
        .map(|i| {
            let base = i * stride;
            let test = ident(&mut b, base + 4);
            let consequent = block(&mut b, base + 7);
            let alternate = block(&mut b, base + 19);
            let stmt = b.node(56, base, base + 25);
            b.union(stmt + 8, 7, test);
            b.union(stmt + 24, 0, consequent);
            b.union(stmt + 40, 0, alternate);
            (10, stmt)
        })
        .collect();
    b.program(0, count * stride, &body);
    b.finish()
}

fn decode(buffer: &[u8], source: &str) -> std::rc::Rc<RawTransferData> {
    decode_from_metadata(
        buffer.to_vec(),
        source,
        true,
        source.len() as u32,
        DecodeOptions::default(),
    )
    .unwrap()
}

/// Runs a visitor counting calls on the given keys and returns the count.
fn count_visits(data: &RawTransferData, keys: &[String]) -> usize {
    let calls = &Cell::new(0);
    let entries = keys.iter().map(move |key| {
        let callback: Callback<'_> = Box::new(move |_: NodeRef<'_>| calls.set(calls.get() + 1));
        (key, callback)
    });
    let mut visitor = CompiledVisitor::new(entries).unwrap();
    visitor.run(data).unwrap();
    drop(visitor);
    calls.get()
}

fn bench_decode_walk(c: &mut Criterion) {
    let all: Vec<String> = NodeKind::ALL.iter().map(|k| k.name().to_string()).collect();
    let identifiers = vec!["IdentifierReference".to_string()];
    let sparse = vec!["Hashbang".to_string()];

    let mut group = c.benchmark_group("decode_walk");

    for &count in &[100u32, 1_000, 10_000] {
        let (buffer, source) = make_buffer(count);

        group.bench_with_input(BenchmarkId::new("to_plain", count), &count, |b, _| {
            b.iter(|| {
                let data = decode(black_box(&buffer), &source);
                black_box(data.to_plain().unwrap());
            });
        });

        for (name, keys) in [("all", &all), ("identifiers", &identifiers), ("sparse", &sparse)] {
            group.bench_with_input(
                BenchmarkId::new(format!("visit_{name}"), count),
                keys,
                |b, keys| {
                    b.iter(|| {
                        let data = decode(black_box(&buffer), &source);
                        black_box(count_visits(&data, keys));
                    });
                },
            );
        }
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(8));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_decode_walk }
criterion_main!(benches);
