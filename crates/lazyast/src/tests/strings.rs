use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use rstest::rstest;

use crate::{DecodeOptions, Str, tests::support::with_hashbang};

fn hashbang_value(data: &crate::RawTransferData) -> Str {
    data.program()
        .unwrap()
        .hashbang()
        .unwrap()
        .expect("hashbang should be present")
        .value()
        .unwrap()
}

fn options(ascii_fast_path: bool, short_string_threshold: usize) -> DecodeOptions {
    DecodeOptions {
        ascii_fast_path,
        short_string_threshold,
        ..Default::default()
    }
}

#[test]
fn ascii_source_strings_share_the_source_text() {
    let data = with_hashbang("#!/usr/bin/env node", DecodeOptions::default(), |b, pos| {
        b.source_str(pos, 2, 19);
    });
    let value = hashbang_value(&data);
    assert_eq!(value, "/usr/bin/env node");
    assert!(value.shares_source(crate::View::ast(&*data).source_text()));
}

#[test]
fn disabled_fast_path_copies() {
    let data = with_hashbang("#!node", options(false, 50), |b, pos| {
        b.source_str(pos, 2, 6);
    });
    let value = hashbang_value(&data);
    assert_eq!(value, "node");
    assert!(!value.shares_source(crate::View::ast(&*data).source_text()));
}

#[test]
fn zero_length_never_follows_the_pointer() {
    let data = with_hashbang("#!", DecodeOptions::default(), |b, pos| {
        b.u64(pos, 0xFFFF_FFFF_FFFF_FFF0);
        b.u32(pos + 8, 0);
    });
    assert_eq!(hashbang_value(&data), "");
}

#[test]
fn strings_past_the_buffer_fail() {
    let data = with_hashbang("#!", DecodeOptions::default(), |b, pos| {
        b.pointer(pos, 0x00FF_FFFF);
        b.u32(pos + 8, 4);
    });
    let err = data.program().unwrap().hashbang().unwrap().unwrap().value().unwrap_err();
    assert!(matches!(err, crate::Error::OutOfBounds { .. }), "{err:?}");
}

#[rstest]
#[case::short_ascii("plain", 50)]
#[case::short_multibyte("héllo wörld", 50)]
#[case::long_ascii("a fairly long string that goes past the short string threshold", 8)]
#[case::long_multibyte("日本語のテキストはとても長いかもしれません", 8)]
#[case::threshold_zero("x", 0)]
#[case::multibyte_at_start("ñ", 50)]
#[case::emoji("🦀 crab", 3)]
fn appended_strings_decode_on_every_path(#[case] text: &str, #[case] threshold: usize) {
    for fast in [true, false] {
        let data = with_hashbang("#!", options(fast, threshold), |b, pos| b.str(pos, text));
        assert_eq!(hashbang_value(&data), text, "fast={fast} threshold={threshold}");
    }
}

#[rstest]
#[case::lone_continuation(b"ab\x80cd", "ab\u{FFFD}cd")]
#[case::truncated_sequence(b"\xE6\x97", "\u{FFFD}")]
#[case::invalid_after_ascii(b"ok \xFF", "ok \u{FFFD}")]
fn invalid_utf8_is_replaced(#[case] bytes: &[u8], #[case] expected: &str) {
    for threshold in [0, 50] {
        let data = with_hashbang("#!", options(true, threshold), |b, pos| b.raw_str(pos, bytes));
        assert_eq!(hashbang_value(&data), expected, "threshold={threshold}");
    }
}

/// Property: slicing ASCII source text, copying it out byte by byte, and bulk
/// decoding all agree.
#[test]
fn ascii_paths_agree_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(raw: Vec<u8>, threshold: u8) -> bool {
        let text: String = raw.iter().map(|b| char::from(b % 0x80)).collect();
        let source = alloc::format!("#!{text}");
        #[allow(clippy::cast_possible_truncation)]
        let end = source.len() as u32;

        let decoded: Vec<Str> = [(true, 50), (false, 50), (false, usize::from(threshold))]
            .into_iter()
            .map(|(fast, limit)| {
                let data = with_hashbang(&source, options(fast, limit), |b, pos| {
                    b.source_str(pos, 2, end);
                });
                hashbang_value(&data)
            })
            .collect();
        decoded.iter().all(|value| *value == *text.as_str())
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 2_000 } else { 200 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}

/// Property: arbitrary text stored outside the source decodes back to itself
/// whatever the threshold.
#[test]
fn appended_text_round_trips_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, threshold: u8) -> bool {
        let data = with_hashbang("#!", options(true, usize::from(threshold)), |b, pos| {
            b.str(pos, &text);
        });
        hashbang_value(&data) == *text.as_str()
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 2_000 } else { 200 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String, u8) -> bool);
}
