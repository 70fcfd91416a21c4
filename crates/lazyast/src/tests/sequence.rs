use alloc::{rc::Rc, vec::Vec};

use quickcheck::QuickCheck;

use crate::{
    Error, NodeVec, PropertyDescriptor, SeqKey, SequenceMutation, Statement, Value, View,
    tests::support::{empty_statements, if_else},
};

fn body(data: &crate::RawTransferData) -> Rc<NodeVec<Statement>> {
    data.program().unwrap().body().unwrap()
}

fn start(stmt: &Statement) -> u32 {
    stmt.node().span().unwrap().start
}

fn immutable(op: SequenceMutation) -> Error {
    Error::ImmutableSequenceMutation { op }
}

#[test]
fn in_place_mutation_fails() {
    let data = empty_statements(3);
    let body = body(&data);

    assert_eq!(body.set(0, Value::Null), Err(immutable(SequenceMutation::Set(0))));
    assert_eq!(body.set(2, Value::Null), Err(immutable(SequenceMutation::Set(2))));
    assert_eq!(body.set_len(0), Err(immutable(SequenceMutation::SetLen)));
    assert_eq!(body.push(Value::Null), Err(immutable(SequenceMutation::Push)));
    assert_eq!(body.pop().unwrap_err(), immutable(SequenceMutation::Pop));
    assert_eq!(body.insert(0, Value::Null), Err(immutable(SequenceMutation::Insert)));
    assert_eq!(body.remove(0).unwrap_err(), immutable(SequenceMutation::Remove));
    assert_eq!(body.reverse(), Err(immutable(SequenceMutation::Reverse)));
    assert_eq!(body.sort(), Err(immutable(SequenceMutation::Sort)));
    assert_eq!(
        body.set_property("length", Value::from(0.0)),
        Err(immutable(SequenceMutation::SetLen))
    );
    assert_eq!(
        body.set_property("1", Value::Null),
        Err(immutable(SequenceMutation::Set(1)))
    );
    assert_eq!(body.len(), 3);
}

#[test]
fn assignments_past_the_end_are_annotations() {
    let data = empty_statements(2);
    let body = body(&data);

    body.set(2, Value::from("two")).unwrap();
    body.set(7, Value::from(true)).unwrap();
    body.set_property("note", Value::from("n")).unwrap();
    body.set_property("01", Value::from("not an index")).unwrap();
    assert_eq!(body.len(), 2);
    assert_eq!(body.get(2).unwrap().map(|s| s.node_kind()), None);

    assert_eq!(body.auxiliary(&SeqKey::Index(2)), Some(Value::from("two")));
    assert_eq!(
        body.auxiliary(&SeqKey::Named("note".into())),
        Some(Value::from("n"))
    );
    assert_eq!(
        body.keys(),
        [
            SeqKey::Index(0),
            SeqKey::Index(1),
            SeqKey::Index(2),
            SeqKey::Index(7),
            SeqKey::Length,
            SeqKey::Named("01".into()),
            SeqKey::Named("note".into()),
        ]
    );
}

#[test]
fn descriptors_report_a_frozen_sequence() {
    let data = empty_statements(1);
    let body = body(&data);
    body.set(5, Value::Null).unwrap();

    let element = body.descriptor(&SeqKey::Index(0)).unwrap();
    assert_eq!(
        element,
        PropertyDescriptor {
            writable: false,
            enumerable: true,
            configurable: false,
        }
    );
    let length = body.descriptor(&SeqKey::Length).unwrap();
    assert!(!length.writable && !length.configurable);
    assert!(body.descriptor(&SeqKey::Index(5)).unwrap().writable);
    assert_eq!(body.descriptor(&SeqKey::Index(1)), None);
    assert_eq!(body.descriptor(&SeqKey::Named("x".into())), None);
}

#[test]
fn read_operations() {
    let data = empty_statements(5);
    let body = body(&data);

    assert_eq!(body.len(), 5);
    assert!(!body.is_empty());
    assert_eq!(body.first().unwrap().map(|s| start(&s)), Some(0));
    assert_eq!(body.last().unwrap().map(|s| start(&s)), Some(4));
    assert_eq!(body.at(-1).unwrap().map(|s| start(&s)), Some(4));
    assert_eq!(body.at(-5).unwrap().map(|s| start(&s)), Some(0));
    assert!(body.at(-6).unwrap().is_none());
    assert!(body.at(5).unwrap().is_none());

    assert_eq!(body.map(|s| start(&s)).unwrap(), [0, 1, 2, 3, 4]);
    assert_eq!(
        body.filter(|s| start(s) % 2 == 0).unwrap().iter().map(start).collect::<Vec<_>>(),
        [0, 2, 4]
    );
    assert_eq!(body.find(|s| start(s) > 2).unwrap().map(|s| start(&s)), Some(3));
    assert_eq!(body.position(|s| start(s) == 3).unwrap(), Some(3));
    assert_eq!(body.position(|s| start(s) == 9).unwrap(), None);
    assert_eq!(body.fold(0, |acc, s| acc + start(&s)).unwrap(), 10);
    assert_eq!(
        body.slice(1..3).unwrap().iter().map(start).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(
        body.to_reversed().unwrap().iter().map(start).collect::<Vec<_>>(),
        [4, 3, 2, 1, 0]
    );
    assert_eq!(
        body.to_sorted_by(|a, b| start(b).cmp(&start(a)))
            .unwrap()
            .iter()
            .map(start)
            .collect::<Vec<_>>(),
        [4, 3, 2, 1, 0]
    );
}

#[test]
fn copies_hold_the_cached_elements() {
    let data = empty_statements(3);
    let body = body(&data);
    let first = body.get(0).unwrap().unwrap().node();
    let copied = body.to_vec().unwrap();
    assert!(copied[0].node().ptr_eq(&first));
    let reversed = body.to_reversed().unwrap();
    assert!(reversed[2].node().ptr_eq(&first));
}

#[test]
fn concat_checks_the_session() {
    let one = empty_statements(2);
    let two = empty_statements(3);
    let body_one = body(&one);

    assert_eq!(body_one.concat(&body_one).unwrap().len(), 4);
    assert_eq!(body_one.concat(&body(&two)).unwrap_err(), Error::ForeignContext);
}

#[test]
fn empty_sequences() {
    let data = if_else();
    let comments = data.comments().unwrap();
    assert!(comments.is_empty());
    assert!(comments.first().unwrap().is_none());
    assert!(comments.last().unwrap().is_none());
    assert!(comments.at(-1).unwrap().is_none());
    assert_eq!(comments.to_plain().unwrap(), Value::Array(Vec::new()));
}

#[test]
fn runs_past_the_buffer_fail_on_access() {
    let mut b = crate::builder::BufferBuilder::new(";");
    let root = b.empty_root();
    b.vec(root + 96, 8, 1 << 20);
    let data = crate::tests::support::build(b, root, crate::DecodeOptions::default());
    let err = data.program().unwrap().body().unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { .. }), "{err:?}");
}

/// Property: index, negative index and slice access agree with a copy of the
/// whole sequence.
#[test]
fn reads_agree_with_to_vec_quickcheck() {
    fn prop(count: u8, index: i16, from: u8, to: u8) -> bool {
        let data = empty_statements(u32::from(count % 24));
        let body = body(&data);
        let all: Vec<u32> = body.to_vec().unwrap().iter().map(start).collect();
        let len = all.len();

        let expected_at = if index < 0 {
            len.checked_sub(usize::from(index.unsigned_abs()))
        } else {
            Some(usize::from(index.unsigned_abs()))
        }
        .and_then(|i| all.get(i).copied());
        let at = body.at(isize::from(index)).unwrap().map(|s| start(&s));

        let (from, to) = (usize::from(from) % 30, usize::from(to) % 30);
        let expected_slice: Vec<u32> = all
            .get(from.min(len)..to.clamp(from.min(len), len))
            .unwrap_or_default()
            .to_vec();
        let slice: Vec<u32> = body.slice(from..to).unwrap().iter().map(start).collect();

        at == expected_at && slice == expected_slice
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 2_000 } else { 300 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(u8, i16, u8, u8) -> bool);
}

#[test]
fn sequences_report_their_position() {
    let data = if_else();
    let program = data.program().unwrap();
    assert_eq!(program.body().unwrap().pos(), program.pos() + 96);
    assert!(Rc::ptr_eq(program.body().unwrap().ast(), data.ast()));
}
