use flatsleuth_testkit::BufferBuilder;

use super::read_vector;
use crate::flat::{DecodeOptions, DecodedValue, Scalar, TableWalker, UnknownReason};

#[test]
fn adversarial_length_yields_empty_vector() {
	let buffer = BufferBuilder::with_len(64).u32_at(8, u32::MAX).build();
	assert!(read_vector(&buffer, 8).is_empty());
}

#[test]
fn length_at_cap_yields_empty_vector() {
	let buffer = BufferBuilder::with_len(64).u32_at(8, 10_000).build();
	assert!(read_vector(&buffer, 8).is_empty());

	let options = DecodeOptions {
		max_vector_len: 2,
		..DecodeOptions::default()
	};
	let buffer = BufferBuilder::with_len(64).u32_at(8, 2).build();
	assert!(TableWalker::new(&buffer, &options).read_vector(8, 0).is_empty());
}

#[test]
fn elements_are_resolved_and_null_offsets_kept() {
	let buffer = BufferBuilder::with_len(32)
		.u32_at(8, 3)
		.u32_at(12, 0)
		.u32_at(16, 12)
		.u32_at(20, 99)
		.cstr_at(28, "abc")
		.build();

	assert_eq!(
		read_vector(&buffer, 8),
		vec![
			DecodedValue::Unknown(UnknownReason::NullOffset),
			DecodedValue::String("abc".into()),
			DecodedValue::Scalar(Scalar { raw: 99 }),
		]
	);
}

#[test]
fn elements_past_end_are_dropped() {
	let buffer = BufferBuilder::with_len(20).u32_at(8, 5).u32_at(12, 1000).u32_at(16, 1000).build();
	let items = read_vector(&buffer, 8);

	assert_eq!(items.len(), 2);
	assert!(items.iter().all(|item| matches!(item, DecodedValue::Scalar(_))));
}

#[test]
fn unreadable_length_yields_empty_vector() {
	assert!(read_vector(&[1, 2, 3], 0).is_empty());
	assert!(read_vector(&[0; 8], 6).is_empty());
}
