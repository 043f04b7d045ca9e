use flatsleuth_testkit::BufferBuilder;

use super::inspect_root;
use crate::flat::FlatError;

#[test]
fn reads_root_vtable_and_words() {
	let buffer = flatsleuth_testkit::string_and_scalar_root();
	let info = inspect_root(&buffer).expect("root info");

	assert_eq!(info.root_offset, 12);
	assert_eq!(info.vtable_relative_offset, 8);
	assert_eq!(info.vtable.start, 4);
	assert_eq!(info.vtable.field_offsets, vec![4, 8]);

	// 16 bytes remain after the root table start.
	assert_eq!(info.words.len(), 4);
	assert_eq!(info.words[2].offset, 8);
	assert_eq!(info.words[2].value.as_u32(), 42);
}

#[test]
fn missing_root_vtable_is_reported() {
	let buffer = BufferBuilder::with_len(16).root(8).build();
	let err = inspect_root(&buffer).expect_err("root info fails");
	assert!(matches!(err, FlatError::TruncatedVTable { table_offset: 8 }));
}

#[test]
fn invalid_header_propagates() {
	let err = inspect_root(&[1, 2]).expect_err("root info fails");
	assert_eq!(err.kind(), "InvalidHeader");
}
