use flatsleuth_testkit::BufferBuilder;

use super::read_vtable;

#[test]
fn parses_header_and_slot_offsets() {
	let buffer = flatsleuth_testkit::string_and_scalar_root();
	let vtable = read_vtable(&buffer, 12).expect("vtable parses");

	assert_eq!(vtable.start, 4);
	assert_eq!(vtable.size, 8);
	assert_eq!(vtable.object_size, 12);
	assert_eq!(vtable.field_offsets, vec![4, 8]);
	assert!(!vtable.truncated);
	assert_eq!(vtable.present_fields().collect::<Vec<_>>(), vec![(0, 4), (1, 8)]);
}

#[test]
fn zero_back_reference_has_no_vtable() {
	let buffer = BufferBuilder::with_len(16).root(8).build();
	assert_eq!(read_vtable(&buffer, 8), None);
}

#[test]
fn back_reference_before_buffer_start_has_no_vtable() {
	let buffer = BufferBuilder::with_len(16).root(8).u16_at(8, 12).build();
	assert_eq!(read_vtable(&buffer, 8), None);
}

#[test]
fn vtable_header_past_end_has_no_vtable() {
	// Header would start three bytes before the end.
	let buffer = BufferBuilder::with_len(12).u16_at(10, 1).build();
	assert_eq!(read_vtable(&buffer, 10), None);
	assert_eq!(read_vtable(&buffer, 40), None);
}

#[test]
fn oversized_declaration_truncates_silently() {
	let buffer = BufferBuilder::with_len(16).root(8).u16_at(4, 200).u16_at(6, 8).u16_at(8, 4).build();
	let vtable = read_vtable(&buffer, 8).expect("vtable parses");

	assert!(vtable.truncated);
	assert_eq!(vtable.size, 200);
	assert_eq!(vtable.field_offsets.len(), 4);
	assert_eq!(vtable.field_offsets[0], 4);
}

#[test]
fn missing_slot_offsets_are_absent_fields() {
	let buffer = BufferBuilder::with_len(24).root(16).vtable_at(4, 8, &[0, 4, 0]).table_at(16, 4).build();
	let vtable = read_vtable(&buffer, 16).expect("vtable parses");

	assert_eq!(vtable.present_fields().collect::<Vec<_>>(), vec![(1, 4)]);
}
