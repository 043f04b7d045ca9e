#![allow(missing_docs)]

use flatsleuth::flat::{
	DecodeOptions, DecodedValue, FlatError, FlatFile, HeaderFault, StringCache, TableWalker, build_table, decode, read_root_offset, read_string,
	read_vector, scan_strings, top_patterns,
};
use flatsleuth_testkit::{BufferBuilder, string_and_scalar_root};

#[test]
fn short_buffers_never_panic() {
	for len in 0..4 {
		let report = decode(&vec![0xFF; len]);
		assert!(!report.success);
		assert_eq!(report.error_kind, Some("InvalidHeader"));
	}
}

#[test]
fn root_offset_is_the_leading_word() {
	let mut buffer = vec![0_u8; 300];
	buffer[..4].copy_from_slice(&299_u32.to_le_bytes());
	assert_eq!(read_root_offset(&buffer).expect("valid root"), 299);

	buffer[..4].copy_from_slice(&300_u32.to_le_bytes());
	assert!(matches!(
		read_root_offset(&buffer),
		Err(FlatError::InvalidHeader(HeaderFault::RootOutOfRange { root_offset: 300, len: 300 }))
	));
}

#[test]
fn string_reads_are_memoized() {
	let buffer = string_and_scalar_root();
	let mut cache = StringCache::new();

	let first = read_string(&mut cache, &buffer, 24);
	assert!(cache.contains(24));
	let second = read_string(&mut cache, &buffer, 24);
	assert_eq!(first, second);
	assert_eq!(cache.len(), 1);
}

#[test]
fn adversarial_vector_length_is_empty() {
	let buffer = BufferBuilder::with_len(16).u32_at(4, u32::MAX).build();
	assert!(read_vector(&buffer, 4).is_empty());

	let options = DecodeOptions::default();
	let mut walker = TableWalker::new(&buffer, &options);
	assert!(walker.read_vector(4, 0).is_empty());
}

#[test]
fn vtable_past_end_keeps_in_bounds_fields() {
	let buffer = BufferBuilder::with_len(16)
		.root(8)
		.u16_at(4, 200)
		.u16_at(6, 8)
		.table_at(8, 4)
		.u32_at(12, 5)
		.build();

	let table = build_table(&buffer, 8);
	assert!(table.truncated);
	assert_eq!(table.field("field_0").and_then(scalar_value), Some(5));
	assert!(table.fields.iter().all(|field| field.name.as_ref() != "field_1"));
}

#[test]
fn scanner_example_matches() {
	let found: Vec<_> = scan_strings(b"\x00abcd\x00\x00ef\x00", 4).collect();
	let json = serde_json::to_value(&found).expect("serialize strings");
	assert_eq!(json, serde_json::json!([{"offset": 1, "string": "abcd", "length": 4}]));
}

#[test]
fn pattern_example_matches() {
	let mut buffer = [0xAA, 0xBB, 0xCC, 0xDD].repeat(40);
	buffer.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);

	let top = top_patterns(&buffer, 4, 10);
	assert_eq!(top[0].hex(), "aabbccdd");
	assert_eq!(top[0].count, 40);
}

#[test]
fn file_round_trip_through_disk() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = dir.path().join("root.bin");
	std::fs::write(&path, string_and_scalar_root()).expect("fixture written");

	let file = FlatFile::open(&path).expect("file opens");
	let report = file.decode_report(&DecodeOptions::default());
	assert!(report.success);
	assert_eq!(report.compression.as_str(), "none");
	let root = report.root_table().expect("root table");
	assert_eq!(root.field("field_0"), Some(&DecodedValue::String("hi".into())));
}

fn scalar_value(value: &DecodedValue) -> Option<u32> {
	match value {
		DecodedValue::Scalar(scalar) => Some(scalar.as_u32()),
		_ => None,
	}
}
