use flatsleuth_testkit::{BufferBuilder, string_and_scalar_root};
use serde_json::json;

use crate::flat::{DecodeOptions, DecodedValue, FormatKind, HeaderFault, RootSection, decode, decode_with};

#[test]
fn decodes_string_and_scalar_root() {
	let report = decode(&string_and_scalar_root());

	assert!(report.success);
	assert_eq!(report.error, None);
	assert_eq!(report.format, FormatKind::FlatBuffer);
	assert_eq!(report.root_offset, Some(12));
	assert_eq!(report.file_size, 28);

	let json = serde_json::to_value(&report).expect("serialize report");
	assert_eq!(json["root_table"]["fields"], json!({"field_0": "hi", "field_1": 42}));
	assert_eq!(json["root_table"]["vtable_size"], 8);
	assert_eq!(json["root_table"]["object_size"], 12);
	assert!(json["root_table"].get("truncated").is_none());
	assert_eq!(json["error"], serde_json::Value::Null);
	assert_eq!(json["compression"], "none");
}

#[test]
fn short_buffers_fail_on_header_but_still_report() {
	for buffer in [&b""[..], b"\x01", b"\x01\x02\x03"] {
		let report = decode(buffer);
		assert!(!report.success);
		assert_eq!(report.error_kind, Some("InvalidHeader"));
		assert!(report.is_invalid_header());
		assert_eq!(report.header_fault, Some(HeaderFault::TooShort { len: buffer.len() }));
		assert_eq!(report.root_offset, None);
		assert!(report.root_table().is_none());
		assert!(report.all_strings.is_empty());
	}
}

#[test]
fn out_of_range_root_keeps_strings_and_patterns() {
	let buffer = BufferBuilder::with_len(48).root(4096).cstr_at(8, "battle_scene").build();
	let report = decode(&buffer);

	assert!(!report.success);
	assert_eq!(report.error_kind, Some("InvalidHeader"));
	assert_eq!(report.total_strings, 1);
	assert_eq!(report.interesting_strings.len(), 1);
	assert!(!report.patterns.is_empty());

	let summary = report.summary().expect("failure summary");
	assert_eq!(summary.format, FormatKind::Unknown);
	assert_eq!(summary.header.len(), 64);
	assert!(summary.header.starts_with("00100000"));
	assert_eq!(summary.common_patterns, report.patterns);
}

#[test]
fn container_magic_skips_walk() {
	let buffer = BufferBuilder::with_len(16).bytes_at(0, b"TRPF").cstr_at(8, "world").build();
	let report = decode(&buffer);

	assert!(!report.success);
	assert_eq!(report.format, FormatKind::Trpf);
	assert_eq!(report.error_kind, Some("UnsupportedContainer"));
	assert_eq!(report.error.as_deref(), Some("unsupported container magic TRPF"));
	assert!(!report.is_invalid_header());
	assert_eq!(report.all_strings.len(), 2);

	let json = serde_json::to_value(&report).expect("serialize report");
	assert_eq!(json["root_table"]["format"], "trpf");
}

#[test]
fn missing_root_vtable_yields_truncated_table() {
	let buffer = BufferBuilder::with_len(16).root(8).build();
	let report = decode(&buffer);

	assert!(report.success);
	assert_eq!(report.format, FormatKind::Unknown);
	let RootSection::Table(table) = &report.root_table else {
		panic!("expected root table");
	};
	assert!(table.truncated);
	assert!(table.fields.is_empty());

	let json = serde_json::to_value(&report).expect("serialize report");
	assert_eq!(json["root_table"]["truncated"], true);
}

#[test]
fn string_cap_keeps_total() {
	let buffer = BufferBuilder::with_len(4)
		.root(1)
		.cstr_at(4, "first")
		.cstr_at(10, "second")
		.cstr_at(17, "third")
		.build();
	let options = DecodeOptions {
		max_report_strings: Some(1),
		..DecodeOptions::default()
	};
	let report = decode_with(&buffer, &options);

	assert_eq!(report.total_strings, 3);
	assert_eq!(report.all_strings.len(), 1);
	assert_eq!(report.all_strings[0].text, "first");
}

#[test]
fn nested_unknowns_serialize_as_null() {
	let buffer = flatsleuth_testkit::self_referencing_root();
	let report = decode_with(&buffer, &DecodeOptions::legacy_absolute());

	let table = report.root_table().expect("root table");
	assert!(matches!(table.field("field_0"), Some(DecodedValue::Unknown(_))));
	let json = serde_json::to_value(&report).expect("serialize report");
	assert_eq!(json["root_table"]["fields"]["field_0"], serde_json::Value::Null);
	assert!(json.get("header_fault").is_none());
}

#[test]
fn walk_limit_keeps_decoded_tree() {
	let options = DecodeOptions {
		max_visited: 1,
		..DecodeOptions::default()
	};
	let report = decode_with(&string_and_scalar_root(), &options);

	assert!(report.success);
	assert_eq!(report.error_kind, Some("VisitBudgetExceeded"));
	assert_eq!(report.error.as_deref(), Some("visit budget exhausted (max=1 slots)"));
	let table = report.root_table().expect("root table");
	assert_eq!(table.field("field_0"), Some(&DecodedValue::String("hi".into())));
	assert!(table.field("field_1").is_some_and(DecodedValue::is_unknown));
}

#[test]
fn pretty_json_round_trips_through_value() {
	let report = decode(&string_and_scalar_root());
	let text = report.to_json_pretty().expect("render json");
	let parsed: serde_json::Value = serde_json::from_str(&text).expect("parse json");
	assert_eq!(parsed["total_strings"], report.total_strings);
}
