use serde_json::json;

use super::{DecodedValue, Scalar, Table, TableField, UnknownReason};

#[test]
fn scalar_exposes_all_readings() {
	let value = Scalar { raw: 0x3f80_0000 };
	assert_eq!(value.as_u32(), 0x3f80_0000);
	assert_eq!(value.as_f32(), 1.0);
	assert_eq!(Scalar { raw: u32::MAX }.as_i32(), -1);
}

#[test]
fn width_hint_picks_smallest_unsigned_width() {
	assert_eq!(Scalar { raw: 255 }.width_hint(), "uint8");
	assert_eq!(Scalar { raw: 256 }.width_hint(), "uint16");
	assert_eq!(Scalar { raw: 70_000 }.width_hint(), "uint32");
}

#[test]
fn table_serializes_fields_as_map_and_unknown_as_null() {
	let table = Table {
		offset: 12,
		fields: vec![
			TableField {
				name: "field_0".into(),
				slot_offset: 4,
				value: DecodedValue::String("hi".into()),
			},
			TableField {
				name: "field_2".into(),
				slot_offset: 8,
				value: DecodedValue::Vector(vec![
					DecodedValue::Scalar(Scalar { raw: 3 }),
					DecodedValue::Unknown(UnknownReason::NullOffset),
				]),
			},
		],
		vtable_size: 10,
		object_size: 12,
		truncated: false,
	};

	let json = serde_json::to_value(&table).expect("table serializes");
	assert_eq!(
		json,
		json!({
			"offset": 12,
			"fields": {"field_0": "hi", "field_2": [3, null]},
			"vtable_size": 10,
			"object_size": 12,
		})
	);
}

#[test]
fn truncated_flag_only_appears_when_set() {
	let json = serde_json::to_value(Table::empty(40)).expect("table serializes");
	assert_eq!(json["truncated"], true);
	assert_eq!(json["vtable_size"], 0);
}
