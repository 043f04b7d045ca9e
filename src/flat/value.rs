use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

/// Inline 32-bit slot value with its possible readings.
///
/// Without a schema there is no way to tell which reading is right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
	/// Raw little-endian word.
	pub raw: u32,
}

impl Scalar {
	/// Unsigned reading.
	pub fn as_u32(self) -> u32 {
		self.raw
	}

	/// Two's-complement reading.
	pub fn as_i32(self) -> i32 {
		self.raw as i32
	}

	/// IEEE-754 reading.
	pub fn as_f32(self) -> f32 {
		f32::from_bits(self.raw)
	}

	/// Smallest unsigned width that holds the value.
	pub fn width_hint(self) -> &'static str {
		if self.raw <= u32::from(u8::MAX) {
			"uint8"
		} else if self.raw <= u32::from(u16::MAX) {
			"uint16"
		} else {
			"uint32"
		}
	}
}

/// Why a value could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
	/// A read at `at` ran past the buffer end.
	OutOfBounds {
		/// Offset of the failed read.
		at: usize,
	},
	/// Vector element offset was zero.
	NullOffset,
	/// Chase was cut at the depth limit.
	RecursionLimit {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Walk ran out of its slot budget before reaching this slot.
	BudgetExhausted {
		/// Configured slot budget.
		max_visited: usize,
	},
	/// Target offset was already on the current chase path.
	Cycle {
		/// Revisited offset.
		offset: usize,
	},
}

impl fmt::Display for UnknownReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OutOfBounds { at } => write!(f, "out of bounds at {at}"),
			Self::NullOffset => f.write_str("null offset"),
			Self::RecursionLimit { max_depth } => write!(f, "recursion limit {max_depth}"),
			Self::BudgetExhausted { max_visited } => write!(f, "visit budget {max_visited} exhausted"),
			Self::Cycle { offset } => write!(f, "cycle at {offset}"),
		}
	}
}

/// Heuristically classified slot content.
///
/// Every variant is a best guess: a string may really be a table, a scalar may
/// really be a pointer. Consumers should treat labels as hints.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
	/// Inline scalar.
	Scalar(Scalar),
	/// NUL-terminated string reached through a pointer.
	String(Box<str>),
	/// Length-prefixed vector reached through a pointer.
	Vector(Vec<DecodedValue>),
	/// Nested table reached through a pointer.
	Table(Table),
	/// Value that could not be decoded.
	Unknown(UnknownReason),
}

impl DecodedValue {
	/// Short label for the classified kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::String(_) => "string",
			Self::Vector(_) => "vector",
			Self::Table(_) => "table",
			Self::Unknown(_) => "unknown",
		}
	}

	/// Whether this is an [`DecodedValue::Unknown`] placeholder.
	pub fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown(_))
	}
}

impl Serialize for DecodedValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Scalar(value) => serializer.serialize_u32(value.raw),
			Self::String(text) => serializer.serialize_str(text),
			Self::Vector(items) => serializer.collect_seq(items),
			Self::Table(table) => table.serialize(serializer),
			Self::Unknown(_) => serializer.serialize_none(),
		}
	}
}

/// One present field of a decoded table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableField {
	/// Synthetic `field_N` name; `N` is the vtable slot index.
	pub name: Box<str>,
	/// Byte offset of the slot relative to the table start.
	pub slot_offset: u16,
	/// Classified slot content.
	pub value: DecodedValue,
}

/// Decoded table with synthetic field names.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
	/// Absolute table offset.
	pub offset: usize,
	/// Present fields in vtable order.
	pub fields: Vec<TableField>,
	/// Declared vtable size in bytes (0 when no vtable was readable).
	pub vtable_size: u16,
	/// Declared inline object size in bytes.
	pub object_size: u16,
	/// The vtable was missing or cut short by the buffer end.
	pub truncated: bool,
}

impl Table {
	/// Table with no readable vtable.
	pub fn empty(offset: usize) -> Self {
		Self {
			offset,
			fields: Vec::new(),
			vtable_size: 0,
			object_size: 0,
			truncated: true,
		}
	}

	/// Look up a field by synthetic name.
	pub fn field(&self, name: &str) -> Option<&DecodedValue> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}

impl Serialize for Table {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let len = if self.truncated { 5 } else { 4 };
		let mut out = serializer.serialize_struct("Table", len)?;
		out.serialize_field("offset", &self.offset)?;
		out.serialize_field("fields", &FieldMap(&self.fields))?;
		out.serialize_field("vtable_size", &self.vtable_size)?;
		out.serialize_field("object_size", &self.object_size)?;
		if self.truncated {
			out.serialize_field("truncated", &true)?;
		}
		out.end()
	}
}

struct FieldMap<'a>(&'a [TableField]);

impl Serialize for FieldMap<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for field in self.0 {
			map.serialize_entry(field.name.as_ref(), &field.value)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests;
