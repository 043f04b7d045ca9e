/// Base address added to a stored 32-bit value before it is dereferenced.
///
/// The on-disk convention cannot be recovered without a schema, so it is a
/// decode-time choice. Only [`PointerBase::Slot`] matches the usual encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerBase {
	/// Relative to the slot the value was read from.
	#[default]
	Slot,
	/// Relative to the enclosing table (or vector) start.
	TableStart,
	/// Absolute buffer offset.
	Absolute,
}

impl PointerBase {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Slot => "slot",
			Self::TableStart => "table",
			Self::Absolute => "absolute",
		}
	}

	/// Base address for a value read at `slot` inside a container starting at `container`.
	pub fn base(self, slot: usize, container: usize) -> usize {
		match self {
			Self::Slot => slot,
			Self::TableStart => container,
			Self::Absolute => 0,
		}
	}
}

/// Runtime limits and heuristics for one decode session.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum pointer-chase nesting depth below the root table.
	pub max_depth: u32,
	/// Slots resolved per decode before further slots become unknown.
	pub max_visited: usize,
	/// Vector lengths at or above this are treated as misclassified.
	pub max_vector_len: u32,
	/// Exclusive upper bound for a plausible vtable back-reference.
	pub max_vtable_offset: u16,
	/// Indirection convention for stored pointers.
	pub pointer_base: PointerBase,
	/// Minimum decoded length for scanned strings.
	pub min_string_len: usize,
	/// Byte width of pattern windows.
	pub pattern_window: usize,
	/// Number of patterns kept in the report.
	pub top_patterns: usize,
	/// Leading bytes rendered as hex in failure summaries.
	pub summary_header_bytes: usize,
	/// Cap on strings listed in the report; `None` keeps all.
	pub max_report_strings: Option<usize>,
	/// Lowercase keywords that mark a scanned string as interesting.
	pub interesting_keywords: Vec<String>,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 32,
			max_visited: 100_000,
			max_vector_len: 10_000,
			max_vtable_offset: 1000,
			pointer_base: PointerBase::Slot,
			min_string_len: 4,
			pattern_window: 4,
			top_patterns: 10,
			summary_header_bytes: 32,
			max_report_strings: None,
			interesting_keywords: ["pokemon", "trainer", "move", "item", "battle", "data", "scene", "arc", "world"]
				.into_iter()
				.map(str::to_owned)
				.collect(),
		}
	}
}

impl DecodeOptions {
	/// Preset that dereferences every stored pointer as an absolute offset.
	pub fn legacy_absolute() -> Self {
		Self {
			pointer_base: PointerBase::Absolute,
			..Self::default()
		}
	}
}
