//! Synthetic table-format buffers shared by workspace tests.

/// Little-endian byte buffer assembled by writing values at fixed positions.
///
/// Writes past the current end grow the buffer with zero bytes.
#[derive(Debug, Clone, Default)]
pub struct BufferBuilder {
	bytes: Vec<u8>,
}

impl BufferBuilder {
	/// Start from `len` zero bytes.
	pub fn with_len(len: usize) -> Self {
		Self { bytes: vec![0; len] }
	}

	/// Write the root table offset into bytes `0..4`.
	pub fn root(&mut self, table_offset: u32) -> &mut Self {
		self.u32_at(0, table_offset)
	}

	/// Write a little-endian `u16` at `at`.
	pub fn u16_at(&mut self, at: usize, value: u16) -> &mut Self {
		self.bytes_at(at, &value.to_le_bytes())
	}

	/// Write a little-endian `u32` at `at`.
	pub fn u32_at(&mut self, at: usize, value: u32) -> &mut Self {
		self.bytes_at(at, &value.to_le_bytes())
	}

	/// Copy raw bytes to `at`.
	pub fn bytes_at(&mut self, at: usize, data: &[u8]) -> &mut Self {
		let end = at + data.len();
		if self.bytes.len() < end {
			self.bytes.resize(end, 0);
		}
		self.bytes[at..end].copy_from_slice(data);
		self
	}

	/// Write a vtable header and its field slot offsets at `at`.
	pub fn vtable_at(&mut self, at: usize, object_size: u16, field_offsets: &[u16]) -> &mut Self {
		let size = 4 + 2 * field_offsets.len() as u16;
		self.u16_at(at, size);
		self.u16_at(at + 2, object_size);
		for (idx, offset) in field_offsets.iter().enumerate() {
			self.u16_at(at + 4 + idx * 2, *offset);
		}
		self
	}

	/// Write a table's backward vtable reference at `at`.
	pub fn table_at(&mut self, at: usize, vtable_at: usize) -> &mut Self {
		let relative = u16::try_from(at - vtable_at).expect("vtable within u16 range of table");
		self.u16_at(at, relative)
	}

	/// Write a NUL-terminated string at `at`.
	pub fn cstr_at(&mut self, at: usize, text: &str) -> &mut Self {
		self.bytes_at(at, text.as_bytes());
		self.bytes_at(at + text.len(), &[0])
	}

	/// Return the assembled bytes.
	pub fn build(&self) -> Vec<u8> {
		self.bytes.clone()
	}
}

/// Root table with `field_0 -> "hi"` and `field_1 = 42`, slot-relative pointers.
pub fn string_and_scalar_root() -> Vec<u8> {
	BufferBuilder::with_len(28)
		.root(12)
		.vtable_at(4, 12, &[4, 8])
		.table_at(12, 4)
		.u32_at(16, 8)
		.u32_at(20, 42)
		.cstr_at(24, "hi")
		.build()
}

/// Root table at 260 whose only field stores the absolute offset 260.
///
/// Decoding with absolute pointers makes the field point back at its own table.
pub fn self_referencing_root() -> Vec<u8> {
	BufferBuilder::with_len(268)
		.root(260)
		.vtable_at(4, 8, &[4])
		.table_at(260, 4)
		.u32_at(264, 260)
		.build()
}

/// Offsets of the three tables in [`three_table_chain`].
pub const CHAIN_TABLES: [usize; 3] = [260, 516, 772];

/// Three tables sharing one vtable, each pointing slot-relative at the next.
///
/// The last table holds the scalar `7`.
pub fn three_table_chain() -> Vec<u8> {
	let mut builder = BufferBuilder::with_len(780);
	builder.root(CHAIN_TABLES[0] as u32).vtable_at(4, 8, &[4]);
	for table in CHAIN_TABLES {
		builder.table_at(table, 4);
	}
	builder
		.u32_at(CHAIN_TABLES[0] + 4, (CHAIN_TABLES[1] - (CHAIN_TABLES[0] + 4)) as u32)
		.u32_at(CHAIN_TABLES[1] + 4, (CHAIN_TABLES[2] - (CHAIN_TABLES[1] + 4)) as u32)
		.u32_at(CHAIN_TABLES[2] + 4, 7)
		.build()
}

/// Element count of each vector in [`shared_vector_levels`].
///
/// Low byte zero and above the vtable-offset bound, so each target classifies as a vector.
pub const SHARED_VECTOR_LEN: u32 = 1024;

/// Root table at 12 whose only field points at the first of `levels` nested vectors.
///
/// Every element of a vector points slot-relative at the next vector, so the
/// next level is shared by all of them; the innermost vector holds
/// out-of-range scalars. An unbounded walk resolves about
/// `SHARED_VECTOR_LEN.pow(levels)` slots.
pub fn shared_vector_levels(levels: usize) -> Vec<u8> {
	let len = SHARED_VECTOR_LEN as usize;
	let vector_bytes = 4 + 4 * len;
	let first = 20;

	let mut builder = BufferBuilder::with_len(first + levels * vector_bytes);
	builder.root(12).vtable_at(4, 8, &[4]).table_at(12, 4).u32_at(16, (first - 16) as u32);
	for level in 0..levels {
		let start = first + level * vector_bytes;
		let next = start + vector_bytes;
		builder.u32_at(start, SHARED_VECTOR_LEN);
		for idx in 0..len {
			let slot = start + 4 + idx * 4;
			let value = if level + 1 < levels { (next - slot) as u32 } else { u32::MAX };
			builder.u32_at(slot, value);
		}
	}
	builder.build()
}
