use crate::flat::bytes::ByteView;

/// Parsed per-shape field slot layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTable {
	/// Absolute vtable offset.
	pub start: usize,
	/// Declared vtable size in bytes, header included.
	pub size: u16,
	/// Declared inline object size in bytes.
	pub object_size: u16,
	/// Slot offsets relative to the table start; `0` marks an absent field.
	pub field_offsets: Vec<u16>,
	/// Declared slots ran past the buffer end and were dropped.
	pub truncated: bool,
}

impl VTable {
	/// Present fields as `(slot_index, slot_offset)` pairs.
	pub fn present_fields(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
		self.field_offsets.iter().copied().enumerate().filter(|(_, offset)| *offset != 0)
	}
}

/// Locate and parse the vtable referenced backward from `table_offset`.
///
/// Returns `None` when the back-reference is zero or the vtable header is out
/// of range. Slots past the buffer end truncate the vtable instead of failing.
pub fn read_vtable(buffer: &[u8], table_offset: usize) -> Option<VTable> {
	let view = ByteView::new(buffer);
	let relative = view.u16_at(table_offset)?;
	if relative == 0 {
		return None;
	}

	let start = table_offset.checked_sub(usize::from(relative))?;
	let size = view.u16_at(start)?;
	let object_size = view.u16_at(start + 2)?;

	let declared = usize::from(size / 2).saturating_sub(2);
	let available = (view.len() - (start + 4)) / 2;
	let count = declared.min(available);

	let field_offsets = (0..count).filter_map(|slot| view.u16_at(start + 4 + slot * 2)).collect::<Vec<_>>();
	let truncated = field_offsets.len() < declared;
	if truncated {
		log::trace!("vtable at {start} declares {declared} slots, {} readable", field_offsets.len());
	}

	Some(VTable {
		start,
		size,
		object_size,
		field_offsets,
		truncated,
	})
}

#[cfg(test)]
mod tests;
