use crate::flat::bytes::ByteView;
use crate::flat::{FlatError, Result, Scalar, VTable, read_root_offset, read_vtable};

/// Root-table bytes reinterpreted by [`inspect_root`].
pub const ROOT_WINDOW: usize = 32;

/// One 4-byte word from the start of the root table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootWord {
	/// Offset relative to the root table start.
	pub offset: usize,
	/// Word readings.
	pub value: Scalar,
}

/// Low-level view of the root table header.
#[derive(Debug, Clone, PartialEq)]
pub struct RootInfo {
	/// Root table offset.
	pub root_offset: u32,
	/// Back-reference from the root table to its vtable.
	pub vtable_relative_offset: u16,
	/// Parsed root vtable.
	pub vtable: VTable,
	/// Leading root-table words.
	pub words: Vec<RootWord>,
}

/// Inspect the root table without classifying any field.
pub fn inspect_root(buffer: &[u8]) -> Result<RootInfo> {
	let root_offset = read_root_offset(buffer)?;
	let table_offset = root_offset as usize;
	let vtable = read_vtable(buffer, table_offset).ok_or(FlatError::TruncatedVTable { table_offset })?;
	let vtable_relative_offset = (table_offset - vtable.start) as u16;

	let view = ByteView::new(buffer);
	let words = (0..ROOT_WINDOW)
		.step_by(4)
		.map_while(|offset| {
			let raw = view.u32_at(table_offset + offset)?;
			Some(RootWord {
				offset,
				value: Scalar { raw },
			})
		})
		.collect();

	Ok(RootInfo {
		root_offset,
		vtable_relative_offset,
		vtable,
		words,
	})
}

#[cfg(test)]
mod tests;
