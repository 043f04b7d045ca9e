use crate::flat::{DecodeOptions, Table, TableField, TableWalker, read_vtable};

impl TableWalker<'_> {
	/// Assemble the table at `table_offset` from its vtable and classified slots.
	///
	/// A missing vtable yields an empty, truncated table. Slot offsets are
	/// relative to `table_offset`.
	pub fn build_table(&mut self, table_offset: usize, depth: u32) -> Table {
		let Some(vtable) = read_vtable(self.buffer, table_offset) else {
			log::debug!("table at {table_offset} has no readable vtable");
			return Table::empty(table_offset);
		};

		let mut fields = Vec::new();
		for (idx, slot_offset) in vtable.present_fields() {
			let value = self.resolve(table_offset + usize::from(slot_offset), table_offset, depth);
			fields.push(TableField {
				name: format!("field_{idx}").into_boxed_str(),
				slot_offset,
				value,
			});
		}

		Table {
			offset: table_offset,
			fields,
			vtable_size: vtable.size,
			object_size: vtable.object_size,
			truncated: vtable.truncated,
		}
	}
}

/// Decode the table at `table_offset` with default options and a fresh walker.
pub fn build_table(buffer: &[u8], table_offset: usize) -> Table {
	let options = DecodeOptions::default();
	TableWalker::new(buffer, &options).build_root(table_offset)
}
