use crate::flat::bytes::ByteView;
use crate::flat::{DecodeOptions, DecodedValue, TableWalker, UnknownReason};

impl TableWalker<'_> {
	/// Decode the length-prefixed vector of element pointers at `offset`.
	///
	/// Lengths at or above the configured cap yield an empty vector. Zero
	/// element offsets keep their position as [`UnknownReason::NullOffset`];
	/// elements past the buffer end are dropped.
	pub fn read_vector(&mut self, offset: usize, depth: u32) -> Vec<DecodedValue> {
		let view = ByteView::new(self.buffer);
		let Some(declared) = view.u32_at(offset) else {
			return Vec::new();
		};
		if declared >= self.options.max_vector_len {
			log::debug!("vector at {offset} declares {declared} elements, over cap {}", self.options.max_vector_len);
			return Vec::new();
		}

		let declared = declared as usize;
		let first = offset + 4;
		let readable = view.len().saturating_sub(first) / 4;
		let mut items = Vec::with_capacity(declared.min(readable));

		for idx in 0..declared {
			let slot = first + idx * 4;
			match view.u32_at(slot) {
				None => {
					log::debug!("vector at {offset} truncated after {idx} of {declared} elements");
					break;
				}
				Some(0) => items.push(DecodedValue::Unknown(UnknownReason::NullOffset)),
				Some(_) => items.push(self.resolve(slot, offset, depth)),
			}
		}

		items
	}
}

/// Decode the vector at `offset` with default options and a fresh walker.
pub fn read_vector(buffer: &[u8], offset: usize) -> Vec<DecodedValue> {
	let options = DecodeOptions::default();
	TableWalker::new(buffer, &options).read_vector(offset, 0)
}

#[cfg(test)]
mod tests;
