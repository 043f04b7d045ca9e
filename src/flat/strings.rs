use std::collections::HashMap;

use crate::flat::bytes::{ByteView, utf8_ignoring_invalid};

/// Memo of strings decoded during one session, keyed by start offset.
///
/// A cache is only meaningful for the buffer it was filled from.
#[derive(Debug, Default)]
pub struct StringCache {
	entries: HashMap<usize, Box<str>>,
}

impl StringCache {
	/// Create an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Cached string starting at `offset`, if any.
	pub fn get(&self, offset: usize) -> Option<&str> {
		self.entries.get(&offset).map(AsRef::as_ref)
	}

	/// Whether `offset` has been decoded.
	pub fn contains(&self, offset: usize) -> bool {
		self.entries.contains_key(&offset)
	}

	/// Number of cached strings.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing has been cached yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Decode the NUL-terminated string at `offset`, memoized in `cache`.
///
/// The string ends at the next NUL byte or the buffer end. Invalid UTF-8 is
/// dropped. Out-of-range offsets decode to an empty string.
pub fn read_string(cache: &mut StringCache, buffer: &[u8], offset: usize) -> Box<str> {
	if let Some(hit) = cache.entries.get(&offset) {
		return hit.clone();
	}

	let text: Box<str> = utf8_ignoring_invalid(ByteView::new(buffer).cstr_at(offset)).into_boxed_str();
	cache.entries.insert(offset, text.clone());
	text
}
