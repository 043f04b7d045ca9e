/// Bounds-checked little-endian reads at absolute offsets of one immutable buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
	bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
	/// Wrap a buffer.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes }
	}

	/// Total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Read one byte.
	pub fn byte_at(&self, at: usize) -> Option<u8> {
		self.bytes.get(at).copied()
	}

	/// Borrow exactly `n` bytes starting at `at`.
	pub fn slice(&self, at: usize, n: usize) -> Option<&'a [u8]> {
		let end = at.checked_add(n)?;
		self.bytes.get(at..end)
	}

	/// Read a little-endian `u16`.
	pub fn u16_at(&self, at: usize) -> Option<u16> {
		self.array_at::<2>(at).map(u16::from_le_bytes)
	}

	/// Read a little-endian `u32`.
	pub fn u32_at(&self, at: usize) -> Option<u32> {
		self.array_at::<4>(at).map(u32::from_le_bytes)
	}

	/// Read a four-byte code.
	pub fn code4_at(&self, at: usize) -> Option<[u8; 4]> {
		self.array_at::<4>(at)
	}

	/// Borrow bytes from `at` up to the next NUL byte or the buffer end.
	///
	/// Returns an empty slice when `at` is out of range.
	pub fn cstr_at(&self, at: usize) -> &'a [u8] {
		let rest = self.bytes.get(at..).unwrap_or(&[]);
		let end = rest.iter().position(|byte| *byte == 0).unwrap_or(rest.len());
		&rest[..end]
	}

	fn array_at<const N: usize>(&self, at: usize) -> Option<[u8; N]> {
		let raw = self.slice(at, N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Some(out)
	}
}

/// Decode UTF-8, dropping invalid sequences instead of replacing them.
pub fn utf8_ignoring_invalid(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len());
	for chunk in bytes.utf8_chunks() {
		out.push_str(chunk.valid());
	}
	out
}

#[cfg(test)]
mod tests;
