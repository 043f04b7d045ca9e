use serde::Serialize;

use crate::flat::bytes::utf8_ignoring_invalid;

/// Printable NUL-terminated run found in a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringRecord {
	/// Absolute offset of the first byte.
	pub offset: usize,
	/// Decoded text.
	#[serde(rename = "string")]
	pub text: String,
	/// Length of `text` in characters.
	pub length: usize,
}

/// Linear scan for printable runs of non-NUL bytes.
///
/// Clone the iterator (or call [`scan_strings`] again) to restart.
#[derive(Debug, Clone)]
pub struct StringScan<'a> {
	bytes: &'a [u8],
	pos: usize,
	min_length: usize,
}

impl Iterator for StringScan<'_> {
	type Item = StringRecord;

	fn next(&mut self) -> Option<Self::Item> {
		while self.pos < self.bytes.len() {
			let rest = &self.bytes[self.pos..];
			let Some(start) = rest.iter().position(|byte| *byte != 0) else {
				self.pos = self.bytes.len();
				return None;
			};
			let start = self.pos + start;
			let run = &self.bytes[start..];
			let end = start + run.iter().position(|byte| *byte == 0).unwrap_or(run.len());
			self.pos = end;

			let text = utf8_ignoring_invalid(&self.bytes[start..end]);
			let length = text.chars().count();
			if length >= self.min_length && is_printable(&text) {
				return Some(StringRecord { offset: start, text, length });
			}
		}
		None
	}
}

/// Scan the whole buffer for printable strings of at least `min_length` characters.
///
/// Independent of any table structure, so it also reports unreachable bytes.
pub fn scan_strings(buffer: &[u8], min_length: usize) -> StringScan<'_> {
	StringScan {
		bytes: buffer,
		pos: 0,
		min_length: min_length.max(1),
	}
}

/// Keep records whose lowercase text contains any of `keywords`.
pub fn interesting_strings<S: AsRef<str>>(records: &[StringRecord], keywords: &[S]) -> Vec<StringRecord> {
	records
		.iter()
		.filter(|record| {
			let lower = record.text.to_lowercase();
			keywords.iter().any(|keyword| lower.contains(&keyword.as_ref().to_lowercase()))
		})
		.cloned()
		.collect()
}

fn is_printable(text: &str) -> bool {
	text.chars()
		.all(|ch| ch == ' ' || !(ch.is_control() || ch.is_whitespace() || is_format(ch) || is_private_use(ch)))
}

/// Unicode general category `Cf`.
fn is_format(ch: char) -> bool {
	matches!(
		u32::from(ch),
		0x00AD
			| 0x0600..=0x0605
			| 0x061C
			| 0x06DD
			| 0x070F
			| 0x0890..=0x0891
			| 0x08E2
			| 0x180E
			| 0x200B..=0x200F
			| 0x202A..=0x202E
			| 0x2060..=0x2064
			| 0x2066..=0x206F
			| 0xFEFF
			| 0xFFF9..=0xFFFB
			| 0x110BD
			| 0x110CD
			| 0x13430..=0x1343F
			| 0x1BCA0..=0x1BCA3
			| 0x1D173..=0x1D17A
			| 0xE0001
			| 0xE0020..=0xE007F
	)
}

/// Unicode general category `Co`.
fn is_private_use(ch: char) -> bool {
	matches!(u32::from(ch), 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}
