use serde::{Serialize, Serializer};

use crate::flat::bytes::ByteView;
use crate::flat::{DecodeOptions, FlatError, HeaderFault, Result};

/// Leading magic of known containers that are not walked as tables.
pub const CONTAINER_MAGICS: [(&[u8; 4], FormatKind); 3] = [(b"TRPF", FormatKind::Trpf), (b"TRFS", FormatKind::Trfs), (b"TRMD", FormatKind::Trmd)];

/// Coarse guess at what a buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
	/// Root offset and vtable back-reference look plausible.
	FlatBuffer,
	/// `TRPF` pack container.
	Trpf,
	/// `TRFS` file system container.
	Trfs,
	/// `TRMD` model container.
	Trmd,
	/// Nothing recognized.
	Unknown,
}

impl FormatKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::FlatBuffer => "flatbuffer",
			Self::Trpf => "trpf",
			Self::Trfs => "trfs",
			Self::Trmd => "trmd",
			Self::Unknown => "unknown",
		}
	}

	/// Whether this is one of the magic-tagged containers.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Trpf | Self::Trfs | Self::Trmd)
	}
}

impl Serialize for FormatKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

/// Read the root table offset from bytes `0..4`.
///
/// This is the only check whose failure aborts a decode.
pub fn read_root_offset(buffer: &[u8]) -> Result<u32> {
	let len = buffer.len();
	let root_offset = ByteView::new(buffer)
		.u32_at(0)
		.ok_or(FlatError::InvalidHeader(HeaderFault::TooShort { len }))?;

	if root_offset == 0 {
		return Err(FlatError::InvalidHeader(HeaderFault::NullRoot));
	}
	if usize::try_from(root_offset).map_or(true, |offset| offset >= len) {
		return Err(FlatError::InvalidHeader(HeaderFault::RootOutOfRange { root_offset, len }));
	}

	Ok(root_offset)
}

/// Classify a buffer by container magic first, then by table-format plausibility.
pub fn detect_format(buffer: &[u8], options: &DecodeOptions) -> FormatKind {
	let view = ByteView::new(buffer);
	if let Some(code) = view.code4_at(0) {
		if let Some((_, kind)) = CONTAINER_MAGICS.iter().find(|(magic, _)| **magic == code) {
			return *kind;
		}
	}

	let Ok(root) = read_root_offset(buffer) else {
		return FormatKind::Unknown;
	};
	match view.u16_at(root as usize) {
		Some(relative) if relative > 0 && relative < options.max_vtable_offset => FormatKind::FlatBuffer,
		_ => FormatKind::Unknown,
	}
}
