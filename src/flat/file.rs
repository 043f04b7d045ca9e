use std::fs;
use std::path::Path;

use crate::flat::compression::decode_bytes;
use crate::flat::{Compression, DecodeOptions, DecodeReport, DecodeSession, Result};

/// File loaded fully into memory, zstd-unwrapped when needed.
pub struct FlatFile {
	/// Compression found on disk.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl FlatFile {
	/// Read `path` in one go.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		let (compression, bytes) = decode_bytes(raw)?;
		log::debug!("loaded {} ({} bytes, {})", path.display(), bytes.len(), compression.as_str());
		Ok(Self { compression, bytes })
	}

	/// Decoded bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Start a decode session over this file.
	pub fn session(&self, options: DecodeOptions) -> DecodeSession<'_> {
		DecodeSession::new(&self.bytes, options).with_compression(self.compression)
	}

	/// Run a full decode with `options`.
	pub fn decode_report(&self, options: &DecodeOptions) -> DecodeReport {
		self.session(options.clone()).run()
	}
}
