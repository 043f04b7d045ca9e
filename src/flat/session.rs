use crate::flat::bytes::ByteView;
use crate::flat::pattern::to_hex;
use crate::flat::{
	Compression, DecodeOptions, DecodeReport, FailureSummary, FlatError, FormatKind, Result, RootSection, Table, TableWalker, detect_format,
	interesting_strings, read_root_offset, scan_strings, top_patterns,
};

/// One decode over one buffer.
///
/// Runs format detection, the structural walk, the string scan and pattern
/// analysis. The walk is skipped or replaced by a summary on failure; the
/// other passes always run.
pub struct DecodeSession<'a> {
	buffer: &'a [u8],
	options: DecodeOptions,
	compression: Compression,
}

impl<'a> DecodeSession<'a> {
	/// Create a session over an uncompressed buffer.
	pub fn new(buffer: &'a [u8], options: DecodeOptions) -> Self {
		Self {
			buffer,
			options,
			compression: Compression::None,
		}
	}

	/// Record the compression the buffer was unwrapped from.
	pub fn with_compression(mut self, compression: Compression) -> Self {
		self.compression = compression;
		self
	}

	/// Options in effect.
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	/// Run every pass and assemble the report.
	pub fn run(&self) -> DecodeReport {
		let format = detect_format(self.buffer, &self.options);
		log::debug!("decoding {} bytes, detected format {}", self.buffer.len(), format.as_str());

		let mut all_strings: Vec<_> = scan_strings(self.buffer, self.options.min_string_len).collect();
		let total_strings = all_strings.len();
		let interesting = interesting_strings(&all_strings, &self.options.interesting_keywords);
		if let Some(limit) = self.options.max_report_strings {
			all_strings.truncate(limit);
		}
		let patterns = top_patterns(self.buffer, self.options.pattern_window, self.options.top_patterns);
		log::debug!("found {total_strings} strings, {} interesting", interesting.len());

		let (root_offset, root_table, error) = match self.walk(format) {
			Ok((root_offset, table, limit)) => (Some(root_offset), RootSection::Table(table), limit),
			Err(err) => {
				log::warn!("structural decode failed: {err}");
				let summary = FailureSummary {
					format,
					header: to_hex(&self.buffer[..self.buffer.len().min(self.options.summary_header_bytes)]),
					common_patterns: patterns.clone(),
				};
				(None, RootSection::Summary(summary), Some(err))
			}
		};

		let header_fault = match &error {
			Some(FlatError::InvalidHeader(fault)) => Some(*fault),
			_ => None,
		};
		let success = matches!(root_table, RootSection::Table(_));

		DecodeReport {
			file_size: self.buffer.len(),
			format,
			compression: self.compression,
			root_offset,
			root_table,
			all_strings,
			total_strings,
			interesting_strings: interesting,
			patterns,
			success,
			error_kind: error.as_ref().map(FlatError::kind),
			error: error.map(|err| err.to_string()),
			header_fault,
		}
	}

	fn walk(&self, format: FormatKind) -> Result<(u32, Table, Option<FlatError>)> {
		if format.is_container() {
			let magic = ByteView::new(self.buffer).code4_at(0).unwrap_or_default();
			return Err(FlatError::UnsupportedContainer { magic });
		}

		let root_offset = read_root_offset(self.buffer)?;
		let mut walker = TableWalker::new(self.buffer, &self.options);
		let table = walker.build_root(root_offset as usize);
		log::debug!(
			"root table at {root_offset}: {} fields, {} slots resolved, {} strings decoded",
			table.fields.len(),
			walker.visited(),
			walker.strings().len()
		);
		Ok((root_offset, table, walker.take_limit_hit()))
	}
}

/// Decode with default options.
pub fn decode(buffer: &[u8]) -> DecodeReport {
	decode_with(buffer, &DecodeOptions::default())
}

/// Decode with explicit options.
pub fn decode_with(buffer: &[u8], options: &DecodeOptions) -> DecodeReport {
	DecodeSession::new(buffer, options.clone()).run()
}
