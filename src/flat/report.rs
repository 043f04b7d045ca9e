use serde::Serialize;

use crate::flat::{Compression, FormatKind, HeaderFault, PatternStat, Result, StringRecord, Table};

/// Stand-in for the root table when the structural walk did not run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureSummary {
	/// Detected format.
	pub format: FormatKind,
	/// Leading buffer bytes as lowercase hex.
	pub header: String,
	/// Most common byte windows.
	pub common_patterns: Vec<PatternStat>,
}

/// Root section of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RootSection {
	/// Decoded root table.
	Table(Table),
	/// Summary used after a structural failure.
	Summary(FailureSummary),
}

/// Full result of one decode session.
///
/// Always produced, even for unreadable input; `success` tells whether
/// `root_table` holds a decoded tree. A decoded tree cut short by a walk
/// limit keeps `success` and names the limit in `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
	/// Decoded buffer length.
	pub file_size: usize,
	/// Detected format.
	pub format: FormatKind,
	/// Compression the buffer was wrapped in.
	pub compression: Compression,
	/// Root table offset when the header was valid.
	pub root_offset: Option<u32>,
	/// Decoded root table or failure summary.
	pub root_table: RootSection,
	/// Scanned strings, possibly capped.
	pub all_strings: Vec<StringRecord>,
	/// Number of scanned strings before any cap.
	pub total_strings: usize,
	/// Scanned strings matching a keyword.
	pub interesting_strings: Vec<StringRecord>,
	/// Most common byte windows.
	pub patterns: Vec<PatternStat>,
	/// Whether the structural walk ran.
	pub success: bool,
	/// Rendered error for a failed or truncated walk.
	pub error: Option<String>,
	/// Stable error label for a failed or truncated walk.
	pub error_kind: Option<&'static str>,
	/// Root header rejection, kept for callers that map it to an error.
	#[serde(skip)]
	pub header_fault: Option<HeaderFault>,
}

impl DecodeReport {
	/// Decoded root table, if the walk ran.
	pub fn root_table(&self) -> Option<&Table> {
		match &self.root_table {
			RootSection::Table(table) => Some(table),
			RootSection::Summary(_) => None,
		}
	}

	/// Failure summary, if the walk did not run.
	pub fn summary(&self) -> Option<&FailureSummary> {
		match &self.root_table {
			RootSection::Table(_) => None,
			RootSection::Summary(summary) => Some(summary),
		}
	}

	/// Whether the report failed on the root header.
	pub fn is_invalid_header(&self) -> bool {
		self.header_fault.is_some()
	}

	/// Render as indented JSON.
	pub fn to_json_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

#[cfg(test)]
mod tests;
