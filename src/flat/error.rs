use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FlatError>;

/// Reasons a root header is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderFault {
	/// Fewer than four bytes were available.
	#[error("buffer too short for root offset ({len} bytes)")]
	TooShort {
		/// Buffer length.
		len: usize,
	},
	/// Root offset was zero.
	#[error("root offset is zero")]
	NullRoot,
	/// Root offset pointed at or past the buffer end.
	#[error("root offset {root_offset} out of range for {len} bytes")]
	RootOutOfRange {
		/// Parsed root offset.
		root_offset: u32,
		/// Buffer length.
		len: usize,
	},
}

/// Errors produced while loading, probing, and decoding table-format data.
#[derive(Debug, Error)]
pub enum FlatError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Report serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Root offset is missing or out of range.
	#[error("invalid header: {0}")]
	InvalidHeader(HeaderFault),
	/// Table has no readable vtable.
	#[error("truncated vtable for table at {table_offset}")]
	TruncatedVTable {
		/// Table offset whose vtable could not be read.
		table_offset: usize,
	},
	/// Pointer chase went deeper than the configured limit.
	#[error("recursion limit exceeded (max={max_depth})")]
	RecursionLimitExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Walk resolved as many slots as it was allowed to.
	#[error("visit budget exhausted (max={max_visited} slots)")]
	VisitBudgetExceeded {
		/// Configured slot budget.
		max_visited: usize,
	},
	/// Buffer starts with a container magic this decoder does not walk.
	#[error("unsupported container magic {}", render_magic(.magic))]
	UnsupportedContainer {
		/// Leading four bytes.
		magic: [u8; 4],
	},
	/// Decompression output exceeded the safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}

impl FlatError {
	/// Stable label for the error kind, used in reports.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Io(_) => "Io",
			Self::Json(_) => "Json",
			Self::InvalidHeader(_) => "InvalidHeader",
			Self::TruncatedVTable { .. } => "TruncatedVTable",
			Self::RecursionLimitExceeded { .. } => "RecursionLimitExceeded",
			Self::VisitBudgetExceeded { .. } => "VisitBudgetExceeded",
			Self::UnsupportedContainer { .. } => "UnsupportedContainer",
			Self::DecompressedTooLarge { .. } => "DecompressedTooLarge",
		}
	}
}

fn render_magic(magic: &[u8; 4]) -> String {
	magic
		.iter()
		.map(|byte| if byte.is_ascii_graphic() { char::from(*byte) } else { '.' })
		.collect()
}
