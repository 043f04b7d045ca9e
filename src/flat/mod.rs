mod bytes;
mod compression;
mod error;
mod file;
mod header;
mod options;
mod pattern;
mod report;
mod resolve;
mod root_info;
mod scan;
mod session;
mod strings;
mod table;
mod value;
mod vector;
mod vtable;

/// Compression detection result.
pub use compression::{Compression, decode_bytes};
/// Error and result aliases.
pub use error::{FlatError, HeaderFault, Result};
/// In-memory file abstraction.
pub use file::FlatFile;
/// Root offset parsing and format detection.
pub use header::{CONTAINER_MAGICS, FormatKind, detect_format, read_root_offset};
/// Decode limits and pointer conventions.
pub use options::{DecodeOptions, PointerBase};
/// Fixed-window byte frequency statistics.
pub use pattern::{PatternStat, top_patterns};
/// Decode report types.
pub use report::{DecodeReport, FailureSummary, RootSection};
/// Slot classification and the bounded walker.
pub use resolve::{SlotClass, TableWalker, classify_slot, resolve};
/// Low-level root table inspection.
pub use root_info::{ROOT_WINDOW, RootInfo, RootWord, inspect_root};
/// Whole-buffer string scan.
pub use scan::{StringRecord, StringScan, interesting_strings, scan_strings};
/// Decode session entry points.
pub use session::{DecodeSession, decode, decode_with};
/// Memoized string reads.
pub use strings::{StringCache, read_string};
/// Table assembly entry point.
pub use table::build_table;
/// Decoded value types.
pub use value::{DecodedValue, Scalar, Table, TableField, UnknownReason};
/// Vector decoding entry point.
pub use vector::read_vector;
/// VTable layout and reader.
pub use vtable::{VTable, read_vtable};
