use std::path::PathBuf;

use flatsleuth::flat::{DecodeOptions, FlatFile, Result, StringRecord, interesting_strings, scan_strings};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "min-len")]
	pub min_len: Option<usize>,
	/// Keep only strings containing this keyword (repeatable).
	#[arg(long = "grep")]
	pub grep: Vec<String>,
	#[arg(long)]
	pub limit: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// List printable NUL-terminated strings found anywhere in the file.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		min_len,
		grep,
		limit,
		json,
	} = args;

	let file = FlatFile::open(&path)?;
	let min_len = min_len.unwrap_or(DecodeOptions::default().min_string_len);
	let mut records: Vec<StringRecord> = scan_strings(file.bytes(), min_len).collect();
	if !grep.is_empty() {
		records = interesting_strings(&records, &grep);
	}
	let total = records.len();
	if let Some(limit) = limit {
		records.truncate(limit);
	}

	if json {
		return emit_json(&StringsJson {
			path: path.display().to_string(),
			total,
			strings: records,
		});
	}

	println!("path: {}", path.display());
	println!("strings: {total}");
	println!("offset\tlength\ttext");
	for record in &records {
		println!("{}\t{}\t{}", record.offset, record.length, record.text);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct StringsJson {
	path: String,
	total: usize,
	strings: Vec<StringRecord>,
}
