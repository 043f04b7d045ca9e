use std::path::PathBuf;

use flatsleuth::flat::{DecodeOptions, FlatFile, PatternStat, Result, top_patterns};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub window: Option<usize>,
	#[arg(long)]
	pub top: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Print the most frequent non-overlapping byte windows.
pub fn run(args: Args) -> Result<()> {
	let Args { path, window, top, json } = args;

	let defaults = DecodeOptions::default();
	let window = window.unwrap_or(defaults.pattern_window);
	let top = top.unwrap_or(defaults.top_patterns);

	let file = FlatFile::open(&path)?;
	let patterns = top_patterns(file.bytes(), window, top);

	if json {
		return emit_json(&PatternsJson {
			path: path.display().to_string(),
			window,
			patterns,
		});
	}

	println!("path: {}", path.display());
	println!("window: {window}");
	for stat in &patterns {
		println!("  {}: {}", stat.hex(), stat.count);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct PatternsJson {
	path: String,
	window: usize,
	patterns: Vec<PatternStat>,
}
