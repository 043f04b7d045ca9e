use std::path::PathBuf;

use flatsleuth::flat::{DecodeOptions, FlatFile, Result, RootInfo, detect_format, inspect_root};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the root offset, root vtable, and leading root-table words.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let file = FlatFile::open(&path)?;
	let format = detect_format(file.bytes(), &DecodeOptions::default());
	let info = inspect_root(file.bytes())?;

	if json {
		return print_json(&path, format.as_str(), file.bytes().len(), &info);
	}

	println!("path: {}", path.display());
	println!("file_size: {}", file.bytes().len());
	println!("format: {}", format.as_str());
	println!("root_offset: {}", info.root_offset);
	println!("vtable_relative_offset: {}", info.vtable_relative_offset);
	println!("vtable_start: {}", info.vtable.start);
	println!("vtable_size: {}", info.vtable.size);
	println!("object_size: {}", info.vtable.object_size);
	println!("vtable_truncated: {}", info.vtable.truncated);
	println!("fields: {}", info.vtable.field_offsets.len());
	for (idx, offset) in info.vtable.field_offsets.iter().enumerate() {
		println!("  field_{idx}: {offset}");
	}
	println!("words:");
	println!("  off\tu32\ti32\tf32");
	for word in &info.words {
		println!(
			"  +{}\t{}\t{}\t{}",
			word.offset,
			word.value.as_u32(),
			word.value.as_i32(),
			word.value.as_f32()
		);
	}

	Ok(())
}

fn print_json(path: &std::path::Path, format: &str, file_size: usize, info: &RootInfo) -> Result<()> {
	let payload = HeaderJson {
		path: path.display().to_string(),
		file_size,
		format: format.to_owned(),
		root_offset: info.root_offset,
		vtable_relative_offset: info.vtable_relative_offset,
		vtable_start: info.vtable.start,
		vtable_size: info.vtable.size,
		object_size: info.vtable.object_size,
		vtable_truncated: info.vtable.truncated,
		field_offsets: info.vtable.field_offsets.clone(),
		words: info
			.words
			.iter()
			.map(|word| WordJson {
				offset: word.offset,
				u32: word.value.as_u32(),
				i32: word.value.as_i32(),
				f32: word.value.as_f32(),
				width: word.value.width_hint(),
			})
			.collect(),
	};

	emit_json(&payload)
}

#[derive(serde::Serialize)]
struct HeaderJson {
	path: String,
	file_size: usize,
	format: String,
	root_offset: u32,
	vtable_relative_offset: u16,
	vtable_start: usize,
	vtable_size: u16,
	object_size: u16,
	vtable_truncated: bool,
	field_offsets: Vec<u16>,
	words: Vec<WordJson>,
}

#[derive(serde::Serialize)]
struct WordJson {
	offset: usize,
	u32: u32,
	i32: i32,
	f32: f32,
	width: &'static str,
}
