use std::fs;
use std::path::PathBuf;

use flatsleuth::flat::{DecodeOptions, DecodeReport, DecodedValue, FlatError, FlatFile, PointerBase, Result, RootSection, Table};

use crate::cmd::util::{clip, emit_json, parse_pointer_base};

const MAX_PRINTED_ITEMS: usize = 16;
const MAX_PRINTED_STRINGS: usize = 20;
const MAX_STRING_CHARS: usize = 80;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Write the JSON report to this file.
	pub output: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-visited")]
	pub max_visited: Option<usize>,
	#[arg(long = "max-vector-len")]
	pub max_vector_len: Option<u32>,
	#[arg(long = "pointer-base", value_parser = parse_pointer_base)]
	pub pointer_base: Option<PointerBase>,
	#[arg(long = "min-string-len")]
	pub min_string_len: Option<usize>,
	#[arg(long = "top-patterns")]
	pub top_patterns: Option<usize>,
	#[arg(long = "string-limit")]
	pub string_limit: Option<usize>,
}

/// Decode a file and print or save the report.
///
/// An invalid root header still emits the report before failing.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		output,
		json,
		max_depth,
		max_visited,
		max_vector_len,
		pointer_base,
		min_string_len,
		top_patterns,
		string_limit,
	} = args;

	let mut options = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	if let Some(max_visited) = max_visited {
		options.max_visited = max_visited;
	}
	if let Some(max_vector_len) = max_vector_len {
		options.max_vector_len = max_vector_len;
	}
	if let Some(pointer_base) = pointer_base {
		options.pointer_base = pointer_base;
	}
	if let Some(min_string_len) = min_string_len {
		options.min_string_len = min_string_len;
	}
	if let Some(top_patterns) = top_patterns {
		options.top_patterns = top_patterns;
	}
	options.max_report_strings = string_limit;

	let file = FlatFile::open(&path)?;
	let report = file.decode_report(&options);

	if let Some(output) = &output {
		fs::write(output, report.to_json_pretty()?)?;
	}

	if json {
		emit_json(&report)?;
	} else {
		println!("path: {}", path.display());
		print_summary(&report, &options);
		if let Some(output) = &output {
			println!("report: {}", output.display());
		}
	}

	match report.header_fault {
		Some(fault) => Err(FlatError::InvalidHeader(fault)),
		None => Ok(()),
	}
}

fn print_summary(report: &DecodeReport, options: &DecodeOptions) {
	println!("file_size: {}", report.file_size);
	println!("compression: {}", report.compression.as_str());
	println!("format: {}", report.format.as_str());
	println!("pointer_base: {}", options.pointer_base.as_str());
	match report.root_offset {
		Some(root_offset) => println!("root_offset: {root_offset}"),
		None => println!("root_offset: -"),
	}
	println!("success: {}", report.success);
	if let Some(error) = &report.error {
		println!("error: {error}");
	}
	println!("strings: {} ({} interesting)", report.total_strings, report.interesting_strings.len());
	for record in report.interesting_strings.iter().take(MAX_PRINTED_STRINGS) {
		println!("  {:>8}  {}", record.offset, clip(&record.text, MAX_STRING_CHARS));
	}

	match &report.root_table {
		RootSection::Table(table) => {
			println!("root_table:");
			print_table(table, 1);
		}
		RootSection::Summary(summary) => {
			println!("header: {}", summary.header);
			println!("common_patterns:");
			for stat in &summary.common_patterns {
				println!("  {}: {}", stat.hex(), stat.count);
			}
		}
	}
}

fn print_table(table: &Table, indent: usize) {
	let pad = "  ".repeat(indent);
	println!(
		"{pad}@{} vtable_size={} object_size={}{}",
		table.offset,
		table.vtable_size,
		table.object_size,
		if table.truncated { " truncated" } else { "" }
	);
	for field in &table.fields {
		print_value(&field.name, &field.value, indent);
	}
}

fn print_value(label: &str, value: &DecodedValue, indent: usize) {
	let pad = "  ".repeat(indent);
	match value {
		DecodedValue::Scalar(scalar) => println!("{pad}{label}: {} ({})", scalar.as_u32(), scalar.width_hint()),
		DecodedValue::String(text) => println!("{pad}{label}: {:?}", clip(text, MAX_STRING_CHARS)),
		DecodedValue::Unknown(reason) => println!("{pad}{label}: <unknown: {reason}>"),
		DecodedValue::Table(table) => {
			println!("{pad}{label}: table");
			print_table(table, indent + 1);
		}
		DecodedValue::Vector(items) => {
			println!("{pad}{label}: vector[{}]", items.len());
			for (idx, item) in items.iter().take(MAX_PRINTED_ITEMS).enumerate() {
				print_value(&format!("[{idx}]"), item, indent + 1);
			}
			if items.len() > MAX_PRINTED_ITEMS {
				println!("{pad}  ... {} more", items.len() - MAX_PRINTED_ITEMS);
			}
		}
	}
}
