use flatsleuth::flat::PointerBase;

/// Parse a `--pointer-base` value.
pub(crate) fn parse_pointer_base(value: &str) -> Result<PointerBase, String> {
	match value {
		"slot" => Ok(PointerBase::Slot),
		"table" => Ok(PointerBase::TableStart),
		"absolute" => Ok(PointerBase::Absolute),
		other => Err(format!("unknown pointer base '{other}' (expected slot, table, or absolute)")),
	}
}

/// Print a serializable payload as indented JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> flatsleuth::flat::Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Shorten text for one-line display.
pub(crate) fn clip(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_owned();
	}
	let mut out: String = text.chars().take(max_chars).collect();
	out.push_str("...");
	out
}
