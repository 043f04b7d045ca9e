use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Frequency of one fixed-width byte window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternStat {
	/// Window bytes, rendered as lowercase hex.
	#[serde(serialize_with = "serialize_hex")]
	pub pattern: Vec<u8>,
	/// Number of windows holding these bytes.
	pub count: usize,
}

impl PatternStat {
	/// Window bytes as lowercase hex.
	pub fn hex(&self) -> String {
		to_hex(&self.pattern)
	}
}

/// Count non-overlapping `window`-byte windows and keep the `top_k` most common.
///
/// A trailing partial window is ignored. Equal counts keep first-occurrence order.
pub fn top_patterns(buffer: &[u8], window: usize, top_k: usize) -> Vec<PatternStat> {
	if window == 0 || top_k == 0 {
		return Vec::new();
	}

	let mut counts: HashMap<&[u8], (usize, usize)> = HashMap::new();
	for (idx, chunk) in buffer.chunks_exact(window).enumerate() {
		counts.entry(chunk).or_insert((0, idx)).0 += 1;
	}

	let mut ranked: Vec<_> = counts.into_iter().collect();
	ranked.sort_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| b_count.cmp(a_count).then(a_first.cmp(b_first)));
	ranked.truncate(top_k);

	ranked
		.into_iter()
		.map(|(pattern, (count, _))| PatternStat {
			pattern: pattern.to_vec(),
			count,
		})
		.collect()
}

/// Render bytes as lowercase hex without separators.
pub fn to_hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
	serializer.serialize_str(&to_hex(bytes))
}
