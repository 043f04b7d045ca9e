use std::collections::HashSet;

use crate::flat::bytes::ByteView;
use crate::flat::{DecodeOptions, DecodedValue, FlatError, Scalar, StringCache, UnknownReason, read_string};

/// Outcome of classifying one 32-bit slot.
///
/// Checks run in a fixed priority order (string, table, vector, scalar), so
/// ambiguous slots always get the first label that fits. That label can be
/// wrong; the order only makes the guess deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
	/// The slot itself could not be read.
	OutOfBounds {
		/// Slot offset.
		at: usize,
	},
	/// Inline value.
	Scalar(Scalar),
	/// Pointer to a non-NUL byte.
	String {
		/// Dereferenced offset.
		target: usize,
	},
	/// Pointer to a plausible vtable back-reference.
	Table {
		/// Dereferenced offset.
		target: usize,
	},
	/// Pointer to a plausible vector length.
	Vector {
		/// Dereferenced offset.
		target: usize,
	},
}

/// Classify the value stored at `slot` without following it.
///
/// `container` is the start of the enclosing table or vector and only matters
/// for [`crate::flat::PointerBase::TableStart`].
pub fn classify_slot(buffer: &[u8], slot: usize, container: usize, options: &DecodeOptions) -> SlotClass {
	let view = ByteView::new(buffer);
	let Some(raw) = view.u32_at(slot) else {
		return SlotClass::OutOfBounds { at: slot };
	};

	let Some(target) = pointer_target(view.len(), raw, options.pointer_base.base(slot, container)) else {
		return SlotClass::Scalar(Scalar { raw });
	};

	if view.byte_at(target).is_some_and(|byte| byte != 0) {
		return SlotClass::String { target };
	}
	if view.u16_at(target).is_some_and(|relative| relative > 0 && relative < options.max_vtable_offset) {
		return SlotClass::Table { target };
	}
	if view.u32_at(target).is_some_and(|len| len < options.max_vector_len) {
		return SlotClass::Vector { target };
	}

	SlotClass::Scalar(Scalar { raw })
}

fn pointer_target(len: usize, raw: u32, base: usize) -> Option<usize> {
	let value = usize::try_from(raw).ok()?;
	if value == 0 || value >= len {
		return None;
	}
	base.checked_add(value).filter(|target| *target < len)
}

/// Depth-, cycle-, and budget-bounded walker over one buffer.
///
/// Owns the string memo, the set of offsets on the current chase path, and the
/// count of slots resolved so far, so separate walkers never share state.
/// Shared subtrees are decoded once per path that reaches them. After
/// `max_visited` slots every further slot becomes
/// [`UnknownReason::BudgetExhausted`].
pub struct TableWalker<'a> {
	pub(crate) buffer: &'a [u8],
	pub(crate) options: &'a DecodeOptions,
	strings: StringCache,
	path: HashSet<usize>,
	visited: usize,
	limit: Option<FlatError>,
}

impl<'a> TableWalker<'a> {
	/// Create a walker with an empty string memo.
	pub fn new(buffer: &'a [u8], options: &'a DecodeOptions) -> Self {
		Self {
			buffer,
			options,
			strings: StringCache::new(),
			path: HashSet::new(),
			visited: 0,
			limit: None,
		}
	}

	/// Number of slots resolved so far.
	pub fn visited(&self) -> usize {
		self.visited
	}

	/// First walk limit that cut a branch, if any.
	pub fn limit_hit(&self) -> Option<&FlatError> {
		self.limit.as_ref()
	}

	/// Take the first walk limit that cut a branch.
	pub fn take_limit_hit(&mut self) -> Option<FlatError> {
		self.limit.take()
	}

	/// Strings decoded so far.
	pub fn strings(&self) -> &StringCache {
		&self.strings
	}

	/// Classify the slot at `slot` and decode whatever it points to.
	///
	/// `depth` is the nesting level of the container holding the slot.
	pub fn resolve(&mut self, slot: usize, container: usize, depth: u32) -> DecodedValue {
		let max_visited = self.options.max_visited;
		if self.visited >= max_visited {
			self.note_limit(FlatError::VisitBudgetExceeded { max_visited });
			return DecodedValue::Unknown(UnknownReason::BudgetExhausted { max_visited });
		}
		self.visited += 1;

		let class = classify_slot(self.buffer, slot, container, self.options);
		log::trace!("slot {slot} classified as {class:?}");

		match class {
			SlotClass::OutOfBounds { at } => DecodedValue::Unknown(UnknownReason::OutOfBounds { at }),
			SlotClass::Scalar(value) => DecodedValue::Scalar(value),
			SlotClass::String { target } => DecodedValue::String(read_string(&mut self.strings, self.buffer, target)),
			SlotClass::Table { target } => self.descend(target, depth, |walker, next| DecodedValue::Table(walker.build_table(target, next))),
			SlotClass::Vector { target } => self.descend(target, depth, |walker, next| DecodedValue::Vector(walker.read_vector(target, next))),
		}
	}

	/// Build the table at `table_offset` as a path root.
	pub fn build_root(&mut self, table_offset: usize) -> crate::flat::Table {
		self.path.insert(table_offset);
		let table = self.build_table(table_offset, 0);
		self.path.remove(&table_offset);
		table
	}

	fn descend(&mut self, target: usize, depth: u32, decode: impl FnOnce(&mut Self, u32) -> DecodedValue) -> DecodedValue {
		let next = depth + 1;
		let max_depth = self.options.max_depth;
		if next > max_depth {
			log::debug!("pointer chase to {target} cut at depth limit {max_depth}");
			self.note_limit(FlatError::RecursionLimitExceeded { max_depth });
			return DecodedValue::Unknown(UnknownReason::RecursionLimit { max_depth });
		}
		if !self.path.insert(target) {
			log::warn!("pointer chase revisits {target}, treating as cycle");
			return DecodedValue::Unknown(UnknownReason::Cycle { offset: target });
		}

		let value = decode(self, next);
		self.path.remove(&target);
		value
	}

	fn note_limit(&mut self, err: FlatError) {
		if self.limit.is_none() {
			log::warn!("walk truncated: {err}");
			self.limit = Some(err);
		}
	}
}

/// Classify and decode one slot with default options and a fresh walker.
pub fn resolve(buffer: &[u8], slot: usize) -> DecodedValue {
	let options = DecodeOptions::default();
	TableWalker::new(buffer, &options).resolve(slot, slot, 0)
}
