use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Position of a link inside the `ChainIndex` arena.
pub type LinkId = usize;

/// A node of the weighted trie.
///
/// A `SequenceLink` owns the token it stands for, the number of times it was
/// reached as the terminus of a training window, and its children. Children
/// live in the owning `ChainIndex` arena and are referenced by `LinkId`.
///
/// ## Invariants
/// - Child tokens are unique per link
/// - `children` keeps the insertion order used by weighted sampling
/// - `occurrences` never decreases
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound(
	serialize = "T: Serialize + Eq + Hash",
	deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct SequenceLink<T> {
	/// `None` only for the root link.
	token: Option<T>,
	occurrences: usize,
	/// Children in the order they were first observed.
	children: Vec<LinkId>,
	/// Next token -> child link.
	lookup: HashMap<T, LinkId>,
}

impl<T: Clone + Eq + Hash> SequenceLink<T> {
	pub(crate) fn root() -> Self {
		Self {
			token: None,
			occurrences: 0,
			children: Vec::new(),
			lookup: HashMap::new(),
		}
	}

	pub(crate) fn new(token: T) -> Self {
		Self {
			token: Some(token),
			occurrences: 0,
			children: Vec::new(),
			lookup: HashMap::new(),
		}
	}

	/// Token carried by this link, `None` for the root.
	pub fn token(&self) -> Option<&T> {
		self.token.as_ref()
	}

	/// How many training windows ended on this link.
	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	/// Children in insertion order.
	pub fn children(&self) -> &[LinkId] {
		&self.children
	}

	/// Child reached by `token`, if it was ever observed.
	pub fn child(&self, token: &T) -> Option<LinkId> {
		self.lookup.get(token).copied()
	}

	pub(crate) fn increment(&mut self) {
		self.occurrences += 1;
	}

	pub(crate) fn add_child(&mut self, token: T, id: LinkId) {
		self.lookup.insert(token, id);
		self.children.push(id);
	}
}
