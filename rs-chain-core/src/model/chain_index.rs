use std::hash::Hash;

use log::debug;
use serde::{Deserialize, Serialize};

use super::context_window::ContextWindow;
use super::generation::Generate;
use super::sequence_link::{LinkId, SequenceLink};
use crate::random::RandomSource;

/// Arena slot of the root link.
pub const ROOT: LinkId = 0;

/// Windowed, frequency-weighted trie over a token stream.
///
/// Every distinct run of `window_length` consecutive tokens seen during
/// training is a path from the root, and the link at the end of that path
/// counts how often the whole run occurred. Links are stored in a flat arena
/// and refer to their children by index.
///
/// The index is built once and is read-only afterwards; generating against
/// it never mutates it.
///
/// # Invariants
/// - `window_length >= 1` and never changes
/// - `links[ROOT]` is the root and carries no token
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound(
	serialize = "T: Serialize + Eq + Hash",
	deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct ChainIndex<T> {
	window_length: usize,
	links: Vec<SequenceLink<T>>,
}

impl<T: Clone + Eq + Hash> ChainIndex<T> {
	/// Indexes `tokens` with windows of `window_length` tokens.
	///
	/// A `window_length` of 0 is clamped to 1.
	///
	/// For each incoming token the window is advanced, then the trie is
	/// walked from the root through every token of the window, creating
	/// missing links on the way. Only the link reached at the end of the walk
	/// has its occurrence count increased.
	pub fn build<I>(tokens: I, window_length: usize) -> Self
	where
		I: IntoIterator<Item=T>,
	{
		let window_length = window_length.max(1);
		let mut index = Self { window_length, links: vec![SequenceLink::root()] };
		let mut window = ContextWindow::new(window_length);
		let mut token_count = 0usize;

		for token in tokens {
			window.push(token);
			token_count += 1;

			let mut current = ROOT;
			for token in window.iter() {
				current = match index.links[current].child(token) {
					Some(child) => child,
					None => index.insert_child(current, token.clone()),
				};
			}
			index.links[current].increment();
		}

		debug!(
			"indexed {} tokens into {} links (window length {})",
			token_count,
			index.links.len(),
			window_length
		);
		index
	}

	fn insert_child(&mut self, parent: LinkId, token: T) -> LinkId {
		let id = self.links.len();
		self.links.push(SequenceLink::new(token.clone()));
		self.links[parent].add_child(token, id);
		id
	}

	/// Window length fixed at construction.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of links, root included.
	pub fn link_count(&self) -> usize {
		self.links.len()
	}

	/// True when nothing was indexed.
	pub fn is_empty(&self) -> bool {
		self.links[ROOT].children().is_empty()
	}

	pub fn root(&self) -> &SequenceLink<T> {
		&self.links[ROOT]
	}

	pub fn link(&self, id: LinkId) -> Option<&SequenceLink<T>> {
		self.links.get(id)
	}

	/// Walks from the root through `window`, one child per token.
	///
	/// Returns `None` as soon as a step has no matching child.
	pub fn find<'w, W>(&self, window: W) -> Option<LinkId>
	where
		W: IntoIterator<Item=&'w T>,
		T: 'w,
	{
		let mut current = ROOT;
		for token in window {
			current = self.links[current].child(token)?;
		}
		Some(current)
	}

	/// Sum of the occurrence counts of the direct children of `id`.
	pub fn child_occurrences(&self, id: LinkId) -> usize {
		self.links.get(id).map_or(0, |link| {
			link.children()
				.iter()
				.map(|child| self.links[*child].occurrences())
				.sum()
		})
	}

	/// Picks a child of `id` with probability proportional to its occurrences.
	///
	/// Draws `r` in `[1, total]` and returns the first child, in insertion
	/// order, whose cumulative count reaches `r`. Returns `None` when the
	/// children carry no occurrences at all.
	pub fn select_weighted_child(&self, id: LinkId, rng: &mut dyn RandomSource) -> Option<LinkId> {
		let total = self.child_occurrences(id);
		if total == 0 {
			return None;
		}

		let r = rng.next_int_range(1, total + 1);
		let mut cumulative = 0;
		for child in self.links[id].children() {
			cumulative += self.links[*child].occurrences();
			if cumulative >= r {
				return Some(*child);
			}
		}

		None
	}

	/// Lazily generates up to `max` tokens.
	///
	/// With `seed` set to `None` the first token is drawn from the root by
	/// weighted sampling. The returned iterator cannot be restarted.
	pub fn generate<'a>(&'a self, seed: Option<T>, max: usize, rng: &'a mut dyn RandomSource) -> Generate<'a, T> {
		Generate::new(self, seed, max, rng)
	}

	/// Eager form of [`ChainIndex::generate`].
	pub fn generate_vec(&self, seed: Option<T>, max: usize, rng: &mut dyn RandomSource) -> Vec<T> {
		self.generate(seed, max, rng).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::StdRandom;

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[test]
	fn terminal_links_count_whole_windows() {
		let index = ChainIndex::build(chars("abcabc"), 3);

		let abc = index.find(&chars("abc")).expect("abc indexed");
		assert_eq!(index.link(abc).map(|l| l.occurrences()), Some(2));

		let bca = index.find(&chars("bca")).expect("bca indexed");
		assert_eq!(index.link(bca).map(|l| l.occurrences()), Some(1));

		// Only the very first partial windows end on shallow links
		let ab = index.find(&chars("ab")).expect("ab indexed");
		assert_eq!(index.link(ab).map(|l| l.occurrences()), Some(1));
		let bc = index.find(&chars("bc")).expect("bc indexed");
		assert_eq!(index.link(bc).map(|l| l.occurrences()), Some(0));
	}

	#[test]
	fn find_misses_unseen_paths() {
		let index = ChainIndex::build(chars("abcabc"), 3);
		assert!(index.find(&chars("acb")).is_none());
		assert!(index.find(&chars("z")).is_none());
		assert_eq!(index.find(&[]), Some(ROOT));
	}

	#[test]
	fn zero_window_is_clamped() {
		let index = ChainIndex::build(chars("aab"), 0);
		assert_eq!(index.window_length(), 1);
		assert_eq!(index.child_occurrences(ROOT), 3);
	}

	#[test]
	fn children_keep_insertion_order() {
		let index = ChainIndex::build(chars("cab"), 1);
		let order: Vec<char> = index
			.root()
			.children()
			.iter()
			.filter_map(|id| index.link(*id).and_then(|l| l.token().copied()))
			.collect();
		assert_eq!(order, chars("cab"));
	}

	#[test]
	fn empty_corpus_has_no_paths() {
		let index: ChainIndex<char> = ChainIndex::build(Vec::new(), 4);
		assert!(index.is_empty());
		assert_eq!(index.link_count(), 1);
		assert_eq!(index.child_occurrences(ROOT), 0);
		assert!(index.select_weighted_child(ROOT, &mut StdRandom::from_seed(3)).is_none());
	}

	#[test]
	fn weighted_selection_follows_counts() {
		let index = ChainIndex::build(chars("abaa"), 1);
		let a = index.find(&['a']).expect("a indexed");
		let mut rng = StdRandom::from_seed(42);

		let draws = 10_000;
		let hits = (0..draws)
			.filter(|_| index.select_weighted_child(ROOT, &mut rng) == Some(a))
			.count();
		let share = hits as f64 / draws as f64;
		assert!((share - 0.75).abs() < 0.03, "share of 'a' was {share}");
	}
}
