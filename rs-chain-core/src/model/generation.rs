use std::hash::Hash;
use std::iter::FusedIterator;

use super::chain_index::{ChainIndex, ROOT};
use super::context_window::ContextWindow;
use crate::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	/// No seed yet, the first token comes from the root.
	Unseeded,
	/// Looking up the current window.
	Seeking,
	/// Context miss, the sequence ended early.
	Exhausted,
	/// `max` tokens were emitted.
	Done,
}

/// Lazy token sequence produced by [`ChainIndex::generate`].
///
/// Each step looks up the current window, emits the token of the link it
/// lands on, then samples one of that link's children and appends its token
/// to the window. The window holds `window_length - 1` tokens (at least one).
///
/// When the emitted link has no weighted continuation the window is left as
/// is. For a window length of 1 every link is a terminus and the same token
/// is emitted again; for longer windows the stalled context would only
/// repeat a run never observed in training, so the sequence ends there.
pub struct Generate<'a, T> {
	index: &'a ChainIndex<T>,
	rng: &'a mut dyn RandomSource,
	window: ContextWindow<T>,
	remaining: usize,
	phase: Phase,
}

impl<'a, T: Clone + Eq + Hash> Generate<'a, T> {
	pub(crate) fn new(index: &'a ChainIndex<T>, seed: Option<T>, max: usize, rng: &'a mut dyn RandomSource) -> Self {
		let mut window = ContextWindow::new(index.window_length().saturating_sub(1));
		let phase = match seed {
			_ if max == 0 => Phase::Done,
			Some(token) => {
				window.push(token);
				Phase::Seeking
			}
			None => Phase::Unseeded,
		};

		Self { index, rng, window, remaining: max, phase }
	}

	fn seed_from_root(&mut self) -> bool {
		let token = self
			.index
			.select_weighted_child(ROOT, self.rng)
			.and_then(|id| self.index.link(id))
			.and_then(|link| link.token().cloned());

		match token {
			Some(token) => {
				self.window.push(token);
				true
			}
			None => false,
		}
	}
}

impl<'a, T: Clone + Eq + Hash> Iterator for Generate<'a, T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.phase == Phase::Unseeded {
			self.phase = if self.seed_from_root() { Phase::Seeking } else { Phase::Exhausted };
		}
		if self.phase != Phase::Seeking {
			return None;
		}

		let Some(found) = self.index.find(self.window.iter()) else {
			self.phase = Phase::Exhausted;
			return None;
		};
		let Some(token) = self.index.link(found).and_then(|link| link.token().cloned()) else {
			self.phase = Phase::Exhausted;
			return None;
		};

		self.remaining -= 1;
		match self.index.select_weighted_child(found, self.rng) {
			Some(next) => {
				if let Some(next_token) = self.index.link(next).and_then(|link| link.token().cloned()) {
					self.window.push(next_token);
				}
			}
			None if self.index.window_length() > 1 => self.phase = Phase::Exhausted,
			None => (),
		}
		if self.remaining == 0 {
			self.phase = Phase::Done;
		}

		Some(token)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self.phase {
			Phase::Unseeded | Phase::Seeking => (0, Some(self.remaining)),
			Phase::Exhausted | Phase::Done => (0, Some(0)),
		}
	}
}

impl<'a, T: Clone + Eq + Hash> FusedIterator for Generate<'a, T> {}
