use std::collections::VecDeque;

/// Fixed-capacity buffer of the most recent tokens.
///
/// Used as the rolling context while indexing and as the lookup key while
/// generating. Pushing into a full window evicts the oldest token.
#[derive(Clone, Debug)]
pub struct ContextWindow<T> {
	capacity: usize,
	tokens: VecDeque<T>,
}

impl<T> ContextWindow<T> {
	/// Creates an empty window. A capacity of 0 is raised to 1.
	pub fn new(capacity: usize) -> Self {
		let capacity = capacity.max(1);
		Self { capacity, tokens: VecDeque::with_capacity(capacity) }
	}

	pub fn push(&mut self, token: T) {
		if self.tokens.len() == self.capacity {
			self.tokens.pop_front();
		}
		self.tokens.push_back(token);
	}

	pub fn iter(&self) -> impl Iterator<Item=&T> {
		self.tokens.iter()
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}
}
