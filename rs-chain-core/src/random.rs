use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source consumed by every generation routine.
///
/// The engine never reaches for a global RNG: callers hand in a source,
/// which lets tests replace it with a deterministic one.
pub trait RandomSource {
	/// Returns a uniform integer in `[low, high)`.
	///
	/// Returns `low` when the range is empty.
	fn next_int_range(&mut self, low: usize, high: usize) -> usize;

	/// Returns a uniform index in `[0, len)`.
	fn next_index(&mut self, len: usize) -> usize {
		self.next_int_range(0, len)
	}
}

/// Default source backed by `rand::rngs::StdRng`.
#[derive(Clone, Debug)]
pub struct StdRandom {
	rng: StdRng,
}

impl StdRandom {
	/// Reproducible source: the same seed yields the same stream.
	pub fn from_seed(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Source seeded from the operating system.
	pub fn from_os_rng() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}
}

impl Default for StdRandom {
	fn default() -> Self {
		Self::from_os_rng()
	}
}

impl RandomSource for StdRandom {
	fn next_int_range(&mut self, low: usize, high: usize) -> usize {
		if low >= high {
			return low;
		}
		self.rng.random_range(low..high)
	}
}
