use thiserror::Error;

/// Errors surfaced by the synthesizers.
///
/// Clamped settings and empty generations are not errors: a corpus with no
/// usable paths simply produces an empty sequence.
#[derive(Debug, Error)]
pub enum SynthesisError {
	/// The rejection loop ran out of attempts before a candidate met the
	/// length and uniqueness constraints.
	#[error("no acceptable name after {attempts} attempts (min length {min_length})")]
	AttemptsExhausted { attempts: usize, min_length: usize },

	/// Every sample word was shorter than `order + 1` characters.
	#[error("no sample word is long enough for order {order}")]
	NoTrainingWords { order: usize },
}
