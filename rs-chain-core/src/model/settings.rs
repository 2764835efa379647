/// Default window length of the text model.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Construction parameters of a `NameSynthesizer`.
///
/// Every value is owned by the synthesizer it configures; two synthesizers
/// never share policy state.
///
/// # Clamping
/// `order`, `min_length` and `max_attempts` below 1 are raised to 1 instead
/// of being rejected. See [`NameSettings::clamped`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSettings {
	/// Number of preceding characters used to predict the next one.
	pub order: usize,

	/// Shortest accepted name, in characters.
	pub min_length: usize,

	/// Refuse to return a name this synthesizer already returned.
	pub ensure_uniqueness: bool,

	/// Candidates drawn before giving up on a single call.
	pub max_attempts: usize,
}

impl NameSettings {
	pub fn new(order: usize, min_length: usize, ensure_uniqueness: bool) -> Self {
		Self { order, min_length, ensure_uniqueness, ..Self::default() }.clamped()
	}

	/// Overrides the attempt budget.
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts;
		self.clamped()
	}

	/// Returns a copy with every bound raised to at least 1.
	pub fn clamped(&self) -> Self {
		Self {
			order: self.order.max(1),
			min_length: self.min_length.max(1),
			ensure_uniqueness: self.ensure_uniqueness,
			max_attempts: self.max_attempts.max(1),
		}
	}
}

impl Default for NameSettings {
	fn default() -> Self {
		Self { order: 3, min_length: 1, ensure_uniqueness: true, max_attempts: 10_000 }
	}
}
