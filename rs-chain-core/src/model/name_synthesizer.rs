use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::settings::NameSettings;
use crate::error::SynthesisError;
use crate::random::{RandomSource, StdRandom};

/// Character model of fixed order trained over a word list.
///
/// Each `order`-character prefix maps to every character observed right
/// after it. Repeated observations are stored repeatedly, so a uniform pick
/// from the list is already weighted by frequency.
///
/// # Invariants
/// - Every retained word has at least `order + 1` characters
/// - Every key of `followers` is exactly `order` characters long
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NameModel {
	order: usize,
	/// Uppercased training words, kept for target lengths and seeds.
	words: Vec<Vec<char>>,
	followers: HashMap<String, Vec<char>>,
}

impl NameModel {
	/// Trains a model over `samples`. An `order` of 0 is clamped to 1.
	///
	/// Words are uppercased; words shorter than `order + 1` are ignored.
	pub fn train<I, S>(samples: I, order: usize) -> Self
	where
		I: IntoIterator<Item=S>,
		S: AsRef<str>,
	{
		let order = order.max(1);
		let mut model = Self { order, words: Vec::new(), followers: HashMap::new() };

		for sample in samples {
			let word: Vec<char> = sample.as_ref().to_uppercase().chars().collect();
			if word.len() < order + 1 {
				continue;
			}

			for p in 0..word.len() - order {
				let prefix: String = word[p..p + order].iter().collect();
				model.followers.entry(prefix).or_default().push(word[p + order]);
			}
			model.words.push(word);
		}

		debug!(
			"trained order {} name model: {} words, {} prefixes",
			order,
			model.words.len(),
			model.followers.len()
		);
		model
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of training words that were long enough to keep.
	pub fn word_count(&self) -> usize {
		self.words.len()
	}

	/// Characters observed after `prefix`, in training order.
	pub fn followers(&self, prefix: &str) -> &[char] {
		self.followers
			.get(&prefix.to_uppercase())
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	/// Grows one raw candidate.
	///
	/// A random training word gives the target length, and a random prefix of
	/// that same word seeds the candidate. Characters are appended until the
	/// target length is reached or the trailing prefix has no followers.
	fn candidate(&self, rng: &mut dyn RandomSource) -> Option<String> {
		if self.words.is_empty() {
			return None;
		}

		let word = &self.words[rng.next_index(self.words.len())];
		let target = word.len();
		let start = rng.next_index(word.len() - self.order);
		let mut candidate: Vec<char> = word[start..start + self.order].to_vec();

		while candidate.len() < target {
			let prefix: String = candidate[candidate.len() - self.order..].iter().collect();
			let next = match self.followers.get(&prefix) {
				Some(list) if !list.is_empty() => list[rng.next_index(list.len())],
				_ => break,
			};
			candidate.push(next);
		}

		Some(candidate.into_iter().collect())
	}
}

/// Generates single words that resemble a sample word list.
///
/// Candidates come from a [`NameModel`] and are accepted only when they meet
/// the minimum length and, if enabled, were never returned by this instance
/// since the last [`NameSynthesizer::reset`].
///
/// A synthesizer mutates its used set on every successful call; share one
/// across threads only behind a lock.
#[derive(Debug)]
pub struct NameSynthesizer<R: RandomSource = StdRandom> {
	model: NameModel,
	settings: NameSettings,
	used: HashSet<String>,
	rng: R,
}

impl NameSynthesizer<StdRandom> {
	/// Trains a synthesizer seeded from the operating system.
	pub fn new<I, S>(samples: I, settings: NameSettings) -> Self
	where
		I: IntoIterator<Item=S>,
		S: AsRef<str>,
	{
		Self::with_rng(samples, settings, StdRandom::default())
	}
}

impl<R: RandomSource> NameSynthesizer<R> {
	/// Trains a synthesizer that draws from `rng`.
	pub fn with_rng<I, S>(samples: I, settings: NameSettings, rng: R) -> Self
	where
		I: IntoIterator<Item=S>,
		S: AsRef<str>,
	{
		let settings = settings.clamped();
		let model = NameModel::train(samples, settings.order);
		Self { model, settings, used: HashSet::new(), rng }
	}

	pub fn settings(&self) -> &NameSettings {
		&self.settings
	}

	pub fn model(&self) -> &NameModel {
		&self.model
	}

	/// Number of names remembered for the uniqueness check.
	pub fn used_count(&self) -> usize {
		self.used.len()
	}

	/// Forgets every returned name so they may be produced again.
	pub fn reset(&mut self) {
		self.used.clear();
	}

	/// Returns the next accepted name.
	///
	/// # Errors
	/// - `NoTrainingWords` if no sample survived training
	/// - `AttemptsExhausted` if `max_attempts` candidates were all rejected
	pub fn next_name(&mut self) -> Result<String, SynthesisError> {
		if self.model.word_count() == 0 {
			return Err(SynthesisError::NoTrainingWords { order: self.model.order() });
		}

		for _ in 0..self.settings.max_attempts {
			let Some(raw) = self.model.candidate(&mut self.rng) else {
				break;
			};
			let name = format_name(&raw);

			if name.chars().count() < self.settings.min_length {
				trace!("rejected '{}': shorter than {}", name, self.settings.min_length);
				continue;
			}
			if self.settings.ensure_uniqueness && !self.used.insert(name.clone()) {
				trace!("rejected '{}': already returned", name);
				continue;
			}

			return Ok(name);
		}

		warn!(
			"gave up after {} attempts (min length {}, {} names used)",
			self.settings.max_attempts,
			self.settings.min_length,
			self.used.len()
		);
		Err(SynthesisError::AttemptsExhausted {
			attempts: self.settings.max_attempts,
			min_length: self.settings.min_length,
		})
	}

	/// Returns `count` accepted names, stopping at the first failure.
	pub fn next_names(&mut self, count: usize) -> Result<Vec<String>, SynthesisError> {
		(0..count).map(|_| self.next_name()).collect()
	}
}

/// Applies name casing to a raw uppercase candidate.
///
/// Multi-word candidates are title-cased word by word; single words get an
/// uppercase first letter and lowercase remainder.
pub fn format_name(raw: &str) -> String {
	let trimmed = raw.trim();
	if trimmed.contains(char::is_whitespace) {
		trimmed
			.split_whitespace()
			.map(capitalize)
			.collect::<Vec<_>>()
			.join(" ")
	} else {
		capitalize(trimmed)
	}
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
		None => String::new(),
	}
}
