use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::chain_index::ChainIndex;
use super::settings::DEFAULT_WINDOW_SIZE;
use crate::random::RandomSource;

/// Words, and the runs of punctuation or spacing between them.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
	// Should not panic, the pattern is a literal
	Regex::new(r"\w+|\W+").unwrap()
});

/// Word-level model over a free text sample.
///
/// The sample is split into word and non-word tokens, so concatenating
/// generated tokens restores punctuation and spacing as they appeared.
#[derive(Clone, Debug)]
pub struct TextSynthesizer {
	index: ChainIndex<String>,
}

impl TextSynthesizer {
	/// Trains over `sample` with windows of `window_size` tokens (clamped to 1).
	pub fn new(sample: &str, window_size: usize) -> Self {
		let tokens = tokenize(&normalize_spacing(sample));
		debug!("text sample split into {} tokens", tokens.len());
		Self { index: ChainIndex::build(tokens, window_size) }
	}

	pub fn index(&self) -> &ChainIndex<String> {
		&self.index
	}

	/// Generates a passage of at most `size` tokens.
	///
	/// The passage is sentence-cased and always ends with a period.
	pub fn generate(&self, size: usize, rng: &mut dyn RandomSource) -> String {
		let raw: String = self.index.generate(None, size, rng).collect();
		let mut text = sentence_case(&raw);

		text.truncate(text.trim_end().len());
		if !text.ends_with('.') {
			text.push('.');
		}
		text
	}
}

impl Default for TextSynthesizer {
	fn default() -> Self {
		Self::new("", DEFAULT_WINDOW_SIZE)
	}
}

/// One-shot helper: trains over `sample` and generates a single passage.
pub fn generate_text_variation(sample: &str, size: usize, window_size: usize, rng: &mut dyn RandomSource) -> String {
	TextSynthesizer::new(sample, window_size).generate(size, rng)
}

/// Turns tabs into spaces and collapses repeated spaces.
///
/// Leading and trailing whitespace is removed.
pub fn normalize_spacing(text: &str) -> String {
	let mut normalized = text.replace('\t', " ");
	while normalized.contains("  ") {
		normalized = normalized.replace("  ", " ");
	}
	normalized.trim().to_owned()
}

/// Splits on word boundaries.
///
/// Every word and every run of non-word characters becomes one token.
pub fn tokenize(text: &str) -> Vec<String> {
	TOKEN.find_iter(text).map(|m| m.as_str().to_owned()).collect()
}

/// Lowercases `text`, then uppercases its first character and the first
/// character after every `". "`.
///
/// A character that gets uppercased cannot also open the next boundary:
/// in `". . x"` only the second `.` is uppercased, never `x`.
pub fn sentence_case(text: &str) -> String {
	let mut cased = String::with_capacity(text.len());
	let mut sentence_start = true;
	let mut after_dot = false;

	for c in text.to_lowercase().chars() {
		if sentence_start {
			cased.extend(c.to_uppercase());
			sentence_start = false;
			after_dot = false;
			continue;
		}

		if after_dot && c == ' ' {
			sentence_start = true;
		}
		after_dot = c == '.';
		cased.push(c);
	}

	cased
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::StdRandom;

	const SAMPLE: &str = "The cat sat on the mat. The dog sat on the log. \
		A bird sat on the cat, and the cat sat still.";

	#[test]
	fn spacing_is_collapsed() {
		assert_eq!(normalize_spacing("a\t\tb    c "), "a b c");
		assert_eq!(normalize_spacing("   "), "");
	}

	#[test]
	fn tokens_keep_punctuation_and_spaces() {
		assert_eq!(tokenize("Hello, world."), vec!["Hello", ", ", "world", "."]);
		assert_eq!(tokenize("").len(), 0);
		assert_eq!(tokenize("a b").concat(), "a b");
	}

	#[test]
	fn sentence_boundaries_are_capitalized() {
		assert_eq!(sentence_case("hELLO. wORLD. again"), "Hello. World. Again");
		assert_eq!(sentence_case("one.two. three"), "One.two. Three");
		assert_eq!(sentence_case(""), "");
	}

	#[test]
	fn overlapping_boundaries_match_substitution() {
		assert_eq!(sentence_case("a. . x"), "A. . x");
		assert_eq!(sentence_case(". b"), ". b");
	}

	#[test]
	fn passage_is_cased_and_terminated() {
		let synth = TextSynthesizer::new(SAMPLE, DEFAULT_WINDOW_SIZE);
		let mut rng = StdRandom::from_seed(3);
		for size in [1, 5, 40, 200] {
			let text = synth.generate(size, &mut rng);
			assert!(text.ends_with('.'), "{text}");
			assert!(text.starts_with('T'), "{text}");
		}
	}

	#[test]
	fn generated_words_come_from_sample() {
		let mut rng = StdRandom::from_seed(8);
		let text = generate_text_variation(SAMPLE, 60, 2, &mut rng);
		let known = SAMPLE.to_lowercase();
		for word in tokenize(&text.to_lowercase()).iter().filter(|t| t.chars().all(char::is_alphanumeric)) {
			assert!(known.contains(word.as_str()), "{word}");
		}
	}

	#[test]
	fn empty_sample_gives_lone_period() {
		let mut rng = StdRandom::from_seed(1);
		assert_eq!(TextSynthesizer::default().generate(10, &mut rng), ".");
	}
}
