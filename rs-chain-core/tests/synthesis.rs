use std::collections::HashSet;

use rs_chain_core::model::chain_index::ROOT;
use rs_chain_core::model::text_synthesizer::tokenize;
use rs_chain_core::{
	generate_text_variation, ChainIndex, NameSettings, NameSynthesizer, RandomSource, StdRandom, TextSynthesizer,
};

const TEXT: &str = "It was the best of times, it was the worst of times, it was the age of wisdom, \
	it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity, \
	it was the season of light, it was the season of darkness. It was the spring of hope, \
	it was the winter of despair. We had everything before us, we had nothing before us.";

const NAMES: &[&str] = &[
	"Adeline", "Albert", "Alexandre", "Amandine", "Antoine", "Apolline", "Arnaud", "Aurelien",
	"Baptiste", "Benoit", "Bernadette", "Camille", "Capucine", "Celestin", "Charlotte", "Clement",
	"Corentin", "Damien", "Delphine", "Dorothee", "Edouard", "Eleonore", "Emeline", "Etienne",
	"Florentin", "Francoise", "Gaspard", "Genevieve", "Guillaume", "Helene", "Hortense", "Isidore",
	"Josephine", "Leonard", "Madeleine", "Marcelin", "Mathilde", "Maximilien", "Octave", "Philippine",
];

/// Always draws the lowest value of the range.
struct Lowest;

impl RandomSource for Lowest {
	fn next_int_range(&mut self, low: usize, _high: usize) -> usize {
		low
	}
}

#[test]
fn generated_windows_exist_in_corpus() {
	let tokens = tokenize(TEXT);
	let window = 3;
	let observed: HashSet<&[String]> = tokens.windows(window).collect();
	let index = ChainIndex::build(tokens.iter().cloned(), window);

	for seed in 0..20 {
		let mut rng = StdRandom::from_seed(seed);
		let generated = index.generate_vec(None, 300, &mut rng);
		assert!(!generated.is_empty());
		for run in generated.windows(window) {
			assert!(observed.contains(run), "unobserved run {run:?}");
		}
	}
}

#[test]
fn zero_max_is_always_empty() {
	let index = ChainIndex::build(tokenize(TEXT), 4);
	let mut rng = StdRandom::from_seed(0);
	assert_eq!(index.generate(None, 0, &mut rng).count(), 0);
	assert_eq!(index.generate(Some("it".to_owned()), 0, &mut rng).count(), 0);
}

#[test]
fn single_possible_transition() {
	let index = ChainIndex::build(["A", "A", "A"], 1);
	let mut rng = StdRandom::from_seed(0);
	assert_eq!(index.generate_vec(Some("A"), 5, &mut rng), vec!["A"; 5]);
}

#[test]
fn weighted_root_share() {
	// root children: A (3 occurrences), B (1 occurrence)
	let index = ChainIndex::build(["A", "B", "A", "A"], 1);
	let a = index.find(&["A"]).expect("A indexed");
	assert_eq!(index.child_occurrences(ROOT), 4);

	let mut rng = StdRandom::from_seed(2024);
	let hits = (0..10_000)
		.filter(|_| index.select_weighted_child(ROOT, &mut rng) == Some(a))
		.count();
	assert!((7_200..=7_800).contains(&hits), "A drawn {hits} times");
}

#[test]
fn lowest_draw_replays_corpus_start() {
	let index = ChainIndex::build("abcabd".chars(), 2);
	let out: String = index.generate(None, 6, &mut Lowest).collect();
	assert_eq!(out, "abcabc");
}

#[test]
fn unique_names_never_repeat() {
	let settings = NameSettings::new(2, 3, true);
	let mut synth = NameSynthesizer::with_rng(NAMES.iter().copied(), settings, StdRandom::from_seed(77));

	let names = synth.next_names(40).expect("enough distinct names");
	let distinct: HashSet<&String> = names.iter().collect();
	assert_eq!(distinct.len(), names.len());
	assert_eq!(synth.used_count(), 40);
	assert!(names.iter().all(|n| n.chars().count() >= 3));
	assert!(names.iter().all(|n| n.chars().next().is_some_and(char::is_uppercase)));
}

#[test]
fn text_variation_is_a_sentence() {
	for seed in 0..10 {
		let mut rng = StdRandom::from_seed(seed);
		let text = generate_text_variation(TEXT, 80, 5, &mut rng);
		assert!(text.ends_with('.'), "{text}");
		assert!(text.chars().next().is_some_and(char::is_uppercase), "{text}");
	}
}

#[test]
fn text_synthesizer_is_reusable() {
	let synth = TextSynthesizer::new(TEXT, 3);
	let mut rng = StdRandom::from_seed(5);
	let first = synth.generate(50, &mut rng);
	let second = synth.generate(50, &mut rng);
	assert!(first.starts_with("It was"));
	assert!(second.starts_with("It was"));
}

#[test]
fn serialized_index_generates_identically() {
	let index = ChainIndex::build(tokenize(TEXT), 4);
	let bytes = postcard::to_stdvec(&index).expect("serialize");
	let restored: ChainIndex<String> = postcard::from_bytes(&bytes).expect("deserialize");

	assert_eq!(restored.window_length(), 4);
	assert_eq!(restored.link_count(), index.link_count());

	let mut a = StdRandom::from_seed(9);
	let mut b = StdRandom::from_seed(9);
	assert_eq!(index.generate_vec(None, 100, &mut a), restored.generate_vec(None, 100, &mut b));
}
