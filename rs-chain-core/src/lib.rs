//! Markov-chain sequence generation library.
//!
//! This crate provides a generic generation engine built on a windowed,
//! frequency-weighted trie, and two synthesizers on top of it:
//! - `ChainIndex`: learns transitions over any hashable token type
//! - `NameSynthesizer`: generates words resembling a word list
//! - `TextSynthesizer`: generates passages resembling a text sample
//!
//! Randomness always comes from an injectable `RandomSource`.

/// Trie, generation and synthesizers.
pub mod model;

/// Uniform integer sources.
pub mod random;

/// Error type shared by the synthesizers.
pub mod error;

/// Corpus loading helpers.
pub mod io;

pub use error::SynthesisError;
pub use model::chain_index::ChainIndex;
pub use model::generation::Generate;
pub use model::name_synthesizer::NameSynthesizer;
pub use model::settings::NameSettings;
pub use model::text_synthesizer::{generate_text_variation, TextSynthesizer};
pub use random::{RandomSource, StdRandom};
