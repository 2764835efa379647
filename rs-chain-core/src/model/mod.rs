//! Top-level module for the sequence generation engine.
//!
//! This module provides:
//! - A windowed, frequency-weighted trie (`ChainIndex` of `SequenceLink`s)
//! - Lazy weighted-walk generation over that trie (`Generate`)
//! - A character-level name generator (`NameSynthesizer`)
//! - A word-level text generator (`TextSynthesizer`)

/// Windowed trie construction, lookup and weighted child selection.
pub mod chain_index;

/// Fixed-capacity rolling buffer of recent tokens.
///
/// Shared by indexing and generation.
pub mod context_window;

/// Lazy, non-restartable token sequence produced by a `ChainIndex`.
pub mod generation;

/// Fixed-order character model with length and uniqueness constraints.
pub mod name_synthesizer;

/// A single trie node: token, occurrence count and children.
pub mod sequence_link;

/// Construction parameters and defaults.
pub mod settings;

/// Word-level passage generation with sentence casing.
pub mod text_synthesizer;
