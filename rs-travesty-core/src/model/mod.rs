//! Top-level module for the travesty generation system.
//!
//! Components, leaf-first:
//! - Fixed symbol alphabet (`alphabet`)
//! - Normalized corpus buffer with wraparound tail (`corpus`)
//! - Backward per-symbol skip index (`skip_index`)
//! - Context matching into a frequency table (`matcher`, `frequency`)
//! - Rolling context window (`pattern`)
//! - Line pacing state machine (`formatter`)
//! - Generation parameters (`generation_input`)
//! - High-level generation interface (`generator`)

/// Symbol range, sentinel and index helpers.
pub mod alphabet;

/// Corpus normalization and the immutable buffer built from it.
///
/// Collapses whitespace, drops symbols outside the alphabet, truncates
/// to capacity and appends the wraparound tail.
pub mod corpus;

/// Per-symbol backward linked list over buffer positions.
pub mod skip_index;

/// Finds every occurrence of the current pattern and tallies its followers.
pub mod matcher;

/// Fixed-size follower counts and inverse-CDF sampling over them.
pub mod frequency;

/// The rolling k-symbol context.
pub mod pattern;

/// Output pacing: line wrapping, verse indentation and the sentinel break.
pub mod formatter;

/// Generation parameters and their validation.
///
/// Stores buffer capacity, pattern length, output size, line width,
/// verse flag and the optional random seed.
pub mod generation_input;

/// High-level interface tying the corpus, index and output loop together.
pub mod generator;
