//! Character-level "travesty" text generation library.
//!
//! This crate provides a k-th order Markov generator working directly over
//! a corpus buffer, including:
//! - Corpus normalization into a bounded buffer with a wraparound tail
//! - A per-symbol skip index over buffer positions
//! - Context matching and frequency accumulation without a full scan
//! - Weighted random sampling with an injectable random source
//! - Width and verse aware output formatting
//!
//! The high-level entry point is [`generate`]; [`model::generator::Travesty`]
//! keeps the built index around for repeated runs.

/// Error taxonomy shared by every fallible operation.
pub mod error;

/// Core travesty data structures and the generation loop.
pub mod model;

/// I/O utilities (corpus loading from files and readers).
pub mod io;

pub use error::{TravestyError, TravestyResult};
pub use model::generation_input::{GenerationInput, OutputOptions};
pub use model::generator::{ProducedText, Travesty};

/// Generates travesty text from `corpus_text` using the parameters in `input`.
///
/// Validates `input`, builds the corpus buffer and skip index, then runs a
/// single generation pass. The run is reproducible when `input.seed` is set.
///
/// # Errors
/// - `InvalidParameter` if `input` violates its constraints
/// - `InsufficientInput` if the normalized corpus is shorter than the pattern
/// - `NoContinuation` if a context ever has no observed follower
pub fn generate(corpus_text: &str, input: &GenerationInput) -> TravestyResult<ProducedText> {
	input.validate()?;
	let travesty = Travesty::new(corpus_text, input.buffer_capacity, input.pattern_length)?;
	travesty.generate(input)
}
