use log::{debug, info};

use super::alphabet::{self, SPACE};
use crate::error::{TravestyError, TravestyResult};

/// Normalized, length-bounded training text with its wraparound tail.
///
/// Layout: `body + ' ' + body[..pattern_length]`, where `body` is the
/// normalized and truncated input.
///
/// # Invariants
/// - Every byte is an alphabet symbol
/// - `len() >= pattern_length + 1`
/// - The last `pattern_length` symbols equal the first `pattern_length`
/// - Immutable once built
#[derive(Clone, Debug)]
pub struct CorpusBuffer {
	text: String,
	pattern_length: usize,
}

impl CorpusBuffer {
	/// Builds the buffer from raw text.
	///
	/// # Errors
	/// - `InvalidParameter` if `pattern_length == 0` or `capacity <= pattern_length`
	/// - `InsufficientInput` if the normalized, truncated text is shorter than `pattern_length`
	pub fn new(raw: &str, capacity: usize, pattern_length: usize) -> TravestyResult<Self> {
		if pattern_length == 0 {
			return Err(TravestyError::InvalidParameter("pattern length must be >= 1".to_owned()));
		}
		if capacity <= pattern_length {
			return Err(TravestyError::InvalidParameter(format!(
				"buffer capacity ({capacity}) must exceed pattern length ({pattern_length})"
			)));
		}

		let normalized = normalize(raw);
		let budget = capacity - (pattern_length + 1);
		// ASCII only, so byte slicing is char slicing
		let body = normalized[..normalized.len().min(budget)].trim_end_matches(' ');

		if body.len() < pattern_length {
			return Err(TravestyError::InsufficientInput {
				required: pattern_length,
				available: body.len(),
			});
		}

		let mut text = String::with_capacity(body.len() + 1 + pattern_length);
		text.push_str(body);
		text.push(SPACE as char);
		text.push_str(&body[..pattern_length]);

		info!(
			"Corpus buffer built: {} symbols ({} normalized, pattern length {})",
			text.len(),
			normalized.len(),
			pattern_length
		);
		if body.len() < normalized.len() {
			debug!("Corpus truncated by {} symbols to fit capacity {}", normalized.len() - body.len(), capacity);
		}

		Ok(Self { text, pattern_length })
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.text.as_bytes()
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn len(&self) -> usize {
		self.text.len()
	}

	pub fn pattern_length(&self) -> usize {
		self.pattern_length
	}

	/// The first `pattern_length` symbols, used as the initial context.
	pub fn seed(&self) -> &[u8] {
		&self.as_bytes()[..self.pattern_length]
	}

	/// Returns `true` if `context` immediately followed by `next` occurs anywhere in the buffer.
	///
	/// Linear scan; intended for checks and diagnostics, not the generation loop.
	pub fn contains_transition(&self, context: &[u8], next: u8) -> bool {
		let k = context.len();
		self.as_bytes()
			.windows(k + 1)
			.any(|w| &w[..k] == context && w[k] == next)
	}
}

/// Normalizes raw text into alphabet symbols.
///
/// - Runs of whitespace (including newlines) collapse to one space
/// - Leading and trailing whitespace is removed
/// - Characters outside the alphabet are dropped
pub fn normalize(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut pending_space = false;

	for c in raw.chars() {
		if c.is_whitespace() {
			pending_space = true;
			continue;
		}
		if !c.is_ascii() || !alphabet::contains(c as u8) {
			continue;
		}
		if pending_space && !out.is_empty() {
			out.push(SPACE as char);
		}
		pending_space = false;
		out.push(c);
	}

	out
}
