use std::fmt;

use super::corpus::CorpusBuffer;

/// The rolling k-symbol Markov context.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
	symbols: Vec<u8>,
}

impl Pattern {
	/// The initial context: the first `pattern_length` symbols of the buffer.
	pub fn seed(corpus: &CorpusBuffer) -> Self {
		Self::from_slice(corpus.seed())
	}

	pub fn from_slice(symbols: &[u8]) -> Self {
		Self { symbols: symbols.to_vec() }
	}

	pub fn symbols(&self) -> &[u8] {
		&self.symbols
	}

	/// Drops the oldest symbol and appends `emitted`.
	pub fn advance(&mut self, emitted: u8) {
		if let Some(last) = self.symbols.len().checked_sub(1) {
			self.symbols.copy_within(1.., 0);
			self.symbols[last] = emitted;
		}
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&String::from_utf8_lossy(&self.symbols))
	}
}

impl fmt::Debug for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.to_string())
	}
}
