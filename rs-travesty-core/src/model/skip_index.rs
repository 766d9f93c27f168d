use log::debug;

use super::alphabet::{self, ALPHABET_SIZE};
use super::corpus::CorpusBuffer;

/// Backward linked list over buffer positions, one chain per symbol.
///
/// `last_seen[s]` is the rightmost position of `s`; `prior_occurrence[p]`
/// is the next-earlier position holding the same symbol as `p`. Both use
/// the buffer length as the "none" sentinel, a position where no pattern
/// plus follower can ever start.
///
/// # Invariants
/// - Following a chain from `last_seen[s]` visits every position of `s`
///   exactly once, strictly right to left, and ends at the sentinel
/// - Immutable once built
#[derive(Clone, Debug)]
pub struct SkipIndex {
	last_seen: [usize; ALPHABET_SIZE],
	prior_occurrence: Vec<usize>,
	sentinel: usize,
}

impl SkipIndex {
	/// Builds the index in one left-to-right pass over the buffer.
	pub fn build(corpus: &CorpusBuffer) -> Self {
		let sentinel = corpus.len();
		let mut last_seen = [sentinel; ALPHABET_SIZE];
		let mut prior_occurrence = Vec::with_capacity(sentinel);

		for (position, &symbol) in corpus.as_bytes().iter().enumerate() {
			let slot = &mut last_seen[alphabet::index(symbol)];
			prior_occurrence.push(*slot);
			*slot = position;
		}

		let index = Self { last_seen, prior_occurrence, sentinel };
		debug!(
			"Skip index built over {} positions, {} distinct symbols",
			sentinel,
			index.distinct_symbols()
		);
		index
	}

	/// Position marking the end of every chain.
	pub fn sentinel(&self) -> usize {
		self.sentinel
	}

	/// Rightmost position of `symbol`, or the sentinel.
	pub fn last_seen(&self, symbol: u8) -> usize {
		self.last_seen[alphabet::index(symbol)]
	}

	/// Next-earlier position holding the same symbol as `position`, or the sentinel.
	pub fn prior_occurrence(&self, position: usize) -> usize {
		self.prior_occurrence[position]
	}

	/// Walks every position of `symbol`, right to left.
	pub fn occurrences(&self, symbol: u8) -> Occurrences<'_> {
		Occurrences { index: self, next: self.last_seen(symbol) }
	}

	pub fn distinct_symbols(&self) -> usize {
		self.last_seen.iter().filter(|&&p| p != self.sentinel).count()
	}
}

/// Iterator over one symbol's chain. See [`SkipIndex::occurrences`].
pub struct Occurrences<'a> {
	index: &'a SkipIndex,
	next: usize,
}

impl Iterator for Occurrences<'_> {
	type Item = usize;

	fn next(&mut self) -> Option<usize> {
		if self.next >= self.index.sentinel {
			return None;
		}
		let current = self.next;
		self.next = self.index.prior_occurrence(current);
		Some(current)
	}
}
