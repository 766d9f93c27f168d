use log::trace;

use super::corpus::CorpusBuffer;
use super::frequency::FrequencyTable;
use super::pattern::Pattern;
use super::skip_index::SkipIndex;

/// Tallies every symbol that follows an occurrence of `pattern` in the buffer.
///
/// Only positions starting with the pattern's first symbol are visited, by
/// walking that symbol's chain in the skip index. Positions too close to the
/// end for a full pattern plus follower are skipped, not treated as the end
/// of the chain: the chain runs right to left, so later entries may still fit.
///
/// Returns the number of matching occurrences found.
pub fn tally(pattern: &Pattern, index: &SkipIndex, corpus: &CorpusBuffer, frequencies: &mut FrequencyTable) -> u32 {
	let symbols = pattern.symbols();
	let k = symbols.len();
	let buffer = corpus.as_bytes();
	let mut matches = 0;

	for position in index.occurrences(symbols[0]) {
		if position + k >= buffer.len() {
			continue;
		}
		if &buffer[position..position + k] == symbols {
			frequencies.increment(buffer[position + k]);
			matches += 1;
		}
	}

	trace!("Pattern {:?}: {} occurrences", pattern, matches);
	matches
}

/// Same tally as [`tally`], by scanning every buffer position.
///
/// Reference implementation for tests and benchmarks.
pub fn tally_naive(pattern: &Pattern, corpus: &CorpusBuffer, frequencies: &mut FrequencyTable) -> u32 {
	let symbols = pattern.symbols();
	let k = symbols.len();
	let mut matches = 0;

	for window in corpus.as_bytes().windows(k + 1) {
		if &window[..k] == symbols {
			frequencies.increment(window[k]);
			matches += 1;
		}
	}
	matches
}

#[cfg(test)]
mod tests {
	use super::*;

	fn setup(text: &str, k: usize) -> (CorpusBuffer, SkipIndex) {
		let corpus = CorpusBuffer::new(text, 1000, k).unwrap();
		let index = SkipIndex::build(&corpus);
		(corpus, index)
	}

	#[test]
	fn counts_followers_of_every_occurrence() {
		let (corpus, index) = setup("the cat sat on the mat", 2);
		let mut table = FrequencyTable::new();
		let matches = tally(&Pattern::from_slice(b"at"), &index, &corpus, &mut table);
		// cat, sat, and mat before the separator
		assert_eq!(matches, 3);
		assert_eq!(table.count(b' '), 3);
		assert_eq!(table.count(b'h'), 0);
		assert_eq!(table.total(), 3);
	}

	#[test]
	fn never_counts_unobserved_followers() {
		let (corpus, index) = setup("the cat sat on the mat", 3);
		let mut table = FrequencyTable::new();
		tally(&Pattern::from_slice(b"sat"), &index, &corpus, &mut table);
		assert_eq!(table.count(b' '), 1);
		assert_eq!(table.count(b'x'), 0);
		assert_eq!(table.total(), 1);
	}

	#[test]
	fn sees_matches_running_into_the_wraparound_tail() {
		// buffer: "mat cat ma"
		let (corpus, index) = setup("mat cat", 2);
		let mut table = FrequencyTable::new();
		tally(&Pattern::from_slice(b"t "), &index, &corpus, &mut table);
		assert_eq!(table.count(b'c'), 1);
		assert_eq!(table.count(b'm'), 1);
	}

	#[test]
	fn unknown_pattern_tallies_nothing() {
		let (corpus, index) = setup("the cat sat", 2);
		let mut table = FrequencyTable::new();
		assert_eq!(tally(&Pattern::from_slice(b"zz"), &index, &corpus, &mut table), 0);
		assert_eq!(table.total(), 0);
	}

	#[test]
	fn agrees_with_a_full_scan() {
		let (corpus, index) = setup("she sells sea shells by the sea shore", 2);
		for window in corpus.as_bytes().windows(2) {
			let pattern = Pattern::from_slice(window);
			let mut indexed = FrequencyTable::new();
			let mut naive = FrequencyTable::new();
			assert_eq!(tally(&pattern, &index, &corpus, &mut indexed), tally_naive(&pattern, &corpus, &mut naive));
			assert_eq!(indexed, naive);
		}
	}
}
