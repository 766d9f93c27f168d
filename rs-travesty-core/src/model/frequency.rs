use rand::Rng;

use super::alphabet::{self, ALPHABET_SIZE};

/// Follower counts for a single generation step.
///
/// Conceptually the outgoing edges of the current context, weighted by
/// how many times each follower was observed in the corpus buffer. Slots
/// are indexed by `symbol - ALPHABET_START`.
///
/// ## Responsibilities:
/// - Accumulate follower occurrences during one matching pass
/// - Draw the next symbol by inverse-CDF weighted sampling
///
/// The table is cleared by the generation loop after each step, never by sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
	counts: [u32; ALPHABET_SIZE],
}

impl Default for FrequencyTable {
	fn default() -> Self {
		Self::new()
	}
}

impl FrequencyTable {
	pub fn new() -> Self {
		Self { counts: [0; ALPHABET_SIZE] }
	}

	/// Records one more occurrence of `symbol` as a follower.
	#[inline]
	pub fn increment(&mut self, symbol: u8) {
		self.counts[alphabet::index(symbol)] += 1;
	}

	pub fn count(&self, symbol: u8) -> u32 {
		self.counts[alphabet::index(symbol)]
	}

	/// Sum of every count.
	pub fn total(&self) -> u64 {
		self.counts.iter().map(|&c| u64::from(c)).sum()
	}

	pub fn clear(&mut self) {
		self.counts = [0; ALPHABET_SIZE];
	}

	/// Resolves a toss in `[1, total]` to a symbol.
	///
	/// Walks the alphabet in ascending code order, subtracting each count
	/// from `toss`; the first symbol whose count covers the remainder wins.
	/// Returns `None` if `toss` is zero or exceeds the total.
	pub fn pick(&self, mut toss: u64) -> Option<u8> {
		if toss == 0 {
			return None;
		}
		for (slot, &count) in self.counts.iter().enumerate() {
			let count = u64::from(count);
			if toss <= count {
				return Some(alphabet::symbol(slot));
			}
			toss -= count;
		}
		None
	}

	/// Draws one symbol with probability proportional to its count.
	///
	/// Returns `None` if the table is empty; callers treat that as a
	/// context with no observed continuation.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u8> {
		let total = self.total();
		if total == 0 {
			return None;
		}
		self.pick(rng.random_range(1..=total))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn table(entries: &[(u8, u32)]) -> FrequencyTable {
		let mut table = FrequencyTable::new();
		for &(symbol, count) in entries {
			for _ in 0..count {
				table.increment(symbol);
			}
		}
		table
	}

	#[test]
	fn pick_walks_ascending_codes() {
		let table = table(&[(b'b', 3), (b'a', 2)]);
		assert_eq!(table.total(), 5);
		assert_eq!(table.pick(1), Some(b'a'));
		assert_eq!(table.pick(2), Some(b'a'));
		assert_eq!(table.pick(3), Some(b'b'));
		assert_eq!(table.pick(5), Some(b'b'));
		assert_eq!(table.pick(6), None);
		assert_eq!(table.pick(0), None);
	}

	#[test]
	fn empty_table_has_no_sample() {
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(FrequencyTable::new().sample(&mut rng), None);
	}

	#[test]
	fn samples_only_observed_symbols() {
		let table = table(&[(b'd', 1), (b' ', 4)]);
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..500 {
			let symbol = table.sample(&mut rng).unwrap();
			assert!(symbol == b'd' || symbol == b' ');
		}
	}

	#[test]
	fn sampling_follows_the_weights() {
		let table = table(&[(b'x', 1), (b'y', 9)]);
		let mut rng = StdRng::seed_from_u64(1);
		let ys = (0..10_000).filter(|_| table.sample(&mut rng) == Some(b'y')).count();
		assert!((8_500..9_500).contains(&ys), "got {ys}");
	}

	#[test]
	fn clear_resets_every_slot() {
		let mut table = table(&[(b'q', 2), (b'|', 1)]);
		assert_eq!(table.count(b'q'), 2);
		assert_eq!(table.count(b'|'), 1);
		table.clear();
		assert_eq!(table, FrequencyTable::new());
	}
}
