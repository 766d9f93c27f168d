/// First symbol of the alphabet (space).
pub const ALPHABET_START: u8 = b' ';

/// Last symbol of the alphabet, also the reserved sentinel.
pub const ALPHABET_END: u8 = b'|';

/// Number of symbols in the alphabet (93).
pub const ALPHABET_SIZE: usize = (ALPHABET_END - ALPHABET_START) as usize + 1;

/// Structural marker: never printed literally, forces a line break in verse mode.
pub const SENTINEL: u8 = ALPHABET_END;

pub const SPACE: u8 = b' ';

/// Returns `true` if `symbol` belongs to the alphabet.
pub fn contains(symbol: u8) -> bool {
	(ALPHABET_START..=ALPHABET_END).contains(&symbol)
}

/// Maps an alphabet symbol to its slot in fixed-size tables.
///
/// Callers only pass symbols taken from a normalized buffer.
#[inline]
pub fn index(symbol: u8) -> usize {
	debug_assert!(contains(symbol), "symbol {symbol} outside the alphabet");
	(symbol - ALPHABET_START) as usize
}

/// Inverse of [`index`].
#[inline]
pub fn symbol(index: usize) -> u8 {
	debug_assert!(index < ALPHABET_SIZE);
	ALPHABET_START + index as u8
}

/// Iterates over every symbol in ascending code order.
pub fn symbols() -> impl Iterator<Item = u8> {
	ALPHABET_START..=ALPHABET_END
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn alphabet_has_93_symbols() {
		assert_eq!(ALPHABET_SIZE, 93);
		assert_eq!(symbols().count(), ALPHABET_SIZE);
	}

	#[test]
	fn index_round_trips_at_the_edges() {
		assert_eq!(index(b' '), 0);
		assert_eq!(index(SENTINEL), ALPHABET_SIZE - 1);
		assert_eq!(symbol(index(b'q')), b'q');
	}

	#[test]
	fn excludes_symbols_past_the_sentinel() {
		assert!(contains(b'|'));
		assert!(!contains(b'}'));
		assert!(!contains(b'~'));
		assert!(!contains(0x7f));
		assert!(!contains(b'\n'));
	}
}
