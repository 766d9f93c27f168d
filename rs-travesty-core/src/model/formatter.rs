use super::alphabet::{SENTINEL, SPACE};
use super::generation_input::OutputOptions;

/// Indentation written after each wrapped line in verse mode.
pub const VERSE_INDENT: &str = "    ";

/// Line pacing state machine.
///
/// Counts emitted symbols and raises `near_boundary` every `line_width`
/// symbols; the next space after that ends the line.
///
/// # Behavior
/// - The sentinel is never written; in verse mode it writes a bare line break,
///   it is still counted and can arm the next wrap
/// - A wrap writes the triggering space, a line break, then the verse indent if enabled
/// - Inserted breaks and indentation do not count as emitted symbols
#[derive(Debug)]
pub struct OutputFormatter {
	line_width: usize,
	verse: bool,
	chars_emitted: usize,
	near_boundary: bool,
	last_symbol: Option<u8>,
	out: String,
}

impl OutputFormatter {
	pub fn new(options: &OutputOptions) -> Self {
		Self {
			line_width: options.line_width.max(1),
			verse: options.verse,
			chars_emitted: 0,
			near_boundary: false,
			last_symbol: None,
			out: String::with_capacity(options.out_chars.saturating_add(16).min(1 << 20)),
		}
	}

	/// Writes the initial context verbatim.
	///
	/// Seed symbols count toward the total and may raise `near_boundary`,
	/// but never wrap and are never interpreted as sentinels.
	pub fn write_seed(&mut self, seed: &[u8]) {
		for &symbol in seed {
			self.out.push(symbol as char);
			self.count(symbol);
		}
	}

	/// Writes one generated symbol.
	pub fn emit(&mut self, symbol: u8) {
		if symbol == SENTINEL {
			if self.verse {
				self.out.push('\n');
			}
		} else {
			self.out.push(symbol as char);
		}

		self.count(symbol);

		if self.near_boundary && symbol == SPACE {
			self.out.push('\n');
			if self.verse {
				self.out.push_str(VERSE_INDENT);
			}
			self.near_boundary = false;
		}
	}

	fn count(&mut self, symbol: u8) {
		self.chars_emitted += 1;
		if self.chars_emitted % self.line_width == 0 {
			self.near_boundary = true;
		}
		self.last_symbol = Some(symbol);
	}

	/// Generation keeps going until `out_chars` symbols are out and the last one was a space.
	pub fn wants_more(&self, out_chars: usize) -> bool {
		self.chars_emitted < out_chars || self.last_symbol != Some(SPACE)
	}

	pub fn chars_emitted(&self) -> usize {
		self.chars_emitted
	}

	#[cfg(test)]
	fn near_boundary(&self) -> bool {
		self.near_boundary
	}

	#[cfg(test)]
	fn as_str(&self) -> &str {
		&self.out
	}

	pub fn into_string(self) -> String {
		self.out
	}
}
