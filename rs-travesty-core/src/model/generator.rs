use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::corpus::CorpusBuffer;
use super::formatter::OutputFormatter;
use super::frequency::FrequencyTable;
use super::generation_input::{GenerationInput, OutputOptions};
use super::matcher;
use super::pattern::Pattern;
use super::skip_index::SkipIndex;
use crate::error::{TravestyError, TravestyResult};

/// Text produced by one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProducedText {
	/// Seed, generated symbols, line breaks and indentation, as formatted.
	pub text: String,
	/// Symbols emitted, seed included. Inserted breaks and indents are not counted.
	pub chars_emitted: usize,
}

/// High-level travesty generator.
///
/// # Responsibilities
/// - Own the immutable corpus buffer and its skip index
/// - Run the match, sample, emit, advance loop against any random source
///
/// The index is built once in [`Travesty::new`]; every run borrows it.
#[derive(Clone, Debug)]
pub struct Travesty {
	corpus: CorpusBuffer,
	index: SkipIndex,
	buffer_capacity: usize,
}

impl Travesty {
	/// Builds the corpus buffer and skip index from raw text.
	///
	/// # Errors
	/// - `InvalidParameter` if `pattern_length == 0` or `buffer_capacity <= pattern_length`
	/// - `InsufficientInput` if the usable corpus is shorter than `pattern_length`
	pub fn new(corpus_text: &str, buffer_capacity: usize, pattern_length: usize) -> TravestyResult<Self> {
		let corpus = CorpusBuffer::new(corpus_text, buffer_capacity, pattern_length)?;
		let index = SkipIndex::build(&corpus);
		Ok(Self { corpus, index, buffer_capacity })
	}

	pub fn corpus(&self) -> &CorpusBuffer {
		&self.corpus
	}

	pub fn index(&self) -> &SkipIndex {
		&self.index
	}

	pub fn pattern_length(&self) -> usize {
		self.corpus.pattern_length()
	}

	/// Capacity the corpus buffer was built with.
	pub fn buffer_capacity(&self) -> usize {
		self.buffer_capacity
	}

	/// Runs one generation pass using the seed from `input`.
	///
	/// # Notes
	/// - `input.buffer_capacity` and `input.pattern_length` are fixed at
	///   construction; a mismatch on either is rejected.
	/// - Without a seed, a `StdRng` is seeded from the operating system.
	pub fn generate(&self, input: &GenerationInput) -> TravestyResult<ProducedText> {
		input.validate()?;
		if input.pattern_length != self.pattern_length() {
			return Err(TravestyError::InvalidParameter(format!(
				"pattern length {} does not match the built index ({})",
				input.pattern_length,
				self.pattern_length()
			)));
		}
		if input.buffer_capacity != self.buffer_capacity {
			return Err(TravestyError::InvalidParameter(format!(
				"buffer capacity {} does not match the built index ({})",
				input.buffer_capacity, self.buffer_capacity
			)));
		}

		let mut rng = match input.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		self.generate_with(&input.output_options(), &mut rng)
	}

	/// Runs one generation pass with a caller-supplied random source.
	///
	/// # Behavior
	/// - Writes the seed (first `pattern_length` buffer symbols) verbatim
	/// - Repeats match, sample, emit, advance until at least `out_chars`
	///   symbols are out and the last one was a space
	///
	/// # Errors
	/// - `InvalidParameter` if `line_width == 0`
	/// - `NoContinuation` if a context has no observed follower
	pub fn generate_with<R: Rng + ?Sized>(&self, options: &OutputOptions, rng: &mut R) -> TravestyResult<ProducedText> {
		if options.line_width == 0 {
			return Err(TravestyError::InvalidParameter("line width must be >= 1".to_owned()));
		}

		let mut pattern = Pattern::seed(&self.corpus);
		let mut formatter = OutputFormatter::new(options);
		let mut frequencies = FrequencyTable::new();

		debug!("Seed pattern {:?}, target {} symbols", pattern, options.out_chars);
		formatter.write_seed(pattern.symbols());

		while formatter.wants_more(options.out_chars) {
			let next = self.next_symbol(&pattern, &mut frequencies, rng)?;
			formatter.emit(next);
			pattern.advance(next);
			frequencies.clear();
		}

		debug!("Generation finished after {} symbols", formatter.chars_emitted());
		let chars_emitted = formatter.chars_emitted();
		Ok(ProducedText { text: formatter.into_string(), chars_emitted })
	}

	/// Tallies the followers of `pattern` into `frequencies` and draws one.
	fn next_symbol<R: Rng + ?Sized>(
		&self,
		pattern: &Pattern,
		frequencies: &mut FrequencyTable,
		rng: &mut R,
	) -> TravestyResult<u8> {
		matcher::tally(pattern, &self.index, &self.corpus, frequencies);

		let next = frequencies.sample(rng).ok_or_else(|| TravestyError::NoContinuation {
			pattern: pattern.to_string(),
		})?;
		trace!("{:?} -> {:?} (total {})", pattern, next as char, frequencies.total());
		Ok(next)
	}
}
