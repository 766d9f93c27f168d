use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TravestyError, TravestyResult};

/// Input parameters for one travesty run.
///
/// `GenerationInput` holds both the **corpus parameters** (buffer capacity,
/// pattern length) used to build the index and the **output parameters**
/// (output size, line width, verse) used by the generation loop.
///
/// # Invariants (checked by [`GenerationInput::validate`])
/// - `pattern_length >= 1`
/// - `buffer_capacity > pattern_length`
/// - `line_width >= 1`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationInput {
	/// Maximum number of symbols kept from the corpus, wraparound tail included.
	pub buffer_capacity: usize,

	/// Context length k.
	pub pattern_length: usize,

	/// Minimum number of symbols to emit; generation then runs on to the next space.
	pub out_chars: usize,

	/// Target line width for wrapping.
	pub line_width: usize,

	/// Indent wrapped lines and break on the sentinel.
	pub verse: bool,

	/// Random seed; `None` draws one from the operating system.
	pub seed: Option<u64>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			buffer_capacity: 10_000,
			pattern_length: 4,
			out_chars: 2_000,
			line_width: 50,
			verse: false,
			seed: None,
		}
	}
}

/// Output-side slice of [`GenerationInput`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputOptions {
	pub out_chars: usize,
	pub line_width: usize,
	pub verse: bool,
}

impl GenerationInput {
	/// Loads parameters from a JSON file. Missing fields keep their defaults.
	///
	/// # Errors
	/// Returns `Io` if the file cannot be read and `Config` if it is not valid JSON.
	pub fn load_from_file<P: AsRef<Path>>(path: P) -> TravestyResult<Self> {
		let content = std::fs::read_to_string(path)?;
		let input: Self = serde_json::from_str(&content)?;
		Ok(input)
	}

	/// Checks every parameter constraint.
	///
	/// # Errors
	/// Returns `InvalidParameter` naming the first violated constraint.
	pub fn validate(&self) -> TravestyResult<()> {
		if self.pattern_length < 1 {
			return Err(TravestyError::InvalidParameter("pattern length must be >= 1".to_owned()));
		}
		if self.buffer_capacity <= self.pattern_length {
			return Err(TravestyError::InvalidParameter(format!(
				"buffer capacity ({}) must exceed pattern length ({})",
				self.buffer_capacity, self.pattern_length
			)));
		}
		if self.line_width < 1 {
			return Err(TravestyError::InvalidParameter("line width must be >= 1".to_owned()));
		}
		Ok(())
	}

	pub fn output_options(&self) -> OutputOptions {
		OutputOptions {
			out_chars: self.out_chars,
			line_width: self.line_width,
			verse: self.verse,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn defaults_are_valid() {
		assert!(GenerationInput::default().validate().is_ok());
	}

	#[test]
	fn rejects_each_broken_constraint() {
		let broken = [
			GenerationInput { pattern_length: 0, ..Default::default() },
			GenerationInput { buffer_capacity: 4, pattern_length: 4, ..Default::default() },
			GenerationInput { line_width: 0, ..Default::default() },
		];
		for input in broken {
			assert!(matches!(input.validate(), Err(TravestyError::InvalidParameter(_))), "{input:?}");
		}
	}

	#[test]
	fn loads_partial_json() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{ "pattern_length": 7, "verse": true, "seed": 99 }}"#).unwrap();
		let input = GenerationInput::load_from_file(file.path()).unwrap();
		assert_eq!(input.pattern_length, 7);
		assert!(input.verse);
		assert_eq!(input.seed, Some(99));
		assert_eq!(input.line_width, GenerationInput::default().line_width);
	}

	#[test]
	fn malformed_json_is_a_config_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "{{ pattern_length: ").unwrap();
		assert!(matches!(GenerationInput::load_from_file(file.path()), Err(TravestyError::Config(_))));
	}
}
