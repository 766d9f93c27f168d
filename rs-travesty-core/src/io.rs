use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::TravestyResult;

/// Reads a whole corpus file into a `String`.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 sequences are replaced, they are dropped later by normalization
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> TravestyResult<String> {
	let file = File::open(filename)?;
	read_corpus_from(file)
}

/// Reads a corpus from any reader until EOF (stdin, sockets, in-memory buffers).
pub fn read_corpus_from<R: Read>(mut reader: R) -> TravestyResult<String> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_file_contents() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "the cat\nsat").unwrap();
		assert_eq!(read_corpus(file.path()).unwrap(), "the cat\nsat");
	}

	#[test]
	fn replaces_invalid_utf8() {
		let text = read_corpus_from(&b"ab\xffcd"[..]).unwrap();
		assert_eq!(text, "ab\u{FFFD}cd");
	}

	#[test]
	fn missing_file_is_io_error() {
		let err = read_corpus("/definitely/not/here.txt").unwrap_err();
		assert!(matches!(err, crate::TravestyError::Io(_)));
	}
}
