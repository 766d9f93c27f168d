use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravestyError {
	#[error("Insufficient input: pattern needs {required} symbols, corpus provides {available}")]
	InsufficientInput { required: usize, available: usize },

	#[error("Invalid parameter: {0}")]
	InvalidParameter(String),

	#[error("No continuation observed for pattern {pattern:?}")]
	NoContinuation { pattern: String },

	#[error("IO Error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Config Parsing Error: {0}")]
	Config(#[from] serde_json::Error),
}

pub type TravestyResult<T> = Result<T, TravestyError>;
