use std::{
	fmt::{self, Display},
	path::Path,
};

use dfalex::tokenizer;


/// A fatal failure, which aborts the program.
#[derive(Debug)]
pub enum Failure {
	/// Failed to read the input.
	Io { error: std::io::Error, path: Box<Path> },
	/// The input could not be tokenized.
	Tokenize { error: tokenizer::Error, path: Box<Path> },
	/// The tokens could not be serialized.
	Json(serde_json::Error),
}


impl Failure {
	pub fn io(error: std::io::Error, path: &Path) -> Self {
		Self::Io { error, path: path.into() }
	}

	pub fn tokenize(error: tokenizer::Error, path: &Path) -> Self {
		Self::Tokenize { error, path: path.into() }
	}
}


impl From<serde_json::Error> for Failure {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error)
	}
}


impl Display for Failure {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Io { error, path } => write!(f, "{}: {}", path.display(), error),

			Self::Tokenize { error, path } => {
				write!(f, "{}: {}", path.display(), error)?;

				if error.is_automaton_defect() {
					" This is a bug in the tokenizer.".fmt(f)?;
				}

				Ok(())
			}

			Self::Json(error) => write!(f, "failed to serialize tokens: {}", error),
		}
	}
}


impl std::error::Error for Failure {}
