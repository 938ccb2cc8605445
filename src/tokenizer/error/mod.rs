mod fmt;

use super::SourcePos;
use crate::automaton::StateId;


/// The kind of tokenization error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	/// No transition in the current state handles the character. `None` is the end of the
	/// input.
	Unmatched(Option<char>),
	/// The taken transition was registered as an error, with the given message.
	Explicit(Box<str>),
	/// The taken transition neither finishes a token nor leads to another state. This is a
	/// defect in the automaton, not in the input.
	MissingDestination,
}


/// A tokenization error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	pub pos: SourcePos,
	/// Offset of the offending character in the input, in chars.
	pub offset: usize,
	/// The state that was being visited.
	pub state: StateId,
}


impl std::error::Error for Error {}


impl Error {
	pub fn unmatched(input: Option<char>, pos: SourcePos, offset: usize, state: StateId) -> Self {
		Self { error: ErrorKind::Unmatched(input), pos, offset, state }
	}

	pub fn explicit(message: &str, pos: SourcePos, offset: usize, state: StateId) -> Self {
		Self { error: ErrorKind::Explicit(message.into()), pos, offset, state }
	}

	pub fn missing_destination(pos: SourcePos, offset: usize, state: StateId) -> Self {
		Self { error: ErrorKind::MissingDestination, pos, offset, state }
	}


	/// Whether the error is caused by a defect in the automaton rather than by the input.
	pub fn is_automaton_defect(&self) -> bool {
		matches!(self.error, ErrorKind::MissingDestination)
	}
}
