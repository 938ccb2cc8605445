mod fmt;

use super::Token;


/// What the consumer was expecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected<T> {
	/// A token of the given type.
	Type(T),
	/// A token of any of the given types.
	Types(Box<[T]>),
}


/// A token consumption error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<T> {
	/// The queue was exhausted.
	UnexpectedEof { expected: Expected<T> },
	/// The token does not have the expected type.
	UnexpectedType { token: Token<T>, expected: Expected<T> },
	/// The token has the expected type, but not the expected value.
	UnexpectedValue { token: Token<T>, expected: Box<str> },
}


impl<T> Error<T> {
	/// Create an error signaling the queue is exhausted, and what was expected.
	pub fn unexpected_eof(expected: Expected<T>) -> Self {
		Self::UnexpectedEof { expected }
	}


	/// Create an error signaling the token has an unexpected type.
	pub fn unexpected_type(token: Token<T>, expected: Expected<T>) -> Self {
		Self::UnexpectedType { token, expected }
	}


	/// Create an error signaling the token has an unexpected value.
	pub fn unexpected_value(token: Token<T>, expected: &str) -> Self {
		Self::UnexpectedValue { token, expected: expected.into() }
	}


	/// The offending token, if the queue wasn't exhausted.
	pub fn token(&self) -> Option<&Token<T>> {
		match self {
			Self::UnexpectedEof { .. } => None,
			Self::UnexpectedType { token, .. } | Self::UnexpectedValue { token, .. } => Some(token),
		}
	}
}


impl<T> std::error::Error for Error<T>
where
	T: std::fmt::Debug + std::fmt::Display,
{}
