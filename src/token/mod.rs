mod error;
mod queue;
mod ser;
#[cfg(test)]
mod tests;

use std::fmt::{self, Display};

pub use error::{Error, Expected};
pub use queue::TokenQueue;


/// A lexical token: a type, and the text it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<T> {
	pub kind: T,
	pub value: Box<str>,
}


impl<T> Token<T> {
	pub fn new<S: Into<Box<str>>>(kind: T, value: S) -> Self {
		Self { kind, value: value.into() }
	}


	/// Check both the type and the value, the latter in a case sensitive manner.
	pub fn is(&self, kind: &T, value: &str) -> bool
	where
		T: PartialEq,
	{
		self.matches(kind, value, true)
	}


	/// Check both the type and the value.
	pub fn matches(&self, kind: &T, value: &str, case_sensitive: bool) -> bool
	where
		T: PartialEq,
	{
		self.kind == *kind && self.value_matches(value, case_sensitive)
	}


	/// Check the value only.
	pub fn value_matches(&self, value: &str, case_sensitive: bool) -> bool {
		if case_sensitive {
			&*self.value == value
		} else {
			self.value.to_lowercase() == value.to_lowercase()
		}
	}
}


impl<T: Display> Display for Token<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} '{}'", self.kind, self.value.escape_debug())
	}
}
