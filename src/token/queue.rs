use std::iter::FromIterator;

use super::{Error, Expected, Token};


/// An ordered sequence of tokens, with a cursor for consuming them.
///
/// The cursor may move past the end of the sequence, in which case there is simply no
/// token to peek or consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenQueue<T> {
	tokens: Vec<Token<T>>,
	position: usize,
}


impl<T> Default for TokenQueue<T> {
	fn default() -> Self {
		Self { tokens: Vec::new(), position: 0 }
	}
}


impl<T> TokenQueue<T> {
	pub fn new() -> Self {
		Self::default()
	}


	/// Move the cursor back to the first token.
	pub fn reset(&mut self) {
		self.position = 0;
	}


	pub fn position(&self) -> usize {
		self.position
	}


	/// The total number of tokens, regardless of the cursor.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}


	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}


	/// Whether the cursor is past the last token.
	pub fn is_exhausted(&self) -> bool {
		self.position >= self.tokens.len()
	}


	pub fn tokens(&self) -> &[Token<T>] {
		&self.tokens
	}


	/// The tokens from the cursor onwards.
	pub fn remaining(&self) -> &[Token<T>] {
		self.tokens.get(self.position ..).unwrap_or(&[])
	}


	pub fn into_tokens(self) -> Vec<Token<T>> {
		self.tokens
	}


	pub fn iter(&self) -> std::slice::Iter<Token<T>> {
		self.tokens.iter()
	}


	/// The token at the cursor.
	pub fn peek(&self) -> Option<&Token<T>> {
		self.tokens.get(self.position)
	}


	pub fn peek_kind(&self) -> Option<&T> {
		self.peek().map(|token| &token.kind)
	}


	pub fn peek_value(&self) -> Option<&str> {
		self.peek().map(|token| &*token.value)
	}


	/// The token at the cursor. The cursor is advanced even if there are no more tokens.
	#[allow(clippy::should_implement_trait)]
	pub fn next(&mut self) -> Option<&Token<T>> {
		let index = self.position;
		self.position += 1;
		self.tokens.get(index)
	}


	pub fn next_kind(&mut self) -> Option<&T> {
		self.next().map(|token| &token.kind)
	}


	pub fn next_value(&mut self) -> Option<&str> {
		self.next().map(|token| &*token.value)
	}
}


impl<T> TokenQueue<T>
where
	T: Clone + PartialEq,
{
	/// The token at the cursor, which must be of the given type if present.
	pub fn peek_as(&self, expected: &T) -> Result<Option<&Token<T>>, Error<T>> {
		check_kind(self.peek(), expected)
	}


	/// Check if there is a token at the cursor with the given type and value. This never
	/// fails.
	pub fn peek_is(&self, kind: &T, value: &str, case_sensitive: bool) -> bool {
		self.peek()
			.map(|token| token.matches(kind, value, case_sensitive))
			.unwrap_or(false)
	}


	/// The token at the cursor, which must be of the given type if present. The cursor is
	/// advanced even if the type doesn't match, so the caller must not retry from the same
	/// position.
	pub fn next_as(&mut self, expected: &T) -> Result<Option<&Token<T>>, Error<T>> {
		check_kind(self.next(), expected)
	}


	/// Consume the token at the cursor only if it has the given type and value.
	pub fn next_is(&mut self, kind: &T, value: &str, case_sensitive: bool) -> bool {
		let is = self.peek_is(kind, value, case_sensitive);

		if is {
			self.position += 1;
		}

		is
	}


	/// Consume a token, which must exist and have the given type.
	pub fn expect(&mut self, kind: &T) -> Result<&Token<T>, Error<T>> {
		match self.next_as(kind)? {
			Some(token) => Ok(token),
			None => Err(Error::unexpected_eof(Expected::Type(kind.clone()))),
		}
	}


	/// Consume a token, which must exist and have the given type and value.
	pub fn expect_value(
		&mut self,
		kind: &T,
		value: &str,
		case_sensitive: bool,
	) -> Result<&Token<T>, Error<T>> {
		let token = self.expect(kind)?;

		if token.value_matches(value, case_sensitive) {
			Ok(token)
		} else {
			Err(Error::unexpected_value(token.clone(), value))
		}
	}


	/// Consume a token, which must exist and have any of the given types.
	pub fn expect_types(&mut self, kinds: &[T]) -> Result<&Token<T>, Error<T>> {
		match self.next() {
			Some(token) if kinds.contains(&token.kind) => Ok(token),
			Some(token) => Err(Error::unexpected_type(token.clone(), Expected::Types(kinds.into()))),
			None => Err(Error::unexpected_eof(Expected::Types(kinds.into()))),
		}
	}


	/// A new queue without the tokens for which the predicate holds. The cursor of the new
	/// queue is at the start, and this queue is left untouched.
	pub fn filter<F>(&self, mut remove: F) -> Self
	where
		F: FnMut(&Token<T>) -> bool,
	{
		self.tokens
			.iter()
			.filter(|token| !remove(token))
			.cloned()
			.collect()
	}
}


fn check_kind<'a, T>(token: Option<&'a Token<T>>, expected: &T) -> Result<Option<&'a Token<T>>, Error<T>>
where
	T: Clone + PartialEq,
{
	match token {
		Some(token) if token.kind != *expected => Err(
			Error::unexpected_type(token.clone(), Expected::Type(expected.clone()))
		),

		token => Ok(token),
	}
}


impl<T> From<Vec<Token<T>>> for TokenQueue<T> {
	fn from(tokens: Vec<Token<T>>) -> Self {
		Self { tokens, position: 0 }
	}
}


impl<T> FromIterator<Token<T>> for TokenQueue<T> {
	fn from_iter<I: IntoIterator<Item = Token<T>>>(iter: I) -> Self {
		Vec::from_iter(iter).into()
	}
}


impl<'a, T> IntoIterator for &'a TokenQueue<T> {
	type Item = &'a Token<T>;
	type IntoIter = std::slice::Iter<'a, Token<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.iter()
	}
}
