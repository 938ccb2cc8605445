use std::fmt::{self, Display};


/// A human readable position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
	pub line: u32,
	pub column: u32,
}


impl SourcePos {
	pub fn visit(&mut self, input: char) {
		if input == '\n' {
			self.line += 1;
			self.column = 0;
		} else {
			self.column += 1;
		}
	}
}


impl Default for SourcePos {
	fn default() -> Self {
		Self { line: 1, column: 0 }
	}
}


impl Display for SourcePos {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}


/// A cursor for the input text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a str,
	/// Offset in bytes, always on a char boundary.
	offset: usize,
	/// Offset in chars.
	index: usize,
	pos: SourcePos,
}


impl<'a> Cursor<'a> {
	pub fn pos(&self) -> SourcePos {
		self.pos
	}


	/// How many characters have been consumed.
	pub fn index(&self) -> usize {
		self.index
	}


	pub fn is_eof(&self) -> bool {
		self.offset == self.input.len()
	}


	/// The current character, or `None` at the end of the input.
	pub fn peek(&self) -> Option<char> {
		self.input[self.offset ..].chars().next()
	}


	pub fn step(&mut self) {
		if let Some(c) = self.peek() {
			self.pos.visit(c);
			self.offset += c.len_utf8();
			self.index += 1;
		}
	}
}


impl<'a> From<&'a str> for Cursor<'a> {
	fn from(input: &'a str) -> Self {
		Self {
			input,
			offset: 0,
			index: 0,
			pos: SourcePos::default(),
		}
	}
}
