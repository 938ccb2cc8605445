//! Integers, identifiers, operators and parentheses.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

use super::Trivia;
use crate::{Rules, StateBuilder};


const WHITESPACE: &str = " \t\r\n";


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	Number,
	Identifier,
	Operator, // + - * / % ^ =
	OpenParens,
	CloseParens,
	Whitespace,
}


impl Kind {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Number => "number",
			Self::Identifier => "identifier",
			Self::Operator => "operator",
			Self::OpenParens => "open-parens",
			Self::CloseParens => "close-parens",
			Self::Whitespace => "whitespace",
		}
	}
}


impl Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.name().fmt(f)
	}
}


impl Serialize for Kind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}


impl Trivia for Kind {
	fn is_trivia(&self) -> bool {
		matches!(self, Self::Whitespace)
	}
}


/// Floating point numbers are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct Arithmetic;


impl Rules for Arithmetic {
	type Kind = Kind;

	fn register(&self, start: StateBuilder<Kind>) {
		let whitespace = start.when(WHITESPACE).then_new_state();
		whitespace.when(WHITESPACE).then_same_state();
		whitespace.when_anything().rewind().returns(Kind::Whitespace);

		let number = start.when_number().then_new_state();
		number.when_number().then_same_state();
		number.when(".").error("floating point not supported");
		number.when_anything().rewind().returns(Kind::Number);

		let identifier = start.when_letter().then_new_state();
		start.when("_").then(&identifier);
		identifier.when_letter_or_number().then_same_state();
		identifier.when("_").then_same_state();
		identifier.when_anything().rewind().returns(Kind::Identifier);

		start.when("+-*/%^=").returns(Kind::Operator);
		start.when("(").returns(Kind::OpenParens);
		start.when(")").returns(Kind::CloseParens);
	}
}
