//! JSON, without validating the structure of the document.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

use super::Trivia;
use crate::{Rules, StateBuilder};


const WHITESPACE: &str = " \t\r\n";
const KEYWORDS: &[&str] = &["true", "false", "null"];


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	Punctuation, // { } [ ] : ,
	String,
	Number,
	Keyword, // true false null
	Whitespace,
}


impl Kind {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Punctuation => "punctuation",
			Self::String => "string",
			Self::Number => "number",
			Self::Keyword => "keyword",
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


/// String tokens keep their quotes and escape sequences verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct Json;


impl Json {
	fn strings(start: &StateBuilder<Kind>) {
		let string = start.when("\"").then_new_state();
		string.when("\"").returns(Kind::String);

		let escape = string.when("\\").then_new_state();
		escape.when("\"\\/bfnrtu").then(&string);
		escape.when_anything().error("invalid escape sequence");

		string.when_input_ends().error("unterminated string");
		string.when_anything().then_same_state();
	}


	fn numbers(start: &StateBuilder<Kind>) {
		let integer = start.when_number().then_new_state();

		let sign = start.when("-").then_new_state();
		sign.when_number().then(&integer);
		sign.when_anything().error("expected a digit after the minus sign");

		integer.when_number().then_same_state();
		let point = integer.when(".").then_new_state();
		integer.when_anything().rewind().returns(Kind::Number);

		let fraction = point.when_number().then_new_state();
		point.when_anything().error("expected a digit after the decimal point");

		fraction.when_number().then_same_state();
		fraction.when_anything().rewind().returns(Kind::Number);
	}


	/// One chain of states per keyword. The keywords don't share a first letter.
	fn keyword(start: &StateBuilder<Kind>, keyword: &str) {
		let mut state = start.clone();
		let mut chars = keyword.chars().peekable();

		while let Some(c) = chars.next() {
			let transition = state.when(c.to_string());

			if chars.peek().is_none() {
				transition.returns(Kind::Keyword);
				break;
			}

			state = transition.then_new_state();
		}
	}
}


impl Rules for Json {
	type Kind = Kind;

	fn register(&self, start: StateBuilder<Kind>) {
		let whitespace = start.when(WHITESPACE).then_new_state();
		whitespace.when(WHITESPACE).then_same_state();
		whitespace.when_anything().rewind().returns(Kind::Whitespace);

		start.when("{}[]:,").returns(Kind::Punctuation);

		Self::strings(&start);
		Self::numbers(&start);

		for keyword in KEYWORDS {
			Self::keyword(&start, keyword);
		}
	}
}
