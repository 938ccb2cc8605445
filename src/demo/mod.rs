//! Example tokenizers, used by the `dfalex` binary.

pub mod arithmetic;
pub mod json;

use std::{
	fmt::{self, Display},
	str::FromStr,
};


/// Token types for tokens that carry no meaning for a parser, like whitespace.
pub trait Trivia {
	fn is_trivia(&self) -> bool;
}


/// The available example tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
	Arithmetic,
	Json,
}


impl Demo {
	pub const NAMES: &'static [&'static str] = &["arithmetic", "json"];


	pub fn name(&self) -> &'static str {
		match self {
			Self::Arithmetic => "arithmetic",
			Self::Json => "json",
		}
	}
}


impl Default for Demo {
	fn default() -> Self {
		Self::Arithmetic
	}
}


impl FromStr for Demo {
	type Err = UnknownDemo;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name {
			"arithmetic" => Ok(Self::Arithmetic),
			"json" => Ok(Self::Json),
			other => Err(UnknownDemo(other.into())),
		}
	}
}


impl Display for Demo {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.name().fmt(f)
	}
}


/// The name didn't match any example tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDemo(pub Box<str>);


impl Display for UnknownDemo {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "unknown lexer '{}', expected one of: {}", self.0, Demo::NAMES.join(", "))
	}
}


impl std::error::Error for UnknownDemo {}
