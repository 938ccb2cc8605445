use std::fmt::{self, Display};

use super::{Error, Expected};


impl<T: Display> Display for Expected<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Type(kind) => kind.fmt(f),

			Self::Types(kinds) if kinds.is_empty() => "nothing".fmt(f),

			Self::Types(kinds) => {
				for (ix, kind) in kinds.iter().enumerate() {
					if ix > 0 {
						" or ".fmt(f)?;
					}
					kind.fmt(f)?;
				}

				Ok(())
			}
		}
	}
}


impl<T: Display> Display for Error<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnexpectedEof { expected } => {
				write!(f, "unexpected end of tokens, expected {}", expected)
			}

			Self::UnexpectedType { token, expected } => {
				write!(f, "unexpected token {}, expected {}", token, expected)
			}

			Self::UnexpectedValue { token, expected } => {
				write!(f, "unexpected token {}, expected '{}'", token, expected.escape_debug())
			}
		}
	}
}
