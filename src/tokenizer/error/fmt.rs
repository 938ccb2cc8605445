use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Unmatched(Some(c)) => {
				write!(f, "no suitable transition found for '{}'", c.escape_debug())
			}

			Self::Unmatched(None) => "no suitable transition found for end of input".fmt(f),

			Self::Explicit(message) => message.fmt(f),

			Self::MissingDestination => "transition does not lead to a next state".fmt(f),
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} ({}) - {}.", self.pos, self.state, self.error)
	}
}
