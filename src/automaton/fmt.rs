use std::fmt::{self, Display};

use super::{Automaton, CharacterClass, Disposition, Location, StateId, Transition};


impl Display for StateId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "s{}", self.0)
	}
}


impl Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}, transition #{}", self.state, self.transition)
	}
}


impl Display for CharacterClass {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Custom(characters) => {
				"\"".fmt(f)?;
				for c in characters.iter() {
					c.escape_debug().fmt(f)?;
				}
				"\"".fmt(f)
			}

			Self::LowerLetter => "lower case letter".fmt(f),
			Self::UpperLetter => "upper case letter".fmt(f),
			Self::Letter => "letter".fmt(f),
			Self::Digit => "digit".fmt(f),
			Self::LetterOrDigit => "letter or digit".fmt(f),
			Self::EndOfInput => "end of input".fmt(f),
			Self::Any => "any".fmt(f),
		}
	}
}


impl<T: Display> Display for Transition<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.class.fmt(f)?;

		match (self.include, self.reread) {
			(true, false) => (),
			(false, false) => " (ignore)".fmt(f)?,
			(false, true) => " (ignore, reread)".fmt(f)?,
			(true, true) => " (reread)".fmt(f)?,
		}

		match &self.disposition {
			Some(Disposition::Continue(state)) => write!(f, " -> {}", state),
			Some(Disposition::Emit(kind)) => write!(f, " => {}", kind),
			Some(Disposition::Fail(message)) => write!(f, " !! \"{}\"", message.escape_debug()),
			None => " ??".fmt(f),
		}
	}
}


/// One line per transition, in registration order.
impl<T: Display> Display for Automaton<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (id, state) in self.states() {
			if state.transitions.is_empty() {
				writeln!(f, "{}: (no transitions)", id)?;
			}

			for transition in &state.transitions {
				writeln!(f, "{}: {}", id, transition)?;
			}
		}

		Ok(())
	}
}
