use std::fmt::{self, Display};

use termion::{color as term, style};
pub use termion::color::{Blue, Red, Yellow};


/// Paint the foreground with a given color when formatting the value.
pub struct Fg<C, T>(pub C, pub T);


impl<C, T> Display for Fg<C, T>
where
	C: term::Color + Copy,
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}", term::Fg(self.0), self.1, term::Fg(term::Reset))
	}
}


/// Use a bold font when formatting the value.
pub struct Bold<T>(pub T);


impl<T: Display> Display for Bold<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}", style::Bold, self.0, style::Reset)
	}
}


/// A line to separate sections of the output.
pub fn separator() -> Fg<Yellow, &'static str> {
	Fg(Yellow, "--------------------------------------------------")
}
