mod cursor;
mod error;

use crate::{
	automaton::{Automaton, Disposition, Location, StateBuilder, StateId},
	token::{Token, TokenQueue},
};
pub use cursor::{Cursor, SourcePos};
pub use error::{Error, ErrorKind};


/// The rules of a concrete tokenizer. `Kind` is the token type, which uniquely identifies
/// each type of token.
pub trait Rules {
	type Kind: Clone;

	/// Register every state and transition of the automaton, starting from the start state.
	/// The start state is a clean slate for each token. This is called exactly once, when
	/// the tokenizer is built.
	///
	/// ```
	/// # use dfalex::{Rules, StateBuilder};
	/// struct Numbers;
	///
	/// impl Rules for Numbers {
	/// 	type Kind = &'static str;
	///
	/// 	fn register(&self, start: StateBuilder<Self::Kind>) {
	/// 		let number = start.when_number().then_new_state();
	/// 		number.when_number().then_same_state();
	/// 		number.when_anything().rewind().returns("number");
	/// 	}
	/// }
	/// ```
	fn register(&self, start: StateBuilder<Self::Kind>);
}


/// Converts text into tokens, driving a fixed automaton.
///
/// The automaton is immutable once built, so the tokenizer may be shared across threads
/// and reused for any number of inputs.
#[derive(Debug, Clone)]
pub struct Tokenizer<T> {
	automaton: Automaton<T>,
}


impl<T: Clone> Tokenizer<T> {
	/// Build a tokenizer from the given rules.
	pub fn new<R>(rules: &R) -> Self
	where
		R: Rules<Kind = T>,
	{
		Self::build(|start| rules.register(start))
	}


	/// Build a tokenizer, registering the automaton with the given callback.
	pub fn build<F>(register: F) -> Self
	where
		F: FnOnce(StateBuilder<T>),
	{
		let start = StateBuilder::start();
		register(start.clone());
		Self { automaton: start.finish() }
	}


	pub fn automaton(&self) -> &Automaton<T> {
		&self.automaton
	}


	/// Check that every transition has a disposition. Transitions listed in the error would
	/// make tokenization fail if they were ever taken.
	pub fn check(&self) -> Result<(), Box<[Location]>> {
		let undecided = self.automaton.undecided();

		if undecided.is_empty() {
			Ok(())
		} else {
			Err(undecided.into_boxed_slice())
		}
	}


	/// Convert the text into tokens. The whole input is either converted, or an error is
	/// produced. There are no partial results.
	pub fn tokenize(&self, text: &str) -> Result<TokenQueue<T>, Error> {
		let mut cursor = Cursor::from(text);
		let mut tokens = Vec::new();
		let mut state = StateId::START;
		let mut value = String::new();

		loop {
			let eof = cursor.is_eof();

			// A clean end between tokens.
			if state == StateId::START && eof {
				break;
			}

			let input = cursor.peek();
			let (pos, offset) = (cursor.pos(), cursor.index());

			let transition = match self.automaton.state(state).select(input) {
				Some((_, transition)) => transition,
				None => return Err(Error::unmatched(input, pos, offset, state)),
			};

			if !transition.reread {
				cursor.step();
			}

			if transition.include {
				value.extend(input);
			}

			match &transition.disposition {
				Some(Disposition::Fail(message)) => {
					return Err(Error::explicit(message, pos, offset, state));
				}

				Some(Disposition::Emit(kind)) => {
					tokens.push(Token::new(kind.clone(), std::mem::take(&mut value)));
					state = StateId::START;
				}

				Some(Disposition::Continue(next)) => state = *next,

				None => return Err(Error::missing_destination(pos, offset, state)),
			}

			// Consuming the end of the input finishes the scan, even outside the start state.
			if eof && !transition.reread {
				break;
			}
		}

		Ok(tokens.into())
	}
}
