use super::{CharacterClass, StateId};


/// What happens once a transition has been taken.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition<T> {
	/// Move on to the given state, keeping the pending token value.
	Continue(StateId),
	/// Finish the pending token with the given type, and go back to the start state.
	Emit(T),
	/// Abort tokenization with the given message.
	Fail(Box<str>),
}


/// A guarded edge out of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T> {
	/// The characters this transition reacts to.
	pub class: CharacterClass,
	/// Whether the matched character is appended to the pending token value.
	pub include: bool,
	/// Whether the matched character should be visited again. When set, the cursor is not
	/// advanced.
	pub reread: bool,
	/// The disposition, if one was chosen when building the automaton.
	pub disposition: Option<Disposition<T>>,
}


impl<T> Transition<T> {
	/// A transition that includes the matched character and has no disposition yet.
	pub fn new(class: CharacterClass) -> Self {
		Self {
			class,
			include: true,
			reread: false,
			disposition: None,
		}
	}


	/// Check if the transition reacts to the given input. `None` stands for the end of the
	/// input.
	pub fn handles(&self, input: Option<char>) -> bool {
		self.class.handles(input)
	}
}
