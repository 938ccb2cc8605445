use std::{cell::RefCell, rc::Rc};

use super::{Automaton, CharacterClass, Disposition, Location, StateId, Transition};


/// The automaton under construction. Builders for the same automaton share it, and only
/// hold indices into it.
type Graph<T> = Rc<RefCell<Automaton<T>>>;


/// Describes the transitions out of a single state.
///
/// Every `when*` method appends a new transition to the state, so registration order is
/// preserved: when tokenizing, the first matching transition wins.
#[derive(Debug)]
pub struct StateBuilder<T> {
	graph: Graph<T>,
	state: StateId,
}


// Derive would require T: Clone.
impl<T> Clone for StateBuilder<T> {
	fn clone(&self) -> Self {
		Self { graph: Rc::clone(&self.graph), state: self.state }
	}
}


impl<T> StateBuilder<T> {
	/// Create a builder for the start state of a brand new automaton.
	pub(crate) fn start() -> Self {
		Self {
			graph: Rc::new(RefCell::new(Automaton::new())),
			state: StateId::START,
		}
	}


	/// Take the built automaton.
	pub(crate) fn finish(self) -> Automaton<T>
	where
		T: Clone,
	{
		// Other builders may still be alive if the caller stashed them somewhere.
		match Rc::try_unwrap(self.graph) {
			Ok(graph) => graph.into_inner(),
			Err(graph) => graph.borrow().clone(),
		}
	}


	/// The id of the state being described.
	pub fn id(&self) -> StateId {
		self.state
	}


	/// Describe what happens when the end of the input is reached.
	pub fn when_input_ends(&self) -> TransitionBuilder<T> {
		self.on(CharacterClass::EndOfInput)
	}


	/// Describe what happens when the current character is any character from the list.
	pub fn when<S: AsRef<str>>(&self, characters: S) -> TransitionBuilder<T> {
		self.on(CharacterClass::custom(characters))
	}


	/// Describe what happens when the current character is a lower case letter.
	pub fn when_lower_case_letter(&self) -> TransitionBuilder<T> {
		self.on(CharacterClass::LowerLetter)
	}


	/// Describe what happens when the current character is an upper case letter.
	pub fn when_upper_case_letter(&self) -> TransitionBuilder<T> {
		self.on(CharacterClass::UpperLetter)
	}


	/// Describe what happens when the current character is a letter, in any case.
	pub fn when_letter(&self) -> TransitionBuilder<T> {
		self.on(CharacterClass::Letter)
	}


	/// Describe what happens when the current character is a digit (0 - 9).
	pub fn when_number(&self) -> TransitionBuilder<T> {
		self.on(CharacterClass::Digit)
	}


	/// Describe what happens when the current character is a letter or a digit.
	pub fn when_letter_or_number(&self) -> TransitionBuilder<T> {
		self.on(CharacterClass::LetterOrDigit)
	}


	/// Describe what happens when anything is found, including the end of the input.
	/// This is usually the catch-all case, registered after every other transition.
	pub fn when_anything(&self) -> TransitionBuilder<T> {
		self.on(CharacterClass::Any)
	}


	fn on(&self, class: CharacterClass) -> TransitionBuilder<T> {
		let transition = {
			let mut graph = self.graph.borrow_mut();
			let transitions = &mut graph.state_mut(self.state).transitions;
			transitions.push(Transition::new(class));
			transitions.len() - 1
		};

		TransitionBuilder {
			graph: Rc::clone(&self.graph),
			location: Location { state: self.state, transition },
		}
	}
}


/// Describes a single transition, bound to the state it leaves from.
#[derive(Debug)]
pub struct TransitionBuilder<T> {
	graph: Graph<T>,
	location: Location,
}


impl<T> TransitionBuilder<T> {
	/// The location of the transition being described.
	pub fn location(&self) -> Location {
		self.location
	}


	/// Don't append the matched character to the token value.
	pub fn ignore(self) -> Self {
		self.update(
			|transition| {
				transition.include = false;
				transition.reread = false;
			}
		)
	}


	/// Don't append the matched character to the token value, and don't consume it either.
	/// The character will be visited again, usually from the start state, as it belongs to
	/// the next token.
	pub fn rewind(self) -> Self {
		self.update(
			|transition| {
				transition.include = false;
				transition.reread = true;
			}
		)
	}


	/// Move to the given state.
	///
	/// # Panics
	///
	/// Panics if `state` was built for a different automaton.
	pub fn then(self, state: &StateBuilder<T>) -> Self {
		assert!(
			Rc::ptr_eq(&self.graph, &state.graph),
			"states from different automata can't be linked"
		);

		self.decide(Disposition::Continue(state.state))
	}


	/// Stay in the state this transition leaves from.
	pub fn then_same_state(self) -> Self {
		let state = self.location.state;
		self.decide(Disposition::Continue(state))
	}


	/// Move to a brand new state, returning the builder for it.
	pub fn then_new_state(self) -> StateBuilder<T> {
		let state = self.graph.borrow_mut().push_state();
		let graph = Rc::clone(&self.graph);

		self.decide(Disposition::Continue(state));

		StateBuilder { graph, state }
	}


	/// Finish the pending token with the given type.
	pub fn returns(self, kind: T) {
		self.decide(Disposition::Emit(kind));
	}


	/// Abort tokenization with the given message when this transition is taken.
	/// An empty message leaves the transition as it was.
	pub fn error<S: Into<Box<str>>>(self, message: S) {
		let message = message.into();

		if !message.is_empty() {
			self.decide(Disposition::Fail(message));
		}
	}


	fn decide(self, disposition: Disposition<T>) -> Self {
		self.update(|transition| transition.disposition = Some(disposition))
	}


	fn update<F>(self, update: F) -> Self
	where
		F: FnOnce(&mut Transition<T>),
	{
		{
			let mut graph = self.graph.borrow_mut();
			let state = graph.state_mut(self.location.state);
			update(&mut state.transitions[self.location.transition]);
		}

		self
	}
}
