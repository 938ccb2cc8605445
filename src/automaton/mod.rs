mod builder;
mod class;
mod fmt;
mod transition;

pub use builder::{StateBuilder, TransitionBuilder};
pub use class::CharacterClass;
pub use transition::{Disposition, Transition};


/// The index of a state in the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);


impl StateId {
	/// The distinguished start state, which is always the first state in the automaton.
	pub const START: Self = Self(0);


	fn index(self) -> usize {
		self.0 as usize
	}
}


impl From<StateId> for usize {
	fn from(id: StateId) -> usize {
		id.index()
	}
}


/// The location of a transition in the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
	pub state: StateId,
	/// The index of the transition in the state's transition list.
	pub transition: usize,
}


/// A state is an ordered list of transitions, where the first matching transition wins.
#[derive(Debug, Clone, PartialEq)]
pub struct State<T> {
	pub transitions: Vec<Transition<T>>,
}


impl<T> Default for State<T> {
	fn default() -> Self {
		Self { transitions: Vec::new() }
	}
}


impl<T> State<T> {
	/// Find the first transition that reacts to the given input, along with its index.
	pub fn select(&self, input: Option<char>) -> Option<(usize, &Transition<T>)> {
		self.transitions
			.iter()
			.enumerate()
			.find(|(_, transition)| transition.handles(input))
	}
}


/// A deterministic finite automaton. All states live in a single arena, and refer to each
/// other by index, which allows for cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct Automaton<T> {
	states: Vec<State<T>>,
}


impl<T> Default for Automaton<T> {
	fn default() -> Self {
		Self::new()
	}
}


impl<T> Automaton<T> {
	/// Create an automaton containing only an empty start state.
	pub fn new() -> Self {
		Self { states: vec![State::default()] }
	}


	/// Allocate a new empty state.
	pub fn push_state(&mut self) -> StateId {
		let id = StateId(self.states.len() as u32);
		self.states.push(State::default());
		id
	}


	/// Get a state. Ids are only produced by the automaton itself, so they are always valid.
	pub fn state(&self, id: StateId) -> &State<T> {
		&self.states[id.index()]
	}


	pub fn state_mut(&mut self, id: StateId) -> &mut State<T> {
		&mut self.states[id.index()]
	}


	/// The number of states, including the start state.
	pub fn len(&self) -> usize {
		self.states.len()
	}


	/// Iterate over the states along with their ids.
	pub fn states(&self) -> impl Iterator<Item = (StateId, &State<T>)> {
		self.states
			.iter()
			.enumerate()
			.map(|(ix, state)| (StateId(ix as u32), state))
	}


	/// List the transitions whose disposition was never chosen. Taking one of those while
	/// tokenizing is an error.
	pub fn undecided(&self) -> Vec<Location> {
		self.states()
			.flat_map(
				|(state, data)| data.transitions
					.iter()
					.enumerate()
					.filter(|(_, transition)| transition.disposition.is_none())
					.map(move |(transition, _)| Location { state, transition })
			)
			.collect()
	}
}
