//! A lexical analysis toolkit. Tokenizers are described as deterministic finite automata
//! through a fluent builder, and then driven over input text to produce a queue of typed
//! tokens, which a parser may consume with typed expectations.

pub mod automaton;
pub mod demo;
pub mod token;
pub mod tokenizer;
#[cfg(test)]
mod tests;

pub use automaton::{Automaton, CharacterClass, StateBuilder, StateId, TransitionBuilder};
pub use token::{Token, TokenQueue};
pub use tokenizer::{Rules, SourcePos, Tokenizer};
