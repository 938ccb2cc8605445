/// The set of characters a transition reacts to.
///
/// Classification is ASCII only: letters are `a-z` and `A-Z`, digits are `0-9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterClass {
	/// Any character from the given list.
	Custom(Box<[char]>),
	LowerLetter,
	UpperLetter,
	Letter,
	Digit,
	LetterOrDigit,
	/// The end of the input, where there is no character at all.
	EndOfInput,
	/// Any character, including the end of the input.
	Any,
}


impl CharacterClass {
	/// Create a custom class from a list of characters.
	pub fn custom<S: AsRef<str>>(characters: S) -> Self {
		Self::Custom(characters.as_ref().chars().collect())
	}


	/// Check if the class matches the given input. `None` stands for the end of the input.
	pub fn handles(&self, input: Option<char>) -> bool {
		let c = match (self, input) {
			(Self::Any, _) => return true,
			(class, None) => return *class == Self::EndOfInput,
			(_, Some(c)) => c,
		};

		match self {
			Self::LowerLetter => c.is_ascii_lowercase(),
			Self::UpperLetter => c.is_ascii_uppercase(),
			Self::Letter => c.is_ascii_alphabetic(),
			Self::Digit => c.is_ascii_digit(),
			Self::LetterOrDigit => c.is_ascii_alphanumeric(),
			Self::Custom(characters) => characters.contains(&c),
			Self::EndOfInput | Self::Any => false,
		}
	}
}
