use serde::{
	ser::{SerializeSeq, SerializeStruct},
	Serialize,
	Serializer,
};

use super::{Token, TokenQueue};


/// Tokens are serialized as `{ "type": ..., "value": "..." }`.
impl<T: Serialize> Serialize for Token<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut token = serializer.serialize_struct("Token", 2)?;
		token.serialize_field("type", &self.kind)?;
		token.serialize_field("value", &*self.value)?;
		token.end()
	}
}


/// Queues are serialized as the sequence of all their tokens, ignoring the cursor.
impl<T: Serialize> Serialize for TokenQueue<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for token in self {
			seq.serialize_element(token)?;
		}
		seq.end()
	}
}
