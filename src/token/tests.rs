use super::*;

use assert_matches::assert_matches;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
	Keyword,
	Ident,
	String,
	Number,
	Bool,
	Space,
}


impl std::fmt::Display for Kind {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		std::fmt::Debug::fmt(self, f)
	}
}


fn queue() -> TokenQueue<Kind> {
	vec![
		Token::new(Kind::Keyword, "let"),
		Token::new(Kind::Space, " "),
		Token::new(Kind::Ident, "x"),
		Token::new(Kind::Space, " "),
		Token::new(Kind::Keyword, "TRUE"),
	]
		.into()
}


#[test]
fn test_peek_does_not_advance() {
	let queue = queue();

	assert_eq!(queue.peek(), Some(&Token::new(Kind::Keyword, "let")));
	assert_eq!(queue.peek_kind(), Some(&Kind::Keyword));
	assert_eq!(queue.peek_value(), Some("let"));
	assert_eq!(queue.position(), 0);
}


#[test]
fn test_peek_as() {
	let queue = queue();

	assert_matches!(queue.peek_as(&Kind::Keyword), Ok(Some(Token { value, .. })) if &**value == "let");
	assert_matches!(
		queue.peek_as(&Kind::Ident),
		Err(Error::UnexpectedType { expected: Expected::Type(Kind::Ident), token })
			if token.kind == Kind::Keyword
	);
	assert_eq!(queue.position(), 0);
}


#[test]
fn test_next_advances() {
	let mut queue = queue();

	assert_eq!(queue.next_value(), Some("let"));
	assert_eq!(queue.next_kind(), Some(&Kind::Space));
	assert_eq!(queue.position(), 2);
	assert_eq!(queue.remaining().len(), 3);
}


#[test]
fn test_next_as_advances_on_mismatch() {
	let mut queue = queue();

	assert_matches!(queue.next_as(&Kind::Ident), Err(Error::UnexpectedType { .. }));
	assert_eq!(queue.position(), 1);
	assert_matches!(queue.next_as(&Kind::Space), Ok(Some(_)));
}


#[test]
fn test_past_the_end() {
	let mut queue: TokenQueue<Kind> = vec![Token::new(Kind::Number, "1")].into();

	assert!(queue.next().is_some());

	for _ in 0 .. 3 {
		assert_eq!(queue.peek(), None);
		assert_eq!(queue.next(), None);
		assert_eq!(queue.next_value(), None);
		assert_matches!(queue.peek_as(&Kind::Number), Ok(None));
		assert_matches!(queue.next_as(&Kind::Ident), Ok(None));
		assert!(!queue.peek_is(&Kind::Number, "1", true));
	}

	assert!(queue.is_exhausted());
	assert!(queue.remaining().is_empty());

	queue.reset();
	assert_eq!(queue.position(), 0);
	assert_eq!(queue.peek_value(), Some("1"));
}


#[test]
fn test_peek_is() {
	let queue = queue();

	assert!(queue.peek_is(&Kind::Keyword, "let", true));
	assert!(queue.peek_is(&Kind::Keyword, "LET", false));
	assert!(!queue.peek_is(&Kind::Keyword, "LET", true));
	assert!(!queue.peek_is(&Kind::Ident, "let", true));
}


#[test]
fn test_next_is() {
	let mut queue = queue();

	assert!(!queue.next_is(&Kind::Ident, "let", true));
	assert_eq!(queue.position(), 0);

	assert!(queue.next_is(&Kind::Keyword, "let", true));
	assert_eq!(queue.position(), 1);
}


#[test]
fn test_expect() {
	let mut queue = queue();

	assert_matches!(queue.expect(&Kind::Keyword), Ok(_));
	assert_matches!(
		queue.expect(&Kind::Ident),
		Err(Error::UnexpectedType { token: Token { kind: Kind::Space, .. }, .. })
	);
	assert_matches!(queue.expect_value(&Kind::Ident, "x", true), Ok(_));
	assert_matches!(
		queue.expect_value(&Kind::Space, "\t", true),
		Err(Error::UnexpectedValue { expected, .. }) if &*expected == "\t"
	);
	assert_matches!(queue.expect(&Kind::Keyword), Ok(_));
	assert_matches!(
		queue.expect(&Kind::Keyword),
		Err(Error::UnexpectedEof { expected: Expected::Type(Kind::Keyword) })
	);
}


#[test]
fn test_expect_case_insensitive() {
	let keyword = || -> TokenQueue<Kind> { vec![Token::new(Kind::Keyword, "TRUE")].into() };

	assert_matches!(keyword().expect_value(&Kind::Keyword, "true", false), Ok(_));
	assert_matches!(
		keyword().expect_value(&Kind::Keyword, "true", true),
		Err(Error::UnexpectedValue { .. })
	);
	assert_matches!(
		keyword().expect_value(&Kind::Ident, "true", false),
		Err(Error::UnexpectedType { .. })
	);
}


#[test]
fn test_expect_types() {
	let string = || -> TokenQueue<Kind> { vec![Token::new(Kind::String, "\"hi\"")].into() };

	assert_matches!(string().expect_types(&[Kind::String, Kind::Number]), Ok(_));

	let mut queue = string();
	assert_matches!(
		queue.expect_types(&[Kind::Number, Kind::Bool]),
		Err(Error::UnexpectedType { expected: Expected::Types(kinds), .. })
			if &*kinds == &[Kind::Number, Kind::Bool]
	);

	assert_matches!(
		queue.expect_types(&[Kind::String]),
		Err(Error::UnexpectedEof { expected: Expected::Types(_) })
	);
}


#[test]
fn test_filter() {
	let mut original = queue();
	original.next();

	let filtered = original.filter(|token| token.kind == Kind::Space);

	let values: Vec<&str> = filtered.iter().map(|token| &*token.value).collect();
	assert_eq!(values, ["let", "x", "TRUE"]);
	assert_eq!(filtered.position(), 0);

	assert_eq!(original.len(), 5);
	assert_eq!(original.position(), 1);
	assert_eq!(original, {
		let mut queue = queue();
		queue.next();
		queue
	});
}


#[test]
fn test_token_is() {
	let token = Token::new(Kind::Keyword, "let");

	assert!(token.is(&Kind::Keyword, "let"));
	assert!(!token.is(&Kind::Keyword, "Let"));
	assert!(token.matches(&Kind::Keyword, "Let", false));
}


#[test]
fn test_error_display() {
	let mut queue = queue();

	let error = queue.expect_types(&[Kind::Ident, Kind::Number]).map(|_| ());
	assert_eq!(
		error.map_err(|error| error.to_string()),
		Err("unexpected token Keyword 'let', expected Ident or Number".to_owned())
	);

	let error = Error::<Kind>::unexpected_eof(Expected::Types(Box::new([])));
	assert_eq!(error.to_string(), "unexpected end of tokens, expected nothing");
}


#[test]
fn test_serialize() {
	#[derive(Debug, Clone, Copy, PartialEq)]
	struct Kind;

	impl serde::Serialize for Kind {
		fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			serializer.serialize_str("kind")
		}
	}

	let queue: TokenQueue<Kind> = vec![Token::new(Kind, "a"), Token::new(Kind, "\"")].into();

	assert_eq!(
		serde_json::to_string(&queue).map_err(|error| error.to_string()),
		Ok(r#"[{"type":"kind","value":"a"},{"type":"kind","value":"\""}]"#.to_owned())
	);
}
