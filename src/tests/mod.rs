mod util;

use std::{
	fs::File,
	io::{self, Read},
	path::Path,
};

use crate::{
	demo::{arithmetic::Arithmetic, json::Json, Demo},
	tokenizer::Error,
	Tokenizer,
};
use util::{demo_for, test_dir};


/// Tokenize a file, returning only whether it succeeded and how many tokens were produced.
fn tokenize(path: &Path, mut file: File) -> io::Result<Result<usize, Error>> {
	let mut input = String::new();
	file.read_to_string(&mut input)?;

	let demo = demo_for(path)
		.ok_or_else(|| io::Error::new(io::ErrorKind::Other, "test file outside a lexer directory"))?;

	Ok(
		match demo {
			Demo::Arithmetic => Tokenizer::new(&Arithmetic).tokenize(&input).map(|queue| queue.len()),
			Demo::Json => Tokenizer::new(&Json).tokenize(&input).map(|queue| queue.len()),
		}
	)
}


#[test]
fn test_valid_examples() -> io::Result<()> {
	test_dir(
		"tests/data/valid",
		|path, file| {
			match tokenize(path, file)? {
				Ok(count) => assert!(count > 0, "{}: no tokens", path.display()),
				Err(error) => panic!("{}: {}", path.display(), error),
			}

			Ok(())
		}
	)
}


#[test]
fn test_invalid_examples() -> io::Result<()> {
	test_dir(
		"tests/data/invalid",
		|path, file| {
			if let Ok(count) = tokenize(path, file)? {
				panic!("{}: unexpectedly produced {} tokens", path.display(), count);
			}

			Ok(())
		}
	)
}
