use std::{
	fs::File,
	path::Path,
};


/// The text to be tokenized.
#[derive(Debug)]
pub struct Source {
	/// The origin path, may be something fictional like `<stdin>`.
	pub path: Box<Path>,
	pub contents: String,
}


impl Source {
	/// Load the text from a file path.
	pub fn from_path<P>(path: P) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
	{
		let path = path.into();
		let file = File::open(&path)?;
		Self::from_reader(path, file)
	}


	/// Load the text from a std::io::Read. Invalid UTF-8 is reported as an error.
	/// The path argument may be anything, including fictional paths like `<stdin>`.
	pub fn from_reader<P, R>(path: P, mut reader: R) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
		R: std::io::Read,
	{
		let path = path.into();
		let mut contents = String::with_capacity(512); // Expect a few characters.
		reader.read_to_string(&mut contents)?;

		Ok(Self { path, contents })
	}
}
