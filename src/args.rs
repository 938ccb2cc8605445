use std::{ffi::OsString, path::Path};

use clap::{clap_app, crate_version, crate_description};

use dfalex::demo::Demo;


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The example tokenizer to use.
	pub lexer: Demo,
	/// Print the tokens as JSON.
	pub json: bool,
	/// Keep whitespace tokens.
	pub keep_trivia: bool,
	/// Check the automaton for undecided transitions, but don't tokenize.
	pub check: bool,
	/// Print the automaton.
	pub print_automaton: bool,
	/// The input file, stdin if absent.
	pub input: Option<Box<Path>>,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		dfalex =>
			(version: crate_version!())
			(about: crate_description!())
			(@arg lexer: -l --lexer +takes_value "The tokenizer to use: arithmetic (default) or json")
			(@arg json: --json "Print the tokens as JSON")
			(@arg trivia: --("keep-trivia") "Keep whitespace tokens")
			(@arg check: --check "Only check the automaton, without reading any input")
			(@arg automaton: --automaton "Print the AUTOMATON")
			(@arg INPUT: "The file to tokenize, stdin if absent")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => {
			let lexer = match matches.value_of("lexer") {
				Some(name) => name
					.parse()
					.map_err(
						|error: dfalex::demo::UnknownDemo| clap::Error::with_description(
							&error.to_string(),
							clap::ErrorKind::InvalidValue
						)
					)?,
				None => Demo::default(),
			};

			Ok(
				Command::Run(
					Args {
						lexer,
						json: matches.is_present("json"),
						keep_trivia: matches.is_present("trivia"),
						check: matches.is_present("check"),
						print_automaton: matches.is_present("automaton"),
						input: matches
							.value_of_os("INPUT")
							.map(|path| Path::new(path).into()),
					}
				)
			)
		}

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
