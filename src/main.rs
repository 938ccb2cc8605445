mod args;
mod failure;
mod source;
mod term;

use std::{
	fmt::Display,
	path::Path,
};

use serde::Serialize;

use dfalex::{
	demo::{arithmetic::Arithmetic, json::Json, Demo, Trivia},
	Rules,
	Tokenizer,
};
use args::{Args, Command};
use failure::Failure;
use source::Source;
use term::color;


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
			1
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> Result<i32, Failure> {
	match args.lexer {
		Demo::Arithmetic => run_with(&Arithmetic, &args),
		Demo::Json => run_with(&Json, &args),
	}
}


fn run_with<R>(rules: &R, args: &Args) -> Result<i32, Failure>
where
	R: Rules,
	R::Kind: Display + PartialEq + Serialize + Trivia,
{
	let tokenizer = Tokenizer::new(rules);

	if args.print_automaton {
		println!("{}", color::separator());
		print!("{}", tokenizer.automaton());
		println!("{}", color::separator());
	}

	if args.check {
		return Ok(
			match tokenizer.check() {
				Ok(()) => 0,
				Err(undecided) => {
					for location in undecided.iter() {
						eprintln!(
							"{}: {} neither returns, fails, nor leads to a state",
							color::Fg(color::Yellow, "Warning"),
							location
						);
					}

					2
				}
			}
		);
	}

	let source = match &args.input {
		Some(path) => Source::from_path(path.clone())
			.map_err(|error| Failure::io(error, path))?,

		None => {
			let path = Path::new("<stdin>");
			Source::from_reader(path, std::io::stdin().lock())
				.map_err(|error| Failure::io(error, path))?
		}
	};

	let mut tokens = tokenizer
		.tokenize(&source.contents)
		.map_err(|error| Failure::tokenize(error, &source.path))?;

	if !args.keep_trivia {
		tokens = tokens.filter(|token| token.kind.is_trivia());
	}

	if args.json {
		println!("{}", serde_json::to_string_pretty(&tokens)?);
	} else {
		for token in &tokens {
			println!(
				"{} {}",
				color::Fg(color::Blue, &token.kind),
				color::Bold(format!("{:?}", token.value))
			);
		}
	}

	Ok(0)
}
