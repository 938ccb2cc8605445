use std::{
	io,
	fs::{self, File},
	path::{Path, PathBuf},
};


/// Run the test for every file under the given directory, recursively. The path is
/// relative to the crate root.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, File) -> io::Result<()>,
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn run<F>(dir: &Path, test: &mut F) -> io::Result<()>
	where
		F: FnMut(&Path, File) -> io::Result<()>,
	{
		let mut entries = fs::read_dir(dir)?
			.map(|entry| entry.map(|entry| entry.path()))
			.collect::<io::Result<Vec<_>>>()?;

		// Deterministic order, for readable failures.
		entries.sort();

		for path in entries {
			if path.is_dir() {
				run(&path, test)?;
			} else {
				let file = File::open(&path)?;
				test(&path, file)?;
			}
		}

		Ok(())
	}

	run(&dir, &mut test)
}


/// The example tokenizer for a test file, named after its parent directory.
pub fn demo_for(path: &Path) -> Option<crate::demo::Demo> {
	path.parent()?
		.file_name()?
		.to_str()?
		.parse()
		.ok()
}
