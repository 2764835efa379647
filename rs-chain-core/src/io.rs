use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	Ok(read_text(filename)?.lines().map(str::to_owned).collect())
}

/// Reads a word list: one sample per line, surrounding whitespace removed,
/// blank lines skipped.
pub fn read_words<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	Ok(read_file(filename)?
		.into_iter()
		.map(|line| line.trim().to_owned())
		.filter(|line| !line.is_empty())
		.collect())
}

/// Reads a whole text sample.
pub fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
