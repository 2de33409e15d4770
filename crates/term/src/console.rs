//! Line-oriented dispatch loop over a [`Library`].
//!
//! Each line is split on whitespace into a function name and its arguments.
//! Failed calls are reported and the loop continues.

use std::io::{self, BufRead, Write};

use tracing::debug;
use txtfn_registry::Library;

/// Words that end the session.
const QUIT: &[&str] = &["quit", "exit"];

/// What a single input line produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
	/// Blank line or a call with no output.
	Empty,
	Text(String),
	Quit,
}

pub struct Console<'a> {
	library: &'a Library,
	prompt: Option<String>,
}

impl<'a> Console<'a> {
	pub fn new(library: &'a Library) -> Self {
		Self {
			library,
			prompt: None,
		}
	}

	pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
		self.prompt = prompt;
		self
	}

	/// Handles one input line.
	pub fn execute(&self, line: &str) -> Reply {
		let mut words = line.split_whitespace();
		let Some(name) = words.next() else {
			return Reply::Empty;
		};
		let args: Vec<&str> = words.collect();
		if args.is_empty() && QUIT.contains(&name) {
			return Reply::Quit;
		}

		match self.library.call(name, args.as_slice()) {
			Ok(Some(text)) if text.is_empty() => Reply::Empty,
			Ok(Some(text)) => Reply::Text(text),
			Ok(None) => Reply::Text(self.not_found(name, args.len())),
			Err(err) => Reply::Text(format!("error: {err}")),
		}
	}

	fn not_found(&self, name: &str, arity: usize) -> String {
		debug!(command = name, arity, "unknown command");
		if self.library.names().any(|known| known == name) {
			return format!("{name} does not take {arity} arguments; see `help {name}`");
		}
		match self.library.suggest(name) {
			Some(similar) => format!("unknown function: {name} (did you mean {similar}?)"),
			None => format!("unknown function: {name}"),
		}
	}

	/// Reads lines from `input` until end of input or a quit word.
	pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
		let mut lines = input.lines();
		loop {
			if let Some(prompt) = &self.prompt {
				write!(output, "{prompt}")?;
				output.flush()?;
			}
			let Some(line) = lines.next() else {
				break;
			};
			match self.execute(&line?) {
				Reply::Empty => {}
				Reply::Text(text) => {
					output.write_all(text.as_bytes())?;
					if !text.ends_with('\n') {
						writeln!(output)?;
					}
				}
				Reply::Quit => break,
			}
		}
		output.flush()
	}
}

#[cfg(test)]
mod tests;
