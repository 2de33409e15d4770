//! Command line arguments for the `txtfn` console.

use clap::Parser;

/// Interactive console over a library of text functions.
///
/// Each input line is `<name> [arg]...`, split on whitespace. Type `help`
/// for the list of functions and `quit` (or end input) to leave.
#[derive(Parser, Debug)]
#[command(name = "txtfn")]
pub struct Args {
	/// Render help without terminal color escapes
	#[arg(long)]
	pub plain: bool,

	/// Prompt printed before each line (defaults to "> " on a terminal)
	#[arg(long, value_name = "TEXT")]
	pub prompt: Option<String>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
