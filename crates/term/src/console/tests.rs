use std::io::Cursor;

use pretty_assertions::assert_eq;
use txtfn_invocation::HelpStyle;

use super::{Console, Reply};
use crate::demo;

fn run(input: &str) -> String {
	let library = demo::library(HelpStyle::plain()).unwrap();
	let mut out = Vec::new();
	Console::new(&library)
		.run(Cursor::new(input), &mut out)
		.unwrap();
	String::from_utf8(out).unwrap()
}

#[test]
fn test_calls_and_continues_after_errors() {
	let out = run("multiply 3 4\nmultiply x 4\n\ndivide 1 0\nconcat a b\n");
	assert_eq!(
		out,
		"12\n\
		 error: unable to convert arg 0: 'x' to i64 (invalid digit found in string)\n\
		 error: division by zero or overflow\n\
		 ab\n"
	);
}

#[test]
fn test_quit_stops_reading() {
	assert_eq!(run("not yes\nquit\nnot no\n"), "false\n");
}

#[test]
fn test_unknown_names() {
	let library = demo::library(HelpStyle::plain()).unwrap();
	let console = Console::new(&library);

	assert_eq!(
		console.execute("multiplyy 1 2"),
		Reply::Text("unknown function: multiplyy (did you mean multiply?)".to_string())
	);
	assert_eq!(
		console.execute("multiply 1"),
		Reply::Text("multiply does not take 1 arguments; see `help multiply`".to_string())
	);
	assert_eq!(
		console.execute("zzzzzzzz"),
		Reply::Text("unknown function: zzzzzzzz".to_string())
	);
}

#[test]
fn test_help_output_is_passed_through() {
	let out = run("help sqrt\n");
	assert_eq!(
		out,
		"f64 sqrt [f64]\n  Description: f64\n  Arguments:\n    f64: f64\n"
	);
}

#[test]
fn test_prompt_is_written_before_each_line() {
	let library = demo::library(HelpStyle::plain()).unwrap();
	let mut out = Vec::new();
	Console::new(&library)
		.with_prompt(Some("> ".to_string()))
		.run(Cursor::new("repeat ab 2\n"), &mut out)
		.unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "> abab\n> ");
}
