#![allow(unused_crate_dependencies)]

use pretty_assertions::assert_eq;
use txtfn_registry::{CallError, Descriptor, Library, adapter};

fn library() -> Library {
	let mut lib = Library::new();
	lib.register(
		Descriptor::new("multiply")
			.arg("multiplicand", "it is multiplied")
			.arg("multiplier", "it multiplies")
			.describe("Multiplies two numbers"),
		adapter(|a: i32, b: i32| a * b),
	)
	.unwrap();
	lib.register(
		Descriptor::new("concat")
			.arg("str1", "a string")
			.arg("str2", "another string")
			.describe("Concatenates two strings"),
		adapter(|a: String, b: String| a + &b),
	)
	.unwrap();
	lib
}

#[test]
fn multiply_returns_product() {
	let lib = library();
	assert_eq!(lib.call("multiply", &["3", "4"]), Ok(Some("12".to_string())));
}

#[test]
fn builtin_help_lists_everything_in_key_order() {
	let lib = library();
	let expected = "String \x1b[32mconcat\x1b[0m [String] [String] -- Concatenates two strings\n\
		String \x1b[32mhelp\x1b[0m -- Returns list of functions\n\
		String \x1b[32mhelp\x1b[0m [String] -- Returns detailed help for matching function\n\
		i32 \x1b[32mmultiply\x1b[0m [i32] [i32] -- Multiplies two numbers\n\
		String \x1b[32msearch\x1b[0m [String] -- Returns list of functions matching regex\n";
	assert_eq!(lib.call("help", &[] as &[&str]), Ok(Some(expected.to_string())));
}

#[test]
fn builtin_help_unknown_name() {
	let lib = library();
	assert_eq!(
		lib.call("help", &["nosuchname"]),
		Ok(Some("nosuchname not found".to_string()))
	);
}

#[test]
fn builtin_detailed_help() {
	let lib = library();
	let expected = "i32 \x1b[32mmultiply\x1b[0m [i32] [i32]\n\
		\x20 Description: Multiplies two numbers\n\
		\x20 Arguments:\n\
		\x20   multiplicand: it is multiplied\n\
		\x20   multiplier: it multiplies\n";
	assert_eq!(lib.call("help", &["multiply"]), Ok(Some(expected.to_string())));
}

#[test]
fn builtin_search() {
	let lib = library();
	let expected = "String \x1b[32mconcat\x1b[0m [String] [String]\n\
		\x20 Description: Concatenates two strings\n\
		\x20 Arguments:\n\
		\x20   str1: a string\n\
		\x20   str2: another string\n\
		\n\
		i32 \x1b[32mmultiply\x1b[0m [i32] [i32]\n\
		\x20 Description: Multiplies two numbers\n\
		\x20 Arguments:\n\
		\x20   multiplicand: it is multiplied\n\
		\x20   multiplier: it multiplies\n\
		\n";
	assert_eq!(lib.call("search", &["two"]), Ok(Some(expected.to_string())));
}

#[test]
fn builtin_search_without_matches() {
	let lib = library();
	assert_eq!(
		lib.call("search", &["^zzz$"]),
		Ok(Some("Nothing found for pattern: ^zzz$".to_string()))
	);
}

#[test]
fn conversion_failure_identifies_position_text_and_type() {
	let lib = library();
	let err = lib.call("multiply", &["notanumber", "4"]).unwrap_err();
	match err {
		CallError::ArgumentConversion {
			position,
			raw,
			target,
			..
		} => {
			assert_eq!(position, 0);
			assert_eq!(raw, "notanumber");
			assert_eq!(target, "i32");
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn unknown_function_is_not_handled() {
	let lib = library();
	assert_eq!(lib.call("badfunc", &[] as &[&str]), Ok(None));
}
