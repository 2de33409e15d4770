//! Functions the console ships with.

use txtfn_invocation::{HelpStyle, adapter};
use txtfn_registry::{Descriptor, Library, RegisterError};

pub fn library(style: HelpStyle) -> Result<Library, RegisterError> {
	let mut lib = Library::with_style(style);

	lib.register(
		Descriptor::new("multiply")
			.arg("multiplicand", "it is multiplied")
			.arg("multiplier", "it multiplies")
			.describe("Multiplies two numbers"),
		adapter(|a: i64, b: i64| a.checked_mul(b).ok_or("overflow")),
	)?;
	lib.register(
		Descriptor::new("divide")
			.arg("dividend", "number to divide")
			.arg("divisor", "number to divide by, not zero")
			.describe("Integer division"),
		adapter(|a: i64, b: i64| a.checked_div(b).ok_or("division by zero or overflow")),
	)?;
	lib.register(
		Descriptor::new("concat")
			.arg("str1", "a string")
			.arg("str2", "another string")
			.describe("Concatenates two strings"),
		adapter(|a: String, b: String| a + &b),
	)?;
	lib.register(
		Descriptor::new("repeat")
			.arg("text", "text to repeat")
			.arg("count", "number of copies")
			.describe("Repeats a string"),
		adapter(|text: String, count: usize| text.repeat(count)),
	)?;
	lib.register(
		Descriptor::new("not")
			.arg("value", "true/false, yes/no, on/off or 1/0")
			.describe("Negates a boolean"),
		adapter(|value: bool| !value),
	)?;
	lib.register_auto("sqrt", adapter(f64::sqrt))?;

	Ok(lib)
}
