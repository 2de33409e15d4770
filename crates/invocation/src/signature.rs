use std::borrow::Cow;

use crate::{IntoReply, ParamList};

/// Markup wrapped around a function name in help lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpStyle {
	pub emphasis_open: Cow<'static, str>,
	pub emphasis_close: Cow<'static, str>,
}

impl HelpStyle {
	/// Green name, reset afterwards.
	pub const fn ansi() -> Self {
		Self {
			emphasis_open: Cow::Borrowed("\x1b[32m"),
			emphasis_close: Cow::Borrowed("\x1b[0m"),
		}
	}

	/// No markup at all.
	pub const fn plain() -> Self {
		Self {
			emphasis_open: Cow::Borrowed(""),
			emphasis_close: Cow::Borrowed(""),
		}
	}

	pub fn new(open: impl Into<Cow<'static, str>>, close: impl Into<Cow<'static, str>>) -> Self {
		Self {
			emphasis_open: open.into(),
			emphasis_close: close.into(),
		}
	}
}

impl Default for HelpStyle {
	fn default() -> Self {
		Self::ansi()
	}
}

/// Return type name plus ordered parameter type names of one callable.
///
/// Derived once when the adapter is built and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
	return_type: String,
	param_types: Vec<String>,
}

impl Signature {
	pub fn new(return_type: impl Into<String>, param_types: Vec<String>) -> Self {
		Self {
			return_type: return_type.into(),
			param_types,
		}
	}

	/// Derives the signature of a callable taking `Args` and returning `R`.
	pub fn of<Args: ParamList, R: IntoReply>() -> Self {
		Self::new(R::reply_type(), Args::type_names())
	}

	pub fn return_type(&self) -> &str {
		&self.return_type
	}

	pub fn param_types(&self) -> &[String] {
		&self.param_types
	}

	pub fn arity(&self) -> usize {
		self.param_types.len()
	}

	/// Renders `<ret> <open><name><close> [<param>]...`.
	pub fn help_line(&self, name: &str, style: &HelpStyle) -> String {
		let mut line = format!(
			"{} {}{}{}",
			self.return_type, style.emphasis_open, name, style.emphasis_close
		);
		for param in &self.param_types {
			line.push_str(" [");
			line.push_str(param);
			line.push(']');
		}
		line
	}
}
