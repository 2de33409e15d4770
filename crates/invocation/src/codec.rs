//! Text codecs for parameter and return types.
//!
//! Parameters are decoded with [`FromText`]; return values are encoded with
//! [`ToText`]. Built-in codecs cover the numeric primitives, `bool`, `char`
//! and `String`. Other types opt in by implementing [`TypeName`] plus the
//! codec traits they need.

use crate::TypeName;

/// Reason a token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ParseError {
	reason: String,
}

impl ParseError {
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}

	pub fn reason(&self) -> &str {
		&self.reason
	}
}

/// Reason a value could not be encoded as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct FormatError {
	reason: String,
}

impl FormatError {
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}

	pub fn reason(&self) -> &str {
		&self.reason
	}
}

/// Decodes a value from a single text token.
pub trait FromText: TypeName + Sized {
	fn from_text(text: &str) -> Result<Self, ParseError>;
}

/// Encodes a value as text.
pub trait ToText: TypeName {
	fn to_text(&self) -> Result<String, FormatError>;
}

macro_rules! impl_parsed {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromText for $ty {
				fn from_text(text: &str) -> Result<Self, ParseError> {
					text.parse::<$ty>().map_err(|err| ParseError::new(err.to_string()))
				}
			}

			impl ToText for $ty {
				fn to_text(&self) -> Result<String, FormatError> {
					Ok(self.to_string())
				}
			}
		)*
	};
}

impl_parsed!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl FromText for bool {
	fn from_text(text: &str) -> Result<Self, ParseError> {
		match text.to_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Ok(true),
			"false" | "0" | "no" | "off" => Ok(false),
			_ => Err(ParseError::new(
				"expected true/false, yes/no, on/off, 1/0",
			)),
		}
	}
}

impl ToText for bool {
	fn to_text(&self) -> Result<String, FormatError> {
		Ok(self.to_string())
	}
}

impl FromText for char {
	fn from_text(text: &str) -> Result<Self, ParseError> {
		let mut chars = text.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(ParseError::new(format!(
				"expected exactly one character, got {}",
				text.chars().count()
			))),
		}
	}
}

impl ToText for char {
	fn to_text(&self) -> Result<String, FormatError> {
		Ok(self.to_string())
	}
}

impl FromText for String {
	fn from_text(text: &str) -> Result<Self, ParseError> {
		Ok(text.to_owned())
	}
}

impl ToText for String {
	fn to_text(&self) -> Result<String, FormatError> {
		Ok(self.clone())
	}
}

#[cfg(test)]
mod tests;
