use std::borrow::Cow;
use std::fmt::Display;

use crate::{CallError, ToText, TypeName};

/// Converts a callable's return value into output text.
///
/// Implemented for every [`ToText`] type, for `()` (empty output) and for
/// `Result<T, E>`, whose `Err` is surfaced as [`CallError::Failed`].
pub trait IntoReply {
	/// Name shown as the return type in help lines.
	fn reply_type() -> Cow<'static, str>;

	fn into_reply(self) -> Result<String, CallError>;
}

impl<T: ToText> IntoReply for T {
	fn reply_type() -> Cow<'static, str> {
		T::type_name()
	}

	fn into_reply(self) -> Result<String, CallError> {
		self.to_text().map_err(|err| CallError::ReturnConversion {
			target: T::type_name().into_owned(),
			reason: err.to_string(),
		})
	}
}

impl IntoReply for () {
	fn reply_type() -> Cow<'static, str> {
		<() as TypeName>::type_name()
	}

	fn into_reply(self) -> Result<String, CallError> {
		Ok(String::new())
	}
}

impl<T: IntoReply, E: Display> IntoReply for Result<T, E> {
	fn reply_type() -> Cow<'static, str> {
		T::reply_type()
	}

	fn into_reply(self) -> Result<String, CallError> {
		match self {
			Ok(value) => value.into_reply(),
			Err(err) => Err(CallError::Failed(err.to_string())),
		}
	}
}
