use std::borrow::Cow;

/// Provides the canonical, human-readable name of a type.
///
/// Names show up in help lines and conversion diagnostics, so they must stay
/// stable for the lifetime of the process. Signatures read them once at
/// adapter construction.
pub trait TypeName {
	/// Returns the display name, e.g. `i64` or `String`.
	fn type_name() -> Cow<'static, str>;
}

macro_rules! impl_type_name {
	($($ty:ty),* $(,)?) => {
		$(
			impl TypeName for $ty {
				fn type_name() -> Cow<'static, str> {
					Cow::Borrowed(stringify!($ty))
				}
			}
		)*
	};
}

impl_type_name!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String, (),
);

#[cfg(test)]
mod tests {
	use super::TypeName;

	#[test]
	fn builtin_names_use_rust_spelling() {
		assert_eq!(i32::type_name(), "i32");
		assert_eq!(u64::type_name(), "u64");
		assert_eq!(String::type_name(), "String");
		assert_eq!(<()>::type_name(), "()");
	}
}
