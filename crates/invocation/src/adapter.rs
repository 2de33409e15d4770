//! Binding of typed callables to the text calling convention.
//!
//! [`Handler`] is implemented for every `Fn(A1, ..., An) -> R` up to twelve
//! parameters where each `Ai` is [`FromText`] and `R` is [`IntoReply`]. The
//! parameter tuple is fixed by the compiler when [`adapter`] is called, so a
//! signature is never inferred at call time.

use std::marker::PhantomData;

use crate::{CallError, FromText, HelpStyle, IntoReply, Signature};

/// Ordered parameter list of a callable, as a tuple of decodable types.
pub trait ParamList: Sized {
	/// Number of parameters.
	const ARITY: usize;

	/// Type names in declaration order.
	fn type_names() -> Vec<String>;

	/// Decodes `args` positionally, stopping at the first failure.
	///
	/// Fails with [`CallError::ArgumentCount`] before decoding anything when
	/// `args.len()` differs from [`Self::ARITY`].
	fn from_args(args: &[&str]) -> Result<Self, CallError>;
}

fn check_count(expected: usize, args: &[&str]) -> Result<(), CallError> {
	if args.len() != expected {
		return Err(CallError::ArgumentCount {
			expected,
			actual: args.len(),
		});
	}
	Ok(())
}

/// A callable applicable to the decoded parameter tuple `Args`.
pub trait Handler<Args>: Send + Sync + 'static {
	type Output: IntoReply;

	fn apply(&self, args: Args) -> Self::Output;
}

/// Object-safe view of an adapter, as stored by a registry.
pub trait TextFunction: Send + Sync {
	fn signature(&self) -> &Signature;

	/// Decodes `args`, applies the callable and encodes its result.
	fn invoke(&self, args: &[&str]) -> Result<String, CallError>;

	fn return_type(&self) -> &str {
		self.signature().return_type()
	}

	fn param_types(&self) -> &[String] {
		self.signature().param_types()
	}

	fn arity(&self) -> usize {
		self.signature().arity()
	}

	fn help_line(&self, name: &str, style: &HelpStyle) -> String {
		self.signature().help_line(name, style)
	}
}

impl<T: TextFunction + ?Sized> TextFunction for Box<T> {
	fn signature(&self) -> &Signature {
		(**self).signature()
	}

	fn invoke(&self, args: &[&str]) -> Result<String, CallError> {
		(**self).invoke(args)
	}
}

/// One callable together with its derived [`Signature`].
pub struct FunctionAdapter<F, Args> {
	callable: F,
	signature: Signature,
	_args: PhantomData<fn(Args)>,
}

impl<F, Args> FunctionAdapter<F, Args>
where
	F: Handler<Args>,
	Args: ParamList,
{
	pub fn new(callable: F) -> Self {
		Self {
			callable,
			signature: Signature::of::<Args, <F as Handler<Args>>::Output>(),
			_args: PhantomData,
		}
	}
}

impl<F, Args> std::fmt::Debug for FunctionAdapter<F, Args> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FunctionAdapter")
			.field("signature", &self.signature)
			.finish_non_exhaustive()
	}
}

impl<F, Args> TextFunction for FunctionAdapter<F, Args>
where
	F: Handler<Args>,
	Args: ParamList + 'static,
{
	fn signature(&self) -> &Signature {
		&self.signature
	}

	fn invoke(&self, args: &[&str]) -> Result<String, CallError> {
		let params = Args::from_args(args)?;
		self.callable.apply(params).into_reply()
	}
}

/// Wraps `callable` into a [`FunctionAdapter`].
///
/// ```
/// use txtfn_invocation::{TextFunction, adapter};
///
/// let multiply = adapter(|a: i64, b: i64| a * b);
/// assert_eq!(multiply.invoke(&["3", "4"]).unwrap(), "12");
/// assert_eq!(multiply.param_types(), ["i64", "i64"]);
/// ```
pub fn adapter<F, Args>(callable: F) -> FunctionAdapter<F, Args>
where
	F: Handler<Args>,
	Args: ParamList,
{
	FunctionAdapter::new(callable)
}

fn convert<T: FromText>(position: usize, raw: &str) -> Result<T, CallError> {
	T::from_text(raw).map_err(|err| CallError::ArgumentConversion {
		position,
		raw: raw.to_owned(),
		target: T::type_name().into_owned(),
		reason: err.to_string(),
	})
}

macro_rules! impl_handler {
	($($idx:tt $ty:ident),*) => {
		impl<$($ty: FromText),*> ParamList for ($($ty,)*) {
			const ARITY: usize = <[&str]>::len(&[$(stringify!($ty)),*]);

			fn type_names() -> Vec<String> {
				vec![$($ty::type_name().into_owned()),*]
			}

			fn from_args(args: &[&str]) -> Result<Self, CallError> {
				check_count(Self::ARITY, args)?;
				Ok(($(convert::<$ty>($idx, args[$idx])?,)*))
			}
		}

		impl<Func, Ret, $($ty),*> Handler<($($ty,)*)> for Func
		where
			Func: Fn($($ty),*) -> Ret + Send + Sync + 'static,
			Ret: IntoReply,
			$($ty: FromText,)*
		{
			type Output = Ret;

			#[allow(non_snake_case)]
			fn apply(&self, ($($ty,)*): ($($ty,)*)) -> Ret {
				(self)($($ty),*)
			}
		}
	};
}

impl_handler!();
impl_handler!(0 A1);
impl_handler!(0 A1, 1 A2);
impl_handler!(0 A1, 1 A2, 2 A3);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5, 5 A6);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5, 5 A6, 6 A7);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5, 5 A6, 6 A7, 7 A8);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5, 5 A6, 6 A7, 7 A8, 8 A9);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5, 5 A6, 6 A7, 7 A8, 8 A9, 9 A10);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5, 5 A6, 6 A7, 7 A8, 8 A9, 9 A10, 10 A11);
impl_handler!(0 A1, 1 A2, 2 A3, 3 A4, 4 A5, 5 A6, 6 A7, 7 A8, 8 A9, 9 A10, 10 A11, 11 A12);
