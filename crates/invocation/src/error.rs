/// Failure raised while invoking a text function.
///
/// Every variant carries enough structured data for a host to build its own
/// diagnostic. None of them leave the registry in a different state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
	/// The argument count does not match the callable's arity.
	#[error("wrong number of args: {actual} != {expected}")]
	ArgumentCount { expected: usize, actual: usize },
	/// The token at `position` could not be decoded as `target`.
	#[error("unable to convert arg {position}: '{raw}' to {target} ({reason})")]
	ArgumentConversion {
		position: usize,
		raw: String,
		target: String,
		reason: String,
	},
	/// The callable ran but its result could not be encoded.
	#[error("failed to convert return type {target} to text ({reason})")]
	ReturnConversion { target: String, reason: String },
	/// A `search` pattern is not a valid regular expression.
	#[error("invalid search pattern '{pattern}': {reason}")]
	InvalidPattern { pattern: String, reason: String },
	/// The callable itself reported an error.
	#[error("{0}")]
	Failed(String),
}
