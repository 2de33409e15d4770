/// Setup-time registration failure.
///
/// A failed registration leaves the library exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
	/// The descriptor documents a different number of arguments than the
	/// function accepts.
	#[error("{name} documents {described} arguments but takes {expected}")]
	ArityMismatch {
		name: String,
		described: usize,
		expected: usize,
	},
	/// An entry with the same name and arity already exists.
	#[error("{name} already registered")]
	Duplicate { name: String, arity: usize },
}
