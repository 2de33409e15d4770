use txtfn_invocation::Signature;

/// Name and description of one documented argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDoc {
	pub name: String,
	pub description: String,
}

/// Registration metadata for one library entry.
///
/// ```
/// use txtfn_registry::Descriptor;
///
/// let desc = Descriptor::new("multiply")
/// 	.arg("multiplicand", "it is multiplied")
/// 	.arg("multiplier", "it multiplies")
/// 	.describe("Multiplies two numbers");
/// assert_eq!(desc.arity(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
	name: String,
	description: String,
	args: Vec<ArgDoc>,
}

impl Descriptor {
	/// Description used when none is given.
	pub const DEFAULT_DESCRIPTION: &'static str = "No description";

	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: Self::DEFAULT_DESCRIPTION.to_string(),
			args: Vec::new(),
		}
	}

	/// Appends a documented argument.
	pub fn arg(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
		self.args.push(ArgDoc {
			name: name.into(),
			description: description.into(),
		});
		self
	}

	/// Sets the top-level description.
	pub fn describe(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Synthesizes a descriptor from a signature alone: every argument is
	/// named and described by its type, and the description is the return type.
	pub fn from_signature(name: impl Into<String>, signature: &Signature) -> Self {
		signature
			.param_types()
			.iter()
			.fold(Self::new(name), |desc, ty| desc.arg(ty.as_str(), ty.as_str()))
			.describe(signature.return_type())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn args(&self) -> &[ArgDoc] {
		&self.args
	}

	pub fn arity(&self) -> usize {
		self.args.len()
	}
}
