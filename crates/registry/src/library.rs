//! The name and arity indexed library of text functions.
//!
//! # Invariants
//!
//! - At most one entry per `(name, arity)` key.
//!   - Enforced in: [`Library::register`] (rejects with [`RegisterError::Duplicate`]).
//!   - Tested by: `library::tests::test_duplicate_leaves_library_unchanged`
//! - A descriptor documents exactly as many arguments as its function takes.
//!   - Enforced in: [`Library::register`] (rejects with [`RegisterError::ArityMismatch`]).
//! - Iteration is ordered by name, then arity ascending, regardless of registration order.
//!   - Enforced in: the nested `BTreeMap` layout.
//!   - Tested by: `library::tests::prop_listing_is_sorted`
//! - Help lines are rendered once, at registration, and never mutated.
//!
//! # Concurrency
//!
//! Registration takes `&mut self`; calls and help rendering take `&self` and
//! touch only immutable entry data, so a populated library can be shared
//! across threads for concurrent calls.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::{debug, trace};
use txtfn_invocation::{CallError, HelpStyle, Signature, TextFunction};

use crate::builtins::Builtin;
use crate::{ArgDoc, Descriptor, RegisterError, render};

/// Maximum edit distance for [`Library::suggest`].
const SUGGEST_DISTANCE: usize = 3;

enum Target {
	Function(Box<dyn TextFunction>),
	Builtin(Builtin, Signature),
}

impl Target {
	fn signature(&self) -> &Signature {
		match self {
			Self::Function(function) => function.signature(),
			Self::Builtin(_, signature) => signature,
		}
	}
}

struct Entry {
	descriptor: Descriptor,
	target: Target,
	help_line: String,
}

impl Entry {
	fn view(&self) -> EntryRef<'_> {
		EntryRef {
			descriptor: &self.descriptor,
			signature: self.target.signature(),
			help_line: &self.help_line,
		}
	}
}

/// Borrowed view of one library entry.
#[derive(Debug, Clone, Copy)]
pub struct EntryRef<'a> {
	descriptor: &'a Descriptor,
	signature: &'a Signature,
	help_line: &'a str,
}

impl<'a> EntryRef<'a> {
	pub fn name(&self) -> &'a str {
		self.descriptor.name()
	}

	pub fn arity(&self) -> usize {
		self.signature.arity()
	}

	pub fn description(&self) -> &'a str {
		self.descriptor.description()
	}

	pub fn args(&self) -> &'a [ArgDoc] {
		self.descriptor.args()
	}

	pub fn descriptor(&self) -> &'a Descriptor {
		self.descriptor
	}

	pub fn signature(&self) -> &'a Signature {
		self.signature
	}

	/// `<ret> <name> [<param>]...`, styled with the library's [`HelpStyle`].
	pub fn help_line(&self) -> &'a str {
		self.help_line
	}
}

/// Collection of text functions keyed by `(name, arity)`.
///
/// ```
/// use txtfn_invocation::adapter;
/// use txtfn_registry::{Descriptor, Library};
///
/// let mut lib = Library::new();
/// lib.register(
/// 	Descriptor::new("multiply")
/// 		.arg("multiplicand", "it is multiplied")
/// 		.arg("multiplier", "it multiplies")
/// 		.describe("Multiplies two numbers"),
/// 	adapter(|a: i64, b: i64| a * b),
/// )
/// .unwrap();
///
/// assert_eq!(lib.call("multiply", &["3", "4"]).unwrap().as_deref(), Some("12"));
/// assert_eq!(lib.call("multiply", &["3"]).unwrap(), None);
/// ```
pub struct Library {
	entries: BTreeMap<String, BTreeMap<usize, Entry>>,
	style: HelpStyle,
}

impl Library {
	/// Creates a library holding only the built-in commands, styled with
	/// [`HelpStyle::ansi`].
	pub fn new() -> Self {
		Self::with_style(HelpStyle::default())
	}

	/// Creates a library whose help lines use `style`.
	pub fn with_style(style: HelpStyle) -> Self {
		let mut library = Self {
			entries: BTreeMap::new(),
			style,
		};
		for builtin in Builtin::ALL {
			library
				.insert(
					builtin.descriptor(),
					Target::Builtin(builtin, builtin.signature()),
				)
				.expect("built-in commands have distinct keys");
		}
		library
	}

	pub fn style(&self) -> &HelpStyle {
		&self.style
	}

	/// Registers `function` under `descriptor`.
	///
	/// Fails without modifying the library if the descriptor documents a
	/// different number of arguments than `function` takes, or if the
	/// `(name, arity)` key is taken.
	pub fn register<F>(&mut self, descriptor: Descriptor, function: F) -> Result<(), RegisterError>
	where
		F: TextFunction + 'static,
	{
		self.insert(descriptor, Target::Function(Box::new(function)))
	}

	/// Registers `function` with a descriptor synthesized from its signature.
	pub fn register_auto<F>(&mut self, name: impl Into<String>, function: F) -> Result<(), RegisterError>
	where
		F: TextFunction + 'static,
	{
		let descriptor = Descriptor::from_signature(name, function.signature());
		self.register(descriptor, function)
	}

	fn insert(&mut self, descriptor: Descriptor, target: Target) -> Result<(), RegisterError> {
		let arity = target.signature().arity();
		if descriptor.arity() != arity {
			debug!(
				command = descriptor.name(),
				described = descriptor.arity(),
				arity,
				"rejected registration with mismatched argument docs"
			);
			return Err(RegisterError::ArityMismatch {
				name: descriptor.name().to_owned(),
				described: descriptor.arity(),
				expected: arity,
			});
		}

		if self.contains(descriptor.name(), arity) {
			debug!(command = descriptor.name(), arity, "rejected duplicate registration");
			return Err(RegisterError::Duplicate {
				name: descriptor.name().to_owned(),
				arity,
			});
		}

		let help_line = target.signature().help_line(descriptor.name(), &self.style);
		debug!(command = descriptor.name(), arity, "registered text function");
		self.entries
			.entry(descriptor.name().to_owned())
			.or_default()
			.insert(
				arity,
				Entry {
					descriptor,
					target,
					help_line,
				},
			);
		Ok(())
	}

	/// Calls the entry registered under `name` with exactly `args.len()` parameters.
	///
	/// Returns `Ok(None)` when no entry has that name and arity. Failures
	/// raised by a matching entry are returned as errors and leave the library
	/// untouched.
	pub fn call<S: AsRef<str>>(&self, name: &str, args: &[S]) -> Result<Option<String>, CallError> {
		let Some(entry) = self.entry(name, args.len()) else {
			trace!(command = name, arity = args.len(), "no matching text function");
			return Ok(None);
		};

		let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
		trace!(command = name, arity = args.len(), "dispatching text function");
		let result = match &entry.target {
			Target::Function(function) => function.invoke(&args),
			Target::Builtin(builtin, _) => builtin.run(self, &args),
		};
		result
			.map(Some)
			.inspect_err(|err| debug!(command = name, error = %err, "text function failed"))
	}

	/// Lists every entry, one line each: `<help line> -- <description>`.
	pub fn help(&self) -> String {
		render::listing(self.entries())
	}

	/// Detail blocks for every arity registered under `name`, or
	/// `<name> not found`.
	pub fn detailed_help(&self, name: &str) -> String {
		let matching = self
			.entries
			.get(name)
			.into_iter()
			.flat_map(BTreeMap::values)
			.map(Entry::view);
		render::detailed(name, matching)
	}

	/// Detail blocks of every entry matching the regular expression `pattern`.
	pub fn search(&self, pattern: &str) -> Result<String, CallError> {
		let regex = Regex::new(pattern).map_err(|err| CallError::InvalidPattern {
			pattern: pattern.to_owned(),
			reason: err.to_string(),
		})?;
		Ok(render::search(pattern, &regex, self.entries()))
	}

	fn entry(&self, name: &str, arity: usize) -> Option<&Entry> {
		self.entries.get(name)?.get(&arity)
	}

	pub fn get(&self, name: &str, arity: usize) -> Option<EntryRef<'_>> {
		self.entry(name, arity).map(Entry::view)
	}

	pub fn contains(&self, name: &str, arity: usize) -> bool {
		self.entry(name, arity).is_some()
	}

	/// All entries ordered by name, then arity.
	pub fn entries(&self) -> impl Iterator<Item = EntryRef<'_>> {
		self.entries
			.values()
			.flat_map(BTreeMap::values)
			.map(Entry::view)
	}

	/// Distinct registered names in ascending order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Number of entries, counting each arity separately.
	pub fn len(&self) -> usize {
		self.entries.values().map(BTreeMap::len).sum()
	}

	/// Always `false` for a constructed library, which holds the built-ins.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Suggests a registered name close to `name` using fuzzy matching.
	pub fn suggest(&self, name: &str) -> Option<&str> {
		self.names()
			.filter(|candidate| *candidate != name)
			.min_by_key(|candidate| strsim::levenshtein(name, candidate))
			.filter(|candidate| strsim::levenshtein(name, candidate) <= SUGGEST_DISTANCE)
	}
}

impl Default for Library {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Library {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Library")
			.field(
				"entries",
				&self
					.entries()
					.map(|entry| (entry.name(), entry.arity()))
					.collect::<Vec<_>>(),
			)
			.field("style", &self.style)
			.finish()
	}
}
