//! Commands every library starts with: `help`, `help <name>` and `search <regex>`.

use txtfn_invocation::{CallError, Signature};

use crate::{Descriptor, Library};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
	/// `help` with no arguments.
	Listing,
	/// `help <name>`.
	Detail,
	/// `search <regex>`.
	Search,
}

impl Builtin {
	pub(crate) const ALL: [Builtin; 3] = [Builtin::Listing, Builtin::Detail, Builtin::Search];

	pub(crate) fn descriptor(self) -> Descriptor {
		match self {
			Self::Listing => Descriptor::new("help").describe("Returns list of functions"),
			Self::Detail => Descriptor::new("help")
				.arg("func_name", "function name to retrieve detailed help for")
				.describe("Returns detailed help for matching function"),
			Self::Search => Descriptor::new("search")
				.arg(
					"search_regex",
					"Regex is matched against names, descriptions, and arguments",
				)
				.describe("Returns list of functions matching regex"),
		}
	}

	pub(crate) fn signature(self) -> Signature {
		match self {
			Self::Listing => Signature::of::<(), String>(),
			Self::Detail | Self::Search => Signature::of::<(String,), String>(),
		}
	}

	pub(crate) fn run(self, library: &Library, args: &[&str]) -> Result<String, CallError> {
		match (self, args) {
			(Self::Listing, []) => Ok(library.help()),
			(Self::Detail, [name]) => Ok(library.detailed_help(name)),
			(Self::Search, [pattern]) => library.search(pattern),
			_ => Err(CallError::ArgumentCount {
				expected: self.signature().arity(),
				actual: args.len(),
			}),
		}
	}
}
