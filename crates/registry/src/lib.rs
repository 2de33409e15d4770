//! Name and arity indexed library of text functions.
//!
//! A [`Library`] owns `(Descriptor, adapter)` pairs keyed by `(name, arity)`
//! and dispatches textual calls to them. Every library starts with three
//! built-in commands rendered from the registered metadata alone:
//!
//! | Command | Output |
//! |---------|--------|
//! | `help` | one `<help line> -- <description>` line per entry |
//! | `help <name>` | detail blocks for every arity of `<name>`, or `<name> not found` |
//! | `search <regex>` | detail blocks matching the regex, or `Nothing found for pattern: <regex>` |
//!
//! Only arity distinguishes entries sharing a name; there is no type-based
//! overload resolution.

mod builtins;
mod descriptor;
mod error;
mod library;
pub mod render;

pub use descriptor::{ArgDoc, Descriptor};
pub use error::RegisterError;
pub use library::{EntryRef, Library};
pub use txtfn_invocation::{CallError, HelpStyle, TextFunction, adapter};
