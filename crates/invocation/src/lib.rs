//! Text invocation of strongly-typed callables.
//!
//! A callable such as `|a: i64, b: i64| a * b` is wrapped once into a
//! [`FunctionAdapter`], which derives its [`Signature`] from the callable's
//! static type and exposes a uniform [`TextFunction::invoke`] taking textual
//! arguments and producing textual output.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`TypeName`] | Canonical display name of a parameter or return type. |
//! | [`FromText`] / [`ToText`] | Per-type text codecs. |
//! | [`IntoReply`] | Turns a return value into output text. |
//! | [`Signature`] | Return type name plus ordered parameter type names. |
//! | [`FunctionAdapter`] | One callable bound to its signature. |
//! | [`TextFunction`] | Object-safe interface the registry stores. |
//!
//! # Invariants
//!
//! - An adapter's signature arity always equals the callable's parameter count.
//!   - Enforced in: [`FunctionAdapter::new`] (derived from the `Handler` impl chosen at compile time).
//! - Conversion is fail-fast: the callable never runs if any argument fails to parse.
//!   - Enforced in: [`ParamList::from_args`].

mod adapter;
mod codec;
mod error;
mod name;
mod reply;
mod signature;

pub use adapter::{FunctionAdapter, Handler, ParamList, TextFunction, adapter};
pub use codec::{FormatError, FromText, ParseError, ToText};
pub use error::CallError;
pub use name::TypeName;
pub use reply::IntoReply;
pub use signature::{HelpStyle, Signature};

