//! Help and search text, rendered purely from entry metadata.
//!
//! Formats:
//!
//! - listing line: `<help line> -- <description>\n`
//! - detail block: `<help line>\n  Description: <d>\n  Arguments:\n    <arg>: <d>\n...`
//! - search: every matching detail block followed by a blank line

use regex::Regex;

use crate::EntryRef;

/// One listing line per entry, in iteration order.
pub fn listing<'a>(entries: impl IntoIterator<Item = EntryRef<'a>>) -> String {
	let mut out = String::new();
	for entry in entries {
		out.push_str(entry.help_line());
		out.push_str(" -- ");
		out.push_str(entry.description());
		out.push('\n');
	}
	out
}

/// Appends the detail block of `entry` to `out`.
pub fn detail_block(out: &mut String, entry: EntryRef<'_>) {
	out.push_str(entry.help_line());
	out.push_str("\n  Description: ");
	out.push_str(entry.description());
	out.push_str("\n  Arguments:\n");
	for arg in entry.args() {
		out.push_str("    ");
		out.push_str(&arg.name);
		out.push_str(": ");
		out.push_str(&arg.description);
		out.push('\n');
	}
}

/// Concatenated detail blocks, or `<name> not found` when there are none.
pub fn detailed<'a>(name: &str, entries: impl IntoIterator<Item = EntryRef<'a>>) -> String {
	let mut out = String::new();
	for entry in entries {
		detail_block(&mut out, entry);
	}
	if out.is_empty() {
		out = format!("{name} not found");
	}
	out
}

/// Detail blocks of every entry whose block matches `regex`.
pub fn search<'a>(
	pattern: &str,
	regex: &Regex,
	entries: impl IntoIterator<Item = EntryRef<'a>>,
) -> String {
	let mut out = String::new();
	let mut block = String::new();
	for entry in entries {
		block.clear();
		detail_block(&mut block, entry);
		if regex.is_match(&block) {
			out.push_str(&block);
			out.push('\n');
		}
	}
	if out.is_empty() {
		out = format!("Nothing found for pattern: {pattern}");
	}
	out
}
