//! `txtfn` console.
//!
//! Reads `<name> [arg]...` lines from stdin, dispatches them through a
//! [`txtfn_registry::Library`] and prints each result.

mod cli;
mod console;
mod demo;

use std::io::{self, IsTerminal};

use clap::Parser;
use cli::Args;
use console::Console;
use tracing::info;
use txtfn_invocation::HelpStyle;

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let style = if args.plain || !io::stdout().is_terminal() {
		HelpStyle::plain()
	} else {
		HelpStyle::ansi()
	};
	let library = demo::library(style)?;
	info!(entries = library.len(), "text function library ready");

	let stdin = io::stdin();
	let prompt = args
		.prompt
		.or_else(|| stdin.is_terminal().then(|| "> ".to_string()));

	Console::new(&library)
		.with_prompt(prompt)
		.run(stdin.lock(), io::stdout().lock())?;

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("TXTFN_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("txtfn_registry=trace,debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
