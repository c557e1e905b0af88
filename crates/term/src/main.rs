//! Atrium command-line shell.
//!
//! Resolves applications from the builtin registry, loads them into a single
//! slot and prints the resulting view.

mod app;
mod cli;
mod config;
mod logging;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use atrium_registry::Registry;
use clap::Parser;
use cli::Cli;
use config::ShellConfig;
// Force linking of atrium-apps so its inventory submissions are registered
#[allow(unused_imports, reason = "ensures atrium-apps applications are linked")]
use atrium_apps as _;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => ShellConfig::load(path)?,
		None => ShellConfig::default(),
	};
	logging::init(cli.verbose, config.log.filter.as_deref());

	let registry = Arc::new(Registry::builtin()?);
	tracing::debug!(applications = registry.len(), "registry ready");

	let outcome = app::execute(&cli.command, &config, registry).await?;
	if cli.json {
		println!("{}", serde_json::to_string_pretty(&outcome.view)?);
	} else {
		print!("{}", render::render(&outcome.view));
	}

	Ok(if outcome.failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
