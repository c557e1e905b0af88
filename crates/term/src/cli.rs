//! CLI schema and parsing helpers for the atrium binary.

use std::path::PathBuf;

use atrium_primitives::ApplicationDescriptor;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atrium")]
#[command(about = "Resolve, load, and render business applications")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Shell configuration file (TOML)
	#[arg(long, short = 'c', value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Print views as JSON instead of text
	#[arg(long, global = true)]
	pub json: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// List registered applications
	List,
	/// Open an application by id or component path
	Open {
		/// Application id (or component path with --path)
		key: String,
		/// Treat KEY as a component path
		#[arg(long)]
		path: bool,
		/// Sidebar route the application is opened from
		#[arg(long, value_name = "ROUTE")]
		route: Option<String>,
		/// Context value passed to the application as a prop
		#[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
		context: Vec<(String, String)>,
	},
	/// Show the navigation menu of a group, or every group
	Menu {
		/// Group id
		group: Option<String>,
	},
	/// Click a menu item and open the application it routes to
	Click {
		/// Group id
		group: String,
		/// Menu item id within the group
		item: String,
	},
}

impl Command {
	/// Builds the descriptor for an `open` command.
	pub fn descriptor(&self) -> Option<ApplicationDescriptor> {
		let Self::Open { key, path, route, context } = self else {
			return None;
		};
		let mut descriptor = if *path {
			ApplicationDescriptor::with_component_path(key)
		} else {
			ApplicationDescriptor::with_id(key)
		};
		if let Some(route) = route {
			descriptor = descriptor.with_sidebar_route(route);
		}
		for (k, v) in context {
			descriptor = descriptor.with_context(k, v.as_str());
		}
		Some(descriptor)
	}
}

/// Parses `key=value`; the value may itself contain `=`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
	let (key, value) = s.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
	if key.trim().is_empty() {
		return Err(format!("empty key in {s:?}"));
	}
	Ok((key.trim().to_string(), value.to_string()))
}
