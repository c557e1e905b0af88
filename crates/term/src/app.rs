//! Subcommand execution.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use atrium_primitives::{ApplicationDescriptor, View};
use atrium_registry::Registry;
use atrium_shell::{AppLoader, MenuRouter, SlotRuntime};

use crate::cli::Command;
use crate::config::ShellConfig;

/// Result of one subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub view: View,
	/// True when an application was opened and its slot ended up `Failed`.
	pub failed: bool,
}

impl Outcome {
	fn shown(view: View) -> Self {
		Self { view, failed: false }
	}
}

/// Runs `command` against `registry`.
pub async fn execute(command: &Command, config: &ShellConfig, registry: Arc<Registry>) -> anyhow::Result<Outcome> {
	match command {
		Command::List => Ok(Outcome::shown(list(&registry))),
		Command::Open { .. } => {
			let descriptor = command.descriptor().context("open command carries a descriptor")?;
			Ok(open(descriptor, config, registry).await)
		}
		Command::Menu { group: None } => {
			let menus = config
				.navigation(&registry)
				.iter()
				.map(|group| MenuRouter::for_group(group).map(|router| router.view()))
				.collect::<Result<Vec<_>, _>>()?;
			Ok(Outcome::shown(View::column(menus)))
		}
		Command::Menu { group: Some(group) } => Ok(Outcome::shown(router(config, &registry, group)?.view())),
		Command::Click { group, item } => {
			let router = router(config, &registry, group)?;
			let descriptor = router
				.click(item)
				.ok_or_else(|| anyhow!("menu item {item:?} in group {group:?} opens nothing"))?;
			Ok(open(descriptor, config, registry).await)
		}
	}
}

fn list(registry: &Registry) -> View {
	let rows = registry
		.entries()
		.into_iter()
		.map(|entry| {
			let meta = entry.meta();
			let mut row = format!("{:<18} {:<20} {}", entry.key(), meta.title, meta.group);
			if !meta.paths.is_empty() {
				row.push_str(&format!("  ({})", meta.paths.join(", ")));
			}
			View::text(row)
		})
		.collect();
	View::panel(format!("{} applications", registry.len()), rows)
}

fn router(config: &ShellConfig, registry: &Registry, group: &str) -> anyhow::Result<MenuRouter> {
	let groups = config.navigation(registry);
	let Some(found) = groups.iter().find(|g| g.id == group) else {
		let known: Vec<_> = groups.iter().map(|g| g.id.as_str()).collect();
		return Err(anyhow!("unknown group {group:?} (known: {})", known.join(", ")));
	};
	Ok(MenuRouter::for_group(found)?)
}

async fn open(descriptor: ApplicationDescriptor, config: &ShellConfig, registry: Arc<Registry>) -> Outcome {
	let mut runtime = SlotRuntime::new("main", AppLoader::new(registry));
	let failed = runtime.open(descriptor).await.message().is_some();
	Outcome {
		view: runtime.view(&config.presentation),
		failed,
	}
}
