//! Account settings.

use atrium_primitives::{ApplicationDescriptor, BoxFutureStatic, Tone, View};
use atrium_registry::{Component, LoadError, Module, application};

application!(settings, {
	title: "Settings",
	group: "settings",
	paths: &["settings/Panel"],
}, loader: load);

fn load() -> BoxFutureStatic<Result<Module, LoadError>> {
	Box::pin(async { Ok(Module::new("settings").with_default(SettingsPanel)) })
}

const TABS: &[&str] = &["general", "billing", "members", "integrations"];

struct SettingsPanel;

impl Component for SettingsPanel {
	fn name(&self) -> &str {
		"SettingsPanel"
	}

	fn render(&self, props: &ApplicationDescriptor) -> View {
		let requested = props.context_str("tab").unwrap_or("general");
		let active = TABS.iter().copied().find(|t| t.eq_ignore_ascii_case(requested)).unwrap_or("general");

		let tabs = TABS
			.iter()
			.map(|&tab| {
				let tone = if tab == active { Tone::Success } else { Tone::Neutral };
				View::badge(tab, tone)
			})
			.collect();

		let mut children = vec![View::column(tabs), View::heading(active)];
		if active != requested {
			children.push(View::text(format!("Unknown tab {requested:?}, showing general")));
		}
		View::panel("Settings", children)
	}
}
