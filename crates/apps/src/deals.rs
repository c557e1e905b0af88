//! Deal-making dashboard.

use atrium_primitives::{ApplicationDescriptor, BoxFutureStatic, View};
use atrium_registry::{Component, LoadError, Module, application};

application!(dealmaking, {
	title: "Deal Making",
	group: "deals",
	description: "Pipeline stage and close probability of a deal",
	paths: &["deals/Dashboard", "dealmaking/DealMaking"],
}, loader: load);

fn load() -> BoxFutureStatic<Result<Module, LoadError>> {
	Box::pin(async { Ok(Module::new("dealmaking").with_default(DealDashboard)) })
}

struct DealDashboard;

impl Component for DealDashboard {
	fn name(&self) -> &str {
		"DealDashboard"
	}

	fn render(&self, props: &ApplicationDescriptor) -> View {
		let Some(deal) = props.context_str("deal") else {
			return View::panel("Deal Making", vec![View::text("Select a deal to see its pipeline")]);
		};

		let mut children = vec![View::status_badge(props.context_str("stage").unwrap_or("draft"))];
		if let Some(probability) = crate::int(props, "probability") {
			children.push(View::progress("Close probability", probability));
		}
		if let Some(owner) = props.context_str("owner") {
			children.push(View::text(format!("Owner: {owner}")));
		}
		children.extend(crate::opened_from(props));

		View::panel(deal, children)
	}
}
