//! Engineering service board.

use atrium_primitives::{ApplicationDescriptor, BoxFutureStatic, Tone, View};
use atrium_registry::{Component, LoadError, Module, application};

application!(engineering, {
	title: "Engineering",
	group: "engineering",
	description: "Service health and open incidents",
	paths: &["eng/Board"],
}, loader: load);

fn load() -> BoxFutureStatic<Result<Module, LoadError>> {
	Box::pin(async { Ok(Module::new("engineering").with_default(ServiceBoard)) })
}

struct ServiceBoard;

impl Component for ServiceBoard {
	fn name(&self) -> &str {
		"ServiceBoard"
	}

	fn render(&self, props: &ApplicationDescriptor) -> View {
		let service = props.context_str("service").unwrap_or("all services");
		let incidents = crate::int(props, "incidents").unwrap_or(0).max(0);

		let incident_badge = match incidents {
			0 => View::badge("no open incidents", Tone::Success),
			1 => View::badge("1 open incident", Tone::Warning),
			n => View::badge(format!("{n} open incidents"), Tone::Danger),
		};

		let mut children = vec![View::status_badge(props.context_str("status").unwrap_or("unknown")), incident_badge];
		children.extend(crate::opened_from(props));
		View::panel(format!("Engineering: {service}"), children)
	}
}
