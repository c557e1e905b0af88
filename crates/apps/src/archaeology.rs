use atrium_primitives::{ApplicationDescriptor, BoxFutureStatic, View};
use atrium_registry::{Component, LoadError, Module, application};

application!(archaeology, {
	title: "Archaeology",
	group: "archaeology",
	description: "Excavation site log",
	paths: &["archaeology/Site"],
}, loader: load);

fn load() -> BoxFutureStatic<Result<Module, LoadError>> {
	Box::pin(async { Ok(Module::new("archaeology").with_default(SiteLog)) })
}

struct SiteLog;

impl Component for SiteLog {
	fn name(&self) -> &str {
		"SiteLog"
	}

	fn render(&self, props: &ApplicationDescriptor) -> View {
		let site = props.context_str("site").unwrap_or("Unnamed site");
		let finds = crate::int(props, "finds").unwrap_or(0);

		View::panel(
			site,
			vec![
				View::progress("Excavated", crate::int(props, "excavated").unwrap_or(0)),
				View::text(match finds {
					1 => "1 catalogued find".to_string(),
					n => format!("{n} catalogued finds"),
				}),
			],
		)
	}
}
