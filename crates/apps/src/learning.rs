//! Hogwarts learning portal.

use atrium_primitives::{ApplicationDescriptor, BoxFutureStatic, Tone, View};
use atrium_registry::{Component, LoadError, Module, application};

application!(hogwartslearning, {
	title: "Hogwarts Learning",
	group: "learning",
	description: "Course catalogue and cohort progress",
	paths: &["learning/HogwartsLearning"],
}, loader: load);

fn load() -> BoxFutureStatic<Result<Module, LoadError>> {
	Box::pin(async { Ok(Module::new("hogwartslearning").with_default(HogwartsLearning)) })
}

struct HogwartsLearning;

impl Component for HogwartsLearning {
	fn name(&self) -> &str {
		"HogwartsLearning"
	}

	fn render(&self, props: &ApplicationDescriptor) -> View {
		let mut children = vec![View::heading("Hogwarts Learning")];

		match props.context_str("house") {
			Some(house) => children.push(View::badge(house, Tone::Neutral)),
			None => children.push(View::text("No house assigned yet")),
		}
		if let Some(cohort) = props.context_str("cohort") {
			children.push(View::text(format!("Cohort {cohort}")));
		}
		children.push(View::progress("Curriculum", crate::int(props, "progress").unwrap_or(0)));
		children.extend(crate::opened_from(props));

		View::column(children)
	}
}
