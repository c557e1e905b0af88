//! Speakeasy reservations.

use atrium_primitives::{ApplicationDescriptor, BoxFutureStatic, View};
use atrium_registry::{Component, LoadError, Module, application};

application!(speakeasy, {
	title: "Speakeasy",
	group: "speakeasy",
	description: "Reservations for tonight",
	paths: &["speakeasy/Lounge"],
}, loader: load);

fn load() -> BoxFutureStatic<Result<Module, LoadError>> {
	Box::pin(async { Ok(Module::new("speakeasy").with_default(Lounge)) })
}

/// Seats in the lounge.
const CAPACITY: i64 = 40;

struct Lounge;

impl Component for Lounge {
	fn name(&self) -> &str {
		"Lounge"
	}

	fn render(&self, props: &ApplicationDescriptor) -> View {
		let booked = crate::int(props, "reservations").unwrap_or(0).clamp(0, CAPACITY);
		let status = if booked == CAPACITY { "full" } else { "open" };

		let mut children = vec![
			View::heading("Speakeasy"),
			View::status_badge(status),
			View::progress(format!("{booked}/{CAPACITY} seats booked"), booked * 100 / CAPACITY),
		];
		if let Some(password) = props.context_str("password") {
			children.push(View::text(format!("Tonight's password: {password}")));
		}
		children.extend(crate::opened_from(props));
		View::column(children)
	}
}
