//! Test fixtures: stub components, controllable loaders, and a capturing
//! tracing layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use atrium_primitives::{ApplicationDescriptor, BoxFutureStatic, View};
use atrium_registry::{Component, LoadError, Module};
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub(crate) type LoadResult = Result<Module, LoadError>;

/// Component rendering `"<name>:<id>"`.
pub(crate) struct Label(pub &'static str);

impl Component for Label {
	fn name(&self) -> &str {
		self.0
	}

	fn render(&self, props: &ApplicationDescriptor) -> View {
		View::text(format!("{}:{}", self.0, props.id.as_deref().unwrap_or("-")))
	}
}

pub(crate) fn module(name: &'static str) -> Module {
	Module::new(name).with_default(Label(name))
}

/// Loader that resolves immediately with a labelled module and counts calls.
pub(crate) fn counting(name: &'static str) -> (Arc<AtomicUsize>, impl Fn() -> BoxFutureStatic<LoadResult> + Send + Sync + 'static) {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let loader = move || -> BoxFutureStatic<LoadResult> {
		counter.fetch_add(1, Ordering::SeqCst);
		Box::pin(async move { Ok(module(name)) })
	};
	(calls, loader)
}

/// Loader that stays pending until the returned sender fires.
///
/// The loader can only be started once; a second start fails.
pub(crate) fn gated() -> (oneshot::Sender<LoadResult>, impl Fn() -> BoxFutureStatic<LoadResult> + Send + Sync + 'static) {
	let (tx, rx) = oneshot::channel();
	let pending = Arc::new(Mutex::new(Some(rx)));
	let loader = move || -> BoxFutureStatic<LoadResult> {
		let rx = pending.lock().take();
		Box::pin(async move {
			match rx {
				Some(rx) => rx.await.unwrap_or_else(|_| Err(LoadError::fetch("gate dropped"))),
				None => Err(LoadError::fetch("gate already consumed")),
			}
		})
	};
	(tx, loader)
}

/// One recorded tracing event.
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
	pub level: Level,
	pub target: String,
	pub message: String,
	pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
	}
}

/// Shared handle to events recorded by [`capture`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Captured(Arc<Mutex<Vec<CapturedEvent>>>);

impl Captured {
	pub fn events(&self) -> Vec<CapturedEvent> {
		self.0.lock().clone()
	}

	/// Events with the given message, in emission order.
	pub fn named(&self, message: &str) -> Vec<CapturedEvent> {
		self.0.lock().iter().filter(|e| e.message == message).cloned().collect()
	}
}

struct CaptureLayer(Captured);

#[derive(Default)]
struct EventVisitor {
	message: String,
	fields: Vec<(String, String)>,
}

impl Visit for EventVisitor {
	fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{value:?}");
		} else {
			self.fields.push((field.name().to_string(), format!("{value:?}")));
		}
	}

	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = value.to_string();
		} else {
			self.fields.push((field.name().to_string(), value.to_string()));
		}
	}
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut visitor = EventVisitor::default();
		event.record(&mut visitor);
		self.0.0.lock().push(CapturedEvent {
			level: *event.metadata().level(),
			target: event.metadata().target().to_string(),
			message: visitor.message,
			fields: visitor.fields,
		});
	}
}

/// Records every event emitted on this thread until the guard drops.
pub(crate) fn capture() -> (Captured, tracing::subscriber::DefaultGuard) {
	let captured = Captured::default();
	let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));
	let guard = tracing::subscriber::set_default(subscriber);
	(captured, guard)
}
