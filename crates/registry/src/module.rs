use std::sync::Arc;

use atrium_primitives::{ApplicationDescriptor, View};

/// A renderable application component.
///
/// The component receives the full descriptor that opened it as props.
pub trait Component: Send + Sync + 'static {
	/// Display name, used in diagnostics.
	fn name(&self) -> &str;

	/// Renders the component for the given props.
	fn render(&self, props: &ApplicationDescriptor) -> View;
}

/// Shared handle to a loaded component.
///
/// Identity is meaningful: two handles to the same loaded module compare equal
/// under [`Arc::ptr_eq`].
pub type ComponentRef = Arc<dyn Component>;

/// An evaluated application module.
#[derive(Clone)]
pub struct Module {
	name: String,
	default: Option<ComponentRef>,
}

impl Module {
	/// Creates a module with no exports.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			default: None,
		}
	}

	/// Sets the default export.
	pub fn with_default(mut self, component: impl Component) -> Self {
		self.default = Some(Arc::new(component));
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the module's primary component, if it exports one.
	pub fn default_export(&self) -> Option<&ComponentRef> {
		self.default.as_ref()
	}
}

impl core::fmt::Debug for Module {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Module")
			.field("name", &self.name)
			.field("default", &self.default.as_ref().map(|c| c.name().to_string()))
			.finish()
	}
}

/// Failure to produce an evaluated module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
	/// The module could not be fetched or evaluated.
	#[error("{0}")]
	Fetch(String),
	/// The module evaluated but has nothing to render.
	#[error("module `{module}` has no default export")]
	MissingDefaultExport { module: String },
	/// The loader task panicked.
	#[error("loader panicked: {0}")]
	Panicked(String),
}

impl LoadError {
	pub fn fetch(reason: impl Into<String>) -> Self {
		Self::Fetch(reason.into())
	}
}
