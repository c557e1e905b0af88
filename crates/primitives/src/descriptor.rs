use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Data identifying which application module to load and the context it
/// receives once rendered.
///
/// The shape is a superset of every descriptor the navigation layer produces:
/// some entries carry an application `id`, others only a `componentPath`.
/// Fields the shell does not know about are kept verbatim in [`Self::context`]
/// and passed through to the component as props.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
	/// Application identifier registered in the application registry.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Module path alias of the application.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub component_path: Option<String>,
	/// Sidebar route the application was opened from.
	#[serde(default, alias = "sidebarroute", skip_serializing_if = "Option::is_none")]
	pub sidebar_route: Option<String>,
	/// Arbitrary contextual payload for the application.
	#[serde(flatten)]
	pub context: Map<String, Value>,
}

impl ApplicationDescriptor {
	/// Creates a descriptor addressing an application by id.
	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			id: Some(id.into()),
			..Self::default()
		}
	}

	/// Creates a descriptor addressing an application by component path.
	pub fn with_component_path(path: impl Into<String>) -> Self {
		Self {
			component_path: Some(path.into()),
			..Self::default()
		}
	}

	/// Sets the sidebar route.
	pub fn with_sidebar_route(mut self, route: impl Into<String>) -> Self {
		self.sidebar_route = Some(route.into());
		self
	}

	/// Adds one context value.
	pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.context.insert(key.into(), value.into());
		self
	}

	/// Returns a string context value, if present.
	pub fn context_str(&self, key: &str) -> Option<&str> {
		self.context.get(key).and_then(Value::as_str)
	}

	/// Returns the key used to look this descriptor up in the registry.
	///
	/// `id` takes precedence over `component_path`. Blank values count as absent.
	pub fn key(&self) -> Option<AppKey<'_>> {
		non_blank(self.id.as_deref())
			.map(|value| AppKey { value, kind: KeyKind::Id })
			.or_else(|| non_blank(self.component_path.as_deref()).map(|value| AppKey { value, kind: KeyKind::ComponentPath }))
	}
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.trim().is_empty())
}

/// Which descriptor field supplied the lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
	/// The key came from `id`.
	Id,
	/// The key came from `componentPath`.
	ComponentPath,
}

impl KeyKind {
	/// Returns the field name as it appears on the wire.
	pub const fn field(self) -> &'static str {
		match self {
			Self::Id => "id",
			Self::ComponentPath => "componentPath",
		}
	}
}

/// Registry lookup key borrowed from a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppKey<'a> {
	pub value: &'a str,
	pub kind: KeyKind,
}

impl core::fmt::Display for AppKey<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}={}", self.kind.field(), self.value)
	}
}
