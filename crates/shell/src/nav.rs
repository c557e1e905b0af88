//! Navigation tree and menu click routing.
//!
//! Each rendered [`AppGroup`] gets its own [`MenuRouter`] holding one handler
//! per menu item of that tree. Clicks are resolved against the router of the
//! tree they happened in; there is no global listener matching items by name.

use std::collections::{BTreeMap, HashMap};

use atrium_primitives::{ApplicationDescriptor, View};
use atrium_registry::Registry;
use serde::{Deserialize, Serialize};

/// One application group dashboard and its menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppGroup {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub sections: Vec<NavSection>,
}

/// Titled block of menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavSection {
	pub title: String,
	#[serde(default)]
	pub items: Vec<NavItem>,
}

/// One clickable menu entry and the application it opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
	pub id: String,
	pub label: String,
	/// Must carry an `id` or `componentPath`.
	pub app: ApplicationDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
	#[error("group {group:?} contains an item with an empty id")]
	EmptyItemId { group: String },
	#[error("group {group:?} contains item {item:?} more than once")]
	DuplicateItem { group: String, item: String },
	#[error("group {group:?} has no item {item:?}")]
	UnknownItem { group: String, item: String },
	#[error("item {item:?} in group {group:?} names no application (set app.id or app.componentPath)")]
	MissingApp { group: String, item: String },
}

/// Click handler for one menu item; `None` means the click opens nothing.
pub type MenuHandler = Box<dyn Fn(&NavItem) -> Option<ApplicationDescriptor> + Send + Sync>;

/// Click routing for one rendered group.
pub struct MenuRouter {
	group: AppGroup,
	items: HashMap<String, NavItem>,
	handlers: HashMap<String, MenuHandler>,
}

impl MenuRouter {
	/// Builds a router with the default handler on every item of `group`.
	///
	/// Every item needs a non-empty id, unique within the group, and a
	/// descriptor with a lookup key.
	///
	/// The default handler opens the item's descriptor, filling in the
	/// sidebar route `/<group>/<item>` when the descriptor has none.
	pub fn for_group(group: &AppGroup) -> Result<Self, NavError> {
		let mut items = HashMap::new();
		let mut handlers: HashMap<String, MenuHandler> = HashMap::new();

		for item in group.sections.iter().flat_map(|s| &s.items) {
			if item.id.trim().is_empty() {
				return Err(NavError::EmptyItemId { group: group.id.clone() });
			}
			if items.insert(item.id.clone(), item.clone()).is_some() {
				return Err(NavError::DuplicateItem {
					group: group.id.clone(),
					item: item.id.clone(),
				});
			}
			if item.app.key().is_none() {
				return Err(NavError::MissingApp {
					group: group.id.clone(),
					item: item.id.clone(),
				});
			}
			let route = format!("/{}/{}", group.id, item.id);
			handlers.insert(
				item.id.clone(),
				Box::new(move |item: &NavItem| {
					let mut app = item.app.clone();
					if app.sidebar_route.is_none() {
						app.sidebar_route = Some(route.clone());
					}
					Some(app)
				}),
			);
		}

		tracing::debug!(group = %group.id, items = items.len(), "nav.router_built");
		Ok(Self {
			group: group.clone(),
			items,
			handlers,
		})
	}

	pub fn group(&self) -> &AppGroup {
		&self.group
	}

	/// Replaces the handler of one item in this tree.
	pub fn on<F>(&mut self, item: &str, handler: F) -> Result<(), NavError>
	where
		F: Fn(&NavItem) -> Option<ApplicationDescriptor> + Send + Sync + 'static,
	{
		if !self.items.contains_key(item) {
			return Err(NavError::UnknownItem {
				group: self.group.id.clone(),
				item: item.to_string(),
			});
		}
		self.handlers.insert(item.to_string(), Box::new(handler));
		Ok(())
	}

	/// Routes a click on `item` to its handler.
	pub fn click(&self, item: &str) -> Option<ApplicationDescriptor> {
		let (Some(nav_item), Some(handler)) = (self.items.get(item), self.handlers.get(item)) else {
			tracing::debug!(group = %self.group.id, item, "nav.click_unrouted");
			return None;
		};
		let descriptor = handler(nav_item);
		tracing::debug!(group = %self.group.id, item, opens = descriptor.is_some(), "nav.click");
		descriptor
	}

	/// Renders the group's menu tree.
	pub fn view(&self) -> View {
		View::Menu {
			title: self.group.title.clone(),
			sections: self
				.group
				.sections
				.iter()
				.map(|s| (s.title.clone(), s.items.iter().map(|i| (i.id.clone(), i.label.clone())).collect()))
				.collect(),
		}
	}
}

impl core::fmt::Debug for MenuRouter {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("MenuRouter").field("group", &self.group.id).field("items", &self.items.len()).finish()
	}
}

/// Derives one group per registry `group`, one item per application.
pub fn navigation_from_registry(registry: &Registry) -> Vec<AppGroup> {
	let mut groups: BTreeMap<&str, Vec<NavItem>> = BTreeMap::new();
	for entry in registry.entries() {
		groups.entry(entry.meta().group.as_str()).or_default().push(NavItem {
			id: entry.key().to_string(),
			label: entry.meta().title.clone(),
			app: ApplicationDescriptor::with_id(entry.key()),
		});
	}

	groups
		.into_iter()
		.map(|(id, items)| AppGroup {
			id: id.to_string(),
			title: title_case(id),
			sections: vec![NavSection {
				title: "Applications".to_string(),
				items,
			}],
		})
		.collect()
}

fn title_case(id: &str) -> String {
	let mut chars = id.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests;
