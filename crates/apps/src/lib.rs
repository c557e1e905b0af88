//! Built-in Atrium applications.
//!
//! Every module here declares one application with
//! [`atrium_registry::application!`]. Nothing has to be called: linking this
//! crate is enough for [`atrium_registry::Registry::builtin`] to pick the
//! applications up. Binaries that never name an item from this crate must
//! still reference it (`use atrium_apps as _;`) so the linker keeps it.

use atrium_primitives::{ApplicationDescriptor, View};

mod archaeology;
mod deals;
mod engineering;
mod learning;
mod settings;
mod speakeasy;

/// Ids of the applications this crate registers.
pub const BUILTIN_IDS: &[&str] = &["archaeology", "dealmaking", "engineering", "hogwartslearning", "settings", "speakeasy"];

/// Reads an integer context value, accepting numeric strings.
fn int(props: &ApplicationDescriptor, key: &str) -> Option<i64> {
	let value = props.context.get(key)?;
	value.as_i64().or_else(|| value.as_str()?.trim().parse().ok())
}

/// Footer line naming the sidebar route the app was opened from.
fn opened_from(props: &ApplicationDescriptor) -> Option<View> {
	props.sidebar_route.as_deref().map(|route| View::text(format!("Opened from {route}")))
}
