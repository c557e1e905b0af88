//! Descriptor to registry-entry resolution.

use atrium_primitives::{ApplicationDescriptor, KeyKind};
use atrium_registry::{Registry, RegistryEntry};

use crate::ResolveError;

/// A descriptor matched to its registry entry.
#[derive(Debug, Clone)]
pub struct ResolvedApp {
	/// The key as supplied by the descriptor.
	pub requested: String,
	/// Which descriptor field supplied [`Self::requested`].
	pub kind: KeyKind,
	pub entry: RegistryEntry,
}

impl ResolvedApp {
	/// Canonical application id, shared by all of the entry's aliases.
	pub fn key(&self) -> &str {
		self.entry.key()
	}
}

/// Resolves a descriptor against the registry.
///
/// Pure lookup: nothing is loaded and the registry is not touched.
pub fn resolve_application(registry: &Registry, descriptor: &ApplicationDescriptor) -> Result<ResolvedApp, ResolveError> {
	let Some(key) = descriptor.key() else {
		tracing::debug!("resolve.missing_descriptor");
		return Err(ResolveError::MissingDescriptor);
	};

	let Some(entry) = registry.resolve(key.value) else {
		tracing::debug!(key = %key, "resolve.unknown");
		return Err(ResolveError::UnknownApplication {
			key: key.value.to_string(),
			kind: key.kind,
		});
	};

	tracing::debug!(key = %key, app = entry.key(), "resolve.hit");
	Ok(ResolvedApp {
		requested: key.value.to_string(),
		kind: key.kind,
		entry: entry.clone(),
	})
}
