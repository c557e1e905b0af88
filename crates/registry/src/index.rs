use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use atrium_primitives::BoxFutureStatic;

use crate::{ApplicationDef, LoadError, Module, RegistrySource, all_applications};

/// Type-erased loader stored in a [`RegistryEntry`].
pub type LoaderFn = Arc<dyn Fn() -> BoxFutureStatic<Result<Module, LoadError>> + Send + Sync>;

/// Descriptive metadata for a registered application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMeta {
	pub title: String,
	pub group: String,
	pub description: String,
	/// Component path aliases resolving to the same entry.
	pub paths: Vec<String>,
	pub source: RegistrySource,
}

impl AppMeta {
	/// Metadata for a runtime registration.
	pub fn runtime(title: impl Into<String>, group: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			group: group.into(),
			description: String::new(),
			paths: Vec::new(),
			source: RegistrySource::Runtime,
		}
	}

	/// Adds a component path alias.
	pub fn with_path(mut self, path: impl Into<String>) -> Self {
		self.paths.push(path.into());
		self
	}

	fn from_def(def: &ApplicationDef) -> Self {
		Self {
			title: def.title.to_string(),
			group: def.group.to_string(),
			description: def.description.to_string(),
			paths: def.paths.iter().map(|p| p.to_string()).collect(),
			source: def.source,
		}
	}
}

/// One registered application.
#[derive(Clone)]
pub struct RegistryEntry {
	key: String,
	meta: AppMeta,
	loader: LoaderFn,
}

impl RegistryEntry {
	/// Canonical application id.
	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn meta(&self) -> &AppMeta {
		&self.meta
	}

	/// Returns a handle to the entry's loader.
	pub fn loader(&self) -> LoaderFn {
		Arc::clone(&self.loader)
	}

	/// Starts loading the entry's module.
	pub fn load(&self) -> BoxFutureStatic<Result<Module, LoadError>> {
		(self.loader)()
	}
}

impl core::fmt::Debug for RegistryEntry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("RegistryEntry")
			.field("key", &self.key)
			.field("meta", &self.meta)
			.finish_non_exhaustive()
	}
}

/// Fatal registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// An id or component path was empty.
	#[error("empty application key registered from {origin}")]
	EmptyKey { origin: RegistrySource },
	/// Two registrations claim the same id or component path.
	#[error("duplicate application key {key:?}: owned by {existing}, claimed again by {incoming}")]
	DuplicateKey { key: String, existing: String, incoming: String },
}

/// Accumulates registrations and validates key uniqueness.
///
/// Ids and component paths share one key space, so a path can never shadow
/// another application's id.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	entries: Vec<RegistryEntry>,
	index: HashMap<String, usize>,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers every application linked into the binary.
	pub fn with_builtins(mut self) -> Result<Self, RegistryError> {
		for def in all_applications() {
			self.register_def(def)?;
		}
		Ok(self)
	}

	/// Registers one static definition.
	pub fn register_def(&mut self, def: &'static ApplicationDef) -> Result<&mut Self, RegistryError> {
		let loader = def.loader;
		self.insert(def.key.to_string(), AppMeta::from_def(def), Arc::new(loader))
	}

	/// Registers an application with an arbitrary async loader.
	pub fn register<F, Fut>(&mut self, key: impl Into<String>, meta: AppMeta, loader: F) -> Result<&mut Self, RegistryError>
	where
		F: Fn() -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<Module, LoadError>> + Send + 'static,
	{
		let loader: LoaderFn = Arc::new(move || -> BoxFutureStatic<Result<Module, LoadError>> { Box::pin(loader()) });
		self.insert(key.into(), meta, loader)
	}

	fn insert(&mut self, key: String, meta: AppMeta, loader: LoaderFn) -> Result<&mut Self, RegistryError> {
		let keys: Vec<String> = std::iter::once(key.clone()).chain(meta.paths.iter().cloned()).collect();
		for (i, k) in keys.iter().enumerate() {
			if k.trim().is_empty() {
				return Err(RegistryError::EmptyKey { origin: meta.source });
			}
			let existing = match self.index.get(k) {
				Some(&owner) => Some(self.entries[owner].key.clone()),
				None if keys[..i].contains(k) => Some(key.clone()),
				None => None,
			};
			if let Some(existing) = existing {
				return Err(RegistryError::DuplicateKey {
					key: k.clone(),
					existing,
					incoming: key,
				});
			}
		}

		let slot = self.entries.len();
		for k in keys {
			self.index.insert(k, slot);
		}
		tracing::trace!(key = %key, source = %meta.source, "registry.register");
		self.entries.push(RegistryEntry { key, meta, loader });
		Ok(self)
	}

	/// Freezes the registrations.
	pub fn build(self) -> Registry {
		tracing::debug!(applications = self.entries.len(), keys = self.index.len(), "registry.build");
		Registry {
			entries: self.entries,
			index: self.index,
		}
	}
}

/// Immutable application table.
pub struct Registry {
	entries: Vec<RegistryEntry>,
	index: HashMap<String, usize>,
}

impl Registry {
	/// Builds the registry of every linked application.
	pub fn builtin() -> Result<Self, RegistryError> {
		Ok(RegistryBuilder::new().with_builtins()?.build())
	}

	/// Looks up an application by id or component path.
	///
	/// Matching is exact; no normalization is applied.
	pub fn resolve(&self, key: &str) -> Option<&RegistryEntry> {
		self.index.get(key).map(|&i| &self.entries[i])
	}

	/// Returns all entries sorted by canonical key.
	pub fn entries(&self) -> Vec<&RegistryEntry> {
		let mut entries: Vec<_> = self.entries.iter().collect();
		entries.sort_by(|a, b| a.key.cmp(&b.key));
		entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl core::fmt::Debug for Registry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registry").field("applications", &self.entries.len()).field("keys", &self.index.len()).finish()
	}
}
