//! Module loading with dynamic-import semantics.
//!
//! Each application's module is evaluated at most once per [`ModuleCache`]:
//! later loads of the same application (through its id or any component path
//! alias) hand back the same module, and therefore the same component
//! reference. Failed loads are not cached, so a later request retries.

use std::collections::HashMap;
use std::sync::Arc;

use atrium_primitives::ApplicationDescriptor;
use atrium_registry::{ComponentRef, LoadError, Module, Registry};
use atrium_worker::TaskClass;
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

use crate::{AppError, ResolvedApp, resolve_application};

/// Evaluated modules keyed by canonical application id.
///
/// Each key owns a cell that is filled by the first successful load. Loads
/// that overlap with an in-flight one wait for it instead of fetching again.
#[derive(Debug, Default)]
pub struct ModuleCache {
	modules: Mutex<HashMap<String, Arc<OnceCell<Arc<Module>>>>>,
}

impl ModuleCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the cached module for an application id.
	pub fn get(&self, key: &str) -> Option<Arc<Module>> {
		self.modules.lock().get(key)?.get().cloned()
	}

	/// Returns the cached module, loading it on a miss.
	///
	/// A failed load leaves the cell empty; the next waiter, if any, runs the
	/// loader again.
	pub async fn get_or_load(&self, resolved: &ResolvedApp) -> Result<Arc<Module>, LoadError> {
		let key = resolved.key();
		let cell = Arc::clone(self.modules.lock().entry(key.to_string()).or_default());
		if let Some(module) = cell.get() {
			tracing::trace!(app = key, "loader.cache_hit");
			return Ok(Arc::clone(module));
		}

		let module = cell
			.get_or_try_init(|| async {
				tracing::debug!(app = key, requested = %resolved.requested, "loader.fetch");
				resolved.entry.load().await.map(Arc::new)
			})
			.await?;
		Ok(Arc::clone(module))
	}

	/// Number of applications with a loaded module.
	pub fn len(&self) -> usize {
		self.modules.lock().values().filter(|cell| cell.initialized()).count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// A loaded application ready to render.
#[derive(Clone)]
pub struct ReadyApp {
	/// Canonical application id.
	pub key: String,
	/// The module's default-exported component.
	pub component: ComponentRef,
	/// The descriptor that requested the load, passed through as props.
	pub props: ApplicationDescriptor,
}

impl core::fmt::Debug for ReadyApp {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ReadyApp")
			.field("key", &self.key)
			.field("component", &self.component.name())
			.field("props", &self.props)
			.finish()
	}
}

/// Resolves descriptors and loads their modules through a shared cache.
#[derive(Clone)]
pub struct AppLoader {
	registry: Arc<Registry>,
	cache: Arc<ModuleCache>,
}

impl AppLoader {
	pub fn new(registry: Arc<Registry>) -> Self {
		Self {
			registry,
			cache: Arc::new(ModuleCache::new()),
		}
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn cache(&self) -> &ModuleCache {
		&self.cache
	}

	/// Resolves, loads, and extracts the default export for one descriptor.
	pub async fn load(&self, descriptor: ApplicationDescriptor) -> Result<ReadyApp, AppError> {
		let resolved = resolve_application(&self.registry, &descriptor)?;
		let module = self.cache.get_or_load(&resolved).await?;
		let component = module.default_export().cloned().ok_or_else(|| LoadError::MissingDefaultExport {
			module: module.name().to_string(),
		})?;

		Ok(ReadyApp {
			key: resolved.key().to_string(),
			component,
			props: descriptor,
		})
	}

	/// Warms the cache for the given application keys in the background.
	///
	/// Unknown keys and failed loads are logged and skipped. The task yields
	/// the number of modules now cached for the requested keys.
	pub fn prefetch<I, S>(&self, keys: I) -> JoinHandle<usize>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
		let loader = self.clone();
		atrium_worker::spawn(TaskClass::Background, async move {
			let mut warmed = 0;
			for key in keys {
				let descriptor = ApplicationDescriptor::with_id(key.as_str());
				let resolved = match resolve_application(&loader.registry, &descriptor) {
					Ok(resolved) => resolved,
					Err(err) => {
						tracing::warn!(key = %key, error = %err, "loader.prefetch_skipped");
						continue;
					}
				};
				match loader.cache.get_or_load(&resolved).await {
					Ok(_) => warmed += 1,
					Err(err) => tracing::warn!(key = %key, error = %err, "loader.prefetch_failed"),
				}
			}
			warmed
		})
	}
}

impl core::fmt::Debug for AppLoader {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("AppLoader")
			.field("registry", &self.registry)
			.field("cached", &self.cache.len())
			.finish()
	}
}
