//! Dynamic application resolution.
//!
//! A navigation event carries an [`ApplicationDescriptor`]. The [`resolver`]
//! maps it onto a registry entry, the [`loader`] evaluates the entry's module
//! (once per application), and an [`AppSlot`] tracks the load lifecycle so
//! [`present`] can turn it into a [`View`]. [`SlotRuntime`] wires these
//! together on the worker runtime and applies results in request order.
//!
//! [`ApplicationDescriptor`]: atrium_primitives::ApplicationDescriptor
//! [`View`]: atrium_primitives::View

pub mod error;
pub mod loader;
pub mod nav;
pub mod presentation;
pub mod resolver;
pub mod runtime;
pub mod slot;

#[cfg(test)]
mod testing;

pub use error::{AppError, ResolveError};
pub use loader::{AppLoader, ModuleCache, ReadyApp};
pub use nav::{AppGroup, MenuRouter, NavError, NavItem, NavSection, navigation_from_registry};
pub use presentation::{PresentationConfig, present};
pub use resolver::{ResolvedApp, resolve_application};
pub use runtime::SlotRuntime;
pub use slot::{AppSlot, LoadState, LoadToken, Settle};
