//! Application registry.
//!
//! Applications are declared as `'static` [`ApplicationDef`]s with the
//! [`application!`] macro and collected through `inventory` at startup. A
//! declared key therefore always names a real loader function: there is no
//! dynamic path construction and no way to register a key without one.
//!
//! [`RegistryBuilder`] folds those definitions (plus any runtime
//! registrations) into an immutable [`Registry`]. Lookups are exact-match and
//! never fail for unknown keys; absence is reported as `None`.

mod def;
mod index;
mod module;

pub use def::{ApplicationDef, ApplicationReg, ModuleLoader, RegistrySource, all_applications};
pub use index::{AppMeta, LoaderFn, Registry, RegistryBuilder, RegistryEntry, RegistryError};
pub use module::{Component, ComponentRef, LoadError, Module};

#[doc(hidden)]
pub use {inventory, paste};
