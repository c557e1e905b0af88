//! Static application definitions collected via `inventory`.
//!
//! Each [`application!`](crate::application) invocation creates an
//! [`ApplicationDef`] static and submits it with `inventory::submit!`. The
//! linking step gathers every submission, so a crate only has to be linked
//! into the final binary for its applications to show up.

use atrium_primitives::BoxFutureStatic;

use crate::{LoadError, Module};

/// Function that asynchronously produces an evaluated module.
pub type ModuleLoader = fn() -> BoxFutureStatic<Result<Module, LoadError>>;

/// Where an application was registered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Declared statically in a linked crate.
	Crate(&'static str),
	/// Registered on a builder at runtime.
	Runtime,
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Crate(name) => write!(f, "crate:{name}"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}

/// A statically declared application.
#[derive(Debug)]
pub struct ApplicationDef {
	/// Application id, matched exactly against descriptor ids.
	pub key: &'static str,
	/// Human-readable title.
	pub title: &'static str,
	/// Application group the app belongs to in navigation.
	pub group: &'static str,
	/// Short description for listings.
	pub description: &'static str,
	/// Component path aliases, matched exactly against descriptor component paths.
	pub paths: &'static [&'static str],
	/// Loader producing the evaluated module.
	pub loader: ModuleLoader,
	/// Crate that declared this application.
	pub source: RegistrySource,
}

/// Wrapper for `inventory::collect!`.
pub struct ApplicationReg(pub &'static ApplicationDef);

inventory::collect!(ApplicationReg);

/// Returns every linked application definition, sorted by key.
pub fn all_applications() -> Vec<&'static ApplicationDef> {
	let mut defs: Vec<_> = inventory::iter::<ApplicationReg>().map(|r| r.0).collect();
	defs.sort_by_key(|d| d.key);
	defs
}

/// Declares an application and registers it via `inventory`.
///
/// ```ignore
/// application!(settings, {
///     title: "Settings",
///     group: "settings",
///     paths: &["settings/Panel"],
/// }, loader: load_settings);
/// ```
#[macro_export]
macro_rules! application {
	($name:ident, {
		title: $title:expr,
		group: $group:expr
		$(, description: $desc:expr)?
		$(, paths: $paths:expr)?
		$(,)?
	}, loader: $loader:expr) => {
		$crate::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<APP_ $name>]: $crate::ApplicationDef = $crate::ApplicationDef {
				key: stringify!($name),
				title: $title,
				group: $group,
				description: $crate::__app_opt!($({$desc})?, ""),
				paths: $crate::__app_opt!($({$paths})?, &[]),
				loader: $loader,
				source: $crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
			};

			$crate::inventory::submit! { $crate::ApplicationReg(&[<APP_ $name>]) }
		}
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __app_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
