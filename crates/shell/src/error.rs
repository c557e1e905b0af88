//! Failures that end a load in the `Failed` state.

use atrium_primitives::KeyKind;
use atrium_registry::LoadError;

/// Resolution failures, produced before any module is fetched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	/// The descriptor carries no usable key.
	#[error("No application data available.")]
	MissingDescriptor,
	/// The key is not registered.
	#[error("{}", unknown_message(.key, .kind))]
	UnknownApplication { key: String, kind: KeyKind },
}

/// Every way a slot's load can fail.
///
/// `Display` yields the user-facing message shown by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
	#[error(transparent)]
	Resolve(#[from] ResolveError),
	#[error("Could not load application: {0}")]
	LoadFailure(#[from] LoadError),
}

impl AppError {
	/// Short machine-readable kind, used as a diagnostic field.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Resolve(ResolveError::MissingDescriptor) => "missing_descriptor",
			Self::Resolve(ResolveError::UnknownApplication { .. }) => "unknown_application",
			Self::LoadFailure(_) => "load_failure",
		}
	}
}

fn unknown_message(key: &str, kind: &KeyKind) -> String {
	match kind {
		KeyKind::Id => format!("Unknown app ID: {key}"),
		KeyKind::ComponentPath => format!("Unknown component path: {key}"),
	}
}
