//! Shell configuration file.
//!
//! ```toml
//! [log]
//! filter = "atrium_shell=debug"
//!
//! [presentation]
//! loading_label = "Fetching..."
//!
//! [[groups]]
//! id = "learning"
//! title = "Learning"
//!
//! [[groups.sections]]
//! title = "Courses"
//! items = [{ id = "hogwarts", label = "Hogwarts", app = { id = "hogwartslearning" } }]
//! ```
//!
//! Every table is optional. Without `[[groups]]` the navigation is derived
//! from the application registry.

use std::path::{Path, PathBuf};

use atrium_registry::Registry;
use atrium_shell::{AppGroup, MenuRouter, NavError, PresentationConfig, navigation_from_registry};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("invalid configuration in {path}: {error}")]
	Parse { path: PathBuf, error: toml::de::Error },

	#[error("invalid navigation in {path}: {error}")]
	Nav { path: PathBuf, error: NavError },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
	pub log: LogConfig,
	pub presentation: PresentationConfig,
	pub groups: Vec<AppGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// `tracing-subscriber` filter directives, used when `RUST_LOG` is unset.
	pub filter: Option<String>,
}

impl ShellConfig {
	/// Reads and validates a configuration file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&text, path)
	}

	/// Parses configuration text; `origin` is only used in error messages.
	pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text).map_err(|error| ConfigError::Parse {
			path: origin.to_path_buf(),
			error,
		})?;
		for group in &config.groups {
			MenuRouter::for_group(group).map_err(|error| ConfigError::Nav {
				path: origin.to_path_buf(),
				error,
			})?;
		}
		Ok(config)
	}

	/// Configured groups, or groups derived from `registry` if none are configured.
	pub fn navigation(&self, registry: &Registry) -> Vec<AppGroup> {
		if self.groups.is_empty() {
			navigation_from_registry(registry)
		} else {
			self.groups.clone()
		}
	}
}
