//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "atrium=info";
const VERBOSE_FILTER: &str = "atrium=debug";

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug output for every
/// atrium crate, then the configured filter, then [`DEFAULT_FILTER`].
pub fn init(verbose: bool, configured: Option<&str>) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(verbose, configured));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}

fn fallback_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
	let directives = directives(verbose, configured);
	EnvFilter::try_new(directives).unwrap_or_else(|err| {
		eprintln!("atrium: ignoring invalid log filter {directives:?}: {err}");
		EnvFilter::new(DEFAULT_FILTER)
	})
}

fn directives(verbose: bool, configured: Option<&str>) -> &str {
	match configured {
		_ if verbose => VERBOSE_FILTER,
		Some(filter) if !filter.trim().is_empty() => filter,
		_ => DEFAULT_FILTER,
	}
}
