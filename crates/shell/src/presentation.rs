//! Presentation shell: a pure mapping from [`LoadState`] to [`View`].

use atrium_primitives::View;
use serde::{Deserialize, Serialize};

use crate::LoadState;

/// Wording used by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresentationConfig {
	/// Label of the loading indicator.
	pub loading_label: String,
	/// Title of the error panel.
	pub error_title: String,
	/// Message shown when a failure carries no message of its own.
	pub fallback_error: String,
}

impl Default for PresentationConfig {
	fn default() -> Self {
		Self {
			loading_label: "Loading...".to_string(),
			error_title: "Something went wrong".to_string(),
			fallback_error: "An unexpected error occurred.".to_string(),
		}
	}
}

/// Renders a slot state.
///
/// | state   | view                                  |
/// |---------|---------------------------------------|
/// | Idle    | empty                                 |
/// | Loading | spinner, no interactive content       |
/// | Failed  | error panel (fallback if message empty) |
/// | Ready   | the component rendered with its props |
pub fn present(state: &LoadState, config: &PresentationConfig) -> View {
	match state {
		LoadState::Idle => View::Empty,
		LoadState::Loading { .. } => View::spinner(&config.loading_label),
		LoadState::Failed { message } => {
			let message = if message.trim().is_empty() { &config.fallback_error } else { message };
			View::error_panel(&config.error_title, message)
		}
		LoadState::Ready(ready) => ready.component.render(&ready.props),
	}
}
