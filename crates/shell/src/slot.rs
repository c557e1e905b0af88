//! Load lifecycle of one rendered application slot.
//!
//! `Idle -> Loading -> {Ready, Failed}`. Every [`AppSlot::begin`] starts a new
//! load with a fresh [`LoadToken`] and discards whatever the slot showed
//! before. [`AppSlot::settle`] only applies an outcome carrying the token of
//! the load currently in flight; anything else is stale and dropped, so
//! results land in request order regardless of completion order.

use atrium_primitives::{ApplicationDescriptor, View};
use atrium_worker::GenerationClock;

use crate::{AppError, PresentationConfig, ReadyApp, present};

/// Identity of one load request within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
	pub const fn generation(self) -> u64 {
		self.0
	}
}

/// What a slot currently shows.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
	/// Nothing requested yet.
	#[default]
	Idle,
	/// A load is in flight.
	Loading {
		token: LoadToken,
		descriptor: ApplicationDescriptor,
	},
	/// The requested application is loaded.
	Ready(ReadyApp),
	/// The requested application could not be shown.
	Failed { message: String },
}

impl LoadState {
	pub const fn label(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Loading { .. } => "loading",
			Self::Ready(_) => "ready",
			Self::Failed { .. } => "failed",
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}

	pub fn ready(&self) -> Option<&ReadyApp> {
		match self {
			Self::Ready(ready) => Some(ready),
			_ => None,
		}
	}

	/// Failure message, if the slot failed.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Failed { message } => Some(message),
			_ => None,
		}
	}

	fn in_flight(&self) -> Option<LoadToken> {
		match self {
			Self::Loading { token, .. } => Some(*token),
			_ => None,
		}
	}
}

/// Whether [`AppSlot::settle`] changed the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
	Applied,
	/// The outcome belonged to a superseded or already-settled load.
	Stale,
}

/// One rendered application slot.
#[derive(Debug)]
pub struct AppSlot {
	name: String,
	state: LoadState,
	clock: GenerationClock,
}

impl AppSlot {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			state: LoadState::Idle,
			clock: GenerationClock::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn state(&self) -> &LoadState {
		&self.state
	}

	/// Starts a load for `descriptor`, superseding any previous request.
	pub fn begin(&mut self, descriptor: ApplicationDescriptor) -> LoadToken {
		let token = LoadToken(self.clock.next());
		if let Some(previous) = self.state.in_flight() {
			tracing::debug!(slot = %self.name, superseded = previous.generation(), by = token.generation(), "slot.superseded");
		}
		match descriptor.key() {
			Some(key) => tracing::info!(slot = %self.name, token = token.generation(), key = %key, "slot.loading"),
			None => tracing::info!(slot = %self.name, token = token.generation(), "slot.loading"),
		}
		self.state = LoadState::Loading { token, descriptor };
		token
	}

	/// Applies the outcome of the load identified by `token`.
	///
	/// Errors become a `Failed` message; the error value itself never reaches
	/// the state.
	pub fn settle(&mut self, token: LoadToken, outcome: Result<ReadyApp, AppError>) -> Settle {
		if self.state.in_flight() != Some(token) {
			tracing::debug!(
				slot = %self.name,
				token = token.generation(),
				current = self.state.in_flight().map(LoadToken::generation),
				state = self.state.label(),
				"slot.stale"
			);
			return Settle::Stale;
		}

		self.state = match outcome {
			Ok(ready) => {
				tracing::info!(slot = %self.name, token = token.generation(), app = %ready.key, component = ready.component.name(), "slot.ready");
				LoadState::Ready(ready)
			}
			Err(err) => {
				tracing::warn!(slot = %self.name, token = token.generation(), kind = err.kind(), error = %err, "slot.failed");
				LoadState::Failed { message: err.to_string() }
			}
		};
		Settle::Applied
	}

	/// Renders the current state.
	pub fn view(&self, config: &PresentationConfig) -> View {
		present(&self.state, config)
	}
}
