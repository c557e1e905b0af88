//! Drives an [`AppSlot`] from navigation requests to settled states.
//!
//! Loads run as worker tasks and report back over a channel; the runtime is
//! the slot's single owner and applies each completion through
//! [`AppSlot::settle`]. Superseded loads are never aborted, their results are
//! just ignored when they arrive.

use atrium_primitives::{ApplicationDescriptor, View};
use atrium_registry::LoadError;
use atrium_worker::{TaskClass, join_error_panic_message};
use tokio::sync::mpsc;

use crate::{AppError, AppLoader, AppSlot, LoadState, LoadToken, PresentationConfig, ReadyApp, Settle};

struct LoadCompletion {
	token: LoadToken,
	outcome: Result<ReadyApp, AppError>,
}

/// One slot plus the machinery that loads into it.
pub struct SlotRuntime {
	slot: AppSlot,
	loader: AppLoader,
	tx: mpsc::UnboundedSender<LoadCompletion>,
	rx: mpsc::UnboundedReceiver<LoadCompletion>,
}

impl SlotRuntime {
	pub fn new(name: impl Into<String>, loader: AppLoader) -> Self {
		let (tx, rx) = mpsc::unbounded_channel();
		Self {
			slot: AppSlot::new(name),
			loader,
			tx,
			rx,
		}
	}

	pub fn state(&self) -> &LoadState {
		self.slot.state()
	}

	pub fn loader(&self) -> &AppLoader {
		&self.loader
	}

	/// Renders the current state.
	pub fn view(&self, config: &PresentationConfig) -> View {
		self.slot.view(config)
	}

	/// Starts loading `descriptor` into the slot.
	///
	/// Must be called from within a tokio runtime context or the worker
	/// fallback runtime is used. The slot is `Loading` when this returns.
	pub fn navigate(&mut self, descriptor: ApplicationDescriptor) -> LoadToken {
		let token = self.slot.begin(descriptor.clone());
		let loader = self.loader.clone();
		let tx = self.tx.clone();

		atrium_worker::spawn(TaskClass::Interactive, async move {
			let load = atrium_worker::spawn(TaskClass::Interactive, async move { loader.load(descriptor).await });
			let outcome = match load.await {
				Ok(outcome) => outcome,
				Err(err) => {
					let reason = join_error_panic_message(err).unwrap_or_else(|| "load task cancelled".to_string());
					Err(AppError::LoadFailure(LoadError::Panicked(reason)))
				}
			};
			// Receiver gone means the runtime was dropped; nothing left to update.
			let _ = tx.send(LoadCompletion { token, outcome });
		});

		token
	}

	/// Waits for the next load to finish and applies it.
	///
	/// The outcome may belong to a superseded request, in which case it is
	/// reported as [`Settle::Stale`] and the slot is unchanged.
	pub async fn next_completion(&mut self) -> Option<Settle> {
		let LoadCompletion { token, outcome } = self.rx.recv().await?;
		Some(self.slot.settle(token, outcome))
	}

	/// Applies completions until the most recent request has settled.
	pub async fn settle(&mut self) -> &LoadState {
		while self.slot.state().is_loading() {
			if self.next_completion().await.is_none() {
				break;
			}
		}
		self.slot.state()
	}

	/// Navigates and waits for that request to settle.
	pub async fn open(&mut self, descriptor: ApplicationDescriptor) -> &LoadState {
		self.navigate(descriptor);
		self.settle().await
	}
}

impl core::fmt::Debug for SlotRuntime {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("SlotRuntime").field("slot", &self.slot).field("loader", &self.loader).finish()
	}
}

#[cfg(test)]
mod tests;
