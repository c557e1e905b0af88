use std::any::Any;

use tokio::task::JoinError;

/// Extracts the panic message from a failed task join.
///
/// Returns `None` when the task was cancelled rather than panicking.
pub fn join_error_panic_message(err: JoinError) -> Option<String> {
	let payload = err.try_into_panic().ok()?;
	Some(panic_payload_message(payload.as_ref()))
}

fn panic_payload_message(payload: &(dyn Any + Send)) -> String {
	if let Some(msg) = payload.downcast_ref::<&'static str>() {
		(*msg).to_string()
	} else if let Some(msg) = payload.downcast_ref::<String>() {
		msg.clone()
	} else {
		"task panicked with a non-string payload".to_string()
	}
}
