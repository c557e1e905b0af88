//! Worker runtime primitives.
//!
//! Every async task the shell starts goes through [`spawn`] so it is tagged
//! with a [`TaskClass`] in diagnostics and lands on the active tokio runtime.

mod class;
mod join;
mod spawn;
mod token;

pub use class::TaskClass;
pub use join::join_error_panic_message;
pub use spawn::spawn;
pub use token::GenerationClock;
