//! Core types shared across the shell: application descriptors, the
//! declarative view tree, and boxed future aliases.

/// Application descriptors and their lookup keys.
pub mod descriptor;
/// Async future aliases.
pub mod future;
/// Declarative view tree produced by components and the presentation shell.
pub mod view;

pub use descriptor::{AppKey, ApplicationDescriptor, KeyKind};
pub use future::BoxFutureStatic;
pub use view::{Tone, View};
