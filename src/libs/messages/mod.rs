//! Centralized user-facing messaging.
//!
//! Every piece of text the application prints lives in the [`Message`]
//! enum; the `msg_*` macros route it to the console or to tracing.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
