//! Event handling module.
//!
//! Terminal events are polled on a dedicated thread and delivered over a
//! channel to the main thread, which owns the state and therefore
//! serializes every store mutation.

pub mod terminal;
