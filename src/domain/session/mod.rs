//! Session domain module.
//!
//! The immutable session snapshot the runtime reads (workspace, queued
//! flow contexts, variable bindings) and the mutable interpolation-time
//! store passed through to the variable interpolator.

mod state;
mod store;

pub use state::{QueuedFlow, SessionState, Variable};
pub use store::SessionStore;
