//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, errors)
//! - `payment` - Payment block options, credentials, currency rules
//! - `session` - Conversation session snapshot and interpolation store

pub mod foundation;
pub mod payment;
pub mod session;
