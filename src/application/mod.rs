//! Application layer - Use case orchestration.
//!
//! Handlers coordinate domain logic and ports to execute use cases. They
//! own no I/O themselves; everything external comes in through `Arc<dyn
//! Port>` dependencies.

pub mod handlers;
