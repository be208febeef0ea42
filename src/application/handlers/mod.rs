//! Use case handlers.

pub mod payment;

pub use payment::{ComputePaymentError, ComputePaymentOptionsHandler, RuntimeContext};
