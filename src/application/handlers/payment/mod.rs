//! Payment block handlers.

mod compute_runtime_options;

pub use compute_runtime_options::{
    ComputePaymentError, ComputePaymentOptionsHandler, RuntimeContext,
};
