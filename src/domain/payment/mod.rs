//! Payment domain module.
//!
//! Block configuration, decrypted credential shapes, currency rules, and
//! the runtime options handed to the front-end.

mod credentials;
pub mod currency;
mod options;
mod runtime_options;

pub use credentials::{LiveKeys, StripeCredentials, TestKeys};
pub use currency::{format_amount_label, is_zero_decimal_currency, parse_amount, to_minor_units};
pub use options::{AdditionalInformation, PaymentOptions};
pub use runtime_options::PaymentRuntimeOptions;
