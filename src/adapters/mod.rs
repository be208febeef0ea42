//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `stripe` - Payment provider client (HTTP) plus a test mock
//! - `credentials` - In-memory credential store and plaintext decrypter
//! - `variables` - Default `{{name}}` template interpolator

pub mod credentials;
pub mod stripe;
pub mod variables;

pub use credentials::{InMemoryCredentialStore, PlainJsonDecrypter};
pub use stripe::{MockClientFactory, MockPaymentClient, StripeClientFactory, StripePaymentClient};
pub use variables::DefaultVariableInterpolator;
