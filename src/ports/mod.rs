//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CredentialStore` / `CredentialDecrypter` - Encrypted credential lookup
//! - `VariableInterpolator` - Template substitution against session state
//! - `PaymentIntentClient` / `PaymentClientFactory` - Provider intent creation

mod credential_store;
mod payment_client;
mod variable_interpolator;

pub use credential_store::{
    CredentialDecrypter, CredentialError, CredentialStore, EncryptedCredentials,
};
pub use payment_client::{
    CreatePaymentIntentRequest, PaymentClientError, PaymentClientFactory, PaymentIntent,
    PaymentIntentClient,
};
pub use variable_interpolator::{InterpolationScope, VariableInterpolator};
