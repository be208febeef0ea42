//! Stripe payment provider adapter.
//!
//! Implements the `PaymentIntentClient` port against the Stripe HTTP API.
//! Requests are form-encoded with basic auth and pinned to a fixed API
//! version. Secret keys are handled via `secrecy::SecretString` and never
//! logged.

mod client;
mod factory;
mod mock_payment_client;
mod types;

pub use client::{StripePaymentClient, STRIPE_API_BASE_URL, STRIPE_API_VERSION};
pub use factory::StripeClientFactory;
pub use mock_payment_client::{MockClientFactory, MockPaymentClient};
pub use types::{StripeErrorDetail, StripeErrorResponse, StripePaymentIntent};
