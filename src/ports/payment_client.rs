//! Payment provider client port.
//!
//! The runtime creates exactly one payment intent per computation, using a
//! secret key chosen at call time (test keys for previews, live keys
//! otherwise). Because the key is per-call, the seam is a factory that
//! binds a client to a secret key; the concrete adapter also pins the
//! provider API version.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Port for creating payment intents with the provider.
#[async_trait]
pub trait PaymentIntentClient: Send + Sync {
    /// Creates a payment intent. This has real-world financial effect: a
    /// pending charge record is created at the provider.
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentClientError>;
}

/// Port for constructing provider clients bound to a secret key.
pub trait PaymentClientFactory: Send + Sync {
    /// Builds a client authenticated with the given secret key.
    fn client(&self, secret_key: SecretString) -> Arc<dyn PaymentIntentClient>;
}

/// Request to create a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Receipt email, omitted when the block resolved none.
    pub receipt_email: Option<String>,

    /// Charge description, omitted when the block resolved none.
    pub description: Option<String>,

    /// Let the provider negotiate payment methods automatically.
    pub automatic_payment_methods: bool,
}

/// A created payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's intent id.
    pub id: String,

    /// Client-side secret used by the front-end to complete the charge.
    /// The provider may omit it for some intent states.
    pub client_secret: Option<String>,

    /// Provider-reported intent status.
    pub status: String,
}

/// Errors from the payment provider client.
#[derive(Debug, Error)]
pub enum PaymentClientError {
    #[error("Payment provider request failed: {0}")]
    Network(String),

    #[error("Payment provider rejected the request ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Failed to parse payment provider response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_intent_client_is_object_safe() {
        fn _accepts_dyn(_client: &dyn PaymentIntentClient) {}
    }

    #[test]
    fn payment_client_factory_is_object_safe() {
        fn _accepts_dyn(_factory: &dyn PaymentClientFactory) {}
    }

    #[test]
    fn provider_error_display_includes_status() {
        let err = PaymentClientError::Provider {
            status: 402,
            message: "Your card was declined".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("402"));
        assert!(text.contains("declined"));
    }
}
