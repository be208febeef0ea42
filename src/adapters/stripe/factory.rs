//! Factory producing Stripe clients bound to a per-call secret key.

use secrecy::SecretString;
use std::sync::Arc;

use crate::ports::{PaymentClientFactory, PaymentIntentClient};

use super::client::{StripePaymentClient, STRIPE_API_BASE_URL};

/// Builds `StripePaymentClient` instances.
///
/// The secret key is chosen per computation (test keys for previews, live
/// keys otherwise), so clients are constructed on demand rather than held.
#[derive(Clone)]
pub struct StripeClientFactory {
    api_base_url: String,
}

impl StripeClientFactory {
    /// Factory targeting the public Stripe API.
    pub fn new() -> Self {
        Self {
            api_base_url: STRIPE_API_BASE_URL.to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl Default for StripeClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentClientFactory for StripeClientFactory {
    fn client(&self, secret_key: SecretString) -> Arc<dyn PaymentIntentClient> {
        Arc::new(StripePaymentClient::new(secret_key).with_base_url(self.api_base_url.clone()))
    }
}
