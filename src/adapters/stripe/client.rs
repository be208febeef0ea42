//! Stripe payment intent client.
//!
//! Implements the `PaymentIntentClient` port against the Stripe HTTP API:
//! form-encoded requests, basic auth with the secret key, and a pinned API
//! version so provider-side changes never alter the wire contract.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CreatePaymentIntentRequest, PaymentClientError, PaymentIntent, PaymentIntentClient,
};

use super::types::{StripeErrorResponse, StripePaymentIntent};

/// API version every request is pinned to.
pub const STRIPE_API_VERSION: &str = "2024-09-30.acacia";

/// Default Stripe API base URL.
pub const STRIPE_API_BASE_URL: &str = "https://api.stripe.com";

/// Stripe client bound to one secret key.
pub struct StripePaymentClient {
    secret_key: SecretString,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl StripePaymentClient {
    /// Creates a client authenticated with the given secret key.
    pub fn new(secret_key: SecretString) -> Self {
        Self {
            secret_key,
            api_base_url: STRIPE_API_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builds the form body for an intent creation request.
    ///
    /// Stripe expects lowercase currency codes and bracketed nested params.
    fn intent_params(request: &CreatePaymentIntentRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.to_lowercase()),
        ];

        if let Some(email) = &request.receipt_email {
            params.push(("receipt_email", email.clone()));
        }
        if let Some(description) = &request.description {
            params.push(("description", description.clone()));
        }
        if request.automatic_payment_methods {
            params.push(("automatic_payment_methods[enabled]", "true".to_string()));
        }

        params
    }

    /// Extracts a readable message from a Stripe error body.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<StripeErrorResponse>(body) {
            Ok(envelope) => envelope
                .error
                .message
                .unwrap_or_else(|| body.to_string()),
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait]
impl PaymentIntentClient for StripePaymentClient {
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentClientError> {
        let url = format!("{}/v1/payment_intents", self.api_base_url);
        let params = Self::intent_params(&request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.secret_key.expose_secret(), Option::<&str>::None)
            .header("Stripe-Version", STRIPE_API_VERSION)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::error_message(&body);
            tracing::error!(status = status.as_u16(), error = %message, "Stripe payment intent creation failed");
            return Err(PaymentClientError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let intent: StripePaymentIntent = response
            .json()
            .await
            .map_err(|e| PaymentClientError::MalformedResponse(e.to_string()))?;

        tracing::info!(
            intent_id = %intent.id,
            amount = intent.amount,
            currency = %intent.currency,
            "Payment intent created"
        );

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
            status: intent.status,
        })
    }
}
