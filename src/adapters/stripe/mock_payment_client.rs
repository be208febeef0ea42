//! Mock payment client for testing.
//!
//! Configurable implementation of `PaymentIntentClient` and
//! `PaymentClientFactory` supporting pre-configured intents, error
//! injection, and call recording.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CreatePaymentIntentRequest, PaymentClientError, PaymentClientFactory, PaymentIntent,
    PaymentIntentClient,
};

/// Mock payment client.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentClient::new();
/// mock.set_next_intent(PaymentIntent { ... });
///
/// let result = mock.create_payment_intent(request).await;
/// assert_eq!(mock.requests().len(), 1);
/// ```
#[derive(Default)]
pub struct MockPaymentClient {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Intent to return on the next call.
    next_intent: Option<PaymentIntent>,

    /// Error to return instead of an intent.
    next_error: Option<String>,

    /// Recorded requests for assertions.
    requests: Vec<CreatePaymentIntentRequest>,
}

impl MockPaymentClient {
    /// Mock returning a generic successful intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the intent returned by the next call.
    pub fn set_next_intent(&self, intent: PaymentIntent) {
        self.inner.lock().unwrap().next_intent = Some(intent);
    }

    /// Makes the next call fail with a provider error.
    pub fn set_next_error(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().next_error = Some(message.into());
    }

    /// Requests recorded so far.
    pub fn requests(&self) -> Vec<CreatePaymentIntentRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl PaymentIntentClient for MockPaymentClient {
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentClientError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request);

        if let Some(message) = state.next_error.take() {
            return Err(PaymentClientError::Provider {
                status: 402,
                message,
            });
        }

        Ok(state.next_intent.take().unwrap_or(PaymentIntent {
            id: "pi_mock".to_string(),
            client_secret: Some("pi_mock_secret".to_string()),
            status: "requires_payment_method".to_string(),
        }))
    }
}

/// Factory handing out a shared mock client and recording the secret keys
/// it was asked to bind.
#[derive(Default)]
pub struct MockClientFactory {
    client: Arc<MockPaymentClient>,
    keys: Mutex<Vec<String>>,
}

impl MockClientFactory {
    /// Factory around a fresh mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory around an existing mock client.
    pub fn with_client(client: Arc<MockPaymentClient>) -> Self {
        Self {
            client,
            keys: Mutex::new(Vec::new()),
        }
    }

    /// The shared mock client.
    pub fn mock(&self) -> Arc<MockPaymentClient> {
        self.client.clone()
    }

    /// Secret keys requested so far, in order.
    pub fn requested_keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl PaymentClientFactory for MockClientFactory {
    fn client(&self, secret_key: SecretString) -> Arc<dyn PaymentIntentClient> {
        self.keys
            .lock()
            .unwrap()
            .push(secret_key.expose_secret().clone());
        self.client.clone()
    }
}
