//! ComputePaymentOptionsHandler - Computes runtime options for a payment block.
//!
//! Given the block's configuration and the current session snapshot, this
//! resolves stored Stripe credentials, creates a payment intent with the
//! provider, and returns the client secret, publishable key, and formatted
//! amount label the front-end widget needs.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;

use crate::config::PaymentConfig;
use crate::domain::foundation::{CredentialsId, RequestErrorCode, WorkspaceId};
use crate::domain::payment::{
    currency, PaymentOptions, PaymentRuntimeOptions, StripeCredentials,
};
use crate::domain::session::{SessionState, SessionStore};
use crate::ports::{
    CreatePaymentIntentRequest, CredentialDecrypter, CredentialError, CredentialStore,
    InterpolationScope, PaymentClientError, PaymentClientFactory, VariableInterpolator,
};

/// Errors surfaced while computing payment runtime options.
///
/// `BadRequest` and `NotFound` map onto the host transport's request error
/// codes; credential and provider failures pass through as their own typed
/// variants so the host sees them unwrapped.
#[derive(Debug, Error)]
pub enum ComputePaymentError {
    #[error("[BAD_REQUEST] {0}")]
    BadRequest(String),

    #[error("[NOT_FOUND] {0}")]
    NotFound(String),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Provider(#[from] PaymentClientError),
}

impl ComputePaymentError {
    fn bad_request(message: impl Into<String>) -> Self {
        ComputePaymentError::BadRequest(message.into())
    }

    fn not_found(message: impl Into<String>) -> Self {
        ComputePaymentError::NotFound(message.into())
    }

    /// The transport-facing request code, when this error maps to one.
    pub fn request_code(&self) -> Option<RequestErrorCode> {
        match self {
            ComputePaymentError::BadRequest(_) => Some(RequestErrorCode::BadRequest),
            ComputePaymentError::NotFound(_) => Some(RequestErrorCode::NotFound),
            _ => None,
        }
    }
}

/// Execution context handed in by the flow engine.
pub struct RuntimeContext<'a> {
    /// Interpolation-time scratch store.
    pub session_store: &'a SessionStore,

    /// Immutable session snapshot.
    pub state: &'a SessionState,
}

/// Handler computing runtime options for a payment block.
pub struct ComputePaymentOptionsHandler {
    credential_store: Arc<dyn CredentialStore>,
    decrypter: Arc<dyn CredentialDecrypter>,
    interpolator: Arc<dyn VariableInterpolator>,
    client_factory: Arc<dyn PaymentClientFactory>,
    config: PaymentConfig,
}

impl ComputePaymentOptionsHandler {
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        decrypter: Arc<dyn CredentialDecrypter>,
        interpolator: Arc<dyn VariableInterpolator>,
        client_factory: Arc<dyn PaymentClientFactory>,
        config: PaymentConfig,
    ) -> Self {
        Self {
            credential_store,
            decrypter,
            interpolator,
            client_factory,
            config,
        }
    }

    pub async fn handle(
        &self,
        options: &PaymentOptions,
        ctx: RuntimeContext<'_>,
    ) -> Result<PaymentRuntimeOptions, ComputePaymentError> {
        // 1. Read the executing flow context; previews have no result id.
        let flow = ctx.state.current_flow().ok_or_else(|| {
            tracing::warn!("payment block executed with an empty session queue");
            ComputePaymentError::bad_request("Session has no active flow")
        })?;
        let is_preview = flow.is_preview();

        // 2. The credentials reference is required.
        let credentials_id = options.credentials_id.as_ref().ok_or_else(|| {
            tracing::warn!("payment block has no credentials reference");
            ComputePaymentError::bad_request("Missing credentialsId")
        })?;

        // 3. Fetch and decrypt the stored keys.
        let credentials = self
            .stripe_credentials(credentials_id, &ctx.state.workspace_id)
            .await?;

        // 4-5. Bind a provider client to the mode-appropriate secret key.
        let secret_key = select_secret_key(&credentials, is_preview);
        let client = self.client_factory.client(secret_key);

        // 6. Resolve the currency.
        let resolved_currency = options
            .currency
            .clone()
            .unwrap_or_else(|| self.config.default_currency.clone());

        // 7. Interpolate and scale the amount.
        let scope = InterpolationScope {
            variables: &flow.variables,
            session_store: ctx.session_store,
        };
        let raw_amount = self
            .interpolator
            .interpolate(options.amount.as_deref(), &scope);
        let amount = currency::parse_amount(&raw_amount)
            .map(|value| currency::to_minor_units(value, &resolved_currency))
            .ok_or_else(|| {
                tracing::warn!(raw_amount = %raw_amount, "amount template did not resolve to a number");
                ComputePaymentError::bad_request(
                    "Could not parse amount, make sure your block is configured correctly",
                )
            })?;

        // 8. Resolve the optional receipt email and description.
        let additional = options.additional_information.as_ref();
        let receipt_email = non_empty(
            self.interpolator
                .interpolate(additional.and_then(|info| info.email.as_deref()), &scope),
        );
        let description = non_empty(
            self.interpolator
                .interpolate(additional.and_then(|info| info.description.as_deref()), &scope),
        );

        // 9. Create the payment intent.
        let intent = client
            .create_payment_intent(CreatePaymentIntentRequest {
                amount,
                currency: resolved_currency.clone(),
                receipt_email,
                description,
                automatic_payment_methods: true,
            })
            .await?;

        // 10. The front-end cannot proceed without the client secret.
        let payment_intent_secret = intent
            .client_secret
            .ok_or_else(|| ComputePaymentError::bad_request("Could not create payment intent"))?;

        // 11-12. Format the label and pick the matching publishable key.
        Ok(PaymentRuntimeOptions {
            payment_intent_secret,
            public_key: select_public_key(&credentials, is_preview),
            amount_label: currency::format_amount_label(amount, &resolved_currency),
        })
    }

    /// Resolves and decrypts the referenced credential record.
    async fn stripe_credentials(
        &self,
        credentials_id: &CredentialsId,
        workspace_id: &WorkspaceId,
    ) -> Result<StripeCredentials, ComputePaymentError> {
        let record = self
            .credential_store
            .find(credentials_id, workspace_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(credentials_id = %credentials_id, "credentials reference does not resolve");
                ComputePaymentError::not_found("Credentials not found")
            })?;

        let payload = self.decrypter.decrypt(&record.data, &record.iv).await?;
        let credentials = serde_json::from_value(payload)
            .map_err(|e| CredentialError::MalformedPayload(e.to_string()))?;
        Ok(credentials)
    }
}

/// Test secret key when previewing and configured, live key otherwise.
fn select_secret_key(credentials: &StripeCredentials, is_preview: bool) -> SecretString {
    if is_preview {
        if let Some(secret) = credentials
            .test
            .as_ref()
            .and_then(|test| test.secret_key.clone())
        {
            return secret;
        }
    }
    credentials.live.secret_key.clone()
}

/// Test publishable key when previewing and configured, live key otherwise.
fn select_public_key(credentials: &StripeCredentials, is_preview: bool) -> String {
    if is_preview {
        if let Some(public) = credentials
            .test
            .as_ref()
            .and_then(|test| test.public_key.clone())
        {
            return public;
        }
    }
    credentials.live.public_key.clone()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
