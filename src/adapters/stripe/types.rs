//! Stripe API response types.
//!
//! Only the fields the runtime reads are declared; Stripe sends many more.

use serde::Deserialize;

/// A payment intent as returned by `POST /v1/payment_intents`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripePaymentIntent {
    /// Intent id (pi_...).
    pub id: String,

    /// Client secret, absent for some intent states.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Intent status (e.g. requires_payment_method).
    pub status: String,

    /// Echoed amount in minor units.
    pub amount: i64,

    /// Echoed currency, lowercase.
    pub currency: String,
}

/// Error envelope Stripe returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeErrorDetail,
}

/// The error object inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "type", default)]
    pub error_type: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payment_intent_with_secret() {
        let json = r#"{
            "id": "pi_123",
            "object": "payment_intent",
            "client_secret": "pi_123_secret_abc",
            "status": "requires_payment_method",
            "amount": 1000,
            "currency": "usd",
            "automatic_payment_methods": {"enabled": true}
        }"#;
        let intent: StripePaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.client_secret.as_deref(), Some("pi_123_secret_abc"));
        assert_eq!(intent.amount, 1000);
        assert_eq!(intent.currency, "usd");
    }

    #[test]
    fn parses_payment_intent_without_secret() {
        let json = r#"{
            "id": "pi_456",
            "status": "succeeded",
            "amount": 1500,
            "currency": "jpy"
        }"#;
        let intent: StripePaymentIntent = serde_json::from_str(json).unwrap();
        assert!(intent.client_secret.is_none());
    }

    #[test]
    fn parses_error_envelope() {
        let json = r#"{
            "error": {
                "message": "Invalid API Key provided",
                "type": "invalid_request_error"
            }
        }"#;
        let err: StripeErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.message.as_deref(), Some("Invalid API Key provided"));
        assert_eq!(err.error.error_type.as_deref(), Some("invalid_request_error"));
        assert!(err.error.code.is_none());
    }
}
