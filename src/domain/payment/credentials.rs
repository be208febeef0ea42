//! Decrypted Stripe credential payload.
//!
//! Credentials are stored encrypted per workspace and decrypted through the
//! `CredentialDecrypter` port. The decrypted JSON carries a required live
//! key pair and an optional test key pair; preview executions prefer the
//! test keys when present.

use secrecy::SecretString;
use serde::Deserialize;

/// Decrypted Stripe credential record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeCredentials {
    /// Live-mode keys, always present.
    pub live: LiveKeys,

    /// Test-mode keys, present when the workspace configured them.
    #[serde(default)]
    pub test: Option<TestKeys>,
}

/// Live-mode key pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveKeys {
    /// Secret API key (sk_live_...).
    pub secret_key: SecretString,

    /// Publishable key (pk_live_...).
    pub public_key: String,
}

/// Test-mode key pair; either half may be missing independently.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestKeys {
    /// Secret API key (sk_test_...).
    #[serde(default)]
    pub secret_key: Option<SecretString>,

    /// Publishable key (pk_test_...).
    #[serde(default)]
    pub public_key: Option<String>,
}
