//! Payment block configuration.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CredentialsId;

/// Configuration attached to a payment block in a flow.
///
/// Every field is optional at the schema level; `credentials_id` is
/// validated at run time and the rest have defined defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    /// Reference to the stored provider credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_id: Option<CredentialsId>,

    /// ISO 4217 currency code. Defaults to the configured default currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Amount template, possibly containing `{{variable}}` references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Optional receipt email and charge description templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<AdditionalInformation>,
}

/// Optional extra fields forwarded to the payment provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInformation {
    /// Receipt email template. An empty interpolation means no receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Charge description template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
