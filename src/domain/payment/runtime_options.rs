//! Runtime options returned to the front-end payment widget.

use serde::{Deserialize, Serialize};

/// Everything the front-end needs to render and complete a payment widget.
///
/// Constructed fresh per computation; the caller owns it and there is no
/// persisted identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRuntimeOptions {
    /// Client secret of the created payment intent.
    pub payment_intent_secret: String,

    /// Publishable key matching the mode the intent was created in.
    pub public_key: String,

    /// Human-readable amount, e.g. `$1,500.00` or `1 500,00 €`.
    pub amount_label: String,
}
