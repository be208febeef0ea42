//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_currency() -> String {
    "USD".to_string()
}

fn default_api_base_url() -> String {
    crate::adapters::stripe::STRIPE_API_BASE_URL.to_string()
}

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Currency used when a payment block does not configure one
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Stripe API base URL (override for testing)
    #[serde(default = "default_api_base_url")]
    pub stripe_api_base_url: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            stripe_api_base_url: default_api_base_url(),
        }
    }
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_currency.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__DEFAULT_CURRENCY"));
        }
        if self.default_currency.len() != 3
            || !self
                .default_currency
                .chars()
                .all(|c| c.is_ascii_uppercase())
        {
            return Err(ValidationError::InvalidCurrencyCode);
        }
        if !self.stripe_api_base_url.starts_with("http://")
            && !self.stripe_api_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaymentConfig::default();
        assert_eq!(config.default_currency, "USD");
        assert_eq!(config.stripe_api_base_url, "https://api.stripe.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_lowercase_currency() {
        let config = PaymentConfig {
            default_currency: "usd".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_currency() {
        let config = PaymentConfig {
            default_currency: "DOLLARS".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = PaymentConfig {
            stripe_api_base_url: "stripe.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_localhost_override() {
        let config = PaymentConfig {
            stripe_api_base_url: "http://localhost:12111".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
