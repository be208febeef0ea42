//! Currency rules: zero-decimal classification, minor-unit scaling, and
//! amount label formatting.
//!
//! Stripe expresses amounts in the smallest currency unit. Most currencies
//! have two decimal places, so a charge of 10.00 USD is sent as 1000.
//! Zero-decimal currencies (https://stripe.com/docs/currencies#zero-decimal)
//! are sent as whole units.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Currencies without minor units, per payment-provider convention.
static ZERO_DECIMAL_CURRENCIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX", "VND",
        "VUV", "XAF", "XOF", "XPF",
    ]
    .into_iter()
    .collect()
});

/// Returns whether the given ISO 4217 code has no minor units.
pub fn is_zero_decimal_currency(currency: &str) -> bool {
    ZERO_DECIMAL_CURRENCIES.contains(currency)
}

/// Parses an interpolated amount template the way the flow engine's
/// JavaScript ancestry did: an empty (or all-whitespace) string is zero,
/// anything that is not a finite-or-parseable number is `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Converts a major-unit amount to the provider-facing integer amount,
/// scaling by 100 unless the currency is zero-decimal and rounding to the
/// nearest integer.
pub fn to_minor_units(value: f64, currency: &str) -> i64 {
    let scale = if is_zero_decimal_currency(currency) {
        1.0
    } else {
        100.0
    };
    (value * scale).round() as i64
}

/// Formats a provider-facing integer amount as a human-readable label.
///
/// EUR uses French conventions (narrow no-break space grouping, trailing
/// symbol); other known currencies use a prefixed symbol with comma
/// grouping; anything else falls back to a `CODE amount` form.
pub fn format_amount_label(amount: i64, currency: &str) -> String {
    let zero_decimal = is_zero_decimal_currency(currency);
    let magnitude = amount.unsigned_abs();
    let (units, cents) = if zero_decimal {
        (magnitude, 0)
    } else {
        (magnitude / 100, magnitude % 100)
    };
    let sign = if amount < 0 { "-" } else { "" };

    if currency == "EUR" {
        return format!(
            "{}{},{:02}\u{a0}€",
            sign,
            group_digits(units, '\u{202f}'),
            cents
        );
    }

    let grouped = group_digits(units, ',');
    let fraction = if zero_decimal {
        String::new()
    } else {
        format!(".{:02}", cents)
    };

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}{}", sign, symbol, grouped, fraction),
        None => format!("{}\u{a0}{}{}{}", currency, sign, grouped, fraction),
    }
}

/// Display symbol for common currencies. Codes without an entry are
/// rendered with the code itself as a prefix.
fn currency_symbol(currency: &str) -> Option<&'static str> {
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "KRW" => "₩",
        "INR" => "₹",
        "BRL" => "R$",
        "CAD" => "CA$",
        "AUD" => "A$",
        "CNY" => "CN¥",
        "VND" => "₫",
        _ => return None,
    };
    Some(symbol)
}

/// Groups the digits of `n` in threes with the given separator.
fn group_digits(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_decimal_set_matches_provider_list() {
        for code in [
            "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX",
            "VND", "VUV", "XAF", "XOF", "XPF",
        ] {
            assert!(is_zero_decimal_currency(code), "{code} should be zero-decimal");
        }
        assert!(!is_zero_decimal_currency("USD"));
        assert!(!is_zero_decimal_currency("EUR"));
        assert!(!is_zero_decimal_currency("jpy"), "codes are case-sensitive");
    }

    #[test]
    fn parse_amount_empty_is_zero() {
        assert_eq!(parse_amount(""), Some(0.0));
        assert_eq!(parse_amount("   "), Some(0.0));
    }

    #[test]
    fn parse_amount_plain_numbers() {
        assert_eq!(parse_amount("10"), Some(10.0));
        assert_eq!(parse_amount("49.99"), Some(49.99));
        assert_eq!(parse_amount(" 1500 "), Some(1500.0));
    }

    #[test]
    fn parse_amount_rejects_non_numeric() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("10 dollars"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn scaling_for_two_decimal_currency() {
        assert_eq!(to_minor_units(1500.0, "USD"), 150000);
        assert_eq!(to_minor_units(49.99, "USD"), 4999);
        assert_eq!(to_minor_units(10.005, "USD"), 1001);
    }

    #[test]
    fn scaling_for_zero_decimal_currency() {
        assert_eq!(to_minor_units(1500.0, "JPY"), 1500);
        assert_eq!(to_minor_units(1500.4, "JPY"), 1500);
    }

    #[test]
    fn label_usd_two_decimals() {
        assert_eq!(format_amount_label(150000, "USD"), "$1,500.00");
        assert_eq!(format_amount_label(4999, "USD"), "$49.99");
        assert_eq!(format_amount_label(50, "USD"), "$0.50");
    }

    #[test]
    fn label_jpy_whole_units() {
        assert_eq!(format_amount_label(1500, "JPY"), "¥1,500");
        assert_eq!(format_amount_label(1234567, "JPY"), "¥1,234,567");
    }

    #[test]
    fn label_eur_uses_french_conventions() {
        assert_eq!(format_amount_label(150000, "EUR"), "1\u{202f}500,00\u{a0}€");
        assert_eq!(format_amount_label(999, "EUR"), "9,99\u{a0}€");
    }

    #[test]
    fn label_unknown_currency_falls_back_to_code() {
        assert_eq!(format_amount_label(1500, "XOF"), "XOF\u{a0}1,500");
        assert_eq!(format_amount_label(150000, "CHF"), "CHF\u{a0}1,500.00");
    }

    #[test]
    fn grouping_boundaries() {
        assert_eq!(format_amount_label(99999, "USD"), "$999.99");
        assert_eq!(format_amount_label(100000, "USD"), "$1,000.00");
        assert_eq!(format_amount_label(100000000, "USD"), "$1,000,000.00");
    }

    proptest! {
        #[test]
        fn whole_amounts_scale_by_currency_decimals(n in 0i64..1_000_000_000) {
            let value = n as f64;
            prop_assert_eq!(to_minor_units(value, "USD"), n * 100);
            prop_assert_eq!(to_minor_units(value, "JPY"), n);
        }

        #[test]
        fn labels_never_contain_raw_minor_units_marker(amount in 0i64..10_000_000) {
            let label = format_amount_label(amount, "USD");
            prop_assert!(label.starts_with('$'));
            // Exactly two fractional digits after the final dot.
            let fraction = label.rsplit('.').next().unwrap();
            prop_assert_eq!(fraction.len(), 2);
        }
    }
}
