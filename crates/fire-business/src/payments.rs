//! Options for payment requests.

use crate::http::BATCH_CURRENCY;

/// Optional settings of a payment request.
///
/// Defaults to a single-use EUR request with no overall payment limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequestOptions {
    /// ISO 4217 currency code.
    pub currency: String,
    /// How many times a single customer may pay.
    pub max_customer_payments: u32,
    /// How many payments the request accepts overall; `None` for no limit.
    pub max_payments: Option<u32>,
}

impl Default for PaymentRequestOptions {
    fn default() -> Self {
        Self {
            currency: BATCH_CURRENCY.to_string(),
            max_customer_payments: 1,
            max_payments: None,
        }
    }
}
