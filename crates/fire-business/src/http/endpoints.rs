//! Endpoint paths and request types.

use serde::Serialize;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Exchange the refresh token for an access token.
pub const ACCESS_TOKENS: &str = "apps/accesstokens";

/// Create a batch.
pub const BATCHES: &str = "batches";

/// List accounts.
pub const ACCOUNTS: &str = "accounts";

/// Create a payment request.
pub const PAYMENT_REQUESTS: &str = "paymentrequests";

/// A single batch, used to submit it.
pub fn batch(batch_id: &str) -> String {
    format!("{}/{}", BATCHES, batch_id)
}

/// Bank transfers inside a batch.
pub fn batch_bank_transfers(batch_id: &str) -> String {
    format!("{}/{}/banktransfers", BATCHES, batch_id)
}

/// Filtered transactions of an account.
pub fn filtered_transactions(ican: u64) -> String {
    format!("{}/{}/transactions/filter", ACCOUNTS, ican)
}

// ============================================================================
// Fixed Values
// ============================================================================

pub const GRANT_TYPE_ACCESS_TOKEN: &str = "AccessToken";
pub const BATCH_TYPE_BANK_TRANSFER: &str = "BANK_TRANSFER";
pub const PAYEE_TYPE_PAYEE_ID: &str = "PAYEE_ID";
pub const BATCH_CURRENCY: &str = "EUR";

/// Amount placed on payment requests; the payer picks the real amount.
pub const PAYMENT_REQUEST_AMOUNT: u64 = 1;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for the access token exchange.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest<'a> {
    pub client_id: &'a str,
    pub refresh_token: &'a str,
    pub nonce: i64,
    pub grant_type: &'static str,
    pub client_secret: String,
}

/// Request body for creating a batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchRequest<'a> {
    #[serde(rename = "type")]
    pub batch_type: &'static str,
    pub currency: &'static str,
    pub batch_name: &'a str,
}

/// Request body for adding a bank transfer to a batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferRequest<'a> {
    pub ican_from: u64,
    pub payee_id: u64,
    pub amount: u64,
    pub my_ref: &'a str,
    pub your_ref: &'a str,
    pub payee_type: &'static str,
}

/// Request body for creating a payment request.
///
/// `max_number_payments` is sent as `null` when unlimited.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestRequest<'a> {
    pub ican_to: u64,
    pub currency: &'a str,
    pub amount: u64,
    pub my_ref: &'a str,
    pub description: &'a str,
    pub max_number_customer_payments: u32,
    pub max_number_payments: Option<u32>,
}

/// Query parameters for the filtered transaction search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilterQuery<'a> {
    pub date_range_from: i64,
    pub date_range_to: i64,
    pub search_keyword: &'a str,
}
