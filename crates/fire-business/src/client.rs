//! The Fire Business API client and its session lifecycle.

use std::fmt::{self, Debug};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::auth::{AccessToken, AccessTokenResponse, Credentials, Session, client_secret_proof};
use crate::clock::{Clock, SystemClock};
use crate::error::{AuthError, Error};
use crate::http::{
    ACCESS_TOKENS, ACCOUNTS, AccessTokenRequest, ApiResponse, BATCH_CURRENCY,
    BATCH_TYPE_BANK_TRANSFER, BankTransferRequest, CreateBatchRequest, BATCHES,
    GRANT_TYPE_ACCESS_TOKEN, HttpClient, PAYEE_TYPE_PAYEE_ID, PAYMENT_REQUEST_AMOUNT,
    PAYMENT_REQUESTS, PaymentRequestRequest, TransactionFilterQuery, batch, batch_bank_transfers,
    filtered_transactions,
};
use crate::payments::PaymentRequestOptions;
use crate::transactions::TransactionWindow;
use crate::types::{ApiUrl, RequestMethod};

/// Margin before expiry at which the access token is renewed.
pub const DEFAULT_EXPIRY_GUARD: Duration = Duration::from_secs(1);

/// Whether the client currently holds a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// No session yet. The next authenticated call will create one.
    Unauthenticated,
    /// A session with a known expiry is held.
    Authenticated,
}

/// A client for the Fire Business API.
///
/// The client owns its credentials and, once the first authenticated call has
/// been made, a [`Session`]. Before every authenticated request the session's
/// expiry is checked and the access token is renewed if it is within the
/// expiry guard. Renewal is serialized, so a client shared between tasks
/// performs at most one token exchange per expiry.
///
/// # Example
///
/// ```no_run
/// use fire_business::{Credentials, FireClient};
///
/// # async fn example() -> Result<(), fire_business::Error> {
/// let client = FireClient::new(Credentials::new("client-id", "refresh-token", "client-key"))?;
///
/// let batch = client.make_batch("March payroll").await?;
/// println!("{:?}", batch.json());
/// # Ok(())
/// # }
/// ```
pub struct FireClient {
    credentials: Credentials,
    http: HttpClient,
    clock: Arc<dyn Clock>,
    expiry_guard: Duration,
    session: Mutex<Option<Session>>,
}

impl FireClient {
    /// Create a client against the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::builder(credentials).build()
    }

    /// Start configuring a client.
    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    /// Returns the API base URL this client talks to.
    pub fn base_url(&self) -> &ApiUrl {
        self.http.base()
    }

    /// Returns the credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns whether a session is currently held.
    pub async fn state(&self) -> ClientState {
        match *self.session.lock().await {
            Some(_) => ClientState::Authenticated,
            None => ClientState::Unauthenticated,
        }
    }

    /// Returns a snapshot of the current session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    // ========================================================================
    // Session Lifecycle
    // ========================================================================

    /// Exchange the refresh token for a new access token.
    ///
    /// On success the previous session, if any, is replaced as a whole. On
    /// failure the previous session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] if the request fails or the response lacks a
    /// required field.
    #[instrument(skip(self), fields(client_id = %self.credentials.client_id()))]
    pub async fn authenticate(&self) -> Result<Session, Error> {
        let mut slot = self.session.lock().await;
        let session = self.request_session().await?;
        *slot = Some(session.clone());
        Ok(session)
    }

    /// Renew the session if it expires within `guard`.
    ///
    /// A client without a session authenticates.
    #[instrument(skip(self))]
    pub async fn ensure_fresh(&self, guard: Duration) -> Result<(), Error> {
        self.fresh_token(guard).await.map(|_| ())
    }

    /// Returns a usable access token, authenticating first if needed.
    async fn fresh_token(&self, guard: Duration) -> Result<AccessToken, Error> {
        let mut slot = self.session.lock().await;
        let now_ms = self.clock.now_ms();

        if let Some(session) = slot.as_ref().filter(|s| !s.needs_renewal(now_ms, guard)) {
            return Ok(session.access_token().clone());
        }

        if slot.is_some() {
            debug!(now_ms, "Access token is about to expire");
        }

        // The slot is only written once the exchange succeeds
        let fresh = self.request_session().await?;
        let token = fresh.access_token().clone();
        *slot = Some(fresh);
        Ok(token)
    }

    /// Perform the access token exchange without touching the stored session.
    async fn request_session(&self) -> Result<Session, Error> {
        info!("Requesting access token");

        let nonce = self.clock.now_ms();
        let request = AccessTokenRequest {
            client_id: self.credentials.client_id(),
            refresh_token: self.credentials.refresh_token().as_str(),
            nonce,
            grant_type: GRANT_TYPE_ACCESS_TOKEN,
            client_secret: client_secret_proof(nonce, self.credentials.client_key()),
        };

        let response = self
            .http
            .send(RequestMethod::Post, ACCESS_TOKENS, Some(&request), None)
            .await
            .map_err(AuthError::from_request)?;

        let body = response.into_json().ok_or(AuthError::EmptyResponse)?;
        let parsed: AccessTokenResponse =
            serde_json::from_value(body).map_err(|e| AuthError::MalformedResponse {
                message: e.to_string(),
            })?;
        let session = parsed.into_session()?;

        debug!(
            business_id = session.business_id(),
            expires_at_ms = session.expires_at_ms(),
            "Session established"
        );
        Ok(session)
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Send an authenticated request.
    ///
    /// The session is created or renewed as needed and its bearer token
    /// attached. GET payloads are sent as query parameters, POST and PUT
    /// payloads as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] for non-2xx responses and [`Error::Auth`] if a
    /// required token exchange fails.
    #[instrument(skip(self, payload))]
    pub async fn send_request<P>(
        &self,
        path: &str,
        method: RequestMethod,
        payload: Option<&P>,
    ) -> Result<ApiResponse, Error>
    where
        P: Serialize + Debug + ?Sized,
    {
        let token = self.fresh_token(self.expiry_guard).await?;
        self.http.send(method, path, payload, Some(&token)).await
    }

    // ========================================================================
    // Batches
    // ========================================================================

    /// Create a EUR bank transfer batch.
    #[instrument(skip(self))]
    pub async fn make_batch(&self, name: &str) -> Result<ApiResponse, Error> {
        let request = CreateBatchRequest {
            batch_type: BATCH_TYPE_BANK_TRANSFER,
            currency: BATCH_CURRENCY,
            batch_name: name,
        };
        self.send_request(BATCHES, RequestMethod::Post, Some(&request))
            .await
    }

    /// Add a bank transfer to an existing payee to a batch.
    ///
    /// # Arguments
    ///
    /// * `batch_id` - The batch UUID returned by [`make_batch`](Self::make_batch)
    /// * `from_account` - ICAN of the account to pay from
    /// * `payee` - Identifier of the payee
    /// * `amount` - Amount in minor units (cents)
    /// * `my_ref` - Reference shown on the sender's statement
    /// * `your_ref` - Reference shown on the payee's statement
    #[instrument(skip(self))]
    pub async fn add_batch_payment(
        &self,
        batch_id: &str,
        from_account: u64,
        payee: u64,
        amount: u64,
        my_ref: &str,
        your_ref: &str,
    ) -> Result<ApiResponse, Error> {
        let request = BankTransferRequest {
            ican_from: from_account,
            payee_id: payee,
            amount,
            my_ref,
            your_ref,
            payee_type: PAYEE_TYPE_PAYEE_ID,
        };
        self.send_request(
            &batch_bank_transfers(batch_id),
            RequestMethod::Post,
            Some(&request),
        )
        .await
    }

    /// Submit a batch for approval.
    ///
    /// The API answers with an empty body, so success is normally
    /// [`ApiResponse::NoContent`].
    #[instrument(skip(self))]
    pub async fn submit_batch(&self, batch_id: &str) -> Result<ApiResponse, Error> {
        self.send_request::<()>(&batch(batch_id), RequestMethod::Put, None)
            .await
    }

    // ========================================================================
    // Payment Requests
    // ========================================================================

    /// Create a payment request into an account.
    #[instrument(skip(self))]
    pub async fn make_payment_request(
        &self,
        ican: u64,
        reference: &str,
        description: &str,
        options: &PaymentRequestOptions,
    ) -> Result<ApiResponse, Error> {
        let request = PaymentRequestRequest {
            ican_to: ican,
            currency: &options.currency,
            amount: PAYMENT_REQUEST_AMOUNT,
            my_ref: reference,
            description,
            max_number_customer_payments: options.max_customer_payments,
            max_number_payments: options.max_payments,
        };
        self.send_request(PAYMENT_REQUESTS, RequestMethod::Post, Some(&request))
            .await
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// List the business's accounts.
    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> Result<ApiResponse, Error> {
        self.send_request::<()>(ACCOUNTS, RequestMethod::Get, None)
            .await
    }

    /// Search an account's transactions by reference within a time window.
    #[instrument(skip(self))]
    pub async fn get_filtered_transactions(
        &self,
        reference: &str,
        ican: u64,
        window: &TransactionWindow,
    ) -> Result<ApiResponse, Error> {
        let (date_range_from, date_range_to) = window.resolve(self.clock.now_ms());
        debug!(date_range_from, date_range_to, "Resolved transaction window");

        let query = TransactionFilterQuery {
            date_range_from,
            date_range_to,
            search_keyword: reference,
        };
        self.send_request(
            &filtered_transactions(ican),
            RequestMethod::Get,
            Some(&query),
        )
        .await
    }
}

// Custom Debug impl that hides credentials and tokens
impl Debug for FireClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireClient")
            .field("base_url", self.http.base())
            .field("client_id", &self.credentials.client_id())
            .field("expiry_guard", &self.expiry_guard)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FireClient`].
pub struct ClientBuilder {
    credentials: Credentials,
    base_url: ApiUrl,
    expiry_guard: Duration,
    timeout: Option<Duration>,
    user_agent: String,
    clock: Arc<dyn Clock>,
}

impl ClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: ApiUrl::default(),
            expiry_guard: DEFAULT_EXPIRY_GUARD,
            timeout: None,
            user_agent: concat!("fire-business/", env!("CARGO_PKG_VERSION")).to_string(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Talk to a different API base URL.
    pub fn base_url(mut self, base_url: ApiUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Renew the token this long before it expires.
    pub fn expiry_guard(mut self, guard: Duration) -> Self {
        self.expiry_guard = guard;
        self
    }

    /// Abort requests that take longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Read time from `clock` instead of the system clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FireClient, Error> {
        let http = HttpClient::new(self.base_url, &self.user_agent, self.timeout)?;

        Ok(FireClient {
            credentials: self.credentials,
            http,
            clock: self.clock,
            expiry_guard: self.expiry_guard,
            session: Mutex::new(None),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("client-123", "refresh-abc", "key-xyz")
    }

    #[tokio::test]
    async fn new_client_is_unauthenticated() {
        let client = FireClient::new(credentials()).unwrap();
        assert_eq!(client.state().await, ClientState::Unauthenticated);
        assert!(client.session().await.is_none());
        assert_eq!(client.base_url(), &ApiUrl::default());
    }

    #[test]
    fn debug_hides_secrets() {
        let client = FireClient::new(credentials()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("client-123"));
        assert!(!debug.contains("refresh-abc"));
        assert!(!debug.contains("key-xyz"));
    }

    #[test]
    fn client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FireClient>();
    }
}
