//! HTTP transport for the Fire Business API.

use std::fmt::Debug;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::auth::AccessToken;
use crate::error::{Error, HttpError, TransportError};
use crate::types::{ApiUrl, RequestMethod};

use super::response::ApiResponse;

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl HttpClient {
    /// Create a new HTTP client for the given base URL.
    pub fn new(
        base: ApiUrl,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base })
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Send a request and classify the response.
    ///
    /// GET payloads become query parameters; POST and PUT payloads become
    /// the JSON body. A bearer token is attached when given.
    #[instrument(skip(self, payload, token), fields(base = %self.base, authed = token.is_some()))]
    pub async fn send<P>(
        &self,
        method: RequestMethod,
        path: &str,
        payload: Option<&P>,
        token: Option<&AccessToken>,
    ) -> Result<ApiResponse, Error>
    where
        P: Serialize + Debug + ?Sized,
    {
        let url = self.base.endpoint(path);
        debug!(%method, %url, "API request");
        trace!(?payload, "request payload");

        let mut request = self
            .client
            .request(method.into(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        if let Some(payload) = payload {
            request = if method.uses_query() {
                request.query(payload)
            } else {
                request.json(payload)
            };
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle a response, turning non-2xx statuses into errors.
    async fn handle_response(&self, response: reqwest::Response) -> Result<ApiResponse, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        let body = response.text().await?;

        if status.is_success() {
            Ok(ApiResponse::from_body(status.as_u16(), body)?)
        } else {
            debug!(status = %status, "API request failed");
            Err(Error::Http(HttpError::new(status.as_u16(), body)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let base = ApiUrl::default();
        let client = HttpClient::new(base.clone(), "fire-business/test", None).unwrap();
        assert_eq!(client.base().as_str(), base.as_str());
    }
}
