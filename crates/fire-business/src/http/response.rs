//! Successful API responses.

use serde_json::Value;

use crate::error::DecodeError;

/// The outcome of a successful (2xx) API request.
///
/// Some endpoints, batch submission among them, answer with an empty body
/// (typically HTTP 204). That is reported as [`ApiResponse::NoContent`]
/// rather than as a decode failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// A parsed JSON body.
    Json(Value),
    /// The response had no body.
    NoContent,
}

impl ApiResponse {
    /// Classify a 2xx response body.
    ///
    /// Empty or whitespace-only bodies are `NoContent`; anything else must be
    /// valid JSON.
    pub(crate) fn from_body(status: u16, body: String) -> Result<Self, DecodeError> {
        if body.trim().is_empty() {
            return Ok(ApiResponse::NoContent);
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(ApiResponse::Json(value)),
            Err(source) => Err(DecodeError {
                status,
                body,
                source,
            }),
        }
    }

    /// Returns the JSON body, if any.
    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::NoContent => None,
        }
    }

    /// Consumes the response, returning the JSON body if any.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::NoContent => None,
        }
    }

    /// Whether the response had no body.
    pub fn is_no_content(&self) -> bool {
        matches!(self, ApiResponse::NoContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_no_content() {
        assert_eq!(
            ApiResponse::from_body(204, String::new()).unwrap(),
            ApiResponse::NoContent
        );
    }

    #[test]
    fn whitespace_body_is_no_content() {
        assert!(
            ApiResponse::from_body(200, " \r\n".to_string())
                .unwrap()
                .is_no_content()
        );
    }

    #[test]
    fn json_body_is_parsed() {
        let response =
            ApiResponse::from_body(200, r#"{"batchUuid":"f171b143"}"#.to_string()).unwrap();
        assert_eq!(response.json(), Some(&json!({"batchUuid": "f171b143"})));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = ApiResponse::from_body(200, "<html>oops</html>".to_string()).unwrap_err();
        assert_eq!(err.status, 200);
        assert_eq!(err.body, "<html>oops</html>");
    }
}
