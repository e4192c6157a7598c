//! HTTP methods used by the Fire Business API.

use std::fmt;

/// The HTTP methods the API is called with.
///
/// GET requests carry their payload as query parameters; POST and PUT carry
/// it as a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
}

impl RequestMethod {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
        }
    }

    /// Whether the payload travels in the query string.
    pub fn uses_query(&self) -> bool {
        matches!(self, RequestMethod::Get)
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_get_uses_query() {
        assert!(RequestMethod::Get.uses_query());
        assert!(!RequestMethod::Post.uses_query());
        assert!(!RequestMethod::Put.uses_query());
    }
}
