//! HTTP response handling.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::FetchError;

const GENERIC_FAILURE: &str = "Something went wrong";

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Shorthand for a JSON response with no headers.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Best human-readable failure message carried by the body.
    ///
    /// JSON bodies with a `message` (or `error.message`) field yield that
    /// field; other non-empty bodies yield their text; anything else yields
    /// a generic message.
    pub fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&self.body) {
            let message = value
                .get("message")
                .or_else(|| value.get("error").and_then(|e| e.get("message")))
                .and_then(|m| m.as_str());
            if let Some(message) = message {
                return message.to_string();
            }
        }
        match self.text() {
            Ok(text) if !text.trim().is_empty() => text,
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::HttpError {
                status: self.status,
                message: self.error_message(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(302, b"").is_success());
        assert!(!make_response(500, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        let resp = Response::json_body(200, &serde_json::json!({ "clientSecret": "pi_1_secret_2" }));
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["clientSecret"], "pi_1_secret_2");
        assert_eq!(resp.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_error_message_prefers_message_field() {
        let resp = make_response(400, br#"{"message":"Amount must be positive"}"#);
        assert_eq!(resp.error_message(), "Amount must be positive");

        let resp = make_response(402, br#"{"error":{"message":"Card declined"}}"#);
        assert_eq!(resp.error_message(), "Card declined");
    }

    #[test]
    fn test_error_message_falls_back() {
        assert_eq!(make_response(502, b"Bad Gateway").error_message(), "Bad Gateway");
        assert_eq!(make_response(500, b"").error_message(), GENERIC_FAILURE);
        assert_eq!(make_response(500, b"{}").error_message(), "{}");
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"ok").error_for_status().is_ok());
        match make_response(404, br#"{"message":"no route"}"#).error_for_status() {
            Err(FetchError::HttpError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "no route");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
