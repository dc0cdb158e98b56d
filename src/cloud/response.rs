use std::fmt;

use serde_json::Value;

use crate::constants::UPLOAD_SUCCESS_STATUS;

/// Body of a trusted output response, decoded once after each call.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON
    Json(Value),
    /// The body was not valid JSON and is kept verbatim
    Text(String),
}

impl ResponseBody {
    /// Decode a raw body, preferring JSON and falling back to text.
    pub fn decode(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(value) => write!(f, "{}", value),
            ResponseBody::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Status code and decoded body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// Uploads only count as accepted on exactly 200.
    pub fn is_upload_success(&self) -> bool {
        self.status == UPLOAD_SUCCESS_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_json_object() {
        let body = ResponseBody::decode(r#"{"ok":true}"#.to_string());
        assert_eq!(body, ResponseBody::Json(json!({"ok": true})));
        assert_eq!(body.as_json(), Some(&json!({"ok": true})));
    }

    #[test]
    fn test_decode_plain_text() {
        let body = ResponseBody::decode("not json".to_string());
        assert_eq!(body, ResponseBody::Text("not json".to_string()));
        assert_eq!(body.as_json(), None);
    }

    #[test]
    fn test_decode_empty_body_is_text() {
        assert_eq!(
            ResponseBody::decode(String::new()),
            ResponseBody::Text(String::new())
        );
    }

    #[test]
    fn test_decode_bare_json_scalar() {
        assert_eq!(ResponseBody::decode("80".to_string()), ResponseBody::Json(json!(80)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ResponseBody::Json(json!({"ok": true})).to_string(), r#"{"ok":true}"#);
        assert_eq!(ResponseBody::Text("accepted".to_string()).to_string(), "accepted");
    }

    #[test]
    fn test_upload_success_only_on_200() {
        let body = ResponseBody::Text(String::new());
        assert!(ApiResponse::new(200, body.clone()).is_upload_success());
        assert!(!ApiResponse::new(201, body.clone()).is_upload_success());
        assert!(!ApiResponse::new(204, body.clone()).is_upload_success());
        assert!(!ApiResponse::new(500, body).is_upload_success());
    }
}
