use serde::Deserialize;

/// Error payload shape used by the backend. Some endpoints answer with
/// `{"error": ...}`, others with `{"message": ...}`; `error` wins when both
/// are present.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

/// Extract a user-facing message from a failed response body, falling back
/// to a generic status line when the body carries no recognizable field.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_over_message() {
        let msg = error_message(404, r#"{"error":"No center found","message":"other"}"#);
        assert_eq!(msg, "No center found");
    }

    #[test]
    fn falls_back_to_message_field() {
        assert_eq!(
            error_message(400, r#"{"message":"Duplicate email"}"#),
            "Duplicate email"
        );
    }

    #[test]
    fn generic_fallback_for_unrecognized_bodies() {
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(500, r#"{"detail":"boom"}"#), "HTTP 500");
        assert_eq!(error_message(404, ""), "HTTP 404");
    }
}
