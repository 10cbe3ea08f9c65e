//! Error classification logic

use crate::Error;
use reqwest::StatusCode;
use serde_json::Value;

/// Pull a human-readable message out of the API's structured error body.
///
/// Recognized shapes:
/// - `{"detail": "msg"}`
/// - `{"detail": {"status": "...", "message": "msg"}}`
/// - `{"detail": [{"msg": "..."}, ...]}` (validation errors; messages joined)
pub(crate) fn extract_detail_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let detail = json.get("detail")?;

    match detail {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj
            .get("message")
            .or_else(|| obj.get("msg"))
            .and_then(|v| v.as_str())
            .map(String::from),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").or_else(|| item.get("message")))
                .filter_map(|v| v.as_str())
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

/// Translate a non-success response into a classified error.
///
/// Falls back to the raw body when it is not structured, and to the status
/// reason phrase when the body is empty.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> Error {
    let message = extract_detail_message(body).unwrap_or_else(|| {
        let raw = body.trim();
        if raw.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            raw.to_string()
        }
    });
    Error::api(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::ErrorClass;

    #[test]
    fn test_string_detail() {
        assert_eq!(
            extract_detail_message(r#"{"detail":"invalid key"}"#).as_deref(),
            Some("invalid key")
        );
    }

    #[test]
    fn test_object_detail() {
        let body = r#"{"detail":{"status":"voice_not_found","message":"A voice with the voice_id V9 was not found."}}"#;
        assert_eq!(
            extract_detail_message(body).as_deref(),
            Some("A voice with the voice_id V9 was not found.")
        );
    }

    #[test]
    fn test_validation_list_detail() {
        let body = r#"{"detail":[{"loc":["body","voice_description"],"msg":"too short","type":"value_error"},{"msg":"missing text"}]}"#;
        assert_eq!(
            extract_detail_message(body).as_deref(),
            Some("too short; missing text")
        );
    }

    #[test]
    fn test_unstructured_body_falls_back_to_raw() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "upstream exploded\n");
        assert_eq!(err.class(), ErrorClass::Api);
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.remote_message(), Some("upstream exploded"));
    }

    #[test]
    fn test_empty_body_uses_reason_phrase() {
        let err = error_from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(err.class(), ErrorClass::NotFound);
        assert_eq!(err.remote_message(), Some("Not Found"));
    }

    #[test]
    fn test_json_without_detail_is_raw() {
        let body = r#"{"error":"nope"}"#;
        let err = error_from_response(StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.class(), ErrorClass::Authentication);
        assert_eq!(err.remote_message(), Some(body));
    }
}
