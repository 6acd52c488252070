//! Response envelope shared by all API endpoints.

use chrono::Utc;
use serde::Serialize;

/// Uniform response body: `{ success, message, data, timestamp }`.
///
/// `data` is present on success and `null` on failure. The timestamp records
/// when the response was produced, formatted `YYYY-MM-DD HH:MM:SS` (UTC).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: now_stamp(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: now_stamp(),
        }
    }
}

fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::ok(serde_json::json!({"k": "v"}), "Success");
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Success");
        assert_eq!(value["data"]["k"], "v");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_failure_envelope_has_null_data() {
        let resp = ApiResponse::<()>::failure("Tracking number not found");
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["success"], false);
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_timestamp_format() {
        let resp = ApiResponse::<()>::failure("x");
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(resp.timestamp.len(), 19);
        assert_eq!(&resp.timestamp[4..5], "-");
        assert_eq!(&resp.timestamp[10..11], " ");
    }
}
