//! Wire types for the backend HTTP API.
//!
//! `POST /api/upload` — multipart form with `file` and `collection_name`.
//! `POST /api/query` — JSON body [`QueryRequest`].
//! Failures arrive as a non-2xx status with an [`ErrorBody`] payload.

use serde::{Deserialize, Serialize};

/// Success body of `POST /api/upload`: `{"status": "success"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Request body of `POST /api/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub collection_name: String,
}

/// Success body of `POST /api/query`: `{"result": "..."}`.
///
/// `result` is optional on purpose: a 2xx response without a usable answer is
/// treated as a failed query by the chat page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub result: Option<String>,
}

impl QueryResponse {
    /// The answer text, if the backend actually produced one.
    pub fn answer(&self) -> Option<&str> {
        self.result.as_deref().filter(|s| !s.is_empty())
    }
}

/// Failure body accompanying any non-2xx response: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_success_flag() {
        let ok: UploadResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.is_success());
        let other: UploadResponse = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert!(!other.is_success());
    }

    #[test]
    fn query_response_answer_filters_empty() {
        let full: QueryResponse =
            serde_json::from_str(r#"{"result":"The conclusion is X."}"#).unwrap();
        assert_eq!(full.answer(), Some("The conclusion is X."));

        let empty: QueryResponse = serde_json::from_str(r#"{"result":""}"#).unwrap();
        assert_eq!(empty.answer(), None);

        let missing: QueryResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.answer(), None);
    }

    #[test]
    fn query_request_wire_shape() {
        let req = QueryRequest {
            query: "What is the conclusion?".to_string(),
            collection_name: "research".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["query"], "What is the conclusion?");
        assert_eq!(json["collection_name"], "research");
    }
}
