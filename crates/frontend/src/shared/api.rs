//! HTTP client wrapper around the document backend.
//!
//! Two calls, one attempt each: no retries, no timeouts, no backoff. Non-2xx
//! responses are normalized into the server-provided `error` message (or a
//! generic fallback) so the pages only ever deal with `Result<T, String>`.

use contracts::api::{ErrorBody, QueryRequest, QueryResponse, UploadResponse};

use crate::shared::api_utils::api_url;

/// Upload a PDF for indexing under `collection_name`.
///
/// `POST /api/upload` with a multipart form (`file`, `collection_name`).
pub async fn upload_pdf(
    file: web_sys::File,
    collection_name: &str,
) -> Result<UploadResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    log::info!("Starting upload of {}", file.name());

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_str("collection_name", collection_name)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(&api_url("/api/upload"), &opts)
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        log::error!("Upload failed with HTTP {}", resp.status());
        return Err(error_from_body(&text, "Upload failed"));
    }

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask a question about the documents indexed under `collection_name`.
///
/// `POST /api/query` with a JSON body.
pub async fn query_pdf(query: &str, collection_name: &str) -> Result<QueryResponse, String> {
    let request = QueryRequest {
        query: query.to_string(),
        collection_name: collection_name.to_string(),
    };

    let response = gloo_net::http::Request::post(&api_url("/api/query"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        log::error!("Query failed with HTTP {}", response.status());
        return Err(error_from_body(&body, "Query failed"));
    }

    response
        .json::<QueryResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Extract the server's `error` field from a failure body, falling back to a
/// generic message when the body is not the expected JSON shape.
fn error_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_preferred() {
        assert_eq!(
            error_from_body(r#"{"error":"server down"}"#, "Query failed"),
            "server down"
        );
    }

    #[test]
    fn fallback_on_malformed_body() {
        assert_eq!(error_from_body("<html>502</html>", "Upload failed"), "Upload failed");
        assert_eq!(error_from_body("", "Query failed"), "Query failed");
    }

    #[test]
    fn fallback_on_missing_error_field() {
        assert_eq!(error_from_body(r#"{"detail":"nope"}"#, "Upload failed"), "Upload failed");
    }
}
