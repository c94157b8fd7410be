//! Upload client for the analysis service
//!
//! One multipart POST per explicit user action. No retries and no
//! cancellation; re-entry is blocked upstream by the session's in-flight
//! guard.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use sono_ai_common::{AnalysisResult, UploadError};

/// Base URL of the inference service.
pub const ANALYSIS_API_BASE: &str = "http://localhost:8000";

/// Sends the selected image to `POST {base}/segment` and parses the JSON
/// response. The body is a multipart form with a single `file` field; the
/// browser sets the boundary itself, so no headers are attached.
pub async fn upload(file: &web_sys::File) -> Result<AnalysisResult, UploadError> {
    upload_to(ANALYSIS_API_BASE, file).await
}

async fn upload_to(base: &str, file: &web_sys::File) -> Result<AnalysisResult, UploadError> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob("file", file).map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&segment_url(base), &opts).map_err(transport)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        return Err(UploadError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(transport)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| UploadError::Transport(e.to_string()))
}

fn segment_url(base: &str) -> String {
    format!("{}/segment", base.trim_end_matches('/'))
}

/// Folds a JS-side failure into the transport variant, keeping whatever
/// description the browser offers.
fn transport(err: JsValue) -> UploadError {
    let description = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err));
    UploadError::Transport(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sono_ai_common::Prediction;

    // =============================================
    // URL joining
    // =============================================

    #[test]
    fn test_segment_url() {
        assert_eq!(segment_url("http://localhost:8000"), "http://localhost:8000/segment");
    }

    #[test]
    fn test_segment_url_trailing_slash() {
        assert_eq!(
            segment_url("http://localhost:8000/"),
            "http://localhost:8000/segment"
        );
    }

    // =============================================
    // Response shape
    // =============================================

    #[test]
    fn test_response_with_mask_parses() {
        let json = r#"{"prediction": "malignant", "segmentation": "iVBORw0KGgo="}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.prediction, Prediction::Malignant);
        assert!(result.segmentation.is_some());
    }

    #[test]
    fn test_response_without_mask_parses() {
        let json = r#"{"prediction": "normal"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.prediction, Prediction::Normal);
        assert!(result.segmentation.is_none());
    }

    #[test]
    fn test_response_with_unexpected_label_is_tolerated() {
        let json = r#"{"prediction": "inconclusive"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.prediction, Prediction::Other("inconclusive".to_string()));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_transport_keeps_string_description() {
        let err = transport(JsValue::from_str("Failed to fetch"));
        assert_eq!(err, UploadError::Transport("Failed to fetch".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_transport_reads_error_message_property() {
        let js_err = js_sys::Error::new("NetworkError when attempting to fetch resource.");
        let err = transport(js_err.into());
        assert_eq!(
            err,
            UploadError::Transport("NetworkError when attempting to fetch resource.".to_string())
        );
    }
}
