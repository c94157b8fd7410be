//! Pure mappings from an analysis result to what the panel shows
//!
//! The renderer component consumes these; keeping them here makes every
//! rendering decision assertable on the host.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::types::{AnalysisResult, Prediction};

/// Tone keyed by the classification, used as a CSS class suffix.
/// Unrecognized labels fall back to the neutral tone.
pub fn tone_class(prediction: &Prediction) -> &'static str {
    match prediction {
        Prediction::Normal => "normal",
        Prediction::Benign => "benign",
        Prediction::Malignant => "malignant",
        Prediction::Other(_) => "unknown",
    }
}

/// One-sentence caption per recognized label; none for unrecognized ones.
pub fn caption(prediction: &Prediction) -> Option<&'static str> {
    match prediction {
        Prediction::Normal => Some("No abnormalities detected"),
        Prediction::Benign => Some("Non-cancerous tissue detected"),
        Prediction::Malignant => Some("Potentially cancerous tissue detected"),
        Prediction::Other(_) => None,
    }
}

/// Placeholder for the mask pane when no mask is shown.
pub fn mask_placeholder(prediction: &Prediction) -> &'static str {
    match prediction {
        Prediction::Normal => "No mask (image classified as normal)",
        _ => "No segmentation mask returned.",
    }
}

/// Data URL for the segmentation mask, when the result carries one and its
/// payload actually decodes as base64.
pub fn mask_data_url(result: &AnalysisResult) -> Option<String> {
    let payload = result.segmentation.as_deref()?;
    if payload.is_empty() || BASE64.decode(payload).is_err() {
        return None;
    }
    Some(format!("data:image/png;base64,{}", payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn other(raw: &str) -> Prediction {
        Prediction::Other(raw.to_string())
    }

    #[test]
    fn test_tone_mapping() {
        assert_eq!(tone_class(&Prediction::Normal), "normal");
        assert_eq!(tone_class(&Prediction::Benign), "benign");
        assert_eq!(tone_class(&Prediction::Malignant), "malignant");
        assert_eq!(tone_class(&other("cystic")), "unknown");
    }

    #[test]
    fn test_captions() {
        assert_eq!(caption(&Prediction::Normal), Some("No abnormalities detected"));
        assert_eq!(
            caption(&Prediction::Benign),
            Some("Non-cancerous tissue detected")
        );
        assert_eq!(
            caption(&Prediction::Malignant),
            Some("Potentially cancerous tissue detected")
        );
        assert_eq!(caption(&other("cystic")), None);
    }

    #[test]
    fn test_mask_placeholder_differs_for_normal() {
        assert_eq!(
            mask_placeholder(&Prediction::Normal),
            "No mask (image classified as normal)"
        );
        assert_eq!(
            mask_placeholder(&Prediction::Malignant),
            "No segmentation mask returned."
        );
        assert_eq!(
            mask_placeholder(&other("cystic")),
            "No segmentation mask returned."
        );
    }

    #[test]
    fn test_mask_data_url_for_valid_payload() {
        let result = AnalysisResult {
            prediction: Prediction::Malignant,
            segmentation: Some("iVBORw0KGgo=".to_string()),
        };
        assert_eq!(
            mask_data_url(&result).as_deref(),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[test]
    fn test_mask_data_url_absent_without_mask() {
        let result = AnalysisResult {
            prediction: Prediction::Normal,
            segmentation: None,
        };
        assert_eq!(mask_data_url(&result), None);
    }

    #[test]
    fn test_mask_data_url_rejects_undecodable_payload() {
        let result = AnalysisResult {
            prediction: Prediction::Benign,
            segmentation: Some("not base64 at all!!".to_string()),
        };
        assert_eq!(mask_data_url(&result), None);
    }

    #[test]
    fn test_mask_data_url_rejects_empty_payload() {
        let result = AnalysisResult {
            prediction: Prediction::Benign,
            segmentation: Some(String::new()),
        };
        assert_eq!(mask_data_url(&result), None);
    }
}
