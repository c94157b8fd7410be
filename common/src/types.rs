//! Wire types of the analysis service
//!
//! Shared between the upload client and the renderer:
//! - Prediction: classification label with a tolerant fallback
//! - AnalysisResult: the response body of POST /segment
//! - SelectedFile: metadata of the file the user picked

use serde::{Deserialize, Serialize};

/// Classification label returned by the analysis service.
///
/// Labels outside the known set are preserved verbatim in `Other` so the
/// panel can still show them, just without a tone or caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Prediction {
    Normal,
    Benign,
    Malignant,
    Other(String),
}

impl From<String> for Prediction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "normal" => Prediction::Normal,
            "benign" => Prediction::Benign,
            "malignant" => Prediction::Malignant,
            _ => Prediction::Other(raw),
        }
    }
}

impl From<Prediction> for String {
    fn from(prediction: Prediction) -> Self {
        prediction.as_str().to_string()
    }
}

impl Prediction {
    pub fn as_str(&self) -> &str {
        match self {
            Prediction::Normal => "normal",
            Prediction::Benign => "benign",
            Prediction::Malignant => "malignant",
            Prediction::Other(raw) => raw,
        }
    }

    /// Upper-cased label for the classification panel.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

/// Response body of `POST /segment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: Prediction,

    /// Base64-encoded PNG mask, no data-URI prefix. Absent when the service
    /// returns no mask for the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmentation: Option<String>,
}

/// Metadata of the file the user picked.
///
/// The raw browser handle stays in the component layer; everything the
/// session logic needs to know about the file is here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_from_known_labels() {
        assert_eq!(Prediction::from("normal".to_string()), Prediction::Normal);
        assert_eq!(Prediction::from("benign".to_string()), Prediction::Benign);
        assert_eq!(
            Prediction::from("malignant".to_string()),
            Prediction::Malignant
        );
    }

    #[test]
    fn test_prediction_from_unknown_label() {
        let prediction = Prediction::from("cystic".to_string());
        assert_eq!(prediction, Prediction::Other("cystic".to_string()));
        assert_eq!(prediction.as_str(), "cystic");
    }

    #[test]
    fn test_prediction_label_uppercases() {
        assert_eq!(Prediction::Malignant.label(), "MALIGNANT");
        assert_eq!(Prediction::Other("cystic".to_string()).label(), "CYSTIC");
    }

    #[test]
    fn test_analysis_result_deserialize_with_mask() {
        let json = r#"{"prediction": "malignant", "segmentation": "iVBORw0KGgo="}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.prediction, Prediction::Malignant);
        assert_eq!(result.segmentation.as_deref(), Some("iVBORw0KGgo="));
    }

    #[test]
    fn test_analysis_result_deserialize_without_mask() {
        let json = r#"{"prediction": "normal"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.prediction, Prediction::Normal);
        assert_eq!(result.segmentation, None);
    }

    #[test]
    fn test_analysis_result_deserialize_unknown_prediction() {
        let json = r#"{"prediction": "inconclusive"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.prediction,
            Prediction::Other("inconclusive".to_string())
        );
    }

    #[test]
    fn test_analysis_result_serialize() {
        let result = AnalysisResult {
            prediction: Prediction::Benign,
            segmentation: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"prediction":"benign"}"#);
    }
}
