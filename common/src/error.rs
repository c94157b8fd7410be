//! Error types of the analysis workflow
//!
//! Every failure surfaces in the UI as the `Display` text of one of these
//! variants, so the wording lives here and nowhere else.

use thiserror::Error;

/// Rejection of a local file selection. Detected synchronously, never
/// reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("Please select a valid image file.")]
    NotAnImage,

    #[error("File size must be less than 10MB.")]
    TooLarge,
}

/// Failure of an analysis request.
///
/// A response body that does not parse as the expected JSON shape is folded
/// into `Transport`; the UI does not distinguish decode failures from
/// network failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_error_messages() {
        assert_eq!(
            SelectError::NotAnImage.to_string(),
            "Please select a valid image file."
        );
        assert_eq!(
            SelectError::TooLarge.to_string(),
            "File size must be less than 10MB."
        );
    }

    #[test]
    fn test_upload_error_status_includes_code() {
        let display = UploadError::Status(500).to_string();
        assert!(display.contains("500"));
    }

    #[test]
    fn test_upload_error_transport_keeps_cause() {
        let display = UploadError::Transport("Failed to fetch".to_string()).to_string();
        assert_eq!(display, "Failed to fetch");
    }
}
